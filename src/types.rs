// types.rs
use crate::cluster::ResourceKind;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Menu-driven EKS namespace and Prometheus manager", long_about = None)]
pub struct Args {
    // Enable debug logging of captured command output
    #[arg(short, long)]
    pub debug: bool,

    // JSON file overriding the built-in defaults
    #[arg(short, long)]
    pub config: Option<String>,

    // Log file location
    #[arg(short, long)]
    pub log_file: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Connect,
    CreateNamespace,
    Deploy,
    Status,
    Delete,
    Exit,
}

impl MenuChoice {
    pub const ITEMS: [&'static str; 6] = [
        "Connect to EKS Cluster",
        "Create Namespace",
        "Deploy Prometheus",
        "Check Resource Status",
        "Delete Resources",
        "Exit",
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Connect),
            "2" => Some(MenuChoice::CreateNamespace),
            "3" => Some(MenuChoice::Deploy),
            "4" => Some(MenuChoice::Status),
            "5" => Some(MenuChoice::Delete),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteChoice {
    Release,
    Namespace,
    Back,
}

impl DeleteChoice {
    pub const ITEMS: [&'static str; 3] = [
        "Delete Prometheus deployment",
        "Delete namespace",
        "Back to main menu",
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(DeleteChoice::Release),
            "2" => Some(DeleteChoice::Namespace),
            "3" => Some(DeleteChoice::Back),
            _ => None,
        }
    }
}

/// Sub-views of the status check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusView {
    Summary,
    Resource(ResourceKind),
    Releases,
    Events,
}

impl StatusView {
    pub const ITEMS: [&'static str; 7] = [
        "All resources (summary)",
        "Pods",
        "Services",
        "Deployments",
        "Ingresses",
        "Helm releases",
        "Events (useful for troubleshooting)",
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(StatusView::Summary),
            "2" => Some(StatusView::Resource(ResourceKind::Pods)),
            "3" => Some(StatusView::Resource(ResourceKind::Services)),
            "4" => Some(StatusView::Resource(ResourceKind::Deployments)),
            "5" => Some(StatusView::Resource(ResourceKind::Ingresses)),
            "6" => Some(StatusView::Releases),
            "7" => Some(StatusView::Events),
            _ => None,
        }
    }
}
