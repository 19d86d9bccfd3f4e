// src/cluster/kubectl.rs
use crate::exec::CommandLine;

const KUBECTL: &str = "kubectl";

/// Resource kinds the status view can list and describe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    All,
    Pods,
    Services,
    Deployments,
    Ingresses,
}

impl ResourceKind {
    /// Name passed to `kubectl get`.
    pub fn list_name(self) -> &'static str {
        match self {
            ResourceKind::All => "all",
            ResourceKind::Pods => "pods",
            ResourceKind::Services => "svc",
            ResourceKind::Deployments => "deployments",
            ResourceKind::Ingresses => "ingress",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::All => "All resources",
            ResourceKind::Pods => "Pods",
            ResourceKind::Services => "Services",
            ResourceKind::Deployments => "Deployments",
            ResourceKind::Ingresses => "Ingresses",
        }
    }

    /// Lower-case singular used in prompts.
    pub fn singular(self) -> &'static str {
        match self {
            ResourceKind::All => "resource",
            ResourceKind::Pods => "pod",
            ResourceKind::Services => "service",
            ResourceKind::Deployments => "deployment",
            ResourceKind::Ingresses => "ingress",
        }
    }

    /// Name passed to `kubectl describe`, `None` for the `all` pseudo-kind.
    pub fn describe_name(self) -> Option<&'static str> {
        match self {
            ResourceKind::All => None,
            ResourceKind::Pods => Some("pod"),
            ResourceKind::Services => Some("svc"),
            ResourceKind::Deployments => Some("deployment"),
            ResourceKind::Ingresses => Some("ingress"),
        }
    }
}

fn kubectl() -> CommandLine {
    CommandLine::new(KUBECTL)
}

/// `kubectl get namespaces -o custom-columns=NAME:.metadata.name --no-headers`
pub fn list_namespace_names() -> CommandLine {
    kubectl().args([
        "get",
        "namespaces",
        "-o",
        "custom-columns=NAME:.metadata.name",
        "--no-headers",
    ])
}

pub fn create_namespace(namespace: &str) -> CommandLine {
    kubectl().args(["create", "namespace", namespace])
}

pub fn delete_namespace(namespace: &str) -> CommandLine {
    kubectl().args(["delete", "namespace", namespace])
}

/// `kubectl get <kind> -n <namespace>`
pub fn get(kind: ResourceKind, namespace: &str) -> CommandLine {
    kubectl().args(["get", kind.list_name(), "-n", namespace])
}

/// `kubectl describe <kind> <name> -n <namespace>`; the `all` kind has no
/// describe form.
pub fn describe(kind: ResourceKind, name: &str, namespace: &str) -> Option<CommandLine> {
    kind.describe_name()
        .map(|k| kubectl().args(["describe", k, name, "-n", namespace]))
}

pub fn logs(pod: &str, namespace: &str) -> CommandLine {
    kubectl().args(["logs", pod, "-n", namespace])
}

/// Events, oldest first so the most recent end up next to the prompt.
pub fn events(namespace: &str) -> CommandLine {
    kubectl().args([
        "get",
        "events",
        "--sort-by=.metadata.creationTimestamp",
        "-n",
        namespace,
    ])
}

/// Splits the namespace listing into names, dropping blank lines.
pub fn parse_namespace_names(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
