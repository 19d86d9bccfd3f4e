// src/cluster/aws.rs
use crate::exec::CommandLine;

const AWS: &str = "aws";

/// `aws configure set region <region>`
pub fn configure_region(region: &str) -> CommandLine {
    CommandLine::new(AWS).args(["configure", "set", "region", region])
}

/// `aws eks update-kubeconfig --name <cluster> --region <region>`
pub fn update_kubeconfig(cluster: &str, region: &str) -> CommandLine {
    CommandLine::new(AWS).args([
        "eks",
        "update-kubeconfig",
        "--name",
        cluster,
        "--region",
        region,
    ])
}
