// src/app/connect.rs
use super::ResourceManager;
use crate::cluster::aws;
use crate::error::Result;

impl ResourceManager {
    /// Points the AWS CLI at a region and writes a kubeconfig entry for the
    /// chosen EKS cluster.
    pub fn connect_to_cluster(&mut self) -> Result<bool> {
        self.console.header("Connecting to EKS Cluster");

        let default_region = self.config.default_region.clone();
        let region = self.ask_with_default("Enter AWS region", &default_region)?;
        if self.reject_option_like("region", &region) {
            return Ok(false);
        }
        if !self.run(&aws::configure_region(&region)).success {
            return Ok(false);
        }

        let default_cluster = self.config.default_cluster.clone();
        let cluster = self.ask_with_default("Enter EKS cluster name", &default_cluster)?;
        if self.reject_option_like("cluster", &cluster) {
            return Ok(false);
        }

        if self.run(&aws::update_kubeconfig(&cluster, &region)).success {
            self.console
                .success(&format!("Successfully connected to EKS cluster: {}", cluster));
            self.log(&format!("Connected to EKS cluster {} in {}", cluster, region));
            Ok(true)
        } else {
            self.console
                .error(&format!("Failed to connect to EKS cluster: {}", cluster));
            Ok(false)
        }
    }
}
