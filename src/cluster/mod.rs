// src/cluster/mod.rs
pub mod aws;
pub mod helm;
pub mod kubectl;

pub use helm::HelmRelease;
pub use kubectl::ResourceKind;
