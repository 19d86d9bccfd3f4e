// src/app/mod.rs
mod connect;
mod delete;
mod deploy;
mod manager;
mod namespace;
mod run;
mod select;
mod status;

pub use manager::ResourceManager;
pub use run::run_menu;
