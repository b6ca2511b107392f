pub mod body;
pub mod commands;
pub mod config;
pub mod init_config;
pub mod kinetics;
pub mod simulation;
pub mod view;

pub mod app;
