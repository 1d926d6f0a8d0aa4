pub mod config;
pub mod logging;

pub mod container;
pub mod job;
pub mod locate;
pub mod naming;
pub mod pipeline;
pub mod relocate;
pub mod settings;
pub mod suffix;
