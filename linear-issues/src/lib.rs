// ABOUTME: Library exports for the Linear issues CLI modules
// ABOUTME: Makes internal modules available to the binary and to integration tests

pub mod cli;
pub mod cli_output;
pub mod commands;
pub mod config;
pub mod constants;
pub mod interactive;
pub mod output;
pub mod selector;
pub mod types;
