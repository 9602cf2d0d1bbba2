//! Configuration for Taskdeck
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::net::SocketAddr;

/// Taskdeck - personal task-tracking service
#[derive(Parser, Debug, Clone)]
#[command(name = "taskdeck")]
#[command(about = "HTTP backend for the Taskdeck task tracker")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    /// Fixed user identity all requests operate as (single-user service)
    #[arg(long, env = "USER_ID", default_value = "demo-user")]
    pub user_id: String,

    /// Seed demo categories and stats for the fixed user at startup
    #[arg(long, env = "SEED_DEMO_DATA", default_value = "true")]
    pub seed_demo_data: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.user_id.trim().is_empty() {
            return Err("USER_ID must not be empty".to_string());
        }
        Ok(())
    }
}
