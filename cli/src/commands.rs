pub mod client;
pub mod scan;
pub mod serve;

use clap::{Parser, Subcommand};
use sweepr_common::config::DEFAULT_CONCURRENCY;

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(about = "A policy-gated TCP port scanner with an echo service.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a range of ports on an allow-listed host
    #[command(alias = "s")]
    Scan {
        /// Target host to scan
        host: String,
        /// Starting port number
        start_port: u32,
        /// Ending port number
        end_port: u32,
        /// Maximum number of probes in flight at once
        #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,
        /// Connect timeout per probe, in milliseconds
        #[arg(long = "timeout", default_value_t = 500)]
        timeout_ms: u64,
        /// Pause between probe dispatches, in milliseconds
        #[arg(long = "delay")]
        delay_ms: Option<u64>,
    },
    /// Run the echo service
    #[command(alias = "e")]
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to listen on
        #[arg(long, default_value_t = 55_000)]
        port: u16,
    },
    /// Connect to an echo service and chat interactively
    #[command(alias = "c")]
    Client {
        /// Echo service address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Echo service port
        #[arg(long, default_value_t = 55_000)]
        port: u16,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
