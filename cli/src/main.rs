mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, client, scan, serve};
use sweepr_common::config::ScanConfig;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command_line = CommandLine::parse_args();
    logging::init();

    match command_line.command {
        Commands::Scan {
            host,
            start_port,
            end_port,
            concurrency,
            timeout_ms,
            delay_ms,
        } => {
            print::header("starting scanner");
            let config = ScanConfig {
                concurrency,
                probe_timeout: Duration::from_millis(timeout_ms),
                dispatch_delay: delay_ms.map(Duration::from_millis),
            };
            scan::scan(host, start_port, end_port, config).await
        }
        Commands::Serve { host, port } => {
            print::header("starting echo service");
            serve::serve(host, port).await
        }
        Commands::Client { host, port } => {
            print::header("starting echo client");
            client::client(host, port).await
        }
    }
}
