use std::io::Write;

use chrono::Local;
use colored::*;
use sweepr_common::policy::ScanRequest;
use sweepr_common::report::{PortResult, PortState, ScanReport};

pub const TOTAL_WIDTH: usize = 64;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn header(msg: &str) {
    let formatted = format!("⟦ {} ⟧", msg);
    let msg_len = formatted.chars().count();

    let dash_count = TOTAL_WIDTH.saturating_sub(msg_len);
    let left = dash_count / 2;
    let right = dash_count - left;

    let line = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{line}");
}

pub fn prompt(msg: &str) {
    print!("{msg}");
    let _ = std::io::stdout().flush();
}

pub fn scan_started(request: &ScanRequest) {
    println!();
    println!("Scan started: {}", Local::now().format(TIMESTAMP_FORMAT));
    println!("Scanning host: {}", request.host().bold());
    println!(
        "Port range: {} to {}",
        request.start_port(),
        request.end_port()
    );
    println!();
}

pub fn port_line(result: &PortResult) {
    match result.state {
        PortState::Open => println!("{} Port {}", "[OPEN]".green().bold(), result.port),
        PortState::Closed => println!("{} Port {}", "[CLOSED]".bright_black(), result.port),
        PortState::Error => {
            let detail = result.detail.as_deref().unwrap_or("unknown error");
            println!(
                "{} scanning port {}: {}",
                "Error".red().bold(),
                result.port,
                detail
            );
        }
    }
}

pub fn scan_completed(report: &ScanReport) {
    let open_count = report.open_ports().count();
    let elapsed = report.finished_at - report.started_at;
    let seconds = elapsed.num_milliseconds() as f64 / 1_000.0;

    println!();
    println!(
        "Scan completed: {}",
        report.finished_at.format(TIMESTAMP_FORMAT)
    );

    let open_ports = format!("{open_count} open ports").bold().green();
    let total_time = format!("{seconds:.2}s").bold().yellow();
    println!("{open_ports} identified in {total_time}");
}
