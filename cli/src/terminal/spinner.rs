use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

pub fn start_scan_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn report_probe_progress(pb: &ProgressBar, resolved: usize, total: usize) {
    pb.set_message(format!(
        "Probed {} of {} ports...",
        resolved.to_string().green().bold(),
        total
    ));
}
