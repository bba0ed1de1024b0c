use crate::drives::{Disk, DiskState};
use colored::Colorize;

const HEADERS: [&str; 7] = ["PATH", "TYPE", "MODEL", "SERIAL", "SIZE", "SECTOR", "STATE"];

/// Empty identity fields are shown as "N/A"
pub fn display_or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Human readable size using binary units
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

fn row(disk: &Disk) -> [String; 7] {
    [
        display_or_na(disk.path()).to_string(),
        disk.disk_type().to_string(),
        display_or_na(disk.model()).to_string(),
        display_or_na(disk.serial()).to_string(),
        format_size(disk.size()),
        disk.sector_size().to_string(),
        disk.state().to_string(),
    ]
}

/// Render disks as an aligned table, one row per disk
pub fn render_disks(disks: &[Disk]) -> String {
    if disks.is_empty() {
        return "No disks found.\n".to_string();
    }

    let rows: Vec<[String; 7]> = disks.iter().map(row).collect();

    let mut widths = HEADERS.map(str::len);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{:<w$}", h, w = w))
        .collect();
    out.push_str(&header.join("  ").trim_end().bold().to_string());
    out.push('\n');

    for (disk, cells) in disks.iter().zip(&rows) {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{:<w$}", c, w = w))
            .collect();
        let line = line.join("  ").trim_end().to_string();

        if disk.state() == DiskState::Frozen {
            out.push_str(&line.yellow().to_string());
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }

    out
}
