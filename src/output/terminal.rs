//! Terminal output with colors.

use crate::models::{Address, DottedQuad};
use crate::processing::Report;
use colored::{Color, Colorize};

const RULE: &str = "--------------------------------------------------";
const LABEL_WIDTH: usize = 15;
const VALUE_WIDTH: usize = 21;

/// Colors used by the presentation layer.
///
/// Reset is emitted by `colored` after every painted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub error: Color,
    pub value: Color,
    pub notice: Color,
    pub frame: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            error: Color::Red,
            value: Color::Green,
            notice: Color::Yellow,
            frame: Color::Cyan,
        }
    }
}

/// One `label: decimal binary` line, value column padded before coloring.
pub fn format_row(label: &str, decimal: &str, binary: &str, color: Color) -> String {
    let label = format!("{label}:");
    let decimal = format!("{decimal:<width$}", width = VALUE_WIDTH);
    format!(
        "{label:<width$} {} {binary}",
        decimal.color(color),
        width = LABEL_WIDTH
    )
    .trim_end()
    .to_string()
}

fn address_row(label: &str, addr: Option<Address>, palette: &Palette) -> String {
    match addr {
        Some(addr) => format_row(
            label,
            &addr.to_dotted_decimal(),
            &addr.to_dotted_binary(),
            palette.value,
        ),
        None => format_row(label, "n/a", "", palette.value),
    }
}

/// Render the whole result block shown for one argument.
pub fn render_report(report: &Report, palette: &Palette) -> String {
    let netmask = &report.netmask;
    let rows = [
        RULE.color(palette.frame).to_string(),
        address_row("Address", Some(report.address), palette),
        format_row(
            "Netmask",
            &format!("{} = {}", netmask.to_dotted_decimal(), netmask.prefix()),
            &netmask.to_dotted_binary(),
            palette.value,
        ),
        "=>".color(palette.frame).to_string(),
        format_row(
            "Network",
            &format!("{}/{}", report.network, netmask.prefix()),
            &report.network.to_dotted_binary(),
            palette.value,
        ),
        address_row("Broadcast", Some(report.broadcast), palette),
        address_row("HostMin", report.host_min, palette),
        address_row("HostMax", report.host_max, palette),
        format_row(
            "Host/Net",
            &report.host_count.to_string(),
            &format!("Class {}, {}", report.class, report.status),
            palette.value,
        ),
        RULE.color(palette.frame).to_string(),
    ];
    rows.join("\n")
}

pub fn render_notice(message: &str, palette: &Palette) -> String {
    message.color(palette.notice).to_string()
}

pub fn render_error(error: &dyn std::error::Error, palette: &Palette) -> String {
    format!("Error: {error}").color(palette.error).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::processing::calculate;

    fn plain() -> Palette {
        colored::control::set_override(false);
        Palette::default()
    }

    #[test]
    fn test_format_row() {
        let palette = plain();
        assert_eq!(
            format_row("Address", "10.0.0.1", "00001010", palette.value),
            "Address:        10.0.0.1              00001010"
        );
        assert_eq!(
            format_row("HostMin", "n/a", "", palette.value),
            "HostMin:        n/a"
        );
    }

    #[test]
    fn test_render_report() {
        let palette = plain();
        let report = calculate("192.168.1.10/24").unwrap();
        let text = render_report(&report, &palette);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], RULE);
        assert!(lines[1].starts_with("Address:        192.168.1.10"));
        assert!(lines[1].ends_with("11000000.10101000.00000001.00001010"));
        assert!(lines[2].contains("255.255.255.0 = 24"));
        assert_eq!(lines[3], "=>");
        assert!(lines[4].contains("192.168.1.0/24"));
        assert!(lines[5].contains("192.168.1.255"));
        assert!(lines[6].contains("192.168.1.1 "));
        assert!(lines[7].contains("192.168.1.254"));
        assert!(lines[8].starts_with("Host/Net:       254"));
        assert!(lines[8].ends_with("Class C, private"));
    }

    #[test]
    fn test_render_report_host_route() {
        let palette = plain();
        let report = calculate("8.8.8.8/32").unwrap();
        let text = render_report(&report, &palette);
        assert!(text.contains("HostMin:        n/a"));
        assert!(text.contains("HostMax:        n/a"));
        assert!(text.contains("Class A, public"));
    }

    #[test]
    fn test_render_error() {
        let palette = plain();
        let err = ParseError::CidrOutOfRange(40);
        assert_eq!(
            render_error(&err, &palette),
            "Error: CIDR prefix out of bounds (0-32): 40"
        );
    }
}
