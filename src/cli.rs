//! Command line surface: argument definitions and the run loop body.

use crate::config::ColorChoice;
use crate::output::{render_error, render_json, render_notice, render_report, Palette};
use crate::processing::calculate;
use clap::{ArgAction, Parser};
use std::error::Error;
use std::io::Write;

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// IPv4 network calculator: network, broadcast, host range and host count.
#[derive(Parser, Debug)]
#[command(name = "ipcalc", version, disable_version_flag = true)]
pub struct Args {
    /// IPv4 address with optional CIDR prefix, e.g. 192.168.1.10/24.
    /// Without a prefix the classful default is used.
    #[arg(value_name = "ADDRESS[/PREFIX]")]
    pub address: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// When to color the output (overrides IPCALC_COLOR)
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}

/// Help and version requests exit 0, usage errors exit 1.
pub fn exit_code_for(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_OK
    }
}

/// Print clap's help, version or usage error and pick the exit code.
pub fn report_usage(err: &clap::Error) -> u8 {
    if let Err(print_err) = err.print() {
        log::error!("Error writing usage output: {print_err}");
    }
    exit_code_for(err)
}

/// Calculate for `args.address` and write the result to `out`.
///
/// Validation failures are reported on `err` and give [`EXIT_FAILURE`];
/// `Err` is only returned when writing fails.
pub fn run<W, E>(
    args: &Args,
    palette: &Palette,
    out: &mut W,
    err: &mut E,
) -> Result<u8, Box<dyn Error>>
where
    W: Write,
    E: Write,
{
    let report = match calculate(&args.address) {
        Ok(report) => report,
        Err(e) => {
            log::warn!("Rejected input '{}': {e}", args.address);
            writeln!(err, "{}", render_error(&e, palette))?;
            return Ok(EXIT_FAILURE);
        }
    };

    if report.prefix_defaulted {
        let notice = format!(
            "Unspecified netmask, using classful default /{}",
            report.netmask.prefix()
        );
        writeln!(err, "{}", render_notice(&notice, palette))?;
    }

    let text = if args.json {
        render_json(&report)?
    } else {
        render_report(&report, palette)
    };
    writeln!(out, "{text}")?;
    Ok(EXIT_OK)
}
