use clap::Parser;
use ipcalc::cli::{report_usage, run, Args, EXIT_FAILURE};
use ipcalc::config::Config;
use ipcalc::output::{render_error, Palette};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let palette = Palette::default();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", render_error(&e, &palette));
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    ipcalc::logging::init(&config.log_config);
    log::info!("#Start main()");

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return ExitCode::from(report_usage(&e)),
    };
    args.color.unwrap_or(config.color).apply();

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    match run(&args, &palette, &mut stdout, &mut stderr) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            log::error!("Error writing output: {e}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
