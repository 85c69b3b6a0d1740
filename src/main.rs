use std::io;
use std::process::ExitCode;

use clap::Parser;
use jsloc::args::Args;

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    match jsloc::run(&args, &mut out, &mut err) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}
