//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::exit;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use sort_rle::compression::batch::compress_files;
use sort_rle::tools::cli::opts_init;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace. The real level is set by opts_init.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Could not start logging: {}", e);
    }

    let opts = opts_init();

    let report = match compress_files(&opts.files, opts.jobs) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            eprintln!("sort-rle: {}", e);
            exit(2);
        }
    };

    // One line per file, in the order given.
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(artifact) => println!(
                "{}: ok -> {}, {}",
                outcome.file, artifact.compressed, artifact.indices
            ),
            Err(e) => println!("{}: {} ({})", outcome.file, e.kind(), e),
        }
    }

    info!("Done.\n");
    if !report.is_success() {
        exit(1);
    }
}
