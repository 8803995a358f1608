use clap::Parser;
use log::info;
use std::{fmt::Display, fmt::Formatter};

/// Files used when none are given on the command line.
pub const DEFAULT_FILES: [&str; 3] = ["file1.txt", "file2.txt", "file3.txt"];

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}
impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl From<u8> for Verbosity {
    fn from(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}
impl Verbosity {
    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Sort-then-RLE file compressor",
    long_about = "
    Each file is stably sorted by byte value and the sorted bytes are run-length encoded.
    Two files are written next to every input: <file>.compressed holds (byte, count) pairs
    and <file>.indices holds the original position of every sorted byte.

    Files are processed concurrently on a bounded pool of worker threads."
)]
pub struct Args {
    /// Files to compress (file1.txt file2.txt file3.txt if none are given)
    #[clap()]
    pub files: Vec<String>,

    /// Number of worker threads. 0 uses one per CPU core
    #[clap(short = 'j', long = "jobs", default_value_t = 0)]
    pub jobs: usize,

    /// Sets verbosity. -v0 is silent, -v1 shows errors only, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    pub v: u8,

    /// Suppress all log output
    #[clap(short = 'q', long = "quiet")]
    pub quiet: bool,
}

#[derive(Debug)]
pub struct Opts {
    /// Vec of names of files to read for input
    pub files: Vec<String>,
    /// Size of the worker pool, 0 for one per core
    pub jobs: usize,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl Opts {
    pub fn new() -> Self {
        Self {
            files: DEFAULT_FILES.iter().map(|s| s.to_string()).collect(),
            jobs: 0,
            verbose: Verbosity::Info,
        }
    }

    /// Put command line information from CLAP into our internal structure.
    pub fn from_args(args: Args) -> Self {
        let mut opts = Self::new();
        if !args.files.is_empty() {
            opts.files = args.files;
        }
        opts.jobs = args.jobs;
        opts.verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::from(args.v)
        };
        opts
    }
}

impl Default for Opts {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the process arguments, set the log level and report the settings.
pub fn opts_init() -> Opts {
    let opts = Opts::from_args(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    info!("---- sort-rle {} ----", env!("CARGO_PKG_VERSION"));
    info!("Verbosity set to {}", opts.verbose);
    info!("Files: {}", opts.files.join(", "));
    if opts.jobs == 0 {
        info!("Worker threads: one per core");
    } else {
        info!("Worker threads: {}", opts.jobs);
    }
    opts
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_files_test() {
        let opts = Opts::from_args(Args::parse_from(["sort-rle"]));
        assert_eq!(opts.files, vec!["file1.txt", "file2.txt", "file3.txt"]);
        assert_eq!(opts.jobs, 0);
        assert_eq!(opts.verbose, Verbosity::Info);
    }

    #[test]
    fn files_and_jobs_test() {
        let opts = Opts::from_args(Args::parse_from(["sort-rle", "-j", "4", "a.txt", "b.txt"]));
        assert_eq!(opts.files, vec!["a.txt", "b.txt"]);
        assert_eq!(opts.jobs, 4);
    }

    #[test]
    fn verbosity_test() {
        let opts = Opts::from_args(Args::parse_from(["sort-rle", "-v5", "x"]));
        assert_eq!(opts.verbose, Verbosity::Trace);
        let opts = Opts::from_args(Args::parse_from(["sort-rle", "-q", "-v5", "x"]));
        assert_eq!(opts.verbose, Verbosity::Quiet);
        assert_eq!(Verbosity::from(1).level_filter(), log::LevelFilter::Error);
    }
}
