//! Compress many files at once.
//!
//! Every file is its own task on a rayon thread pool of bounded size. Tasks share nothing but the
//! filesystem, so one file failing (or even panicking) has no effect on the others. All outcomes
//! are gathered after every task has finished and are returned in the order the files were given.
//!
use std::panic::{self, AssertUnwindSafe};

use log::{error, info};
use rayon::prelude::*;

use super::compress::{compress_file, Artifact};
use crate::error::{CodecError, Result};

/// Result of compressing one file.
#[derive(Debug)]
pub struct FileOutcome {
    pub file: String,
    pub result: Result<Artifact>,
}

/// Outcomes of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// True when every file compressed cleanly (also true for an empty batch).
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn successes(&self) -> impl Iterator<Item = &Artifact> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &CodecError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.file.as_str(), e)))
    }
}

/// Compress every file on a pool of `jobs` worker threads (0 = one per core) and wait for all of them.
/// Only a failure to create the pool is returned as an error; per-file failures are in the report.
pub fn compress_files(files: &[String], jobs: usize) -> Result<BatchReport> {
    run_batch(files, jobs, compress_file)
}

/// Runs `work` once per file on the pool and gathers the outcomes in input order.
fn run_batch<F>(files: &[String], jobs: usize, work: F) -> Result<BatchReport>
where
    F: Fn(&str) -> Result<Artifact> + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .thread_name(|i| format!("sort-rle-{}", i))
        .build()?;
    info!(
        "Compressing {} files on {} worker threads",
        files.len(),
        pool.current_num_threads()
    );

    // with_max_len(1) keeps each file in a task of its own.
    let outcomes: Vec<FileOutcome> = pool.install(|| {
        files
            .par_iter()
            .with_max_len(1)
            .map(|file| FileOutcome {
                file: file.clone(),
                result: guarded(file, || work(file)),
            })
            .collect()
    });

    let report = BatchReport { outcomes };
    let mut failed = 0;
    for (file, e) in report.failures() {
        error!("{} failed: {}", file, e);
        failed += 1;
    }
    info!(
        "Batch done: {} succeeded, {} failed",
        report.outcomes.len() - failed,
        failed
    );
    Ok(report)
}

/// Runs the work for one file, turning a panic into an error for that file.
fn guarded<F>(file: &str, work: F) -> Result<Artifact>
where
    F: FnOnce() -> Result<Artifact>,
{
    panic::catch_unwind(AssertUnwindSafe(work)).unwrap_or_else(|payload| {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        Err(CodecError::WorkerPanicked {
            path: file.to_string(),
            message,
        })
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_batch_test() {
        let report = compress_files(&[], 2).unwrap();
        assert!(report.outcomes.is_empty());
        assert!(report.is_success());
    }

    #[test]
    fn order_preserved_test() {
        let dir = tempfile::tempdir().unwrap();
        let files: Vec<String> = (0..8)
            .map(|i| {
                let p = dir.path().join(format!("f{}.txt", i));
                std::fs::write(&p, format!("file number {}", i)).unwrap();
                p.to_str().unwrap().to_string()
            })
            .collect();
        let report = compress_files(&files, 3).unwrap();
        let names: Vec<&str> = report.outcomes.iter().map(|o| o.file.as_str()).collect();
        let expected: Vec<&str> = files.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, expected);
        assert!(report.is_success());
        assert_eq!(report.successes().count(), 8);
    }

    #[test]
    fn str_panic_caught_test() {
        let result = guarded("a.txt", || panic!("sort blew up"));
        match result {
            Err(CodecError::WorkerPanicked { path, message }) => {
                assert_eq!(path, "a.txt");
                assert_eq!(message, "sort blew up");
            }
            other => panic!("expected WorkerPanicked, got {:?}", other),
        }
    }

    #[test]
    fn string_panic_caught_test() {
        let n = 7;
        let result = guarded("b.txt", || panic!("bad run at {}", n));
        match result {
            Err(CodecError::WorkerPanicked { path, message }) => {
                assert_eq!(path, "b.txt");
                assert_eq!(message, "bad run at 7");
            }
            other => panic!("expected WorkerPanicked, got {:?}", other),
        }
    }

    #[test]
    fn panic_isolated_to_one_file_test() {
        let dir = tempfile::tempdir().unwrap();
        let files: Vec<String> = ["x.txt", "boom.txt", "y.txt"]
            .iter()
            .map(|name| {
                let p = dir.path().join(name);
                std::fs::write(&p, name.as_bytes()).unwrap();
                p.to_str().unwrap().to_string()
            })
            .collect();

        let report = run_batch(&files, 2, |file| {
            if file.ends_with("boom.txt") {
                panic!("worker died");
            }
            compress_file(file)
        })
        .unwrap();

        assert_eq!(report.outcomes.len(), 3);
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, files[1]);
        assert!(matches!(
            failures[0].1,
            CodecError::WorkerPanicked { message, .. } if message == "worker died"
        ));
        assert!(report.outcomes[0].result.is_ok());
        assert!(report.outcomes[2].result.is_ok());
    }
}
