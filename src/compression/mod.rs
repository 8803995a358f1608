//! The compression module drives the tools over whole files.
//!
//! Compression of a single file happens in the following steps:
//! - Read the whole file into memory.
//! - Sort: stably sort the bytes by value, remembering where each byte came from.
//! - Run Length Encoding: collapse each run of identical bytes into a (byte, count) pair,
//!   splitting runs longer than 255 bytes.
//! - Write the pairs to `<file>.compressed` and the original positions to `<file>.indices`.
//!
//! The batch runner hands each file to its own task on a bounded thread pool and
//! collects every outcome, success or failure, once all tasks have finished.
//!

pub mod batch;
pub mod compress;
