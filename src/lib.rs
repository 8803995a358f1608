//! Sort-then-RLE file compressor.
//!
//! Version 0.1.0
//!
//! Each input file is compressed in two steps:
//! - The bytes are stably sorted by value, which clusters identical bytes together.
//!   The original position of every sorted byte is kept so the sort can be undone.
//! - The sorted bytes are run-length encoded as (byte, count) pairs.
//!
//! Two files are written next to the input: `<file>.compressed` holding the
//! run-length pairs and `<file>.indices` holding the permutation, one native-width
//! unsigned integer per input byte.
//!
//! Several files are processed at once on a bounded pool of worker threads.
//!
//! Basic usage:
//!
//! `$> sort-rle -j4 a.txt b.txt c.txt`
//!
pub mod compression;
pub mod error;
pub mod tools;
