//! # Quot
//!
//! A single-operation arithmetic library with a CLI client: divide two
//! numbers, or run the embedded self-test battery.
//!
//! Everything from the library inward takes plain Rust values and returns
//! `Result`, and never writes to stdout/stderr or calls
//! `std::process::exit`. The binary
//! (`main.rs` plus its `args` module) is the only place that knows about
//! terminal streams and exit codes.
//!
//! - [`divide`]: the division operation and its [`divide::Operand`] input type
//! - [`selftest`]: the fixed check battery behind `--test`
//! - [`error`]: the failure taxonomy (`InvalidInput`, `DivisionByZero`)

pub mod divide;
pub mod error;
pub mod selftest;
