//! Library surface of the trend CLI.
//!
//! Only the logging infrastructure is exposed; argument parsing, command
//! dispatch, and summary printing live in the binary.

pub mod logging;
