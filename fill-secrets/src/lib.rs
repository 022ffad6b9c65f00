//! Turns `secrets.txt` into `src/secrets.h`.
//!
//! Each line of the input is written to the header behind a `#define `
//! prefix, unchanged, so `WIFI_PASS "hunter2"` becomes
//! `#define WIFI_PASS "hunter2"`. The header is generated and never checked
//! in; the firmware includes it to get its credentials at compile time.

pub mod config;
pub mod error;
pub mod transcriber;

pub use config::Config;
pub use error::{Access, FileAccessError};
pub use transcriber::{DEFINE_PREFIX, Transcriber, transcribe};
