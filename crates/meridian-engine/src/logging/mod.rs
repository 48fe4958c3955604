//! Logging setup.
//!
//! Library code only talks to the `log` facade. Binaries call
//! [`init_logging`] once near the top of `main`.

mod init;

pub use init::{LoggingConfig, init_logging};
