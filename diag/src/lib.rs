//! Firmware diagnostics
//!
//! Debug-build logging primitives and the free RAM report. Call sites go
//! through [`config::Diagnostics`] or the `debug_log*!` macros so that a build
//! without the `diagnostics` feature carries none of it.

#![cfg_attr(not(any(test, feature = "testing")), no_std)]

pub mod config;
pub mod free_ram;
pub mod macros;
pub mod sink;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{Diagnostics, DIAGNOSTICS_ENABLED};
pub use free_ram::{report_free_memory, report_heap_stats, FREE_RAM_LABEL};
pub use sink::{LogLineSink, LogSink, WriteSink};
