//! Heap introspection HAL
//!
//! Provides a free-memory estimate for the platform the firmware is built for.
//! Implementation is selected at compile time based on platform feature:
//!
//! - ESP32: the ESP-IDF heap allocator reports its free bytes directly
//! - AVR: distance between the stack pointer and the heap break (avr-libc)
//! - Linux: glibc's `mallinfo()`, for running on a development host

mod gap;
pub use gap::{HeapBounds, HeapLayout, StackHeapGap};

// Platform-specific implementations
#[cfg(feature = "platform-esp32")]
mod esp32;
#[cfg(feature = "platform-esp32")]
pub use esp32::*;

#[cfg(feature = "platform-avr")]
mod avr;
#[cfg(feature = "platform-avr")]
pub use avr::*;

#[cfg(feature = "platform-linux")]
mod linux;
#[cfg(feature = "platform-linux")]
pub use linux::*;

#[cfg(not(any(
    feature = "platform-esp32",
    feature = "platform-avr",
    feature = "platform-linux"
)))]
mod none;
#[cfg(not(any(
    feature = "platform-esp32",
    feature = "platform-avr",
    feature = "platform-linux"
)))]
pub use none::*;

use core::fmt;

/// Source of a free-memory estimate.
///
/// The diagnostic reporter only depends on this trait, so a fixed-value
/// implementation can stand in for the hardware in tests.
pub trait FreeMemory {
    /// Bytes currently available for allocation, as far as the platform can tell.
    fn free_memory_bytes(&self) -> i32;

    /// Detailed allocator statistics, when the platform exposes them.
    fn heap_stats(&self) -> Option<HeapStats> {
        None
    }
}

impl<T: FreeMemory + ?Sized> FreeMemory for &T {
    fn free_memory_bytes(&self) -> i32 {
        (**self).free_memory_bytes()
    }

    fn heap_stats(&self) -> Option<HeapStats> {
        (**self).heap_stats()
    }
}

/// Heap statistics structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapStats {
    /// Total free space in bytes
    pub free: i32,
    /// Total allocated space in bytes
    pub used: Option<i32>,
    /// Size of largest free chunk
    pub largest_free_block: Option<i32>,
}

impl HeapStats {
    /// Stats of one allocator region, from sizes queried with the same
    /// capability set. Values past `i32::MAX` are clamped.
    pub fn from_region(free: usize, total: usize, largest_free_block: usize) -> Self {
        let clamp = |bytes: usize| i32::try_from(bytes).unwrap_or(i32::MAX);
        Self {
            free: clamp(free),
            used: Some(clamp(total.saturating_sub(free))),
            largest_free_block: Some(clamp(largest_free_block)),
        }
    }

    /// Free plus used bytes, if the platform reports usage.
    pub fn total(&self) -> Option<i32> {
        self.used.map(|used| self.free.saturating_add(used))
    }
}

/// Heap backend compiled into this build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// ESP-IDF heap allocator API
    Esp32,
    /// Stack/heap-break pointer arithmetic
    Avr,
    /// glibc `mallinfo()`
    Linux,
    /// No heap introspection available
    Unsupported,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Esp32 => write!(f, "esp32"),
            Platform::Avr => write!(f, "avr"),
            Platform::Linux => write!(f, "linux"),
            Platform::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Get the current free-memory estimate of the platform heap in bytes
pub fn get_free_memory() -> i32 {
    PlatformHeap::new().free_memory_bytes()
}
