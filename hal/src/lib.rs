//! Hardware Abstraction Layer
//!
//! Platform-specific implementations are selected at compile time via Cargo features.
//! Exactly one `platform-*` feature may be enabled; with none, the unsupported-platform
//! stub is compiled so host tooling still builds.

#![cfg_attr(not(test), no_std)]

#[cfg(any(
    all(feature = "platform-linux", feature = "platform-esp32"),
    all(feature = "platform-linux", feature = "platform-avr"),
    all(feature = "platform-esp32", feature = "platform-avr"),
))]
compile_error!("only one of `platform-linux`, `platform-esp32` or `platform-avr` may be enabled");

pub mod heap;

pub use heap::{
    get_free_memory, FreeMemory, HeapBounds, HeapLayout, HeapStats, Platform,
    PlatformHeap, StackHeapGap, PLATFORM,
};
