//! Stub heap introspection implementation
//!
//! Used when no platform-specific implementation is available.

use super::{FreeMemory, Platform};

pub const PLATFORM: Platform = Platform::Unsupported;

/// Stub heap: reports 0 free bytes and no statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedHeap;

impl UnsupportedHeap {
    pub const fn new() -> Self {
        Self
    }
}

pub type PlatformHeap = UnsupportedHeap;

impl FreeMemory for UnsupportedHeap {
    fn free_memory_bytes(&self) -> i32 {
        0
    }
}
