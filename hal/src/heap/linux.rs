//! Linux heap introspection implementation
//!
//! Uses glibc's mallinfo() for heap statistics. Lets the firmware diagnostics
//! run on a development host.

use super::{FreeMemory, HeapStats, Platform};

pub const PLATFORM: Platform = Platform::Linux;

/// glibc malloc arena
#[derive(Debug, Clone, Copy, Default)]
pub struct MallocHeap;

impl MallocHeap {
    pub const fn new() -> Self {
        Self
    }
}

pub type PlatformHeap = MallocHeap;

impl FreeMemory for MallocHeap {
    fn free_memory_bytes(&self) -> i32 {
        let info = unsafe { libc::mallinfo() };
        info.fordblks
    }

    fn heap_stats(&self) -> Option<HeapStats> {
        let info = unsafe { libc::mallinfo() };
        Some(HeapStats {
            free: info.fordblks,
            used: Some(info.uordblks),
            // mallinfo has no largest-free-chunk field
            largest_free_block: None,
        })
    }
}
