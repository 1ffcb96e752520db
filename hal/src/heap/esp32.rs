//! ESP32 heap introspection implementation
//!
//! Uses the ESP-IDF heap allocator API. The numbers describe the allocator's
//! own bookkeeping, not the physical RAM of the chip.

use esp_idf_svc::sys::{
    esp_get_free_heap_size, heap_caps_get_free_size, heap_caps_get_largest_free_block,
    heap_caps_get_total_size, MALLOC_CAP_8BIT,
};

use super::{FreeMemory, HeapStats, Platform};

pub const PLATFORM: Platform = Platform::Esp32;

/// ESP-IDF default heap
#[derive(Debug, Clone, Copy, Default)]
pub struct EspHeap;

impl EspHeap {
    pub const fn new() -> Self {
        Self
    }
}

pub type PlatformHeap = EspHeap;

impl FreeMemory for EspHeap {
    fn free_memory_bytes(&self) -> i32 {
        i32::try_from(unsafe { esp_get_free_heap_size() }).unwrap_or(i32::MAX)
    }

    /// Byte-addressable heap (internal RAM plus PSRAM where present). All three
    /// sizes use the same capability set so `used` stays consistent.
    fn heap_stats(&self) -> Option<HeapStats> {
        let (free, total, largest) = unsafe {
            (
                heap_caps_get_free_size(MALLOC_CAP_8BIT),
                heap_caps_get_total_size(MALLOC_CAP_8BIT),
                heap_caps_get_largest_free_block(MALLOC_CAP_8BIT),
            )
        };
        Some(HeapStats::from_region(free, total, largest))
    }
}
