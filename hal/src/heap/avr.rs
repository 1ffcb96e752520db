//! AVR heap introspection implementation
//!
//! avr-libc has no heap statistics; free memory is the gap between the stack
//! and `__brkval`, or `__heap_start` before the first `malloc`.

use core::ptr::addr_of;

use super::{HeapBounds, HeapLayout, Platform, StackHeapGap};

pub const PLATFORM: Platform = Platform::Avr;

extern "C" {
    static __heap_start: u8;
    static __brkval: *mut u8;
}

/// Heap bounds read from avr-libc's allocator symbols
#[derive(Debug, Clone, Copy, Default)]
pub struct AvrLayout;

impl HeapLayout for AvrLayout {
    #[inline(never)]
    fn bounds(&self) -> HeapBounds {
        let marker = 0u8;
        let stack_top = core::hint::black_box(addr_of!(marker)) as usize;
        // Both symbols are provided by avr-libc's malloc; __brkval is only written
        // by the allocator on this single core.
        let heap_break = unsafe { addr_of!(__brkval).read_volatile() } as usize;
        let heap_start = unsafe { addr_of!(__heap_start) } as usize;
        HeapBounds {
            stack_top,
            heap_break,
            heap_start,
        }
    }
}

pub type PlatformHeap = StackHeapGap<AvrLayout>;

impl StackHeapGap<AvrLayout> {
    pub const fn new() -> Self {
        Self::with_layout(AvrLayout)
    }
}
