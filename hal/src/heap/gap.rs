//! Stack/heap gap estimate
//!
//! On chips without an allocator API the free memory is approximated by the
//! distance between the top of the stack and the heap break. This assumes the
//! stack sits above the heap and the two grow toward each other, which holds
//! for avr-libc's default layout. Do not reuse it for another target without
//! checking that target's linker script.

use super::FreeMemory;

/// Addresses needed for the stack/heap gap estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapBounds {
    /// Address of a local in the current stack frame
    pub stack_top: usize,
    /// Current heap break, 0 until the allocator has handed out memory
    pub heap_break: usize,
    /// Link-time start of the heap region
    pub heap_start: usize,
}

impl HeapBounds {
    /// Upper bound of the heap: the break pointer, or the heap start if nothing
    /// has been allocated yet.
    pub fn heap_top(&self) -> usize {
        if self.heap_break == 0 {
            self.heap_start
        } else {
            self.heap_break
        }
    }

    /// `stack_top - heap_top`, saturated into `i32`.
    ///
    /// Negative when the stack has already run into the heap.
    pub fn free_bytes(&self) -> i32 {
        let top = self.heap_top();
        if self.stack_top >= top {
            i32::try_from(self.stack_top - top).unwrap_or(i32::MAX)
        } else {
            i32::try_from(top - self.stack_top)
                .map(|gap| -gap)
                .unwrap_or(i32::MIN)
        }
    }
}

/// Supplies the current [`HeapBounds`].
///
/// Implemented by the platform layer over the real linker symbols, and by
/// tests over synthetic addresses.
pub trait HeapLayout {
    fn bounds(&self) -> HeapBounds;
}

/// Free-memory backend measuring the gap between stack and heap
#[derive(Debug, Clone, Copy, Default)]
pub struct StackHeapGap<L> {
    layout: L,
}

impl<L: HeapLayout> StackHeapGap<L> {
    pub const fn with_layout(layout: L) -> Self {
        Self { layout }
    }
}

impl<L: HeapLayout> FreeMemory for StackHeapGap<L> {
    fn free_memory_bytes(&self) -> i32 {
        self.layout.bounds().free_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Stack pointer that moves down by `step` on every read.
    struct Synthetic {
        stack_top: Cell<usize>,
        step: usize,
        heap_break: usize,
        heap_start: usize,
    }

    impl HeapLayout for Synthetic {
        fn bounds(&self) -> HeapBounds {
            let stack_top = self.stack_top.get();
            self.stack_top.set(stack_top - self.step);
            HeapBounds {
                stack_top,
                heap_break: self.heap_break,
                heap_start: self.heap_start,
            }
        }
    }

    #[test]
    fn uses_break_pointer_once_allocated() {
        let bounds = HeapBounds {
            stack_top: 0x08F0,
            heap_break: 0x0450,
            heap_start: 0x0200,
        };
        assert_eq!(bounds.heap_top(), 0x0450);
        assert_eq!(bounds.free_bytes(), 0x08F0 - 0x0450);
    }

    #[test]
    fn falls_back_to_heap_start_before_first_allocation() {
        let bounds = HeapBounds {
            stack_top: 0x08F0,
            heap_break: 0,
            heap_start: 0x0200,
        };
        assert_eq!(bounds.heap_top(), 0x0200);
        assert_eq!(bounds.free_bytes(), 1776);
    }

    #[test]
    fn collided_stack_is_negative() {
        let bounds = HeapBounds {
            stack_top: 0x0400,
            heap_break: 0x0410,
            heap_start: 0x0200,
        };
        assert_eq!(bounds.free_bytes(), -16);
    }

    #[test]
    fn saturates_outside_i32() {
        let bounds = HeapBounds {
            stack_top: usize::MAX,
            heap_break: 0,
            heap_start: 0,
        };
        assert_eq!(bounds.free_bytes(), i32::MAX);
        let bounds = HeapBounds {
            stack_top: 0,
            heap_break: usize::MAX,
            heap_start: 0,
        };
        assert_eq!(bounds.free_bytes(), i32::MIN);
    }

    #[test]
    fn backend_reads_layout_on_every_call() {
        let heap = StackHeapGap::with_layout(Synthetic {
            stack_top: Cell::new(0x1000),
            step: 0x10,
            heap_break: 0,
            heap_start: 0x0800,
        });
        let first = heap.free_memory_bytes();
        let second = heap.free_memory_bytes();
        assert_eq!(first, 0x0800);
        assert!(second <= first);
        assert_eq!(heap.heap_stats(), None);
    }
}
