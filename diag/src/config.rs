//! Build-time diagnostic switch

use hal::FreeMemory;

use crate::free_ram::report_free_memory;
use crate::sink::LogSink;

/// True when the crate was built with the `diagnostics` feature.
pub const DIAGNOSTICS_ENABLED: bool = cfg!(feature = "diagnostics");

/// Gate that callers check before emitting diagnostics.
///
/// Built from [`DIAGNOSTICS_ENABLED`] in firmware; tests construct it
/// explicitly so both configurations are covered by one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostics {
    enabled: bool,
}

impl Diagnostics {
    pub const fn from_build() -> Self {
        Self {
            enabled: DIAGNOSTICS_ENABLED,
        }
    }

    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Report free memory if the gate is open. A closed gate never queries `heap`.
    #[inline(always)]
    pub fn report_free_memory<H, S>(&self, heap: &H, sink: &mut S)
    where
        H: FreeMemory + ?Sized,
        S: LogSink + ?Sized,
    {
        if self.enabled {
            report_free_memory(heap, sink);
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::from_build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::WriteSink;
    use core::cell::Cell;

    struct CountingHeap {
        reads: Cell<u32>,
    }

    impl FreeMemory for CountingHeap {
        fn free_memory_bytes(&self) -> i32 {
            self.reads.set(self.reads.get() + 1);
            2048
        }
    }

    #[test]
    fn closed_gate_is_a_true_no_op() {
        let heap = CountingHeap {
            reads: Cell::new(0),
        };
        let mut sink = WriteSink::new(String::new());

        Diagnostics::disabled().report_free_memory(&heap, &mut sink);

        assert_eq!(heap.reads.get(), 0);
        assert!(sink.get_ref().is_empty());
    }

    #[test]
    fn open_gate_reports() {
        let heap = CountingHeap {
            reads: Cell::new(0),
        };
        let mut sink = WriteSink::new(String::new());

        Diagnostics::enabled().report_free_memory(&heap, &mut sink);

        assert_eq!(heap.reads.get(), 1);
        assert_eq!(sink.get_ref(), "Free Ram: 2048\n");
    }

    #[test]
    fn build_gate_follows_feature() {
        assert_eq!(Diagnostics::from_build().is_enabled(), cfg!(feature = "diagnostics"));
        assert_eq!(Diagnostics::default(), Diagnostics::from_build());
    }
}
