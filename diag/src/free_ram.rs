//! Free RAM report

use hal::FreeMemory;

use crate::sink::LogSink;

/// Text written before the free byte count.
pub const FREE_RAM_LABEL: &str = "Free Ram: ";

/// Write `Free Ram: <N>` to `sink`, where `N` is the current estimate of `heap`.
///
/// The estimate is taken fresh and not kept. On stack/heap-gap platforms it can
/// be stale as soon as the stack grows; that is accepted, not reported.
pub fn report_free_memory<H, S>(heap: &H, sink: &mut S)
where
    H: FreeMemory + ?Sized,
    S: LogSink + ?Sized,
{
    let free = heap.free_memory_bytes();
    sink.print(FREE_RAM_LABEL);
    sink.print_int(free);
    sink.newline();
}

/// Write the allocator statistics of `heap`, or nothing if it has none.
///
/// Returns whether a line was written.
pub fn report_heap_stats<H, S>(heap: &H, sink: &mut S) -> bool
where
    H: FreeMemory + ?Sized,
    S: LogSink + ?Sized,
{
    let Some(stats) = heap.heap_stats() else {
        return false;
    };
    sink.print("Heap: free=");
    sink.print_int(stats.free);
    if let Some(used) = stats.used {
        sink.print(" used=");
        sink.print_int(used);
    }
    if let Some(total) = stats.total() {
        sink.print(" total=");
        sink.print_int(total);
    }
    if let Some(largest) = stats.largest_free_block {
        sink.print(" largest=");
        sink.print_int(largest);
    }
    sink.newline();
    true
}
