//! Parrot driver diagnostics
//!
//! Reports the free RAM of the board the driver runs on. The heap backend is
//! picked by the `platform-*` feature, output goes through the `log` facade,
//! and nothing is printed unless the `diagnostics` feature is on.

#![cfg_attr(feature = "platform-avr", no_std)]

use diag::{Diagnostics, LogLineSink, LogSink};
use hal::{FreeMemory, PlatformHeap, PLATFORM};

/// Longest diagnostic line passed to the logger
pub const LINE_CAPACITY: usize = 64;

/// Log the free RAM of the platform heap, in diagnostic builds only.
pub fn print_free_ram() {
    let mut sink = LogLineSink::<LINE_CAPACITY>::new();
    print_free_ram_with(Diagnostics::from_build(), &PlatformHeap::new(), &mut sink);
}

/// [`print_free_ram`] with explicit collaborators.
pub fn print_free_ram_with<H, S>(diagnostics: Diagnostics, heap: &H, sink: &mut S)
where
    H: FreeMemory + ?Sized,
    S: LogSink + ?Sized,
{
    diagnostics.report_free_memory(heap, sink);
}

/// Log allocator statistics, in diagnostic builds on platforms that have them.
pub fn print_heap_stats() {
    if !diag::DIAGNOSTICS_ENABLED {
        return;
    }
    let mut sink = LogLineSink::<LINE_CAPACITY>::new();
    if !diag::report_heap_stats(&PlatformHeap::new(), &mut sink) {
        log::debug!("no heap statistics on {}", PLATFORM);
    }
}

/// Run the report once - portable entry point
pub fn run() -> i32 {
    log::info!("parrot diagnostics on {} (enabled: {})", PLATFORM, diag::DIAGNOSTICS_ENABLED);
    print_free_ram();
    print_heap_stats();
    0
}

/// Entry point called from the firmware's C startup code
#[cfg(any(feature = "platform-esp32", feature = "platform-avr"))]
#[no_mangle]
pub extern "C" fn parrot_main() -> i32 {
    run()
}

#[cfg(feature = "platform-avr")]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use diag::WriteSink;

    struct FixedHeap(i32);

    impl FreeMemory for FixedHeap {
        fn free_memory_bytes(&self) -> i32 {
            self.0
        }
    }

    #[test]
    fn enabled_build_reports_injected_heap() {
        let mut sink = WriteSink::new(String::new());
        print_free_ram_with(Diagnostics::enabled(), &FixedHeap(30_720), &mut sink);
        assert_eq!(sink.get_ref(), "Free Ram: 30720\n");
    }

    #[test]
    fn release_build_prints_nothing() {
        let mut sink = WriteSink::new(String::new());
        print_free_ram_with(Diagnostics::disabled(), &FixedHeap(30_720), &mut sink);
        assert!(sink.get_ref().is_empty());
    }

    #[test]
    fn free_ram_goes_to_the_logger_as_one_debug_record() {
        diag::testing::capture();
        print_free_ram();
        let records = diag::testing::take_records();

        if !diag::DIAGNOSTICS_ENABLED {
            assert!(records.is_empty());
            return;
        }
        assert_eq!(records.len(), 1);
        let (level, line) = &records[0];
        assert_eq!(*level, log::Level::Debug);
        let value = line
            .strip_prefix(diag::FREE_RAM_LABEL)
            .expect("record starts with the free RAM label");
        let value: i32 = value.parse().expect("record ends with the byte count");
        if PLATFORM == hal::Platform::Linux {
            assert!(value >= 0);
        }
    }

    #[test]
    fn run_announces_the_platform() {
        diag::testing::capture();
        assert_eq!(run(), 0);
        let records = diag::testing::take_records();

        let (level, line) = &records[0];
        assert_eq!(*level, log::Level::Info);
        assert!(line.starts_with(&format!("parrot diagnostics on {}", PLATFORM)));
        let reports = records
            .iter()
            .filter(|(_, line)| line.starts_with(diag::FREE_RAM_LABEL))
            .count();
        assert_eq!(reports, usize::from(diag::DIAGNOSTICS_ENABLED));
    }
}
