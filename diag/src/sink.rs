//! Logging sinks
//!
//! The firmware logs a line as a series of discrete writes (a text fragment,
//! a number, another fragment, the terminator). [`LogSink`] is that
//! interface; formatting of the numeric kinds is shared by all sinks.

use core::fmt::{self, Write};

use heapless::String;
use log::Level;

/// Destination for diagnostic text.
///
/// Only [`print`](LogSink::print) is required. A sink never reports failure:
/// like a serial port, a write that cannot complete is dropped.
pub trait LogSink {
    /// Write a text fragment.
    fn print(&mut self, msg: &str);

    /// Write a text fragment followed by the line terminator.
    fn print_ln(&mut self, msg: &str) {
        self.print(msg);
        self.newline();
    }

    /// Terminate the current line.
    fn newline(&mut self) {
        self.print("\n");
    }

    fn print_int(&mut self, value: i32) {
        self.print_fmt(format_args!("{}", value));
    }

    fn print_ulong(&mut self, value: u32) {
        self.print_fmt(format_args!("{}", value));
    }

    fn print_long(&mut self, value: i64) {
        self.print_fmt(format_args!("{}", value));
    }

    /// Write `value` with four truncated decimal places, e.g. `-2.5000`.
    ///
    /// The integer part saturates at `i64::MAX`; NaN prints as `0.0000`.
    fn print_float(&mut self, value: f32) {
        let magnitude = if value < 0.0 { -value } else { value };
        let whole = magnitude as i64;
        // Every f32 from 2^23 up is a whole number.
        let fraction = if magnitude < F32_WHOLE_FROM {
            ((magnitude - whole as f32) * 10_000.0) as i32
        } else {
            0
        };
        if value < 0.0 {
            self.print("-");
        }
        self.print_long(whole);
        self.print(".");
        self.print_fmt(format_args!("{:04}", fraction));
    }

    /// Write preformatted arguments.
    fn print_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = Adapter(self).write_fmt(args);
    }
}

const F32_WHOLE_FROM: f32 = 8_388_608.0;

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn print(&mut self, msg: &str) {
        (**self).print(msg);
    }

    fn print_ln(&mut self, msg: &str) {
        (**self).print_ln(msg);
    }

    fn newline(&mut self) {
        (**self).newline();
    }

    fn print_int(&mut self, value: i32) {
        (**self).print_int(value);
    }

    fn print_ulong(&mut self, value: u32) {
        (**self).print_ulong(value);
    }

    fn print_long(&mut self, value: i64) {
        (**self).print_long(value);
    }

    fn print_float(&mut self, value: f32) {
        (**self).print_float(value);
    }

    fn print_fmt(&mut self, args: fmt::Arguments<'_>) {
        (**self).print_fmt(args);
    }
}

struct Adapter<'a, S: ?Sized>(&'a mut S);

impl<S: LogSink + ?Sized> Write for Adapter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.print(s);
        Ok(())
    }
}

/// Sink over any text writer, e.g. a UART.
#[derive(Debug, Default)]
pub struct WriteSink<W> {
    inner: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> LogSink for WriteSink<W> {
    fn print(&mut self, msg: &str) {
        let _ = self.inner.write_str(msg);
    }

    fn print_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.inner.write_fmt(args);
    }
}

/// Sink that assembles one line and hands it to the `log` facade on
/// [`newline`](LogSink::newline).
///
/// The line lives in a fixed `N`-byte buffer. Once a write does not fit, the
/// rest of the line is dropped and the record ends in `...`.
#[derive(Debug)]
pub struct LogLineSink<const N: usize> {
    line: String<N>,
    level: Level,
    truncated: bool,
}

impl<const N: usize> LogLineSink<N> {
    pub const fn new() -> Self {
        Self::with_level(Level::Debug)
    }

    pub const fn with_level(level: Level) -> Self {
        Self {
            line: String::new(),
            level,
            truncated: false,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Text written since the last line was emitted.
    pub fn pending(&self) -> &str {
        &self.line
    }

    /// Whether the pending line lost text to the buffer limit.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Emit the pending text, if any, without waiting for a terminator.
    pub fn flush(&mut self) {
        if !self.line.is_empty() {
            self.emit();
        }
    }

    fn emit(&mut self) {
        if self.truncated {
            log::log!(self.level, "{}...", self.line);
        } else {
            log::log!(self.level, "{}", self.line);
        }
        self.line.clear();
        self.truncated = false;
    }
}

impl<const N: usize> Default for LogLineSink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LogSink for LogLineSink<N> {
    fn print(&mut self, msg: &str) {
        if self.truncated || self.line.push_str(msg).is_ok() {
            return;
        }
        for c in msg.chars() {
            if self.line.push(c).is_err() {
                self.truncated = true;
                break;
            }
        }
    }

    fn newline(&mut self) {
        self.emit();
    }
}
