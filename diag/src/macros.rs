//! Debug-build logging macros
//!
//! Each macro takes a sink (`&mut impl LogSink`) and a value. Without the
//! `diagnostics` feature the branch is constant-false: arguments are not
//! evaluated and the call compiles away.

/// Write a text fragment.
#[macro_export]
macro_rules! debug_log {
    ($sink:expr, $msg:expr) => {
        if $crate::config::DIAGNOSTICS_ENABLED {
            $crate::sink::LogSink::print(&mut *$sink, $msg);
        }
    };
}

/// Write a text fragment and end the line.
#[macro_export]
macro_rules! debug_log_ln {
    ($sink:expr, $msg:expr) => {
        if $crate::config::DIAGNOSTICS_ENABLED {
            $crate::sink::LogSink::print_ln(&mut *$sink, $msg);
        }
    };
}

/// End the current line.
#[macro_export]
macro_rules! debug_log_newline {
    ($sink:expr) => {
        if $crate::config::DIAGNOSTICS_ENABLED {
            $crate::sink::LogSink::newline(&mut *$sink);
        }
    };
}

#[macro_export]
macro_rules! debug_log_int {
    ($sink:expr, $value:expr) => {
        if $crate::config::DIAGNOSTICS_ENABLED {
            $crate::sink::LogSink::print_int(&mut *$sink, $value);
        }
    };
}

#[macro_export]
macro_rules! debug_log_ulong {
    ($sink:expr, $value:expr) => {
        if $crate::config::DIAGNOSTICS_ENABLED {
            $crate::sink::LogSink::print_ulong(&mut *$sink, $value);
        }
    };
}

#[macro_export]
macro_rules! debug_log_long {
    ($sink:expr, $value:expr) => {
        if $crate::config::DIAGNOSTICS_ENABLED {
            $crate::sink::LogSink::print_long(&mut *$sink, $value);
        }
    };
}

#[macro_export]
macro_rules! debug_log_float {
    ($sink:expr, $value:expr) => {
        if $crate::config::DIAGNOSTICS_ENABLED {
            $crate::sink::LogSink::print_float(&mut *$sink, $value);
        }
    };
}
