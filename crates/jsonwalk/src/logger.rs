//! Structured walk tracing.
//!
//! Behind the `logging` feature every grammar boundary emits one
//! `{sign, type, detail}` line through the `log` facade: sign `+` opens a
//! scope, `-` closes one, and blank marks an atom. With the feature off the
//! macro expands to nothing, so disabled tracing costs zero.

#[cfg(feature = "logging")]
macro_rules! walk_log {
    ($sign:expr, $kind:expr, $detail:expr) => {
        log::trace!(target: "jsonwalk", "{:1}{:<10} {}", $sign, $kind, $detail)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! walk_log {
    ($($args:tt)*) => {};
}

pub(crate) use walk_log;
