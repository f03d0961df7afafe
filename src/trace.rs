//! Diagnostic events, compiled away unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        ::tracing::trace!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)*) => {};
}

#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! debug_event {
    ($($argument:tt)*) => {
        ::tracing::debug!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! debug_event {
    ($($argument:tt)*) => {};
}

#[allow(unused_imports)]
pub(crate) use debug_event;
#[allow(unused_imports)]
pub(crate) use trace_event;
