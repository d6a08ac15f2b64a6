//! Thin wrappers over `tracing`'s event macros. With the `tracing` feature disabled, they expand to
//! nothing and their arguments are never evaluated.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    }};
}

pub(crate) use debug;
pub(crate) use trace;
