pub mod fmt;
pub mod log;
