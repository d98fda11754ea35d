// Mon Jan 19 2026 - Alex

pub mod logging;

pub use logging::{LoggingUtils, ScopedTimer};
