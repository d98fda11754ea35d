// Wed Jan 21 2026 - Alex

pub mod json;

pub use json::{JsonSerializer, OutputError};
