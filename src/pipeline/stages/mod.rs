//! Pure stages of the resilience pipeline.
//!
//! Each stage takes owned input and returns new values:
//! - Deterministic (same input → same output)
//! - No file access, no network calls
//! - Easily testable (no mocking required)

pub mod ranking;
pub mod scoring;
