//! Shared test utilities for the Mohtion demo
//!
//! - TUI terminal testing helpers
