//! Service layer owning the in-memory restaurant directory.
//! - Holds the shared collection behind a single lock so every operation
//!   appears atomic to callers.
//! - Provides clear error types and documented interfaces.

pub mod directory;
pub mod errors;
