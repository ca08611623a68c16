//! Observability infrastructure for the Duka storefront.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one storefront session
//! - `StructuredLogger` - Structured logging with session context

mod logging;
mod session;

pub use logging::*;
pub use session::*;
