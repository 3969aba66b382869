//! Diagnostic system for scope-attribute checking.
//!
//! The checker decides *whether* a reference is diagnosed and at what
//! severity. This crate owns everything after that decision:
//! - Error codes for searchability
//! - Message templates (`'%s' is deprecated`, `'%s' is unavailable`,
//!   `marked unavailable here`)
//! - Primary and secondary locations
//! - Collection into an append-only, mergeable queue
//! - Terminal rendering

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::{
    deprecated_use, marked_unavailable_here, unavailable_use, Applicability, Diagnostic, Label,
    Severity, Suggestion,
};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
