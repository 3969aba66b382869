//! Fence driver.
//!
//! Checks every reference of a bound [`Program`](fence_ir::Program)
//! against the scope attributes of the declaration it names, one file per
//! work item, and returns the sorted diagnostics together with
//! per-declaration tallies.
//!
//! ```text
//! let program = builder.finish();
//! let output = fencec::check_program(&program, &CheckConfig::default());
//! for diag in &output.diagnostics {
//!     println!("{diag}");
//! }
//! ```

mod check;
mod config;
mod tracing_setup;
pub mod verify;

pub use check::{check_program, file_paths, CheckOutput};
pub use config::CheckConfig;
pub use tracing_setup::init_tracing;
