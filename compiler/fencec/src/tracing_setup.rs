//! Tracing initialization.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the checker.
///
/// Only installs a subscriber if `RUST_LOG` is set, e.g.
/// `RUST_LOG=fence_access=trace`. With `FENCE_LOG_TREE=1` spans are
/// rendered as an indented tree instead of flat lines.
///
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let tree = std::env::var("FENCE_LOG_TREE").is_ok_and(|v| v == "1");

        let flat_layer = (!tree).then(|| fmt::layer().with_target(true).with_level(true));
        let tree_layer = tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true)
        });

        tracing_subscriber::registry()
            .with(flat_layer)
            .with(tree_layer)
            .with(filter)
            .init();
    });
}
