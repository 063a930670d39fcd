//! Logging setup for the driver.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical `tracing` subscriber on stderr.
///
/// Does nothing unless `RUST_LOG` is set; the filter comes from it
/// (e.g. `RUST_LOG=pl0_lexer=trace`). Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        }
    });
}
