//! Batch driver for the formula validator.
//!
//! ```text
//! input file ──► parse_batch() ──► expressions
//!                                     │
//!                                     ▼
//!                            wff_parse::check() ──► "valida" / "invalida"
//! ```
//!
//! The input format is a count on the first line followed by one
//! expression per line. Everything interesting happens in `wff_lexer` and
//! `wff_parse`; this crate reads, loops and prints.

pub mod batch;
pub mod commands;

pub use batch::{parse_batch, run_batch, BatchConfig, BatchError, BatchSummary};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=wff_parse=debug`
/// for per-expression verdicts or `RUST_LOG=wff_lexer=trace` for every
/// token and lexical mode change. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
