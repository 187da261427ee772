//! Command handlers for the `wff` CLI.
//!
//! Each handler prints its own output and exits with status 1 on a fatal
//! error, so `main` only has to dispatch.

mod check;
mod debug;

pub use check::check_file;
pub use debug::{lex_expression, parse_expression};
