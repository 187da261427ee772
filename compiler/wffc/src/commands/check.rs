//! The `check` command: validate every expression in a batch file.

use std::io;
use std::path::Path;

use crate::batch::{read_batch_file, run_batch, BatchConfig};

/// Validate a batch file, printing one verdict per expression.
///
/// Rejected expressions never stop the batch; only an unreadable file or
/// a count line that is not an integer exits with status 1.
pub fn check_file(path: &str, config: &BatchConfig) {
    let result = read_batch_file(Path::new(path)).and_then(|text| {
        let stdout = io::stdout();
        let stderr = io::stderr();
        run_batch(&text, config, &mut stdout.lock(), &mut stderr.lock())
    });

    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
