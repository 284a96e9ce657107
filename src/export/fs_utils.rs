// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - file does NOT exist → Ok
/// - file exists and `force` → Ok
/// - file exists and `force == false` → ask the user.
///
/// In `quiet` mode the question goes to stderr so stdout stays parseable.
pub(crate) fn ensure_writable(path: &Path, force: bool, quiet: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if quiet {
        eprint!("File '{}' already exists. Overwrite? [y/N]: ", path.display());
        io::stderr().flush().ok();
    } else {
        warning(format!("The file '{}' already exists.", path.display()));
        print!("Overwrite? [y/N]: ");
        io::stdout().flush().ok();
    }

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        if !quiet {
            info("Existing file will be overwritten.");
        }
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
