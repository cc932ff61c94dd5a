use std::fs;
use std::io;
use std::path::Path;

use crate::report::Reporter;

/// Names of the regular, non-hidden files directly inside `dir`, sorted.
pub fn read_non_hidden_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        // follows symlinks; dangling ones are skipped
        if fs::metadata(entry.path()).map(|m| m.is_file()).unwrap_or(false) {
            names.push(name);
        }
    }
    names.sort_by_key(|n| n.to_lowercase());
    Ok(names)
}

/// Files for `--all`. Scan errors are reported and yield an empty list.
pub fn collect_non_hidden_files(dir: &Path, reporter: &dyn Reporter) -> Vec<String> {
    match read_non_hidden_files(dir) {
        Ok(files) if files.is_empty() => {
            reporter.warn("No non-hidden files found in current directory.");
            files
        }
        Ok(files) => {
            reporter.info(&format!("Found {} non-hidden files to push.", files.len()));
            files
        }
        Err(e) => {
            reporter.error(&format!("Error scanning directory: {e}"));
            Vec::new()
        }
    }
}
