//! Interactive file picker.
//!
//! Used when a command needs an input file and none was given on the command
//! line: `gw fit` without `-f`/`--point` asks for a CSV, `gw query` and
//! `gw report` without a project path ask for a `.gblproj`.
//!
//! Files are searched for under the current working directory.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::io::PROJECT_EXTENSION;

/// Default directory recursion depth for finding input files.
const DEFAULT_SEARCH_DEPTH: usize = 4;

/// Which kind of file the picker looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `(T, V)` calibration CSV.
    Csv,
    /// Saved project snapshot.
    Project,
}

impl FileKind {
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Csv => "csv",
            FileKind::Project => PROJECT_EXTENSION,
        }
    }

    fn hint(self) -> &'static str {
        match self {
            FileKind::Csv => "Provide one with `gw fit -f <points.csv>` or `--point T:V`.",
            FileKind::Project => "Create one with `gw fit ... --save <name>.gblproj`.",
        }
    }
}

/// Prompt the user to select a file of `kind` from the current directory tree.
///
/// Accepts a number from the list or an explicit path; `q` cancels.
pub fn prompt_for_path(kind: FileKind) -> Result<PathBuf, AppError> {
    let files = discover_files(kind);
    if files.is_empty() {
        return Err(AppError::new(
            2,
            format!("No .{} files found. {}", kind.extension(), kind.hint()),
        ));
    }

    println!("Found {} .{} file(s):", files.len(), kind.extension());
    for (idx, path) in files.iter().enumerate() {
        println!("{:>3}) {}", idx + 1, pretty_path(path));
    }

    loop {
        print!("Select a file by number (1-{}) or type a path (q to quit): ", files.len());
        io::stdout()
            .flush()
            .map_err(|e| AppError::new(2, format!("Failed to write prompt: {e}")))?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .map_err(|e| AppError::new(2, format!("Failed to read input: {e}")))?;

        if bytes == 0 {
            return Err(AppError::new(2, format!("No input received. {}", kind.hint())));
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return Err(AppError::new(2, "Canceled."));
        }

        if let Ok(choice) = input.parse::<usize>() {
            if (1..=files.len()).contains(&choice) {
                return validate_path(&files[choice - 1], kind);
            }
            println!("Invalid choice: {choice}. Enter a number between 1 and {}.", files.len());
            continue;
        }

        match validate_path(&PathBuf::from(input), kind) {
            Ok(path) => return Ok(path),
            Err(err) => println!("{err}"),
        }
    }
}

/// Validate that `path` is an existing file with the extension for `kind`.
pub fn validate_path(path: &Path, kind: FileKind) -> Result<PathBuf, AppError> {
    if !path.exists() {
        return Err(AppError::new(2, format!("File not found: {}", path.display())));
    }
    if path.is_dir() {
        return Err(AppError::new(
            2,
            format!("Expected a file, got a directory: {}", path.display()),
        ));
    }
    if !has_extension(path, kind.extension()) {
        return Err(AppError::new(
            2,
            format!("Expected a .{} file (got: {}).", kind.extension(), path.display()),
        ));
    }

    Ok(path.to_path_buf())
}

/// Discover files of `kind` under the current directory, in a stable order.
pub fn discover_files(kind: FileKind) -> Vec<PathBuf> {
    find_files(Path::new("."), kind.extension(), DEFAULT_SEARCH_DEPTH)
}

fn find_files(root: &Path, ext: &str, max_depth: usize) -> Vec<PathBuf> {
    let mut out = Vec::new();
    find_files_inner(root, ext, 0, max_depth, &mut out);
    out.sort_by_key(|p| pretty_path(p));
    out
}

fn find_files_inner(root: &Path, ext: &str, depth: usize, max_depth: usize, out: &mut Vec<PathBuf>) {
    if depth > max_depth {
        return;
    }

    let Ok(entries) = fs::read_dir(root) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            if !should_skip_dir(&path) {
                find_files_inner(&path, ext, depth + 1, max_depth, out);
            }
        } else if file_type.is_file() && has_extension(&path, ext) {
            out.push(path);
        }
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn should_skip_dir(path: &Path) -> bool {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    matches!(name, ".git" | "target" | "node_modules")
}

fn pretty_path(path: &Path) -> String {
    let stripped = path.strip_prefix("./").unwrap_or(path);
    stripped.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_files_by_extension_and_skips_target() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("a.csv"), "T,V\n").unwrap();
        fs::write(root.join("b.gblproj"), "{}").unwrap();
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("nested").join("c.CSV"), "T,V\n").unwrap();
        fs::create_dir_all(root.join("target")).unwrap();
        fs::write(root.join("target").join("d.csv"), "T,V\n").unwrap();

        let csvs = find_files(root, "csv", DEFAULT_SEARCH_DEPTH);
        assert_eq!(csvs.len(), 2);
        let projects = find_files(root, PROJECT_EXTENSION, DEFAULT_SEARCH_DEPTH);
        assert_eq!(projects.len(), 1);
    }

    #[test]
    fn validate_path_checks_extension() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("points.csv");
        fs::write(&csv, "T,V\n").unwrap();

        assert!(validate_path(&csv, FileKind::Csv).is_ok());
        assert!(validate_path(&csv, FileKind::Project).is_err());
        assert!(validate_path(dir.path(), FileKind::Csv).is_err());
        assert!(validate_path(&dir.path().join("missing.csv"), FileKind::Csv).is_err());
    }
}
