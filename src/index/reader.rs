use crate::index::build::SearchIndexTable;
use crate::index::searchdata::{parse_json, parse_search_data};
use crate::index::types::RawEntry;
use anyhow::{bail, Context, Result};
use globset::Glob;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Load search data from a file or directory and build a table.
///
/// Directories are read with [`load_dir`]; anything else with [`load_file`].
pub fn open_table(path: &Path, pattern: &str) -> Result<SearchIndexTable> {
    let raw = load_path(path, pattern)?;
    let table = SearchIndexTable::build(raw)
        .with_context(|| format!("Malformed search index at {}", path.display()))?;
    Ok(table)
}

/// Load raw entries from a file or directory
pub fn load_path(path: &Path, pattern: &str) -> Result<Vec<RawEntry>> {
    if path.is_dir() {
        load_dir(&locate_search_dir(path), pattern)
    } else {
        load_file(path)
    }
}

/// Load one search data file. `.json` files use the JSON form.
pub fn load_file(path: &Path) -> Result<Vec<RawEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let entries = if is_json(path) {
        parse_json(&content)
    } else {
        parse_search_data(&content)
    }
    .with_context(|| format!("Failed to parse {}", path.display()))?;

    debug!(path = %path.display(), entries = entries.len(), "loaded search data");
    Ok(entries)
}

/// Load every file in `dir` whose name matches `pattern`.
///
/// Files are parsed in parallel and concatenated in file-name order.
pub fn load_dir(dir: &Path, pattern: &str) -> Result<Vec<RawEntry>> {
    let matcher = Glob::new(pattern)
        .with_context(|| format!("Invalid file pattern '{}'", pattern))?
        .compile_matcher();

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        let matches = path
            .file_name()
            .map(|name| matcher.is_match(name))
            .unwrap_or(false);

        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        warn!(dir = %dir.display(), pattern, "no search data files found");
        bail!("No files matching '{}' in {}", pattern, dir.display());
    }

    let parsed = files
        .par_iter()
        .map(|path| load_file(path))
        .collect::<Result<Vec<_>>>()?;

    let entries: Vec<RawEntry> = parsed.into_iter().flatten().collect();
    debug!(files = files.len(), entries = entries.len(), "loaded search directory");
    Ok(entries)
}

/// Accept a generated HTML root as well as its `search/` directory
fn locate_search_dir(path: &Path) -> PathBuf {
    let nested = path.join("search");
    if nested.is_dir() {
        nested
    } else {
        path.to_path_buf()
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
