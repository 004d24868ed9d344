use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

/// File selection filter for directory walks: extensions and directory
/// names to skip, plus glob patterns matched against the path relative
/// to the walk root.
#[derive(Clone, Default)]
pub struct ExcludeFilter {
    extensions: Vec<String>,
    dirs: Vec<String>,
    globs: Option<GlobSet>,
}

impl ExcludeFilter {
    pub fn new(extensions: &[String], dirs: &[String], patterns: &[String]) -> Self {
        // Extensions are matched case-insensitively, with or without a
        // leading dot; empty entries are ignored rather than match-all.
        let extensions = extensions
            .iter()
            .filter_map(|ext| {
                let ext = ext.trim_start_matches('.').to_ascii_lowercase();
                (!ext.is_empty()).then_some(ext)
            })
            .collect();

        let mut builder = GlobSetBuilder::new();
        let mut any = false;
        for pattern in patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                    any = true;
                }
                Err(err) => eprintln!("warning: ignoring glob pattern {pattern:?}: {err}"),
            }
        }
        let globs = if any { builder.build().ok() } else { None };

        Self {
            extensions,
            dirs: dirs.to_vec(),
            globs,
        }
    }

    pub fn excludes_dir(&self, name: &str) -> bool {
        self.dirs.iter().any(|dir| dir == name)
    }

    pub fn excludes_file(&self, path: &Path, root: &Path) -> bool {
        if !self.extensions.is_empty()
            && let Some(ext) = path.extension().and_then(|e| e.to_str())
            && self.extensions.contains(&ext.to_ascii_lowercase())
        {
            return true;
        }
        if let Some(globs) = &self.globs {
            let relative = path.strip_prefix(root).unwrap_or(path);
            if globs.is_match(relative) {
                return true;
            }
        }
        false
    }
}

/// Collect candidate files under `root`, honoring `.gitignore`, skipping
/// `.git` and filtered directories. Walk errors are reported as warnings
/// and the walk continues. Results are sorted for stable output.
pub fn source_files(root: &Path, filter: &ExcludeFilter) -> Vec<PathBuf> {
    // The walker predicate must own its state, so it gets a clone.
    let dir_filter = filter.clone();
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                if entry.file_name() == ".git" {
                    return false;
                }
                if let Some(name) = entry.file_name().to_str()
                    && dir_filter.excludes_dir(name)
                {
                    return false;
                }
            }
            true
        })
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                eprintln!("warning: {err}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if filter.excludes_file(&path, root) {
            continue;
        }
        files.push(path);
    }
    files.sort();
    files
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
