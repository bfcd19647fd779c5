use std::path::{Path, PathBuf};

use anyhow::Context;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// Resolves include/exclude glob patterns against the files under `base`.
/// Returns paths relative to `base`, sorted and deduplicated.
pub fn resolve(
    base: &Path,
    patterns: &[String],
    excludes: &[String],
    ignore_case: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    let include = build_set(patterns, ignore_case)?;
    let exclude = if excludes.is_empty() {
        None
    } else {
        Some(build_set(excludes, ignore_case)?)
    };

    let mut files = Vec::new();
    walk(base, base, &mut files)?;

    let mut matched: Vec<PathBuf> = files
        .into_iter()
        .filter(|rel| include.is_match(rel) && exclude.as_ref().is_none_or(|x| !x.is_match(rel)))
        .collect();
    matched.sort();
    matched.dedup();
    Ok(matched)
}

fn build_set(patterns: &[String], ignore_case: bool) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .literal_separator(true)
            .build()
            .with_context(|| format!("bad glob pattern: {pattern}"))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

fn walk(base: &Path, dir: &Path, out: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    let entries = std::fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();
        if file_type.is_dir() {
            walk(base, &path, out)?;
        } else if file_type.is_file() {
            if let Ok(rel) = path.strip_prefix(base) {
                out.push(rel.to_path_buf());
            }
        }
    }
    Ok(())
}
