use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use mktree_layout::{Entry, parse};

use crate::error::{MaterializeError, TreeError};
use crate::primitives;

/// Parses a layout and creates the tree it describes under `prefix`
/// (the current directory when unset).
///
/// Creation is eager and in document order; the first failure aborts and
/// whatever was created up to that point stays on disk.
pub fn create_tree(layout: &str, prefix: Option<&Path>) -> Result<(), TreeError> {
    let entries = parse(layout)?;
    materialize(&entries, prefix)?;
    Ok(())
}

/// Creates the filesystem objects for already-parsed entries.
///
/// Keeps a directory-name stack indexed by level and composes full paths
/// against `prefix`; the process working directory is never touched.
pub fn materialize(entries: &[Entry], prefix: Option<&Path>) -> Result<(), MaterializeError> {
    let mut cwd = prefix.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    let mut dirs: Vec<String> = Vec::new();
    let mut prev_level = 0;

    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            navigate(&mut cwd, &dirs, prev_level, entry)?;
        }
        create_entry(&cwd, &mut dirs, entry)?;
        prev_level = entry.level;
    }

    debug!("[materialize] {} entries created", entries.len());
    Ok(())
}

/// Repositions `cwd` from the previous entry's level to this entry's level.
fn navigate(
    cwd: &mut PathBuf,
    dirs: &[String],
    from: usize,
    entry: &Entry,
) -> Result<(), MaterializeError> {
    let to = entry.level;

    if to > from {
        // The parser only ever goes one level deeper, into the directory
        // created by the previous line.
        let Some(name) = dirs.get(to - 1) else {
            return Err(MaterializeError::Navigation {
                path: cwd.clone(),
                line: entry.line,
                source: io::Error::new(io::ErrorKind::NotFound, "no directory to descend into"),
            });
        };
        let next = cwd.join(name);
        if !next.is_dir() {
            return Err(MaterializeError::Navigation {
                path: next,
                line: entry.line,
                source: io::Error::new(io::ErrorKind::NotFound, "not a directory"),
            });
        }
        debug!("[materialize] descend into {}", next.display());
        *cwd = next;
        return Ok(());
    }

    for _ in to..from {
        if !cwd.pop() {
            return Err(MaterializeError::Navigation {
                path: cwd.clone(),
                line: entry.line,
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    "cannot ascend past the tree root",
                ),
            });
        }
    }
    Ok(())
}

fn create_entry(
    cwd: &Path,
    dirs: &mut Vec<String>,
    entry: &Entry,
) -> Result<(), MaterializeError> {
    let path = cwd.join(&entry.name);
    let mode = entry.mode.as_ref().map(|m| m.bits);
    let creation = |op: &'static str, source: io::Error| MaterializeError::Creation {
        op,
        path: path.clone(),
        line: entry.line,
        source,
    };

    if entry.is_dir {
        primitives::create_dir(&path, mode).map_err(|e| creation("create directory", e))?;
        // Stale names from a sibling subtree end here.
        dirs.truncate(entry.level);
        dirs.push(entry.name.clone());
    } else if let Some(target) = &entry.symlink_target {
        primitives::create_symlink(&path, target).map_err(|e| creation("create symlink", e))?;
    } else {
        primitives::create_file(&path, entry.content.as_deref(), mode)
            .map_err(|e| creation("create file", e))?;
    }

    if entry.owner.is_some() || entry.group.is_some() {
        primitives::change_owner(
            &path,
            entry.owner.as_deref(),
            entry.group.as_deref(),
            !entry.is_symlink(),
        )
        .map_err(|e| creation("change owner of", e))?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "materialize_tests.rs"]
mod tests;
