use std::fs::{self, DirBuilder, OpenOptions, Permissions};
use std::io::{self, Write};
use std::os::unix::fs::{DirBuilderExt, PermissionsExt, chown, lchown, symlink};
use std::path::Path;

use crate::owner::{resolve_group, resolve_user};

/// Creates a directory, with its initial mode when one is given.
pub fn create_dir(path: &Path, mode: Option<u32>) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    if let Some(bits) = mode {
        builder.mode(bits);
    }
    builder.create(path)
}

/// Creates a regular file; fails if the path already exists. Content is
/// written in full before the mode is applied.
pub fn create_file(path: &Path, content: Option<&str>, mode: Option<u32>) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    if let Some(text) = content {
        file.write_all(text.as_bytes())?;
    }
    drop(file);

    if let Some(bits) = mode {
        fs::set_permissions(path, Permissions::from_mode(bits))?;
    }
    Ok(())
}

pub fn create_symlink(path: &Path, target: &str) -> io::Result<()> {
    symlink(target, path)
}

/// Changes owner and/or group. With `dereference` false the link itself is
/// changed, not its target.
pub fn change_owner(
    path: &Path,
    owner: Option<&str>,
    group: Option<&str>,
    dereference: bool,
) -> io::Result<()> {
    let uid = owner.map(resolve_user).transpose()?;
    let gid = group.map(resolve_group).transpose()?;
    if dereference {
        chown(path, uid, gid)
    } else {
        lchown(path, uid, gid)
    }
}
