use std::io;

use nix::unistd::{Group, User};

/// Resolves an owner token to a uid. Numeric tokens pass through without a
/// passwd lookup.
pub fn resolve_user(name: &str) -> io::Result<u32> {
    if let Ok(uid) = name.parse::<u32>() {
        return Ok(uid);
    }
    match User::from_name(name) {
        Ok(Some(user)) => Ok(user.uid.as_raw()),
        Ok(None) => Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("unknown user `{name}`"),
        )),
        Err(errno) => Err(io::Error::from_raw_os_error(errno as i32)),
    }
}

/// Resolves a group token to a gid; same rules as [`resolve_user`].
pub fn resolve_group(name: &str) -> io::Result<u32> {
    if let Ok(gid) = name.parse::<u32>() {
        return Ok(gid);
    }
    match Group::from_name(name) {
        Ok(Some(group)) => Ok(group.gid.as_raw()),
        Ok(None) => Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("unknown group `{name}`"),
        )),
        Err(errno) => Err(io::Error::from_raw_os_error(errno as i32)),
    }
}

#[cfg(test)]
#[path = "owner_tests.rs"]
mod tests;
