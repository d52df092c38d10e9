//! File attribute reconciliation (owner, group, mode).
//!
//! The stanza edit itself trusts chsec's exit code, but ownership and
//! permission bits are converged here with real change detection:
//! current metadata is read first and only actual differences are
//! applied.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ffi::CString;
use std::fs;
use std::os::unix::fs::{MetadataExt, PermissionsExt};
use std::path::Path;

/// Desired ownership and permissions for a file.
///
/// All fields are optional; unset fields are left untouched. Owner and
/// group accept either a name or a numeric id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttrs {
    /// Owning user, as name or uid
    pub owner: Option<String>,
    /// Owning group, as name or gid
    pub group: Option<String>,
    /// Permission bits (e.g. `0o644`)
    pub mode: Option<u32>,
}

impl FileAttrs {
    /// Whether no attribute is requested at all.
    pub fn is_empty(&self) -> bool {
        self.owner.is_none() && self.group.is_none() && self.mode.is_none()
    }
}

/// Collaborator that converges a file's attributes to a desired set.
pub trait FileAttributeReconciler {
    /// Apply the given attributes, returning whether anything changed.
    fn apply(&self, path: &Path, attrs: &FileAttrs) -> Result<bool>;
}

/// Reconciler operating on the local filesystem.
#[derive(Debug, Default)]
pub struct LocalReconciler;

impl FileAttributeReconciler for LocalReconciler {
    fn apply(&self, path: &Path, attrs: &FileAttrs) -> Result<bool> {
        if attrs.is_empty() {
            return Ok(false);
        }

        let metadata = fs::metadata(path)?;
        let mut changed = false;

        let desired_uid = attrs.owner.as_deref().map(lookup_uid).transpose()?;
        let desired_gid = attrs.group.as_deref().map(lookup_gid).transpose()?;
        let uid = desired_uid.filter(|&uid| uid != metadata.uid());
        let gid = desired_gid.filter(|&gid| gid != metadata.gid());
        if uid.is_some() || gid.is_some() {
            std::os::unix::fs::chown(path, uid, gid)?;
            changed = true;
        }

        if let Some(mode) = attrs.mode {
            let current = metadata.permissions().mode() & 0o7777;
            if current != mode & 0o7777 {
                fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o7777))?;
                changed = true;
            }
        }

        Ok(changed)
    }
}

/// Resolve a user name or numeric id to a uid.
fn lookup_uid(owner: &str) -> Result<u32> {
    if let Ok(uid) = owner.parse::<u32>() {
        return Ok(uid);
    }
    let name = CString::new(owner).map_err(|_| Error::UnknownOwner(owner.to_string()))?;
    // SAFETY: getpwnam returns null or a pointer into static storage;
    // the uid is copied out before any further libc call
    let passwd = unsafe { libc::getpwnam(name.as_ptr()) };
    if passwd.is_null() {
        return Err(Error::UnknownOwner(owner.to_string()));
    }
    Ok(unsafe { (*passwd).pw_uid })
}

/// Resolve a group name or numeric id to a gid.
fn lookup_gid(group: &str) -> Result<u32> {
    if let Ok(gid) = group.parse::<u32>() {
        return Ok(gid);
    }
    let name = CString::new(group).map_err(|_| Error::UnknownGroup(group.to_string()))?;
    // SAFETY: same contract as getpwnam
    let grp = unsafe { libc::getgrnam(name.as_ptr()) };
    if grp.is_null() {
        return Err(Error::UnknownGroup(group.to_string()));
    }
    Ok(unsafe { (*grp).gr_gid })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_attrs(mode: u32) -> FileAttrs {
        FileAttrs {
            mode: Some(mode),
            ..FileAttrs::default()
        }
    }

    #[test]
    fn test_empty_attrs_touch_nothing() {
        // no metadata read either, so a missing path is fine
        let changed = LocalReconciler
            .apply(Path::new("/nonexistent/file"), &FileAttrs::default())
            .unwrap();
        assert!(!changed);
    }

    #[test]
    fn test_mode_change_detection() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::set_permissions(file.path(), fs::Permissions::from_mode(0o644)).unwrap();

        let changed = LocalReconciler
            .apply(file.path(), &mode_attrs(0o600))
            .unwrap();
        assert!(changed);
        let mode = fs::metadata(file.path()).unwrap().permissions().mode() & 0o7777;
        assert_eq!(mode, 0o600);

        // already converged
        let changed = LocalReconciler
            .apply(file.path(), &mode_attrs(0o600))
            .unwrap();
        assert!(!changed);
    }

    #[test]
    fn test_missing_file_surfaces_io_error() {
        let result = LocalReconciler.apply(Path::new("/nonexistent/file"), &mode_attrs(0o644));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_numeric_ids_skip_database_lookup() {
        assert_eq!(lookup_uid("0").unwrap(), 0);
        assert_eq!(lookup_gid("12345").unwrap(), 12345);
    }

    #[test]
    fn test_unknown_owner_is_rejected() {
        let err = lookup_uid("no-such-user-zzz").unwrap_err();
        assert!(matches!(err, Error::UnknownOwner(_)));
        let err = lookup_gid("no-such-group-zzz").unwrap_err();
        assert!(matches!(err, Error::UnknownGroup(_)));
    }
}
