//! Filesystem reading for runa-ls.
//!
//! Builds [Entry] snapshots from `lstat` results and enumerates directories.
//! Everything here is read-only; failures on individual children are logged
//! and counted instead of aborting the whole listing.

use crate::core::Entry;
use crate::error::{self, LsError};

use users::{Groups, Users, UsersCache};

use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Resolves user and group ids to names through a shared memoising cache.
///
/// The resolver is owned by the caller and lent to every [read_entry] call,
/// so lookups are only paid once per id for the whole run.
pub struct IdResolver {
    cache: UsersCache,
}

impl Default for IdResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IdResolver {
    pub fn new() -> Self {
        IdResolver {
            cache: UsersCache::new(),
        }
    }

    /// User name for `uid`, or the id itself when it is unknown.
    pub fn user_name(&self, uid: u32) -> String {
        self.cache
            .get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| uid.to_string())
    }

    /// Group name for `gid`, or the id itself when it is unknown.
    pub fn group_name(&self, gid: u32) -> String {
        self.cache
            .get_group_by_gid(gid)
            .map(|g| g.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| gid.to_string())
    }
}

/// Which directory children are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Skip names starting with a dot.
    #[default]
    Default,
    /// Everything, plus `.` and `..` in non-recursive listings.
    All,
    /// Everything except `.` and `..`.
    AlmostAll,
    /// Only names starting with a dot.
    OnlyHidden,
}

impl Visibility {
    pub fn shows(self, name: &str) -> bool {
        let hidden = name.starts_with('.');
        match self {
            Visibility::Default => !hidden,
            Visibility::All | Visibility::AlmostAll => true,
            Visibility::OnlyHidden => hidden,
        }
    }
}

/// The children of one directory.
#[derive(Debug, Default)]
pub struct DirListing {
    pub entries: Vec<Entry>,
    /// Child directories, for recursive listings.
    pub subdirs: Vec<PathBuf>,
    /// Number of children that could not be read.
    pub failures: usize,
    /// Summed size of the listed children, not counting `.` and `..`.
    pub total_size: u64,
}

/// Reads the metadata of `path` without following a final symlink.
///
/// For symlinks the target is read as well; a target that does not resolve
/// marks the entry as a broken link.
pub fn read_entry(path: &Path, display_name: impl Into<String>, ids: &IdResolver) -> error::Result<Entry> {
    let meta = fs::symlink_metadata(path).map_err(|source| LsError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    let entry = Entry::new(display_name)
        .with_size(meta.size())
        .with_mod_time(meta.modified().unwrap_or(SystemTime::UNIX_EPOCH))
        .with_mode(meta.mode())
        .with_link_count(meta.nlink())
        .with_owner(ids.user_name(meta.uid()), ids.group_name(meta.gid()))
        .with_inode(meta.ino());

    if !meta.file_type().is_symlink() {
        return Ok(entry);
    }

    let target = match fs::read_link(path) {
        Ok(target) => target.to_string_lossy().into_owned(),
        Err(e) => {
            tracing::warn!("cannot read symbolic link '{}': {}", path.display(), e);
            String::new()
        }
    };
    let target_mode = fs::metadata(path).ok().map(|m| m.mode());
    Ok(entry.with_symlink(target, target_mode))
}

/// Joins a directory's display name and a child name the way paths are
/// shown in recursive listings (`./x` is shown as `x`).
pub fn join_display(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() && !name.is_empty() {
        return format!("/{}", name);
    }
    if dir == "." || dir.is_empty() {
        return name.to_string();
    }
    format!("{}/{}", dir, name)
}

/// Reads the children of `dir` that `visibility` admits.
///
/// With `recursive` the display names are paths relative to the operand
/// (`dir_display`) and child directories are collected in
/// [DirListing::subdirs]. Otherwise names are plain file names, and
/// [Visibility::All] adds `.` and `..`.
pub fn read_dir_entries(
    dir: &Path,
    dir_display: &str,
    visibility: Visibility,
    recursive: bool,
    ids: &IdResolver,
) -> error::Result<DirListing> {
    let read = fs::read_dir(dir).map_err(|source| LsError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut listing = DirListing::default();

    if visibility == Visibility::All && !recursive {
        for special in [".", ".."] {
            match read_entry(&dir.join(special), special, ids) {
                Ok(entry) => listing.entries.push(entry),
                Err(e) => tracing::warn!("{}", e),
            }
        }
    }

    for child in read {
        let child = match child {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("error reading '{}': {}", dir.display(), e);
                listing.failures += 1;
                continue;
            }
        };
        let name = child.file_name().to_string_lossy().into_owned();
        if !visibility.shows(&name) {
            continue;
        }

        let path = child.path();
        let display = if recursive {
            join_display(dir_display, &name)
        } else {
            name
        };
        match read_entry(&path, display, ids) {
            Ok(entry) => {
                listing.total_size += entry.size();
                if recursive && entry.is_dir() {
                    listing.subdirs.push(path);
                }
                listing.entries.push(entry);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                listing.failures += 1;
            }
        }
    }

    tracing::debug!(
        "read {} entries from '{}'",
        listing.entries.len(),
        dir.display()
    );
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn visibility_rules() {
        assert!(Visibility::Default.shows("a"));
        assert!(!Visibility::Default.shows(".a"));
        assert!(Visibility::All.shows(".a"));
        assert!(Visibility::AlmostAll.shows("a"));
        assert!(Visibility::OnlyHidden.shows(".a"));
        assert!(!Visibility::OnlyHidden.shows("a"));
    }

    #[test]
    fn display_joins() {
        assert_eq!(join_display(".", "x"), "x");
        assert_eq!(join_display("src", "x"), "src/x");
        assert_eq!(join_display("src/", "x"), "src/x");
        assert_eq!(join_display("/", "etc"), "/etc");
    }

    #[test]
    fn reads_file_metadata() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("hello.txt");
        let mut file = File::create(&path)?;
        write!(file, "abc123")?;

        let ids = IdResolver::new();
        let entry = read_entry(&path, "hello.txt", &ids)?;
        assert_eq!(entry.display_name(), "hello.txt");
        assert_eq!(entry.size(), 6);
        assert!(!entry.is_dir());
        assert!(!entry.owner().is_empty());
        assert!(entry.link_count() >= 1);
        Ok(())
    }

    #[test]
    fn reads_symlinks() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("real"))?;
        std::os::unix::fs::symlink("real", tmp.path().join("good"))?;
        std::os::unix::fs::symlink("missing", tmp.path().join("bad"))?;

        let ids = IdResolver::new();
        let good = read_entry(&tmp.path().join("good"), "good", &ids)?;
        assert!(good.is_symlink());
        assert!(!good.link_broken());
        assert_eq!(good.symlink_target(), "real");
        assert!(good.target_mode_bits().is_some());

        let bad = read_entry(&tmp.path().join("bad"), "bad", &ids)?;
        assert!(bad.is_symlink());
        assert!(bad.link_broken());
        Ok(())
    }

    #[test]
    fn missing_path_is_an_error() {
        let ids = IdResolver::new();
        let result = read_entry(Path::new("/path/does/not/exist"), "x", &ids);
        assert!(matches!(result, Err(LsError::Access { .. })));
    }

    #[test]
    fn directory_children() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("visible"))?;
        File::create(tmp.path().join(".hidden"))?;
        fs::create_dir(tmp.path().join("sub"))?;

        let ids = IdResolver::new();
        let names = |vis, recursive| -> Result<Vec<String>, LsError> {
            let listing = read_dir_entries(tmp.path(), "top", vis, recursive, &ids)?;
            let mut names: Vec<String> = listing
                .entries
                .iter()
                .map(|e| e.display_name().to_string())
                .collect();
            names.sort();
            Ok(names)
        };

        assert_eq!(names(Visibility::Default, false)?, ["sub", "visible"]);
        assert_eq!(
            names(Visibility::All, false)?,
            [".", "..", ".hidden", "sub", "visible"]
        );
        assert_eq!(
            names(Visibility::AlmostAll, false)?,
            [".hidden", "sub", "visible"]
        );
        assert_eq!(names(Visibility::OnlyHidden, false)?, [".hidden"]);
        assert_eq!(
            names(Visibility::All, true)?,
            ["top/.hidden", "top/sub", "top/visible"]
        );

        let listing = read_dir_entries(tmp.path(), "top", Visibility::Default, true, &ids)?;
        assert_eq!(listing.subdirs, vec![tmp.path().join("sub")]);
        assert_eq!(listing.failures, 0);

        fs::write(tmp.path().join("visible"), "12345")?;
        let with_dots = read_dir_entries(tmp.path(), "top", Visibility::All, false, &ids)?;
        let sub_size = fs::symlink_metadata(tmp.path().join("sub"))?.len();
        assert_eq!(with_dots.total_size, 5 + sub_size);
        Ok(())
    }
}
