//! Semantic file-type tags used for colouring.
//!
//! The render core never emits colour codes itself. It classifies each entry
//! into a [FileTag] and asks a [Painter] to style the text for that tag's key,
//! using the same two-letter keys as `LS_COLORS`.

use crate::core::Entry;
use crate::core::entry::{EXEC_BITS, EntryKind, OTHER_WRITE, S_ISGID, S_ISUID, S_ISVTX};

/// Capability for styling text by tag key, e.g. `"di"` or `"*.tar"`.
pub trait Painter {
    /// Whether a style is registered under `key`. Used for extension tags.
    fn knows(&self, key: &str) -> bool;

    /// Returns `text` wrapped in the style registered for `key`, or unchanged.
    fn paint(&self, key: &str, text: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTag {
    Directory,
    OtherWritable,
    Sticky,
    StickyOtherWritable,
    Symlink,
    Orphan,
    Pipe,
    Socket,
    BlockDevice,
    CharDevice,
    Setuid,
    Setgid,
    Executable,
    /// `*` followed by the suffix, e.g. `*.tar`.
    Extension(String),
}

impl FileTag {
    /// The `LS_COLORS` key for this tag.
    pub fn key(&self) -> &str {
        match self {
            FileTag::Directory => "di",
            FileTag::OtherWritable => "ow",
            FileTag::Sticky => "st",
            FileTag::StickyOtherWritable => "tw",
            FileTag::Symlink => "ln",
            FileTag::Orphan => "or",
            FileTag::Pipe => "pi",
            FileTag::Socket => "so",
            FileTag::BlockDevice => "bd",
            FileTag::CharDevice => "cd",
            FileTag::Setuid => "su",
            FileTag::Setgid => "sg",
            FileTag::Executable => "ex",
            FileTag::Extension(key) => key,
        }
    }

    /// Classifies an object by its mode bits and name.
    ///
    /// Type bits are checked before extensions. `known_extension` decides
    /// whether an `*.ext` key has a style; without one the entry gets no tag.
    pub fn classify(mode: u32, name: &str, known_extension: impl Fn(&str) -> bool) -> Option<Self> {
        let tag = match EntryKind::from_mode(mode) {
            EntryKind::Directory => match (mode & S_ISVTX != 0, mode & OTHER_WRITE != 0) {
                (true, true) => FileTag::StickyOtherWritable,
                (true, false) => FileTag::Sticky,
                (false, true) => FileTag::OtherWritable,
                (false, false) => FileTag::Directory,
            },
            EntryKind::Symlink => FileTag::Symlink,
            EntryKind::Pipe => FileTag::Pipe,
            EntryKind::Socket => FileTag::Socket,
            EntryKind::BlockDevice => FileTag::BlockDevice,
            EntryKind::CharDevice => FileTag::CharDevice,
            EntryKind::Regular if mode & S_ISUID != 0 => FileTag::Setuid,
            EntryKind::Regular if mode & S_ISGID != 0 => FileTag::Setgid,
            EntryKind::Regular if mode & EXEC_BITS != 0 => FileTag::Executable,
            EntryKind::Regular => {
                let idx = name.rfind('.')?;
                if idx + 1 == name.len() {
                    return None;
                }
                let key = format!("*{}", &name[idx..]);
                if !known_extension(&key) {
                    return None;
                }
                FileTag::Extension(key)
            }
        };
        Some(tag)
    }

    /// Tag for an entry's name. Broken symlinks are always orphans.
    pub fn for_entry(entry: &Entry, painter: Option<&dyn Painter>) -> Option<Self> {
        if entry.is_symlink() && entry.link_broken() {
            return Some(FileTag::Orphan);
        }
        Self::classify(entry.mode_bits(), entry.base_name(), |key| {
            painter.is_some_and(|p| p.knows(key))
        })
    }

    /// Tag for the `-> target` part of a symlink in long format.
    pub fn for_link_target(entry: &Entry, painter: Option<&dyn Painter>) -> Option<Self> {
        match entry.target_mode_bits() {
            Some(mode) if !entry.link_broken() => {
                let target = entry.symlink_target();
                let name = target.rsplit('/').next().unwrap_or(target);
                Self::classify(mode, name, |key| painter.is_some_and(|p| p.knows(key)))
            }
            _ => Some(FileTag::Orphan),
        }
    }
}
