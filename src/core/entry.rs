//! The entry model used by every rendering stage of runa-ls.
//!
//! An [Entry] is an immutable snapshot of the display-relevant metadata of one
//! filesystem object. Entries are built once (usually by [crate::core::fm]) and
//! are only ever read by the render core. Sorting works on index permutations,
//! so the same slice of entries can be viewed in several orders at once.

use std::time::SystemTime;

// POSIX st_mode layout. The type field occupies the top bits, followed by the
// setuid/setgid/sticky flags and the nine permission bits.
pub const S_IFMT: u32 = 0o170000;
pub const S_IFSOCK: u32 = 0o140000;
pub const S_IFLNK: u32 = 0o120000;
pub const S_IFREG: u32 = 0o100000;
pub const S_IFBLK: u32 = 0o060000;
pub const S_IFDIR: u32 = 0o040000;
pub const S_IFCHR: u32 = 0o020000;
pub const S_IFIFO: u32 = 0o010000;

pub const S_ISUID: u32 = 0o4000;
pub const S_ISGID: u32 = 0o2000;
pub const S_ISVTX: u32 = 0o1000;

/// Owner, group and other execute bits.
pub const EXEC_BITS: u32 = 0o111;
/// The "other writable" permission bit.
pub const OTHER_WRITE: u32 = 0o002;

/// Entry kind decoded from the type field of the mode bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Symlink,
    Pipe,
    Socket,
    CharDevice,
    BlockDevice,
    Regular,
}

impl EntryKind {
    /// Decodes the type field of `mode`. Unknown type values count as regular files.
    pub fn from_mode(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFDIR => EntryKind::Directory,
            S_IFLNK => EntryKind::Symlink,
            S_IFIFO => EntryKind::Pipe,
            S_IFSOCK => EntryKind::Socket,
            S_IFCHR => EntryKind::CharDevice,
            S_IFBLK => EntryKind::BlockDevice,
            _ => EntryKind::Regular,
        }
    }
}

/// One listed filesystem object.
///
/// `display_name` may differ from the on-disk name, e.g. a relative path when
/// listing recursively. It is never empty and never contains a newline.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    display_name: String,
    size: u64,
    mod_time: SystemTime,
    mode_bits: u32,
    link_count: u64,
    owner: String,
    group: String,
    inode: u64,
    symlink_target: String,
    link_broken: bool,
    target_mode_bits: Option<u32>,
}

impl Entry {
    /// Creates a regular file entry with empty metadata.
    ///
    /// Control characters are replaced with `?` so a name never breaks a line.
    pub fn new(display_name: impl Into<String>) -> Self {
        let mut display_name: String = display_name.into();
        if display_name.chars().any(char::is_control) {
            display_name = display_name
                .chars()
                .map(|c| if c.is_control() { '?' } else { c })
                .collect();
        }
        if display_name.is_empty() {
            display_name.push('?');
        }
        Entry {
            display_name,
            size: 0,
            mod_time: SystemTime::UNIX_EPOCH,
            mode_bits: S_IFREG | 0o644,
            link_count: 1,
            owner: String::new(),
            group: String::new(),
            inode: 0,
            symlink_target: String::new(),
            link_broken: false,
            target_mode_bits: None,
        }
    }

    // Builders

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub fn with_mod_time(mut self, mod_time: SystemTime) -> Self {
        self.mod_time = mod_time;
        self
    }

    pub fn with_mode(mut self, mode_bits: u32) -> Self {
        self.mode_bits = mode_bits;
        self
    }

    pub fn with_link_count(mut self, link_count: u64) -> Self {
        self.link_count = link_count.max(1);
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>, group: impl Into<String>) -> Self {
        self.owner = owner.into();
        self.group = group.into();
        self
    }

    pub fn with_inode(mut self, inode: u64) -> Self {
        self.inode = inode;
        self
    }

    /// Marks the entry as a symlink pointing at `target`.
    ///
    /// `target_mode` is the mode of the resolved target, `None` when the link is broken.
    pub fn with_symlink(mut self, target: impl Into<String>, target_mode: Option<u32>) -> Self {
        self.mode_bits = S_IFLNK | (self.mode_bits & !S_IFMT);
        self.symlink_target = target.into();
        self.link_broken = target_mode.is_none();
        self.target_mode_bits = target_mode;
        self
    }

    // Accessors

    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Last path component of the display name, used for extension matching.
    pub fn base_name(&self) -> &str {
        let trimmed = self.display_name.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx + 1 < trimmed.len() => &trimmed[idx + 1..],
            _ => &self.display_name,
        }
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn mod_time(&self) -> SystemTime {
        self.mod_time
    }

    #[inline]
    pub fn mode_bits(&self) -> u32 {
        self.mode_bits
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        EntryKind::from_mode(self.mode_bits)
    }

    #[inline]
    pub fn link_count(&self) -> u64 {
        self.link_count
    }

    #[inline]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[inline]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[inline]
    pub fn inode(&self) -> u64 {
        self.inode
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind() == EntryKind::Directory
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.kind() == EntryKind::Symlink
    }

    #[inline]
    pub fn symlink_target(&self) -> &str {
        &self.symlink_target
    }

    #[inline]
    pub fn link_broken(&self) -> bool {
        self.link_broken
    }

    #[inline]
    pub fn target_mode_bits(&self) -> Option<u32> {
        self.target_mode_bits
    }
}
