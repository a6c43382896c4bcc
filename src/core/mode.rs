//! Unix-like permission strings such as `drwxr-xr-x`.

use crate::core::entry::{EntryKind, S_ISGID, S_ISUID, S_ISVTX};

/// Renders the 10 character type and permission string for `mode`.
///
/// The execute slot of each class is overlaid by its special bit: `s`/`S` for
/// setuid and setgid, `t`/`T` for sticky. Lowercase means the execute bit is
/// also set.
pub fn mode_string(mode: u32) -> String {
    let first = match EntryKind::from_mode(mode) {
        EntryKind::Directory => 'd',
        EntryKind::Symlink => 'l',
        EntryKind::Pipe => 'p',
        EntryKind::Socket => 's',
        EntryKind::CharDevice => 'c',
        EntryKind::BlockDevice | EntryKind::Regular => '-',
    };

    let mut chars = [first, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
    let classes = [(6, S_ISUID, 's'), (3, S_ISGID, 's'), (0, S_ISVTX, 't')];
    for (i, &(shift, special, mark)) in classes.iter().enumerate() {
        let base = 1 + i * 3;
        if (mode >> (shift + 2)) & 1 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1 != 0 {
            chars[base + 1] = 'w';
        }
        let exec = (mode >> shift) & 1 != 0;
        chars[base + 2] = match (mode & special != 0, exec) {
            (true, true) => mark,
            (true, false) => mark.to_ascii_uppercase(),
            (false, true) => 'x',
            (false, false) => '-',
        };
    }
    chars.iter().collect()
}
