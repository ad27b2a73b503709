//! Root filesystem kind detection from the process's own mount table.
//!
//! Before the real root is mounted, the kernel runs on a synthetic
//! in-memory filesystem whose type and source are both `rootfs`. On some
//! boot configurations that placeholder stays visible at `/`, and a
//! runtime must then not assume ordinary persistent-storage semantics for
//! `/` (`pivot_root(2)` in particular does not work on it).
//!
//! Each line of `/proc/self/mountinfo` has the form
//!
//! ```text
//! 36 35 98:0 /mnt1 /mnt2 rw,noatime master:1 - ext3 /dev/root rw,errors=continue
//! (1)(2) (3)   (4)   (5)      (6)      (7)   (8) (9)   (10)         (11)
//! ```
//!
//! with zero or more optional fields (7) terminated by a lone `-` (8).
//! Lines that do not follow this shape are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use ctutil_common::constants::{
    MOUNTINFO_FIXED_FIELDS, MOUNTINFO_PATH, MOUNTINFO_SEPARATOR, MOUNTINFO_TRAILING_FIELDS,
    PLACEHOLDER_ROOTFS, ROOT_MOUNT_POINT,
};
use ctutil_common::error::CtutilError;
use serde::{Deserialize, Serialize};

use crate::numeric::parse_u32;

/// One parsed line of a `mountinfo` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountEntry {
    /// Unique id of the mount.
    pub mount_id: u32,
    /// Id of the parent mount, or of itself for the top of the tree.
    pub parent_id: u32,
    /// `major:minor` of the backing device, kept opaque.
    pub device: String,
    /// Directory of the filesystem that forms the root of this mount.
    pub root: String,
    /// Mount point relative to the process's root.
    pub mount_point: String,
    /// Per-mount options.
    pub mount_options: String,
    /// Optional `tag[:value]` fields such as `shared:7`.
    pub optional_fields: Vec<String>,
    /// Filesystem type.
    pub fs_type: String,
    /// Filesystem-specific source, usually a device path.
    pub source: String,
    /// Per-superblock options.
    pub super_options: String,
}

impl MountEntry {
    /// Returns `true` if this is the kernel's placeholder filesystem
    /// mounted at `/`.
    pub fn is_placeholder_root(&self) -> bool {
        self.mount_point == ROOT_MOUNT_POINT
            && self.fs_type == PLACEHOLDER_ROOTFS
            && self.source == PLACEHOLDER_ROOTFS
    }
}

/// Decodes the `\ooo` octal escapes the kernel uses for space, tab,
/// newline and backslash in path-like fields.
fn unescape(field: &str) -> String {
    if !field.contains('\\') {
        return field.to_owned();
    }

    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut at = 0;
    while at < bytes.len() {
        if bytes[at] == b'\\' {
            if let Some(byte) = bytes.get(at + 1..at + 4).and_then(octal_byte) {
                out.push(byte);
                at += 4;
                continue;
            }
        }
        out.push(bytes[at]);
        at += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn octal_byte(digits: &[u8]) -> Option<u8> {
    digits.iter().try_fold(0u8, |acc, &d| match d {
        b'0'..=b'7' => acc.checked_mul(8)?.checked_add(d - b'0'),
        _ => None,
    })
}

/// Splits one `mountinfo` line into its fields.
///
/// Returns `None` if the line has too few fixed fields, no separator, a
/// trailing field count other than three, or non-numeric mount ids.
pub(crate) fn parse_line(line: &str) -> Option<MountEntry> {
    let fields: Vec<&str> = line.split_ascii_whitespace().collect();
    if fields.len() < MOUNTINFO_FIXED_FIELDS + 1 + MOUNTINFO_TRAILING_FIELDS {
        return None;
    }

    let (fixed, rest) = fields.split_at(MOUNTINFO_FIXED_FIELDS);
    let separator = rest.iter().position(|f| *f == MOUNTINFO_SEPARATOR)?;
    let (optional, trailing) = (&rest[..separator], &rest[separator + 1..]);

    let [mount_id, parent_id, device, root, mount_point, mount_options] = fixed else {
        return None;
    };
    let [fs_type, source, super_options] = trailing else {
        return None;
    };

    Some(MountEntry {
        mount_id: parse_u32(mount_id).ok()?,
        parent_id: parse_u32(parent_id).ok()?,
        device: (*device).to_owned(),
        root: unescape(root),
        mount_point: unescape(mount_point),
        mount_options: (*mount_options).to_owned(),
        optional_fields: optional.iter().map(|f| (*f).to_owned()).collect(),
        fs_type: (*fs_type).to_owned(),
        source: unescape(source),
        super_options: (*super_options).to_owned(),
    })
}

/// Lazy sequence of well-formed entries read line by line.
///
/// Malformed lines are skipped. A read failure is yielded once and ends
/// the sequence.
pub(crate) struct MountEntries<R> {
    lines: io::Split<R>,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> MountEntries<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            lines: reader.split(b'\n'),
            line_no: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for MountEntries<R> {
    type Item = io::Result<MountEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            self.line_no += 1;

            let line = String::from_utf8_lossy(&raw);
            if let Some(entry) = parse_line(&line) {
                return Some(Ok(entry));
            }
            tracing::trace!(line = self.line_no, "skipping malformed mountinfo line");
        }
        None
    }
}

/// Scans a `mountinfo` table and returns the first placeholder root entry.
///
/// Returns `None` if there is no such entry or if reading fails before one
/// is found.
pub fn placeholder_root_entry_in<R: BufRead>(reader: R) -> Option<MountEntry> {
    MountEntries::new(reader)
        .map_while(|entry| {
            entry
                .map_err(|e| tracing::debug!(error = %e, "failed to read mount table"))
                .ok()
        })
        .find(MountEntry::is_placeholder_root)
}

/// Returns `true` if `reader` holds a `mountinfo` table whose `/` entry is
/// the kernel's placeholder filesystem.
pub fn is_placeholder_rootfs_in<R: BufRead>(reader: R) -> bool {
    placeholder_root_entry_in(reader).is_some()
}

pub(crate) fn placeholder_root_entry_at(path: &Path) -> Option<MountEntry> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            let err = CtutilError::Io {
                path: path.to_path_buf(),
                source,
            };
            tracing::debug!(error = %err, "mount table unavailable");
            return None;
        }
    };

    let found = placeholder_root_entry_in(BufReader::new(file));
    tracing::debug!(
        path = %path.display(),
        placeholder = found.is_some(),
        "probed root filesystem kind"
    );
    found
}

/// Returns the calling process's placeholder root entry, if `/` is still
/// the kernel's initial `rootfs`.
///
/// Any failure to open or read the mount table yields `None`.
pub fn placeholder_root_entry() -> Option<MountEntry> {
    placeholder_root_entry_at(Path::new(MOUNTINFO_PATH))
}

/// Returns `true` if the calling process's root filesystem is the kernel's
/// placeholder `rootfs` rather than a real mounted filesystem.
///
/// This probe is advisory: a missing or unreadable mount table gives
/// `false`.
pub fn is_placeholder_rootfs() -> bool {
    placeholder_root_entry().is_some()
}
