//! Fixed paths and tokens of the kernel interfaces this workspace reads.

/// Mount table of the calling process, in the `mountinfo` format.
pub const MOUNTINFO_PATH: &str = "/proc/self/mountinfo";

/// Filesystem type and mount source the kernel gives its initial root
/// filesystem before the real root is mounted over it.
pub const PLACEHOLDER_ROOTFS: &str = "rootfs";

/// Token terminating the optional fields of a `mountinfo` line.
pub const MOUNTINFO_SEPARATOR: &str = "-";

/// Number of fields preceding the optional fields of a `mountinfo` line.
pub const MOUNTINFO_FIXED_FIELDS: usize = 6;

/// Number of fields following the separator of a `mountinfo` line.
pub const MOUNTINFO_TRAILING_FIELDS: usize = 3;

/// Mount point of the root filesystem.
pub const ROOT_MOUNT_POINT: &str = "/";
