//! # ctutil-core
//!
//! Parsing and decision primitives for a container runtime.
//!
//! This crate provides:
//! - **Strings**: literal substring replacement and exact set membership
//!   for configuration tokens and option lists.
//! - **Path**: slash-run normalization of configured filesystem paths.
//! - **Numeric**: strict, whitespace-tolerant integer parsing for values
//!   read from configuration or kernel interfaces.
//! - **Mountinfo**: detection of the kernel's placeholder root filesystem
//!   from the calling process's own mount table.
//!
//! Every function is synchronous and keeps no state between calls.

pub mod mountinfo;
pub mod numeric;
pub mod path;
pub mod strings;

pub use mountinfo::{
    MountEntry, is_placeholder_rootfs, is_placeholder_rootfs_in, placeholder_root_entry,
    placeholder_root_entry_in,
};
pub use numeric::{parse_i32, parse_long, parse_long_long, parse_u32, parse_u64};
pub use path::normalize_path;
pub use strings::{contains_exact, contains_in_list, replace_all};
