//! Library identity metadata.

pub const MAJOR_VERSION: u32 = 1;
pub const MINOR_VERSION: u32 = 0;
pub const PATCH_VERSION: u32 = 0;
pub const BUILD_VERSION: u32 = 0;

/// `MAJOR.MINOR.PATCH.BUILD`
pub const VERSION: &str = "1.0.0.0";

/// Shared library file stem; debug builds carry a `d` suffix.
#[cfg(debug_assertions)]
pub const LIB_FILENAME: &str = "libfunclogd";
#[cfg(not(debug_assertions))]
pub const LIB_FILENAME: &str = "libfunclog";
