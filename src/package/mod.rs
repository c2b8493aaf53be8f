//! Installed-package enumeration and version probing.

mod listing;
mod probe;

pub use listing::{list_packages, parse_package_list};
pub use probe::{find_package_with_version, matches_version};
