//! Helpers for dotted, fully-qualified Java names.

use super::constants::PACKAGE_SEPARATOR;

/// The last segment of a qualified name (`org.example.Order` -> `Order`).
///
/// Unqualified names are returned unchanged.
pub fn simple_name(qualified: &str) -> &str {
    match qualified.rfind(PACKAGE_SEPARATOR) {
        Some(idx) => &qualified[idx + 1..],
        None => qualified,
    }
}

/// Everything before the last segment (`org.example.Order` -> `org.example`).
///
/// Returns an empty string for unqualified names.
pub fn package_of(qualified: &str) -> &str {
    match qualified.rfind(PACKAGE_SEPARATOR) {
        Some(idx) => &qualified[..idx],
        None => "",
    }
}

/// Whether `name` lives somewhere below `package`.
///
/// Segment-aware: `org.jmolecules.ddd.annotation.Entity` is in `org.jmolecules.ddd`,
/// but `org.jmoleculesx.Foo` is not in `org.jmolecules`.
pub fn is_in_package(name: &str, package: &str) -> bool {
    if package.is_empty() {
        return false;
    }
    name.len() > package.len()
        && name.starts_with(package)
        && name[package.len()..].starts_with(PACKAGE_SEPARATOR)
}
