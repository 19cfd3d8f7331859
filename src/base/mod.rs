//! Foundation types for the explorer.
//!
//! This module provides small building blocks used throughout the crate:
//! - [`IStr`] - Shared name storage
//! - Qualified-name helpers ([`simple_name`], [`package_of`], [`is_in_package`])
//! - Domain constants (package-info file name, display labels)
//!
//! This module has NO dependencies on other explorer modules.

use std::sync::Arc;

pub mod constants;
mod qualified;

/// A shared name: cheap to clone, safe to hand to a published tree.
pub type IStr = Arc<str>;

pub use qualified::{is_in_package, package_of, simple_name};
