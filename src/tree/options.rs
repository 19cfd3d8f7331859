//! Build options

use std::sync::Arc;

use crate::base::constants::PACKAGE_INFO_FILE;

/// What to do when the oracle fails while building a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Drop the subtree as if it had no concepts and no children, and record
    /// the failure in the build outcome.
    #[default]
    Prune,
    /// Abort the build with the first failure.
    Propagate,
}

/// Options for [`TreeBuilder`](super::TreeBuilder).
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub failure_policy: FailurePolicy,
    /// Compilation units with this name contribute package-level concepts
    /// and are not shown as children of their package.
    pub package_info_file: Arc<str>,
    /// Also walk jars and class folders on the build path.
    pub include_binary_roots: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Prune,
            package_info_file: Arc::from(PACKAGE_INFO_FILE),
            include_binary_roots: false,
        }
    }
}

impl BuildOptions {
    /// Options that abort on the first oracle failure.
    pub fn strict() -> Self {
        Self {
            failure_policy: FailurePolicy::Propagate,
            ..Self::default()
        }
    }

    pub fn is_package_info(&self, unit_name: &str) -> bool {
        unit_name == self.package_info_file.as_ref()
    }
}
