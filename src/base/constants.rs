//! Domain constants shared by the model, the tree builder and the labels.

/// File name of the compilation unit that carries package-level annotations.
pub const PACKAGE_INFO_FILE: &str = "package-info.java";

/// Label for a source root that is the project directory itself.
pub const PROJECT_ROOT_LABEL: &str = "<project root>";

/// Label for the unnamed package.
pub const DEFAULT_PACKAGE_LABEL: &str = "(default package)";

/// Separator between package segments in a fully-qualified name.
pub const PACKAGE_SEPARATOR: char = '.';
