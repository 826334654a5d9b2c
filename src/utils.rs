//! Common utility functions shared across the codebase.

use std::path::{Component, Path, PathBuf};

/// Computes the relative path that leads from `from` to `to`.
///
/// Both paths are expected to be absolute (or both relative to the same base).
/// Returns an empty path when they are equal.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use loclint::utils::relative_path;
///
/// assert_eq!(relative_path(Path::new("/a/b/c"), Path::new("/a/d")), PathBuf::from("../../d"));
/// assert_eq!(relative_path(Path::new("/a/b"), Path::new("/a/b/c")), PathBuf::from("c"));
/// assert_eq!(relative_path(Path::new("/a/b"), Path::new("/a/b")), PathBuf::new());
/// ```
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from.components().filter(is_significant).collect();
    let to: Vec<Component> = to.components().filter(is_significant).collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &to[common..] {
        relative.push(component.as_os_str());
    }
    relative
}

fn is_significant(component: &Component) -> bool {
    !matches!(component, Component::CurDir)
}

/// Renders a path with `/` separators regardless of platform.
///
/// ```
/// use std::path::Path;
/// use loclint::utils::to_posix_string;
///
/// assert_eq!(to_posix_string(Path::new("../utils")), "../utils");
/// ```
pub fn to_posix_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
