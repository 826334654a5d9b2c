//! Repository layout: root discovery, the locators module location and the
//! import path a consuming file should use for it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::Value;

use crate::utils::{relative_path, to_posix_string};

/// Location of the locators module below the repository root.
pub const LOCATORS_MODULE_PATH: &[&str] = &[
    "packages",
    "playwright-vscode-ext",
    "src",
    "utils",
    "locators.ts",
];

/// Package directory that owns the locators module.
pub const LOCATORS_PACKAGE_DIR: &str = "playwright-vscode-ext";

/// Specifier used by files outside the locators package.
pub const LOCATORS_PACKAGE_SPECIFIER: &str = "@salesforcedx/vscode-playwright/utils/locators";

/// `name` of the repository's root package.json.
pub const ROOT_PACKAGE_NAME: &str = "salesforcedx-vscode";

/// Upper bound on parent directories visited while looking for the root.
pub const MAX_ROOT_SEARCH_DEPTH: usize = 50;

#[derive(Debug, Deserialize)]
struct PackageManifest {
    // not necessarily a string
    name: Option<Value>,
    workspaces: Option<Value>,
}

impl PackageManifest {
    fn is_workspace_root(&self) -> bool {
        self.workspaces.as_ref().is_some_and(is_truthy)
            || self.name.as_ref().and_then(Value::as_str) == Some(ROOT_PACKAGE_NAME)
    }
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn is_root_manifest(path: &Path) -> bool {
    let Ok(content) = fs::read_to_string(path) else {
        return false;
    };
    serde_json::from_str::<PackageManifest>(&content)
        .map(|pkg| pkg.is_workspace_root())
        .unwrap_or(false)
}

/// Find the repository root by walking up from the directory containing `file_path`.
///
/// A directory is the root when its `package.json` declares `workspaces` or is
/// named [`ROOT_PACKAGE_NAME`], or when it contains `.git`. The filesystem
/// root itself is never checked, and at most [`MAX_ROOT_SEARCH_DEPTH`]
/// directories are visited.
pub fn find_repo_root(file_path: &Path) -> Option<PathBuf> {
    let file_path = std::path::absolute(file_path).ok()?;
    let fs_root = file_path.ancestors().last()?.to_path_buf();
    let mut current = file_path.parent()?.to_path_buf();

    for _ in 0..MAX_ROOT_SEARCH_DEPTH {
        if current == fs_root {
            break;
        }

        if is_root_manifest(&current.join("package.json")) {
            return Some(current);
        }
        if current.join(".git").exists() {
            return Some(current);
        }

        match current.parent() {
            Some(next) if next != current => current = next.to_path_buf(),
            _ => break,
        }
    }

    None
}

pub fn locators_module_path(repo_root: &Path) -> PathBuf {
    LOCATORS_MODULE_PATH
        .iter()
        .fold(repo_root.to_path_buf(), |path, segment| path.join(segment))
}

/// Import specifier a file should use to reach the locators module.
///
/// Files inside the locators package get a relative path, everything else the
/// published package specifier.
pub fn import_path_for(file_path: &Path, repo_root: &Path) -> String {
    let Ok(file_path) = std::path::absolute(file_path) else {
        return LOCATORS_PACKAGE_SPECIFIER.to_string();
    };
    if !file_path.to_string_lossy().contains(LOCATORS_PACKAGE_DIR) {
        return LOCATORS_PACKAGE_SPECIFIER.to_string();
    }

    let locators_module = locators_module_path(repo_root);
    let (Some(locators_dir), Some(file_dir)) = (locators_module.parent(), file_path.parent())
    else {
        return LOCATORS_PACKAGE_SPECIFIER.to_string();
    };
    let locators_dir = std::path::absolute(locators_dir).unwrap_or_else(|_| locators_dir.into());

    let relative = to_posix_string(&relative_path(file_dir, &locators_dir));
    if relative.is_empty() || relative == "." {
        "./locators".to_string()
    } else if relative.starts_with('.') {
        format!("{}/locators", relative)
    } else {
        // a bare `pages/locators` would resolve as a package name
        format!("./{}/locators", relative)
    }
}
