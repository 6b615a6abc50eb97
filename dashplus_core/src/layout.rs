// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use std::path::{Path, PathBuf};

/// Location of the dashboard page, relative to the library root.
pub const INPUT_RELATIVE: [&str; 2] = ["extras", "dashboard.html"];
/// Location of the generated header, relative to the library root.
pub const OUTPUT_RELATIVE: [&str; 2] = ["src", "dashboard_html.h"];

/// Returns the library root for a tool living in `tool_dir`.
///
/// The root is the tool directory's parent. A directory without a parent
/// (a filesystem root) is its own library root. A relative `tool_dir` is
/// first made absolute against the current working directory.
pub fn lib_root(tool_dir: &Path) -> PathBuf {
    let tool_dir = std::path::absolute(tool_dir).unwrap_or_else(|_| tool_dir.to_path_buf());
    tool_dir.parent().unwrap_or(&tool_dir).to_path_buf()
}

/// Resolved input and output paths of a header generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibLayout {
    pub root: PathBuf,
    pub input_file: PathBuf,
    pub output_file: PathBuf,
}

impl LibLayout {
    /// Builds the layout for an explicit library root.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let input_file = INPUT_RELATIVE.iter().fold(root.clone(), |p, c| p.join(c));
        let output_file = OUTPUT_RELATIVE.iter().fold(root.clone(), |p, c| p.join(c));
        Self {
            root,
            input_file,
            output_file,
        }
    }

    /// Builds the layout from the directory the tool itself lives in.
    ///
    /// Nothing here consults the current working directory, so the same
    /// `tool_dir` always yields the same paths.
    pub fn from_tool_dir(tool_dir: &Path) -> Self {
        Self::from_root(lib_root(tool_dir))
    }
}
