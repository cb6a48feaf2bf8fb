//! Category package tree: accumulation and write planning.
//!
//! Specs accumulate into an explicit tree keyed by their dot-split
//! category paths. Planning is pure: a depth-first walk over the finished
//! tree emits an ordered [`WriteStep`] list for the application layer to
//! execute against a filesystem port.
//!
//! # Layout rules
//!
//! Every category segment becomes a directory. A node's specs merge into
//! one module file named after the directory, lower-cased. The directory's
//! manifest gains one import line per concern, module entries first:
//!
//! ```text
//! Filtering/
//!   __init__.py      from filtering import GradientFilter
//!                    from Denoising import *
//!   filtering.py
//!   setup.py         (only for nodes that own subpackages)
//!   Denoising/
//!     __init__.py    from denoising import Tool1, Tool2
//!     denoising.py
//! ```
//!
//! # Repeated runs
//!
//! Directories owning subpackages are removed and regenerated; leaf
//! directories are not, and manifest lines are appended rather than
//! truncated. Executing the same plan twice against a surviving tree
//! therefore duplicates manifest lines. The driver compensates for the
//! root manifest only, by deleting it before applying a plan.

use std::path::{Path, PathBuf};

use crate::domain::spec::{render_module_file, ToolSpec};

// ── Tree model ──────────────────────────────────────────────────────────────

/// One generated definition owned by a tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleEntry {
    /// Wrapper class name, also the manifest import name.
    pub name: String,
    /// Rendered class definitions.
    pub code: String,
}

/// Interior tree node: module entries plus named subpackages, both in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageNode {
    modules: Vec<ModuleEntry>,
    children: Vec<(String, PackageNode)>,
}

impl PackageNode {
    fn child_mut(&mut self, segment: &str) -> &mut PackageNode {
        let index = match self.children.iter().position(|(name, _)| name == segment) {
            Some(index) => index,
            None => {
                self.children.push((segment.to_string(), PackageNode::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }
}

/// Accumulates synthesised specs, grouped by category path.
#[derive(Debug, Clone, Default)]
pub struct PackageTree {
    root: PackageNode,
}

impl PackageTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a spec at its dot-split category path, preserving the raw
    /// case of every segment.
    pub fn insert(&mut self, spec: &ToolSpec) {
        let mut node = &mut self.root;
        for segment in spec.category_path() {
            node = node.child_mut(segment);
        }
        node.modules.push(ModuleEntry {
            name: spec.name.clone(),
            code: spec.render_definition(),
        });
    }

    /// Plans the full on-disk layout rooted at `root`, depth-first.
    pub fn plan(&self, root: &Path) -> Vec<WriteStep> {
        let mut steps = vec![WriteStep::EnsureDir(root.to_path_buf())];
        plan_node(&self.root, root, true, &mut steps);
        steps
    }
}

// ── Write steps ─────────────────────────────────────────────────────────────

/// One filesystem mutation in a materialisation plan.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteStep {
    /// Remove a directory tree if present; regeneration rebuilds it.
    RemoveDir(PathBuf),
    EnsureDir(PathBuf),
    WriteFile { path: PathBuf, content: String },
    /// Manifest lines accumulate; the file is never truncated here.
    AppendFile { path: PathBuf, content: String },
}

fn plan_node(node: &PackageNode, dir: &Path, is_root: bool, steps: &mut Vec<WriteStep>) {
    // Nodes owning subpackages are rebuilt from scratch. The output root
    // itself is never removed; leaf directories survive across runs.
    if !is_root {
        if !node.children.is_empty() {
            steps.push(WriteStep::RemoveDir(dir.to_path_buf()));
        }
        steps.push(WriteStep::EnsureDir(dir.to_path_buf()));
    }

    if !node.modules.is_empty() {
        let stem = module_stem(dir);
        let codes: Vec<String> = node.modules.iter().map(|entry| entry.code.clone()).collect();
        steps.push(WriteStep::WriteFile {
            path: dir.join(format!("{stem}.py")),
            content: render_module_file(&codes),
        });
        let names: Vec<&str> = node.modules.iter().map(|entry| entry.name.as_str()).collect();
        steps.push(WriteStep::AppendFile {
            path: dir.join("__init__.py"),
            content: format!("from {} import {}\n", stem, names.join(", ")),
        });
    }

    for (name, child) in &node.children {
        steps.push(WriteStep::AppendFile {
            path: dir.join("__init__.py"),
            content: format!("from {name} import *\n"),
        });
        plan_node(child, &dir.join(name), false, steps);
    }

    if !node.children.is_empty() {
        steps.push(WriteStep::WriteFile {
            path: dir.join("setup.py"),
            content: render_setup_stub(dir, &node.children),
        });
    }
}

/// Merged module files take the directory's name, lower-cased.
fn module_stem(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn render_setup_stub(dir: &Path, children: &[(String, PackageNode)]) -> String {
    let package = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let data_dirs = children
        .iter()
        .map(|(name, _)| format!("config.add_data_dir('{name}')"))
        .collect::<Vec<_>>()
        .join("\n    ");
    format!(
        "# emacs: -*- mode: python; py-indent-offset: 4; indent-tabs-mode: nil -*-\n\
         # vi: set ft=python sts=4 ts=4 sw=4 et:\n\
         def configuration(parent_package='',top_path=None):\n    \
         from numpy.distutils.misc_util import Configuration\n\n    \
         config = Configuration('{package}', parent_package, top_path)\n\n    \
         {data_dirs}\n\n    \
         return config\n\n\
         if __name__ == '__main__':\n    \
         from numpy.distutils.core import setup\n    \
         setup(**configuration(top_path='').todict())\n"
    )
}

// ============================================================================
// TESTS
// ============================================================================
