use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: Extracted-package file access

/// File extensions treated as translatable documents
const HTML_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// One HTML document inside an extracted package
#[derive(Debug, Clone)]
pub struct PackageFile {
    /// Base file name, as revision sheets reference it
    pub name: String,

    /// Path relative to the package root
    pub rel_path: PathBuf,

    /// Document text
    pub content: String,
}

/// An extracted SCORM package rooted at a directory.
///
/// The zip blob itself is handled by whatever extracted it; this type only
/// deals with the resulting file tree.
pub struct PackageDir {
    root: PathBuf,
}

impl PackageDir {
    /// Open a package at the given extraction root
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(anyhow!("Package directory does not exist: {:?}", root));
        }
        Ok(PackageDir {
            root: root.to_path_buf(),
        })
    }

    /// Package root on disk
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load every HTML document in the package.
    ///
    /// Files are returned sorted by relative path, so repeated runs over the
    /// same package produce the same processing order and the same audit log
    /// row order.
    pub fn load_html_files(&self) -> Result<Vec<PackageFile>> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() && is_html_file(path) {
                let rel_path = path
                    .strip_prefix(&self.root)
                    .context("File escaped the package root")?
                    .to_path_buf();
                paths.push(rel_path);
            }
        }

        paths.sort();

        let mut files = Vec::with_capacity(paths.len());
        for rel_path in paths {
            let full_path = self.root.join(&rel_path);
            let content = fs::read_to_string(&full_path)
                .with_context(|| format!("Failed to read file: {:?}", full_path))?;
            let name = rel_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            files.push(PackageFile {
                name,
                rel_path,
                content,
            });
        }

        Ok(files)
    }

    /// Write documents back at their relative paths under a destination root
    pub fn write_files<P: AsRef<Path>>(dest: P, files: &[PackageFile]) -> Result<()> {
        let dest = dest.as_ref();
        for file in files {
            let path = dest.join(&file.rel_path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
            fs::write(&path, &file.content)
                .with_context(|| format!("Failed to write to file: {:?}", path))?;
        }
        Ok(())
    }

    /// Copy the whole package tree to a destination directory.
    ///
    /// Non-HTML assets must land in the output package untouched; callers
    /// mirror first, then overwrite the processed documents on top.
    pub fn mirror_to<P: AsRef<Path>>(&self, dest: P) -> Result<()> {
        let dest = dest.as_ref();

        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                let rel_path = path
                    .strip_prefix(&self.root)
                    .context("File escaped the package root")?;
                let target = dest.join(rel_path);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create directory: {:?}", parent))?;
                }
                fs::copy(path, &target)
                    .with_context(|| format!("Failed to copy {:?} to {:?}", path, target))?;
            }
        }

        Ok(())
    }
}

fn is_html_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            HTML_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
