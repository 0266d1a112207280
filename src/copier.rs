//! Copying build artifacts into the versioned output directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::DEFAULT_DESCRIPTOR_PATH;
use crate::error::{AppVersionerError, Result};
use crate::session::{BuildPathOptions, BuildSession};

/// Options for [`copy_to_build_path`]
#[derive(Debug, Clone, PartialEq)]
pub struct CopyOptions {
    /// For directory sources, copy into `<build path>/<dir name>/` rather
    /// than directly into the build path. Ignored for files.
    pub include_src_dir: bool,
    pub include_versioning: bool,
    /// Prefix prepended verbatim to the build path
    pub output_root: String,
    pub descriptor_path: PathBuf,
}

impl Default for CopyOptions {
    fn default() -> Self {
        CopyOptions {
            include_src_dir: false,
            include_versioning: true,
            output_root: String::new(),
            descriptor_path: PathBuf::from(DEFAULT_DESCRIPTOR_PATH),
        }
    }
}

/// Strips a single trailing `/`.
pub fn remove_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

fn leaf_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Absolute form of a path that may not exist yet: the nearest existing
/// ancestor is canonicalized and the missing components re-appended.
fn resolve_pending(path: &Path) -> Result<PathBuf> {
    let mut existing = path.to_path_buf();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.file_name(), existing.parent()) {
            (Some(name), Some(parent)) => {
                missing.push(name.to_os_string());
                existing = parent.to_path_buf();
            }
            _ => break,
        }
        if existing.as_os_str().is_empty() {
            existing = PathBuf::from(".");
        }
    }

    let mut resolved = match fs::canonicalize(&existing) {
        Ok(path) => path,
        Err(e) => return Err(AppVersionerError::from_io(&existing, e)),
    };
    for name in missing.iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}

/// Fails when `dst` is `src` or lies somewhere beneath it.
fn ensure_outside_source(src: &Path, dst: &Path) -> Result<()> {
    let src_abs = fs::canonicalize(src).map_err(|e| AppVersionerError::from_io(src, e))?;
    let dst_abs = resolve_pending(dst)?;
    if dst_abs.starts_with(&src_abs) {
        return Err(AppVersionerError::CopyIntoSelf {
            src: src_abs,
            dst: dst_abs,
        });
    }
    Ok(())
}

/// Copies `src` to `dst`. A directory's contents are copied into `dst`;
/// intermediate directories are created and existing files overwritten.
///
/// Refuses, before touching the filesystem, a `dst` equal to or inside `src`.
pub fn copy_recursive(src: &Path, dst: &Path) -> Result<()> {
    ensure_outside_source(src, dst)?;
    copy_tree(src, dst)
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    let metadata = fs::metadata(src).map_err(|e| AppVersionerError::from_io(src, e))?;

    if metadata.is_dir() {
        fs::create_dir_all(dst)?;
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            copy_tree(&entry.path(), &dst.join(entry.file_name()))?;
        }
    } else {
        if let Some(parent) = dst.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::copy(src, dst)?;
    }
    Ok(())
}

/// Resolves where `src` lands under the build path, without copying.
pub fn resolve_destination(
    session: &BuildSession,
    src: &str,
    options: &CopyOptions,
) -> Result<String> {
    let src = src.replace('\\', "/");
    let metadata = fs::metadata(&src).map_err(|e| AppVersionerError::from_io(&src, e))?;

    let trailing = if metadata.is_file() {
        leaf_name(&src)
    } else if metadata.is_dir() {
        if options.include_src_dir {
            leaf_name(remove_trailing_slash(&src))
        } else {
            ""
        }
    } else {
        return Err(AppVersionerError::not_found(&src));
    };

    let build_path = session.build_path(&BuildPathOptions {
        include_versioning: options.include_versioning,
        use_original: false,
        descriptor_path: options.descriptor_path.clone(),
    })?;

    Ok(format!("{}{}{}", options.output_root, build_path, trailing))
}

/// Copies a file or directory into the session's build path.
///
/// # Returns
/// The destination path that was written.
pub fn copy_to_build_path(
    session: &BuildSession,
    src: &str,
    options: &CopyOptions,
) -> Result<PathBuf> {
    let destination = PathBuf::from(resolve_destination(session, src, options)?);
    let normalized = src.replace('\\', "/");
    copy_recursive(Path::new(remove_trailing_slash(&normalized)), &destination)?;
    Ok(destination)
}
