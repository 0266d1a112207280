//! Stylesheet variable injection for the build path and environment.

use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::{write_file, DEFAULT_DESCRIPTOR_PATH};
use crate::error::{AppVersionerError, Result};
use crate::region::splice_variable;
use crate::session::{BuildPathOptions, BuildSession};

pub const BUILD_PATH_VARIABLE: &str = "$build-path";
pub const BUILD_PATH_START_MARKER: &str = "//APP_VERSIONER_BUILD_PATH_START";
pub const BUILD_PATH_END_MARKER: &str = "//APP_VERSIONER_BUILD_PATH_END";

pub const ENVIRONMENT_VARIABLE: &str = "$environment";
pub const ENVIRONMENT_START_MARKER: &str = "//APP_VERSIONER_ENVIRONMENT_START";
pub const ENVIRONMENT_END_MARKER: &str = "//APP_VERSIONER_ENVIRONMENT_END";

/// Options for [`set_build_path_variable`]
#[derive(Debug, Clone, PartialEq)]
pub struct BuildPathVariableOptions {
    pub include_versioning: bool,
    /// Write here instead of overwriting the source stylesheet
    pub output_path: Option<PathBuf>,
    pub descriptor_path: PathBuf,
    pub variable_name: String,
    pub start_marker: String,
    pub end_marker: String,
}

impl Default for BuildPathVariableOptions {
    fn default() -> Self {
        BuildPathVariableOptions {
            include_versioning: true,
            output_path: None,
            descriptor_path: PathBuf::from(DEFAULT_DESCRIPTOR_PATH),
            variable_name: BUILD_PATH_VARIABLE.to_string(),
            start_marker: BUILD_PATH_START_MARKER.to_string(),
            end_marker: BUILD_PATH_END_MARKER.to_string(),
        }
    }
}

/// Options for [`set_environment_variable`]
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentVariableOptions {
    pub output_path: Option<PathBuf>,
    pub descriptor_path: PathBuf,
    pub variable_name: String,
    pub start_marker: String,
    pub end_marker: String,
}

impl Default for EnvironmentVariableOptions {
    fn default() -> Self {
        EnvironmentVariableOptions {
            output_path: None,
            descriptor_path: PathBuf::from(DEFAULT_DESCRIPTOR_PATH),
            variable_name: ENVIRONMENT_VARIABLE.to_string(),
            start_marker: ENVIRONMENT_START_MARKER.to_string(),
            end_marker: ENVIRONMENT_END_MARKER.to_string(),
        }
    }
}

fn rewrite_variable(
    scss_path: &Path,
    output_path: Option<&Path>,
    variable_name: &str,
    value: &str,
    start_marker: &str,
    end_marker: &str,
) -> Result<()> {
    let contents =
        fs::read_to_string(scss_path).map_err(|e| AppVersionerError::from_io(scss_path, e))?;
    let updated = splice_variable(&contents, variable_name, value, start_marker, end_marker)?;
    write_file(output_path.unwrap_or(scss_path), &updated)
}

/// Writes the session's build path into the stylesheet's build-path region.
///
/// # Returns
/// The value that was written.
pub fn set_build_path_variable(
    session: &BuildSession,
    scss_path: impl AsRef<Path>,
    options: &BuildPathVariableOptions,
) -> Result<String> {
    let value = session.build_path(&BuildPathOptions {
        include_versioning: options.include_versioning,
        use_original: false,
        descriptor_path: options.descriptor_path.clone(),
    })?;
    rewrite_variable(
        scss_path.as_ref(),
        options.output_path.as_deref(),
        &options.variable_name,
        &value,
        &options.start_marker,
        &options.end_marker,
    )?;
    Ok(value)
}

/// Writes `"prod"` or `"dev"` into the stylesheet's environment region.
///
/// `descriptor_path` is accepted for symmetry with the build path variant and
/// is not read.
pub fn set_environment_variable(
    session: &BuildSession,
    scss_path: impl AsRef<Path>,
    options: &EnvironmentVariableOptions,
) -> Result<String> {
    let value = session.environment_name();
    rewrite_variable(
        scss_path.as_ref(),
        options.output_path.as_deref(),
        &options.variable_name,
        value,
        &options.start_marker,
        &options.end_marker,
    )?;
    Ok(value.to_string())
}
