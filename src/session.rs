//! Build session state and path derivation.

use std::path::{Path, PathBuf};

use crate::descriptor::{get_version, DEFAULT_DESCRIPTOR_PATH};
use crate::error::Result;

/// Replaces every `.` in a version with `-`, e.g. `1.2.3` -> `1-2-3`.
pub fn to_hyphen_token(version: &str) -> String {
    version.replace('.', "-")
}

/// Options for [`BuildSession::build_path`]
#[derive(Debug, Clone, PartialEq)]
pub struct BuildPathOptions {
    /// Append the hyphenated version directory (eg "/dist/0-6-25/")
    pub include_versioning: bool,
    /// Use the version captured when the session was created
    pub use_original: bool,
    pub descriptor_path: PathBuf,
}

impl Default for BuildPathOptions {
    fn default() -> Self {
        BuildPathOptions {
            include_versioning: true,
            use_original: false,
            descriptor_path: PathBuf::from(DEFAULT_DESCRIPTOR_PATH),
        }
    }
}

impl BuildPathOptions {
    pub fn with_descriptor(descriptor_path: impl Into<PathBuf>) -> Self {
        BuildPathOptions {
            descriptor_path: descriptor_path.into(),
            ..Default::default()
        }
    }
}

/// State for one build invocation.
///
/// `original_version` is read from the descriptor once, at construction, and
/// does not follow later bumps of the descriptor file. `is_production` can be
/// flipped with [`BuildSession::set_environment`] to retarget later paths.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSession {
    dev_base_path: String,
    prod_base_path: String,
    is_production: bool,
    original_version: String,
}

impl BuildSession {
    /// Creates a session, capturing the descriptor's current version.
    ///
    /// # Arguments
    /// * `dev_base_path` - base path for development output
    /// * `prod_base_path` - base path for production output
    /// * `is_production` - initial environment
    /// * `descriptor_path` - descriptor to snapshot the version from
    pub fn new(
        dev_base_path: impl Into<String>,
        prod_base_path: impl Into<String>,
        is_production: bool,
        descriptor_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let original_version = get_version(descriptor_path)?;
        Ok(BuildSession {
            dev_base_path: dev_base_path.into(),
            prod_base_path: prod_base_path.into(),
            is_production,
            original_version,
        })
    }

    pub fn is_production(&self) -> bool {
        self.is_production
    }

    /// Switches the environment used by subsequent path computations.
    pub fn set_environment(&mut self, is_production: bool) {
        self.is_production = is_production;
    }

    pub fn original_version(&self) -> &str {
        &self.original_version
    }

    /// `"prod"` or `"dev"` depending on the current environment.
    pub fn environment_name(&self) -> &'static str {
        if self.is_production {
            "prod"
        } else {
            "dev"
        }
    }

    pub fn base_path(&self) -> &str {
        if self.is_production {
            &self.prod_base_path
        } else {
            &self.dev_base_path
        }
    }

    /// Hyphenated version from either the snapshot or the descriptor on disk.
    pub fn hyphened_version(
        &self,
        use_original: bool,
        descriptor_path: impl AsRef<Path>,
    ) -> Result<String> {
        if use_original {
            Ok(to_hyphen_token(&self.original_version))
        } else {
            Ok(to_hyphen_token(&get_version(descriptor_path)?))
        }
    }

    /// Base path for the current environment, plus `<hyphenated-version>/`
    /// when versioning is requested. Separators are not normalized.
    pub fn build_path(&self, options: &BuildPathOptions) -> Result<String> {
        let mut path = self.base_path().to_string();
        if options.include_versioning {
            let token = self.hyphened_version(options.use_original, &options.descriptor_path)?;
            path.push_str(&token);
            path.push('/');
        }
        Ok(path)
    }

    /// Default build path with `suffix` appended.
    pub fn append_to_build_path(&self, suffix: Option<&str>) -> Result<String> {
        let mut path = self.build_path(&BuildPathOptions::default())?;
        path.push_str(suffix.unwrap_or(""));
        Ok(path)
    }
}
