//! Main workflow orchestration logic
//!
//! Maps one requested action onto the library, independent of clap, so the
//! workflow can be called programmatically and tested without a process.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::copier::{copy_to_build_path, CopyOptions};
use crate::descriptor::{bump_version, get_version};
use crate::domain::BumpKind;
use crate::error::Result;
use crate::scss::{
    set_build_path_variable, set_environment_variable, BuildPathVariableOptions,
    EnvironmentVariableOptions,
};
use crate::session::{BuildPathOptions, BuildSession};

/// What the workflow should do
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Print the descriptor's current version
    Version,
    Bump {
        kind: BumpKind,
        output: Option<PathBuf>,
    },
    Path {
        include_versioning: bool,
        use_original: bool,
        suffix: Option<String>,
    },
    ScssBuildPath {
        file: PathBuf,
        output: Option<PathBuf>,
        include_versioning: bool,
    },
    ScssEnv {
        file: PathBuf,
        output: Option<PathBuf>,
    },
    Copy {
        src: String,
        include_src_dir: bool,
        include_versioning: bool,
        root: String,
    },
}

/// Arguments for a workflow run
///
/// `descriptor` and `production` override the loaded configuration when set.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    pub descriptor: Option<PathBuf>,
    pub production: Option<bool>,
    pub action: Action,
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowResult {
    Version(String),
    Bumped {
        from: String,
        to: String,
    },
    Path(String),
    VariableSet {
        file: PathBuf,
        variable: String,
        value: String,
    },
    Copied {
        destination: PathBuf,
    },
}

fn open_session(config: &Config, descriptor: &Path, production: bool) -> Result<BuildSession> {
    BuildSession::new(
        config.build.dev_path.clone(),
        config.build.prod_path.clone(),
        production,
        descriptor,
    )
}

/// Runs a single action against the configured project.
pub fn run_workflow(args: WorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let descriptor = args
        .descriptor
        .clone()
        .unwrap_or_else(|| config.descriptor.clone());
    let production = args.production.unwrap_or(config.build.production);

    match args.action {
        Action::Version => Ok(WorkflowResult::Version(get_version(&descriptor)?)),
        Action::Bump { kind, output } => {
            let from = get_version(&descriptor)?;
            let to = bump_version(kind, &descriptor, output.as_deref())?;
            Ok(WorkflowResult::Bumped { from, to })
        }
        Action::Path {
            include_versioning,
            use_original,
            suffix,
        } => {
            let session = open_session(config, &descriptor, production)?;
            let mut path = session.build_path(&BuildPathOptions {
                include_versioning,
                use_original,
                descriptor_path: descriptor,
            })?;
            path.push_str(suffix.as_deref().unwrap_or(""));
            Ok(WorkflowResult::Path(path))
        }
        Action::ScssBuildPath {
            file,
            output,
            include_versioning,
        } => {
            let session = open_session(config, &descriptor, production)?;
            let region = config.scss.build_path_region();
            let options = BuildPathVariableOptions {
                include_versioning,
                output_path: output.clone(),
                descriptor_path: descriptor,
                variable_name: region.variable.clone(),
                start_marker: region.start_marker,
                end_marker: region.end_marker,
            };
            let value = set_build_path_variable(&session, &file, &options)?;
            Ok(WorkflowResult::VariableSet {
                file: output.unwrap_or(file),
                variable: region.variable,
                value,
            })
        }
        Action::ScssEnv { file, output } => {
            let session = open_session(config, &descriptor, production)?;
            let region = config.scss.environment_region();
            let options = EnvironmentVariableOptions {
                output_path: output.clone(),
                descriptor_path: descriptor,
                variable_name: region.variable.clone(),
                start_marker: region.start_marker,
                end_marker: region.end_marker,
            };
            let value = set_environment_variable(&session, &file, &options)?;
            Ok(WorkflowResult::VariableSet {
                file: output.unwrap_or(file),
                variable: region.variable,
                value,
            })
        }
        Action::Copy {
            src,
            include_src_dir,
            include_versioning,
            root,
        } => {
            let session = open_session(config, &descriptor, production)?;
            let destination = copy_to_build_path(
                &session,
                &src,
                &CopyOptions {
                    include_src_dir,
                    include_versioning,
                    output_root: root,
                    descriptor_path: descriptor,
                },
            )?;
            Ok(WorkflowResult::Copied { destination })
        }
    }
}
