pub mod cli;
pub mod config;
pub mod copier;
pub mod descriptor;
pub mod domain;
pub mod error;
pub mod region;
pub mod scss;
pub mod session;
pub mod ui;

pub use descriptor::{bump_version, get_version, load_descriptor, ProjectDescriptor};
pub use domain::{increment, BumpKind};
pub use error::{AppVersionerError, Result};
pub use session::{to_hyphen_token, BuildPathOptions, BuildSession};
