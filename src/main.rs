use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use app_versioner::cli::{run_workflow, Action, WorkflowArgs, WorkflowResult};
use app_versioner::config;
use app_versioner::domain::BumpKind;
use app_versioner::ui;

#[derive(Parser)]
#[command(
    name = "app-versioner",
    version,
    about = "Keep versioned build paths and stylesheet variables in sync with package.json"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Project descriptor (default ./package.json)"
    )]
    descriptor: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        conflicts_with = "dev",
        help = "Target the production build path"
    )]
    prod: bool,

    #[arg(long, global = true, help = "Target the development build path")]
    dev: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current version from the descriptor
    Version,

    /// Increment the descriptor version and write it back
    Bump {
        /// major, minor or patch
        #[arg(value_name = "KIND", default_value = "patch")]
        kind: BumpKind,

        /// Write the bumped descriptor here instead of in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the build path
    Path {
        #[arg(long, help = "Omit the hyphenated version directory")]
        no_versioning: bool,

        #[arg(long, help = "Use the version read at startup, before any bump")]
        original: bool,

        #[arg(long, help = "Appended to the build path")]
        suffix: Option<String>,
    },

    /// Write the build path into a stylesheet region
    ScssBuildPath {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        no_versioning: bool,
    },

    /// Write the environment ("dev" or "prod") into a stylesheet region
    ScssEnv {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Copy a file or directory into the build path
    Copy {
        #[arg(value_name = "SRC")]
        src: String,

        #[arg(long, help = "Keep the source directory's own name in the output")]
        include_src_dir: bool,

        #[arg(long)]
        no_versioning: bool,

        #[arg(long, default_value = "", help = "Prefix for the build path")]
        root: String,
    },
}

impl Commands {
    fn into_action(self) -> Action {
        match self {
            Commands::Version => Action::Version,
            Commands::Bump { kind, output } => Action::Bump { kind, output },
            Commands::Path {
                no_versioning,
                original,
                suffix,
            } => Action::Path {
                include_versioning: !no_versioning,
                use_original: original,
                suffix,
            },
            Commands::ScssBuildPath {
                file,
                output,
                no_versioning,
            } => Action::ScssBuildPath {
                file,
                output,
                include_versioning: !no_versioning,
            },
            Commands::ScssEnv { file, output } => Action::ScssEnv { file, output },
            Commands::Copy {
                src,
                include_src_dir,
                no_versioning,
                root,
            } => Action::Copy {
                src,
                include_src_dir,
                include_versioning: !no_versioning,
                root,
            },
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let production = if args.prod {
        Some(true)
    } else if args.dev {
        Some(false)
    } else {
        None
    };

    let workflow = WorkflowArgs {
        descriptor: args.descriptor,
        production,
        action: args.command.into_action(),
    };

    let result = match run_workflow(workflow, &config) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    match result {
        WorkflowResult::Version(version) => {
            println!("{}", version);
        }
        WorkflowResult::Path(path) => {
            ui::display_build_path(&path);
        }
        WorkflowResult::Bumped { from, to } => {
            ui::display_version_change(&from, &to);
            ui::display_success(&format!("Bumped version to {}", to));
        }
        WorkflowResult::VariableSet {
            file,
            variable,
            value,
        } => {
            ui::display_variable_update(&file.display().to_string(), &variable, &value);
        }
        WorkflowResult::Copied { destination } => {
            ui::display_success(&format!("Copied to {}", destination.display()));
        }
    }

    Ok(())
}
