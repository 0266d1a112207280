// tests/cli_orchestration_test.rs
use app_versioner::cli::{run_workflow, Action, WorkflowArgs, WorkflowResult};
use app_versioner::config::Config;
use app_versioner::domain::BumpKind;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const FAKE_PKG2: &str = "tests/fixtures/fake-package-2.json";

fn args(action: Action) -> WorkflowArgs {
    WorkflowArgs {
        descriptor: Some(PathBuf::from(FAKE_PKG2)),
        production: None,
        action,
    }
}

#[test]
fn test_version_action() {
    let result = run_workflow(args(Action::Version), &Config::default()).unwrap();
    assert_eq!(result, WorkflowResult::Version("2.0.0".to_string()));
}

#[test]
fn test_path_action_respects_production_override() {
    let action = Action::Path {
        include_versioning: true,
        use_original: false,
        suffix: Some("css/".to_string()),
    };
    let result = run_workflow(
        WorkflowArgs {
            production: Some(true),
            ..args(action)
        },
        &Config::default(),
    )
    .unwrap();
    assert_eq!(
        result,
        WorkflowResult::Path("/production-location/2-0-0/css/".to_string())
    );
}

#[test]
fn test_bump_action_writes_output() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("package.json");

    let result = run_workflow(
        args(Action::Bump {
            kind: BumpKind::Major,
            output: Some(output.clone()),
        }),
        &Config::default(),
    )
    .unwrap();

    assert_eq!(
        result,
        WorkflowResult::Bumped {
            from: "2.0.0".to_string(),
            to: "3.0.0".to_string()
        }
    );
    assert!(fs::read_to_string(output).unwrap().contains("\"3.0.0\""));
}

#[test]
fn test_scss_env_uses_configured_region() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("env.scss");
    let mut config = Config::default();
    config.scss.environment.variable = Some("$env".to_string());

    let result = run_workflow(
        args(Action::ScssEnv {
            file: PathBuf::from("tests/fixtures/dev.scss"),
            output: Some(output.clone()),
        }),
        &config,
    )
    .unwrap();

    assert_eq!(
        result,
        WorkflowResult::VariableSet {
            file: output.clone(),
            variable: "$env".to_string(),
            value: "dev".to_string()
        }
    );
    assert!(fs::read_to_string(output).unwrap().contains("$env: \"dev\";"));
}

#[test]
fn test_copy_action() {
    let temp = TempDir::new().unwrap();
    let result = run_workflow(
        args(Action::Copy {
            src: "tests/fixtures/stuff1".to_string(),
            include_src_dir: true,
            include_versioning: true,
            root: format!("{}", temp.path().display()),
        }),
        &Config::default(),
    )
    .unwrap();

    assert!(matches!(result, WorkflowResult::Copied { .. }));
    assert!(temp.path().join("dist/2-0-0/stuff1/file1.css").exists());
}
