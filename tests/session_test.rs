// tests/session_test.rs
use app_versioner::descriptor::bump_version;
use app_versioner::domain::BumpKind;
use app_versioner::session::{BuildPathOptions, BuildSession};
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_PKG2: &str = "tests/fixtures/fake-package-2.json";
const DEV_BUILD_PATH: &str = "/dist/";
const PROD_BUILD_PATH: &str = "/production-location/";

// Every test here is serial: one of them changes the working directory and the
// rest resolve fixtures relative to it.
fn session() -> BuildSession {
    BuildSession::new(DEV_BUILD_PATH, PROD_BUILD_PATH, false, FAKE_PKG2).unwrap()
}

/// Switches the working directory and restores the previous one on drop,
/// including when the test panics.
struct CwdGuard {
    previous: PathBuf,
}

impl CwdGuard {
    fn enter(dir: &Path) -> Self {
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        CwdGuard { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

#[test]
#[serial]
fn test_hyphened_version_after_new_session() {
    assert_eq!(session().hyphened_version(false, FAKE_PKG2).unwrap(), "2-0-0");
}

#[test]
#[serial]
fn test_build_path_dev() {
    let path = session()
        .build_path(&BuildPathOptions::with_descriptor(FAKE_PKG2))
        .unwrap();
    assert_eq!(path, format!("{}2-0-0/", DEV_BUILD_PATH));
}

#[test]
#[serial]
fn test_build_path_prod() {
    let mut session = session();
    session.set_environment(true);
    let path = session
        .build_path(&BuildPathOptions::with_descriptor(FAKE_PKG2))
        .unwrap();
    assert_eq!(path, "/production-location/2-0-0/");
}

#[test]
#[serial]
fn test_original_version_ignores_bump() {
    let temp = TempDir::new().unwrap();
    let pkg = temp.path().join("package.json");
    fs::copy(FAKE_PKG2, &pkg).unwrap();

    let session = BuildSession::new(DEV_BUILD_PATH, PROD_BUILD_PATH, false, &pkg).unwrap();
    bump_version(BumpKind::Minor, &pkg, None).unwrap();

    let current = session
        .build_path(&BuildPathOptions::with_descriptor(&pkg))
        .unwrap();
    let original = session
        .build_path(&BuildPathOptions {
            use_original: true,
            ..BuildPathOptions::with_descriptor(&pkg)
        })
        .unwrap();

    assert_eq!(current, "/dist/2-1-0/");
    assert_eq!(original, "/dist/2-0-0/");
    assert_eq!(session.original_version(), "2.0.0");
}

#[test]
#[serial]
fn test_append_to_build_path_uses_default_descriptor() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), r#"{"version":"3.4.5"}"#).unwrap();

    let _cwd = CwdGuard::enter(temp.path());

    let session = BuildSession::new("build/", "release/", false, "./package.json").unwrap();
    assert_eq!(
        session.append_to_build_path(Some("img/logo.png")).unwrap(),
        "build/3-4-5/img/logo.png"
    );
    assert_eq!(session.append_to_build_path(None).unwrap(), "build/3-4-5/");
}
