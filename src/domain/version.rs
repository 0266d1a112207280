use crate::error::{AppVersionerError, Result};
use semver::{BuildMetadata, Prerelease, Version};
use std::fmt;
use std::str::FromStr;

/// Which component of a semantic version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpKind {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpKind {
    type Err = AppVersionerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(AppVersionerError::InvalidBumpKind(other.to_string())),
        }
    }
}

/// Increments a semantic version string.
///
/// A prerelease version is first released at the component being bumped:
/// `1.0.1-beta` bumps to `1.0.1` on patch, `1.1.0-rc.1` to `1.1.0` on minor
/// and `2.0.0-alpha` to `2.0.0` on major. Build metadata is dropped.
///
/// # Example
/// ```ignore
/// assert_eq!(increment("1.0.0", BumpKind::Patch).unwrap(), "1.0.1");
/// assert_eq!(increment("1.2.3", BumpKind::Major).unwrap(), "2.0.0");
/// ```
pub fn increment(version: &str, kind: BumpKind) -> Result<String> {
    let mut parsed = match Version::parse(version.trim()) {
        Ok(parsed) => parsed,
        Err(e) => {
            let msg = format!("Invalid version '{}': {}", version, e);
            return Err(AppVersionerError::version(msg));
        }
    };
    let is_prerelease = !parsed.pre.is_empty();

    match kind {
        BumpKind::Major => {
            if !(is_prerelease && parsed.minor == 0 && parsed.patch == 0) {
                parsed.major += 1;
            }
            parsed.minor = 0;
            parsed.patch = 0;
        }
        BumpKind::Minor => {
            if !(is_prerelease && parsed.patch == 0) {
                parsed.minor += 1;
            }
            parsed.patch = 0;
        }
        BumpKind::Patch => {
            if !is_prerelease {
                parsed.patch += 1;
            }
        }
    }

    parsed.pre = Prerelease::EMPTY;
    parsed.build = BuildMetadata::EMPTY;
    Ok(parsed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn precedes(a: &str, b: &str) -> bool {
        Version::parse(a).unwrap() < Version::parse(b).unwrap()
    }

    #[test]
    fn test_bump_kind_from_str() {
        assert_eq!("major".parse::<BumpKind>().unwrap(), BumpKind::Major);
        assert_eq!("minor".parse::<BumpKind>().unwrap(), BumpKind::Minor);
        assert_eq!("patch".parse::<BumpKind>().unwrap(), BumpKind::Patch);
    }

    #[test]
    fn test_bump_kind_rejects_unknown() {
        let err = "premajor".parse::<BumpKind>().unwrap_err();
        assert!(matches!(err, AppVersionerError::InvalidBumpKind(k) if k == "premajor"));
        assert!("Patch".parse::<BumpKind>().is_err());
    }

    #[test]
    fn test_bump_kind_default_is_patch() {
        assert_eq!(BumpKind::default(), BumpKind::Patch);
        assert_eq!(BumpKind::default().to_string(), "patch");
    }

    #[test]
    fn test_increment_release_versions() {
        assert_eq!(increment("1.0.0", BumpKind::Patch).unwrap(), "1.0.1");
        assert_eq!(increment("1.2.3", BumpKind::Minor).unwrap(), "1.3.0");
        assert_eq!(increment("1.2.3", BumpKind::Major).unwrap(), "2.0.0");
    }

    #[test]
    fn test_increment_prerelease_versions() {
        assert_eq!(increment("1.0.1-beta", BumpKind::Patch).unwrap(), "1.0.1");
        assert_eq!(increment("1.1.0-rc.1", BumpKind::Minor).unwrap(), "1.1.0");
        assert_eq!(increment("1.1.1-rc.1", BumpKind::Minor).unwrap(), "1.2.0");
        assert_eq!(increment("2.0.0-alpha", BumpKind::Major).unwrap(), "2.0.0");
        assert_eq!(increment("2.1.0-alpha", BumpKind::Major).unwrap(), "3.0.0");
    }

    #[test]
    fn test_increment_drops_build_metadata() {
        assert_eq!(increment("1.0.0+build.7", BumpKind::Patch).unwrap(), "1.0.1");
    }

    #[test]
    fn test_increment_always_increases_precedence() {
        let versions = ["0.0.0", "1.2.3", "1.0.0-alpha", "3.0.0-rc.2", "0.1.0+meta"];
        let kinds = [BumpKind::Major, BumpKind::Minor, BumpKind::Patch];
        for v in versions {
            for k in kinds {
                let bumped = increment(v, k).unwrap();
                assert!(precedes(v, &bumped), "{} -> {} ({})", v, bumped, k);
            }
        }
    }

    #[test]
    fn test_increment_invalid_version() {
        assert!(matches!(
            increment("1.2", BumpKind::Patch),
            Err(AppVersionerError::Version(_))
        ));
        assert!(increment("not-a-version", BumpKind::Major).is_err());
    }
}
