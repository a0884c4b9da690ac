use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use log::info;

/// Paths of the files written for one job
///
/// Given prefix `P`:
///
/// | file                       | content                         |
/// | -------------------------- | ------------------------------- |
/// | `P-counts.gct`             | count matrix (GCT 1.2)          |
/// | `P-featureAnno.txt`        | feature annotation              |
/// | `P-sampleAnno.txt`         | sample annotation               |
/// | `P-sampleGroup.txt`        | group label per sample          |
/// | `P-sampleGroupLevels.txt`  | group levels                    |
/// | `P-designMatrix.txt`       | design matrix                   |
/// | `P-contrastMatrix.txt`     | contrast matrix                 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub prefix: String,
    pub counts: PathBuf,
    pub feature_anno: PathBuf,
    pub sample_anno: PathBuf,
    pub sample_group: PathBuf,
    pub sample_group_levels: PathBuf,
    pub design: PathBuf,
    pub contrast: PathBuf,
}

impl ArtifactPaths {
    /// Use `prefix` (trailing hyphen stripped) or a fresh temporary prefix
    pub fn resolve(prefix: Option<&str>) -> Self {
        match prefix {
            Some(prefix) => ArtifactPaths::from_prefix(prefix),
            None => {
                let prefix = temp_prefix();
                info!("No output prefix set, using {}", prefix);
                ArtifactPaths::from_prefix(&prefix)
            }
        }
    }

    pub fn from_prefix(prefix: &str) -> Self {
        let prefix = normalize_prefix(prefix);
        let path = |suffix: &str| PathBuf::from(format!("{prefix}-{suffix}"));
        ArtifactPaths {
            prefix: prefix.to_string(),
            counts: path("counts.gct"),
            feature_anno: path("featureAnno.txt"),
            sample_anno: path("sampleAnno.txt"),
            sample_group: path("sampleGroup.txt"),
            sample_group_levels: path("sampleGroupLevels.txt"),
            design: path("designMatrix.txt"),
            contrast: path("contrastMatrix.txt"),
        }
    }

    pub fn all(&self) -> [&Path; 7] {
        [
            self.counts.as_path(),
            self.feature_anno.as_path(),
            self.sample_anno.as_path(),
            self.sample_group.as_path(),
            self.sample_group_levels.as_path(),
            self.design.as_path(),
            self.contrast.as_path(),
        ]
    }
}

/// Strip a single trailing hyphen
pub fn normalize_prefix(prefix: &str) -> &str {
    prefix.strip_suffix('-').unwrap_or(prefix)
}

/// A prefix in the system temp directory, unique to this process and call
pub fn temp_prefix() -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let name = format!(
        "dge{}_{}_{}",
        std::process::id(),
        Utc::now().format("%Y%m%d%H%M%S%6f"),
        n
    );
    std::env::temp_dir().join(name).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_hyphen_stripped_once() {
        assert_eq!(normalize_prefix("out/x-"), "out/x");
        assert_eq!(normalize_prefix("out/x--"), "out/x-");
        assert_eq!(normalize_prefix("out/x"), "out/x");
    }

    #[test]
    fn test_suffixes() {
        let paths = ArtifactPaths::from_prefix("out/x-");
        let names: Vec<String> = paths.all().iter().map(|p| p.display().to_string()).collect();
        assert_eq!(
            names,
            vec![
                "out/x-counts.gct",
                "out/x-featureAnno.txt",
                "out/x-sampleAnno.txt",
                "out/x-sampleGroup.txt",
                "out/x-sampleGroupLevels.txt",
                "out/x-designMatrix.txt",
                "out/x-contrastMatrix.txt",
            ]
        );
    }

    #[test]
    fn test_temp_prefixes_are_unique() {
        let a = ArtifactPaths::resolve(None);
        let b = ArtifactPaths::resolve(None);
        assert_ne!(a.prefix, b.prefix);
        assert!(Path::new(&a.prefix).starts_with(std::env::temp_dir()));
    }
}
