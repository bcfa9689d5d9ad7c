use std::path::PathBuf;

/// Overrides the directory holding the template and the generated file.
pub const ROOT_ENV: &str = "SITECONF_ROOT";
/// `tracing` filter directive for diagnostics on stderr.
pub const LOG_ENV: &str = "SITECONF_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime settings taken from the environment.
///
/// None of these are exposed as command-line flags: the paths the tool reads
/// and writes are fixed, and the override exists for relocated installs and
/// tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            root: non_empty(ROOT_ENV).map(PathBuf::from),
            log_filter: non_empty(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
