use crate::config::Settings;
use crate::error::{Result, SiteconfError};
use std::path::{Component, Path, PathBuf};

pub const TEMPLATE_FILENAME: &str = "docusaurus.config.js.hbs";
pub const OUTPUT_FILENAME: &str = "docusaurus.config.js";

/// Where the template is read from and the rendered config is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub root: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl SitePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            template: root.join(TEMPLATE_FILENAME),
            output: root.join(OUTPUT_FILENAME),
            root,
        }
    }

    /// Uses the configured root if there is one, otherwise the parent of the
    /// directory that holds the running executable.
    pub fn resolve(settings: &Settings) -> Result<Self> {
        match &settings.root {
            Some(root) => Ok(Self::new(root)),
            None => {
                let exe = std::env::current_exe()
                    .map_err(|e| SiteconfError::Root(format!("cannot locate executable: {}", e)))?;
                let root = install_root(&exe).ok_or_else(|| {
                    SiteconfError::Root(format!("{} has no parent directory", exe.display()))
                })?;
                Ok(Self::new(root))
            }
        }
    }
}

/// One level above the executable's own directory.
fn install_root(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}

/// Expresses `path` relative to `base`, climbing with `..` where needed.
///
/// Paths that share no prefix with `base` come back as given, minus any `.`
/// components.
pub fn display_relative(path: &Path, base: &Path) -> PathBuf {
    let path_parts = meaningful_components(path);
    let base_parts = meaningful_components(base);

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return path_parts.iter().map(|c| c.as_os_str()).collect();
    }

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}

fn meaningful_components(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
