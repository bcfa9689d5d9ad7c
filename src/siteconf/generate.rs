use crate::error::{Result, SiteconfError};
use crate::params::ParamSet;
use crate::paths::SitePaths;
use crate::template::{self, TemplateData};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct Report {
    pub template: PathBuf,
    pub output: PathBuf,
    pub data: TemplateData,
}

/// Loads the template, derives the repository fields, renders and replaces the
/// output file.
///
/// Nothing is written unless every step before the write succeeds.
pub fn generate(params: &ParamSet, paths: &SitePaths) -> Result<Report> {
    if !paths.template.exists() {
        return Err(SiteconfError::TemplateNotFound(paths.template.clone()));
    }

    let source = fs::read_to_string(&paths.template).map_err(|source| SiteconfError::Read {
        path: paths.template.clone(),
        source,
    })?;
    debug!(template = %paths.template.display(), bytes = source.len(), "loaded template");

    let repo = params.repo()?;
    let data = TemplateData::new(params, repo);
    let rendered = template::render(&source, &data)?;

    write_replacing(&paths.output, &rendered)?;
    info!(output = %paths.output.display(), bytes = rendered.len(), "wrote config");

    Ok(Report {
        template: paths.template.clone(),
        output: paths.output.clone(),
        data,
    })
}

/// Writes through a temp file in the target directory, then renames it over
/// `path`.
fn write_replacing(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: std::io::Error| SiteconfError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    if let Some(perms) = output_permissions(path) {
        tmp.as_file().set_permissions(perms).map_err(write_err)?;
    }
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Keeps the mode of an existing output file. New files get 0644 on unix
/// instead of the temp file's 0600.
fn output_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
