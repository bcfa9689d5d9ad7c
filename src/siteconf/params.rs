use crate::error::{Result, SiteconfError};

/// Command-line keys that must be present and non-empty, in reporting order.
pub const REQUIRED_KEYS: [&str; 4] = ["site-name", "site-id", "site-url", "github-repo"];

/// Values as they arrived on the command line, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams {
    pub site_name: Option<String>,
    pub site_id: Option<String>,
    pub site_url: Option<String>,
    pub github_repo: Option<String>,
}

/// Organization and project halves of an `owner/project` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub organization: String,
    pub project: String,
}

/// The required values, all present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSet {
    pub site_name: String,
    pub site_id: String,
    pub site_url: String,
    /// The unsplit `github-repo` value.
    pub repo_name: String,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl RawParams {
    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "site-name" => present(&self.site_name),
            "site-id" => present(&self.site_id),
            "site-url" => present(&self.site_url),
            "github-repo" => present(&self.github_repo),
            _ => None,
        }
    }

    /// Required keys that are absent or empty.
    pub fn missing(&self) -> Vec<&'static str> {
        REQUIRED_KEYS
            .into_iter()
            .filter(|key| self.field(key).is_none())
            .collect()
    }

    pub fn validate(self) -> Result<ParamSet> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(SiteconfError::MissingParameters(missing));
        }

        // All four are known to be present past the check above.
        let take = |v: Option<String>| v.unwrap_or_default();
        Ok(ParamSet {
            site_name: take(self.site_name),
            site_id: take(self.site_id),
            site_url: take(self.site_url),
            repo_name: take(self.github_repo),
        })
    }
}

impl ParamSet {
    /// Derives the organization and project from `repo_name`.
    pub fn repo(&self) -> Result<RepoRef> {
        RepoRef::parse(&self.repo_name)
    }
}

impl RepoRef {
    /// Splits on the first `/`. Both halves must be non-empty.
    pub fn parse(value: &str) -> Result<Self> {
        match value.split_once('/') {
            Some((organization, project)) if !organization.is_empty() && !project.is_empty() => {
                Ok(Self {
                    organization: organization.to_string(),
                    project: project.to_string(),
                })
            }
            _ => Err(SiteconfError::InvalidRepo(value.to_string())),
        }
    }
}
