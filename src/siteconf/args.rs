use clap::Parser;
use siteconf::error::{Result, SiteconfError};
use siteconf::params::{RawParams, REQUIRED_KEYS};
use std::ffi::OsString;

/// Every flag is optional to clap so that missing ones are reported together,
/// with the usage text, by `RawParams::validate`.
///
/// clap only ever sees the `--key=value` tokens built by [`pair_up`]. A flag
/// given without a value parses as empty, which validation reports as missing.
/// Repeating a flag keeps the last value.
#[derive(Parser, Debug)]
#[command(
    name = "generate-config",
    about = "Generate docusaurus.config.js from its template",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Site title
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub site_name: Option<String>,

    /// Site identifier
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub site_id: Option<String>,

    /// Public URL of the site
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub site_url: Option<String>,

    /// Repository as owner/project
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub github_repo: Option<String>,
}

impl From<Cli> for RawParams {
    fn from(cli: Cli) -> Self {
        RawParams {
            site_name: cli.site_name,
            site_id: cli.site_id,
            site_url: cli.site_url,
            github_repo: cli.github_repo,
        }
    }
}

pub const USAGE: &str = r#"Usage:
  generate-config \
    --site-name "My Site" \
    --site-id "site-123" \
    --site-url "https://mysite.docusapiens.ai" \
    --github-repo "owner/repo""#;

/// Parses a full argument vector (program name first).
pub fn parse_from<I, T>(args: I) -> Result<RawParams>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::try_parse_from(pair_up(args))
        .map(RawParams::from)
        .map_err(|e| SiteconfError::Usage(first_line(&e.to_string())))
}

/// Reads the tokens after the program name as `key value` pairs. The token
/// after a key is its value whatever it looks like. Leading `--` on a key is
/// optional, and keys other than the required ones are dropped.
fn pair_up<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut tokens = args
        .into_iter()
        .map(|arg| arg.into().to_string_lossy().into_owned());

    let mut flags: Vec<String> = tokens.next().into_iter().collect();
    while let Some(key) = tokens.next() {
        let value = tokens.next();
        let key = key.strip_prefix("--").unwrap_or(&key);
        if !REQUIRED_KEYS.iter().any(|known| *known == key) {
            continue;
        }
        flags.push(match value {
            Some(value) => format!("--{}={}", key, value),
            None => format!("--{}", key),
        });
    }
    flags
}

fn first_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<RawParams> {
        parse_from(std::iter::once("generate-config").chain(args.iter().copied()))
    }

    #[test]
    fn test_all_flags() {
        let raw = parse(&[
            "--site-name",
            "My Site",
            "--site-id",
            "site-123",
            "--site-url",
            "https://x.example",
            "--github-repo",
            "owner/repo",
        ])
        .unwrap();
        assert_eq!(raw.site_name.as_deref(), Some("My Site"));
        assert_eq!(raw.site_id.as_deref(), Some("site-123"));
        assert_eq!(raw.site_url.as_deref(), Some("https://x.example"));
        assert_eq!(raw.github_repo.as_deref(), Some("owner/repo"));
    }

    #[test]
    fn test_order_is_irrelevant() {
        let raw = parse(&["--github-repo", "a/b", "--site-name", "S"]).unwrap();
        assert_eq!(raw.github_repo.as_deref(), Some("a/b"));
        assert_eq!(raw.site_name.as_deref(), Some("S"));
        assert_eq!(raw.site_id, None);
    }

    #[test]
    fn test_last_occurrence_wins() {
        let raw = parse(&["--site-name", "first", "--site-name", "second"]).unwrap();
        assert_eq!(raw.site_name.as_deref(), Some("second"));
    }

    #[test]
    fn test_trailing_flag_without_value_is_empty() {
        let raw = parse(&["--site-id", "x", "--site-url"]).unwrap();
        assert_eq!(raw.site_url.as_deref(), Some(""));
        assert!(raw.missing().contains(&"site-url"));
    }

    #[test]
    fn test_no_args_all_missing() {
        let raw = parse(&[]).unwrap();
        assert_eq!(raw.missing().len(), 4);
    }

    #[test]
    fn test_hyphen_leading_values() {
        let raw = parse(&[
            "--site-name",
            "-My Site-",
            "--site-id",
            "-1",
            "--site-url",
            "--https://x",
            "--github-repo",
            "a/b",
        ])
        .unwrap();
        assert_eq!(raw.site_name.as_deref(), Some("-My Site-"));
        assert_eq!(raw.site_id.as_deref(), Some("-1"));
        assert_eq!(raw.site_url.as_deref(), Some("--https://x"));
        assert_eq!(raw.github_repo.as_deref(), Some("a/b"));
    }

    #[test]
    fn test_token_after_key_is_its_value() {
        let raw = parse(&["--site-name", "--site-id", "x", "y"]).unwrap();
        assert_eq!(raw.site_name.as_deref(), Some("--site-id"));
        assert_eq!(raw.site_id, None);
    }

    #[test]
    fn test_values_containing_equals() {
        let raw = parse(&["--site-url", "https://a.example/?q=1&r=2"]).unwrap();
        assert_eq!(raw.site_url.as_deref(), Some("https://a.example/?q=1&r=2"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let raw = parse(&[
            "--site-name",
            "S",
            "--extra",
            "x",
            "--github-repo",
            "a/b",
            "--help",
            "--version",
        ])
        .unwrap();
        assert_eq!(raw.site_name.as_deref(), Some("S"));
        assert_eq!(raw.github_repo.as_deref(), Some("a/b"));
        assert_eq!(raw.site_id, None);
    }

    #[test]
    fn test_key_without_dashes() {
        let raw = parse(&["site-id", "abc"]).unwrap();
        assert_eq!(raw.site_id.as_deref(), Some("abc"));
    }
}
