//! # Siteconf
//!
//! Generates `docusaurus.config.js` from `docusaurus.config.js.hbs`, filling in
//! the site name, id, URL and GitHub repository given on the command line.
//! Every substituted value is escaped, so user input cannot change the
//! structure of the generated file.
//!
//! ## Pipeline
//!
//! ```text
//! args ──▶ RawParams ──validate──▶ ParamSet ──┐
//!                                             ▼
//! SitePaths ──load template──▶ derive RepoRef ──▶ render ──▶ write
//! ```
//!
//! Each step returns a [`error::Result`]. The binary (`main.rs`) is the only
//! place that prints or chooses an exit code: `0` on success, `1` for any
//! [`error::SiteconfError`].
//!
//! ## Module Overview
//!
//! - [`params`]: raw and validated parameters, `owner/project` parsing
//! - [`paths`]: the fixed template and output locations
//! - [`template`]: minijinja rendering with Handlebars-compatible escaping
//! - [`generate`]: the load, render and write pipeline
//! - [`config`]: environment settings (site root override, log filter)
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod generate;
pub mod params;
pub mod paths;
pub mod template;
