//! Template rendering.
//!
//! Templates are Jinja2 syntax via minijinja. Plain `{{siteName}}` placeholders,
//! as found in existing `.hbs` templates, render the same way.
//!
//! Every printed value goes through [`escape_html`], which applies the
//! Handlebars escape set. A value can only bypass it when the template marks
//! it explicitly with `|safe`.

use crate::error::Result;
use crate::params::{ParamSet, RepoRef};
use minijinja::{Environment, Error, ErrorKind, Output, State, Value};
use serde::Serialize;

const TEMPLATE_NAME: &str = "site_config";

/// The fields a template sees.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    pub site_name: String,
    pub site_id: String,
    pub site_url: String,
    pub repo_name: String,
    pub organization_name: String,
    pub project_name: String,
}

impl TemplateData {
    pub fn new(params: &ParamSet, repo: RepoRef) -> Self {
        Self {
            site_name: params.site_name.clone(),
            site_id: params.site_id.clone(),
            site_url: params.site_url.clone(),
            repo_name: params.repo_name.clone(),
            organization_name: repo.organization,
            project_name: repo.project,
        }
    }
}

/// Compiles `source` and renders it against `data`.
pub fn render<T: Serialize>(source: &str, data: &T) -> Result<String> {
    let mut env = Environment::new();
    env.set_formatter(escaping_formatter);

    env.add_template_owned(TEMPLATE_NAME.to_string(), source.to_string())?;
    let tmpl = env.get_template(TEMPLATE_NAME)?;
    Ok(tmpl.render(data)?)
}

fn escaping_formatter(
    out: &mut Output<'_>,
    _state: &State<'_, '_>,
    value: &Value,
) -> std::result::Result<(), Error> {
    let written = if value.is_undefined() || value.is_none() {
        Ok(())
    } else if value.is_safe() {
        out.write_str(&value.to_string())
    } else {
        out.write_str(&escape_html(&value.to_string()))
    };
    written.map_err(|_| Error::new(ErrorKind::WriteFailure, "failed to write rendered value"))
}

/// Escapes `&`, `<`, `>`, `"`, `'`, backtick and `=` to entities, as Handlebars does.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '`' => escaped.push_str("&#x60;"),
            '=' => escaped.push_str("&#x3D;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteconfError;

    fn data(site_name: &str) -> TemplateData {
        let params = ParamSet {
            site_name: site_name.to_string(),
            site_id: "site-123".into(),
            site_url: "https://mysite.example.com/docs".into(),
            repo_name: "owner/repo".into(),
        };
        let repo = params.repo().unwrap();
        TemplateData::new(&params, repo)
    }

    #[test]
    fn test_handlebars_style_placeholders() {
        let out = render("title: '{{siteName}}',", &data("My Site")).unwrap();
        assert_eq!(out, "title: 'My Site',");
    }

    #[test]
    fn test_all_fields_available() {
        let tmpl = "{{ siteName }}|{{ siteId }}|{{ siteUrl }}|{{ repoName }}|{{ organizationName }}|{{ projectName }}";
        let out = render(tmpl, &data("S")).unwrap();
        assert_eq!(
            out,
            "S|site-123|https://mysite.example.com/docs|owner/repo|owner|repo"
        );
    }

    #[test]
    fn test_quote_cannot_break_out_of_string() {
        let out = render("title: '{{siteName}}',", &data("x', evil: require('fs')//")).unwrap();
        assert!(!out.contains("x',"));
        assert_eq!(
            out,
            "title: 'x&#x27;, evil: require(&#x27;fs&#x27;)//',"
        );
    }

    #[test]
    fn test_escape_set() {
        assert_eq!(
            escape_html(r#"<a href="x">&'`=</a>"#),
            "&lt;a href&#x3D;&quot;x&quot;&gt;&amp;&#x27;&#x60;&#x3D;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_slashes_left_alone() {
        assert_eq!(escape_html("https://a.b/c"), "https://a.b/c");
    }

    #[test]
    fn test_safe_filter_bypasses_escaping() {
        let out = render("{{ siteName | safe }}", &data("<b>")).unwrap();
        assert_eq!(out, "<b>");
    }

    #[test]
    fn test_template_literals_are_untouched() {
        let out = render("const x = \"<{{siteId}}>\";", &data("S")).unwrap();
        assert_eq!(out, "const x = \"<site-123>\";");
    }

    #[test]
    fn test_unknown_placeholder_renders_empty() {
        let out = render("[{{ nothing }}]", &data("S")).unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_template_syntax_error() {
        let result = render("{{ siteName ", &data("S"));
        assert!(matches!(result, Err(SiteconfError::Render(_))));
    }
}
