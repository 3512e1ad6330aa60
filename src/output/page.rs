//! HTML page rendering with minijinja.
//!
//! One embedded template for the whole surface: the form plus at most
//! one of the report block, the "no results" notice, or the validation
//! error. The form value is auto-escaped by the engine (the template
//! name carries the `.html` extension); the report block is the only
//! value inserted unescaped — it is produced by the transcoder, whose
//! trust assumptions are documented there.

use minijinja::{context, Environment};

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>SPF Survey</title>
    <style>
        body { background-color: black; color: white; font-family: monospace; padding: 10px; }
        .output { white-space: pre-wrap; word-break: break-all; }
        .error { color: red; }
        .bold { font-weight: bold; }
        .color-red { color: #ff5555; }
        .color-blue { color: #00aaff; }
        .color-yellow { color: #ffff00; }
        .color-orange { color: #ff9500; }
        .color-green { color: #00ff00; }
        .color-cyan { color: #00ffff; }
        .color-purple { color: #ff00ff; }
        .color-white { color: white; }
    </style>
</head>
<body>
    <form method="get" action="/">
        <label for="domain">SPF Domain:</label>
        <input type="text" id="domain" name="d" value="{{ domain }}" required>
        <input type="submit" value="Submit">
    </form>
{%- if report is not none %}
    <pre class="output">{{ report | safe }}</pre>
{%- elif no_results %}
    <h2 class="error">No results found or an error occurred.</h2>
{%- elif invalid_domain %}
    <h2 class="error">Invalid domain format.</h2>
{%- endif %}
</body>
</html>
"##;

/// What the section below the form shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageBody {
    /// Bare form, nothing submitted.
    #[default]
    Empty,
    /// Transcoded checker output, embedded verbatim.
    Report(String),
    /// The checker ran and produced nothing.
    NoResults,
    /// The submitted string failed hostname validation.
    InvalidDomain,
}

/// Renders the survey page. Built once at startup and shared across
/// requests; holds the compiled template environment.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    #[must_use]
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Safety: compile-time constant template — cannot fail.
        #[allow(clippy::expect_used)]
        env.add_template("page.html", PAGE_TEMPLATE)
            .expect("valid template");
        Self { env }
    }

    /// Render the full document. `domain` is the raw submitted value,
    /// re-displayed in the form input exactly as typed (attribute-escaped
    /// by the engine); empty on first load.
    ///
    /// The template is registered in `new` and the context is built from
    /// plain strings and booleans — rendering cannot fail.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn render(&self, domain: &str, body: &PageBody) -> String {
        let report = match body {
            PageBody::Report(html) => Some(html.as_str()),
            _ => None,
        };
        self.env
            .get_template("page.html")
            .expect("registered at startup")
            .render(context! {
                domain => domain,
                report => report,
                no_results => matches!(body, PageBody::NoResults),
                invalid_domain => matches!(body, PageBody::InvalidDomain),
            })
            .expect("constant template renders")
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}
