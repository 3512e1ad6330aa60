//! ANSI SGR → HTML span rewriting.
//!
//! Literal substitution over the nine sequences the SPF checker emits —
//! not a general ANSI parser. Spans are opened and never closed; the
//! `pre` block the page wraps the result in tolerates the unbalanced
//! markup, and downstream styling relies on the open-tag-only shape.

/// Substitution table, tried in order at each escape byte.
///
/// `1;30` is dark grey in a real terminal; the checker uses it as orange
/// and the class name follows the checker's convention.
const ANSI_TO_HTML: [(&str, &str); 9] = [
    ("\u{1b}[1;37m", r#"<span class="bold">"#),
    ("\u{1b}[1;31m", r#"<span class="color-red">"#),
    ("\u{1b}[1;34m", r#"<span class="color-blue">"#),
    ("\u{1b}[1;33m", r#"<span class="color-yellow">"#),
    ("\u{1b}[1;30m", r#"<span class="color-orange">"#),
    ("\u{1b}[1;32m", r#"<span class="color-green">"#),
    ("\u{1b}[1;36m", r#"<span class="color-cyan">"#),
    ("\u{1b}[1;35m", r#"<span class="color-purple">"#),
    ("\u{1b}[0m", r#"<span class="color-white">"#),
];

/// Rewrite the recognized escape sequences to opening `span` tags.
///
/// Every other byte — unrecognized ANSI codes included — passes through
/// unchanged; input without any of the nine sequences comes back as-is.
#[must_use]
pub fn ansi_to_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('\u{1b}') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ANSI_TO_HTML.iter().find(|(seq, _)| rest.starts_with(seq)) {
            Some((seq, html)) => {
                out.push_str(html);
                rest = &rest[seq.len()..];
            }
            None => {
                // ESC is a single byte.
                out.push('\u{1b}');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
