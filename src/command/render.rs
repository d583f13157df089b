//! Placeholder substitution for command templates
//!
//! Placeholders are `{name}` where `name` is a run of word characters. All
//! spans are located against the original template before anything is
//! written, and the output is assembled front to back into a fresh buffer, so
//! substituted text is never scanned again.

use crate::command::normalize::ParamNormalizer;
use regex::Regex;
use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::OnceLock;

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"))
}

/// A placeholder occurrence inside a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'t> {
    /// Byte range of the whole `{name}` token
    pub span: Range<usize>,
    /// The name between the braces
    pub name: &'t str,
}

/// Locate every placeholder in textual order
pub fn scan(template: &str) -> Vec<Placeholder<'_>> {
    placeholder_regex()
        .captures_iter(template)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(Placeholder {
                span: whole.range(),
                name: name.as_str(),
            })
        })
        .collect()
}

/// Distinct placeholder names in first-seen order
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for placeholder in scan(template) {
        if !names.contains(&placeholder.name) {
            names.push(placeholder.name);
        }
    }
    names
}

/// Placeholder names with no value in `params`
pub fn missing_params<'t>(template: &'t str, params: &BTreeMap<String, String>) -> Vec<&'t str> {
    placeholders(template)
        .into_iter()
        .filter(|name| !params.contains_key(*name))
        .collect()
}

/// Marker written in place of a parameter that was not supplied
pub fn missing_marker(name: &str) -> String {
    format!("<missing:{}>", name)
}

/// Substitute every placeholder with its normalized value
///
/// Absent parameters render as `<missing:name>` instead of failing so the
/// rest of the command stays inspectable.
pub fn render(
    template: &str,
    params: &BTreeMap<String, String>,
    normalizer: &ParamNormalizer,
) -> String {
    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;

    for placeholder in scan(template) {
        out.push_str(&template[cursor..placeholder.span.start]);
        match params.get(placeholder.name) {
            Some(raw) => out.push_str(&normalizer.normalize(placeholder.name, raw)),
            None => out.push_str(&missing_marker(placeholder.name)),
        }
        cursor = placeholder.span.end;
    }
    out.push_str(&template[cursor..]);

    out
}
