use chrono::NaiveDate;
use std::fmt::Write;

use crate::config::TokenConfig;
use crate::error::{CreatorError, Result};
use crate::naming::AppName;

/// Formats `date` with a `strftime` string. Time and zone specifiers can't
/// be applied to a date and give `InvalidConfig`.
pub fn format_date(date: NaiveDate, date_format: &str) -> Result<String> {
    let mut stamp = String::new();
    write!(stamp, "{}", date.format(date_format)).map_err(|_| {
        CreatorError::InvalidConfig(format!("bad date_format {:?}", date_format))
    })?;
    Ok(stamp)
}

/// Ordered list of literal `(token, value)` replacements.
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    pairs: Vec<(String, String)>,
}

impl Substitutions {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a replacement; it runs after the ones already added.
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((token.into(), value.into()));
        self
    }

    /// The set applied to both files of a new app: class name, then file
    /// name, then the date stamp.
    pub fn for_app(
        tokens: &TokenConfig,
        name: &AppName,
        date: NaiveDate,
        date_format: &str,
    ) -> Result<Self> {
        Ok(Self::new()
            .with(&tokens.class_name, &name.pascal)
            .with(&tokens.file_name, &name.snake)
            .with(&tokens.date, format_date(date, date_format)?))
    }

    /// Iterates the `(token, value)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }
}

/// Applies each substitution in order as a global literal replace.
///
/// A token missing from the template is skipped. Later substitutions see the
/// output of earlier ones.
pub fn render(template: &str, substitutions: &Substitutions) -> String {
    let mut rendered = template.to_string();
    for (token, value) in substitutions.iter() {
        if token.is_empty() {
            continue;
        }
        rendered = rendered.replace(token, value);
    }
    rendered
}
