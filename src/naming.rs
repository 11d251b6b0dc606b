use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

fn upper_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Z]+)").expect("upper run pattern is a valid regex"))
}

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Z][a-z]+)").expect("word pattern is a valid regex"))
}

/// Joins the words of `raw` into PascalCase.
///
/// Words are split on underscores and whitespace. Only the first character
/// of each word is touched; `"my_cOOl app"` becomes `"MyCOOlApp"`.
pub fn to_pascal(raw: &str) -> String {
    raw.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Converts a PascalCase or mixed string into snake_case.
///
/// Existing underscores are kept, so `"Foo_Bar"` becomes `"foo__bar"`.
/// `to_snake(to_pascal(x))` is lossy and does not give back `x`.
pub fn to_snake(s: &str) -> String {
    let spaced = s.replace('-', " ");
    let spaced = upper_run_regex().replace_all(&spaced, " ${1}");
    let spaced = word_regex().replace_all(&spaced, " ${1}");
    spaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// The two spellings of an app's name used for files and code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppName {
    /// Class name, e.g. `AppMyCoolApp`.
    pub pascal: String,
    /// Folder, file stem and include path, e.g. `app_my_cool_app`.
    pub snake: String,
}

impl AppName {
    /// Derives the canonical name from a validated raw name. The class name
    /// is `prefix` followed by the PascalCase words; the snake form is taken
    /// from the class name.
    pub fn derive(raw: &str, prefix: &str) -> Self {
        let pascal = format!("{}{}", prefix, to_pascal(raw));
        let snake = to_snake(&pascal);
        Self { pascal, snake }
    }
}
