use regex::Regex;
use std::sync::OnceLock;

use crate::error::{CreatorError, Result};

/// The name the template folder itself uses; an app can't take it.
const RESERVED_NAME: &str = "template";

const NAME_PATTERN: &str = r"^[a-zA-Z_\s]+$";

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NAME_PATTERN).expect("name pattern is a valid regex"))
}

/// Returns whether `raw` can seed an app name.
///
/// Accepts ASCII letters, underscores and whitespace only, and needs at least
/// one letter once the separators are removed.
pub fn is_valid_name(raw: &str) -> bool {
    if raw.is_empty() {
        return false;
    }
    if !name_regex().is_match(raw) {
        return false;
    }
    if raw == RESERVED_NAME {
        return false;
    }
    raw.chars().any(|c| !c.is_whitespace() && c != '_')
}

/// Same check as `is_valid_name`, failing with `InvalidName`.
pub fn validate_name(raw: &str) -> Result<()> {
    if is_valid_name(raw) {
        Ok(())
    } else {
        Err(CreatorError::InvalidName(raw.to_string()))
    }
}
