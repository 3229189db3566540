//! Component-name validation against the platform's object-naming grammar.
//!
//! Components become platform objects, so their names must be valid
//! DNS-1123 labels: 1-63 characters, lowercase alphanumerics and hyphens,
//! starting and ending with an alphanumeric.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::NameError;

/// Maximum length of a component name (DNS label limit).
pub const MAX_NAME_LEN: usize = 63;

static NAME_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9-]+$").expect("valid regex")
});

/// Validate a proposed component name.
///
/// Unlike a single-regex match, each rule is checked independently so the
/// error names **every** rule the candidate breaks, not just the first.
///
/// # Errors
///
/// Returns [`NameError::Invalid`] with all violations `; `-joined.
pub fn validate_component_name(name: &str) -> Result<(), NameError> {
    let mut violations: Vec<String> = Vec::new();

    if name.is_empty() {
        violations.push("must not be empty".to_string());
    } else {
        if name.len() > MAX_NAME_LEN {
            violations.push(format!(
                "must be at most {MAX_NAME_LEN} characters, got {}",
                name.len()
            ));
        }
        if !NAME_CHARSET_RE.is_match(name) {
            violations
                .push("must contain only lowercase letters, digits, and hyphens".to_string());
        }
        if name.starts_with('-') {
            violations.push("must not start with a hyphen".to_string());
        }
        if name.ends_with('-') {
            violations.push("must not end with a hyphen".to_string());
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(NameError::Invalid {
            name: name.to_string(),
            violations: violations.join("; "),
        })
    }
}
