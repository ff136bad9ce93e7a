// LocateBy - per-field locator descriptor
//
// A LocateBy value says which strategy to use for one page object field
// and carries the strategy's parameters. Descriptors are immutable and
// const-constructible, so derived page objects keep them in statics.

use crate::aria_role::AriaRole;
use crate::error::{Error, Result};
use crate::strategy::Strategy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Declares how to locate the element behind a page object field
///
/// `pattern` takes precedence over `value` when it is non-empty. For
/// [`Strategy::Role`] the `value` is the accessible-name filter and
/// `pattern` is ignored. For [`Strategy::Unset`] the `value` is a raw
/// selector.
///
/// # Example
///
/// ```ignore
/// use playwright_page_factory::{AriaRole, LocateBy};
///
/// const USERNAME: LocateBy = LocateBy::label("Username");
/// const SUBMIT: LocateBy = LocateBy::role(AriaRole::Button, "Submit");
/// const LOGIN: LocateBy = LocateBy::selector("#login-button");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocateBy {
    /// Strategy used to resolve the locator
    pub strategy: Strategy,
    /// Literal argument, accessible name (Role) or raw selector (Unset)
    pub value: Cow<'static, str>,
    /// Regular expression source; wins over `value` when non-empty
    pub pattern: Cow<'static, str>,
    /// ARIA role, only read by [`Strategy::Role`]
    pub role: AriaRole,
}

impl LocateBy {
    /// Creates a descriptor from all four parameters
    ///
    /// Used by `#[derive(PageObject)]` to build descriptors in statics.
    pub const fn from_parts(
        strategy: Strategy,
        value: &'static str,
        pattern: &'static str,
        role: AriaRole,
    ) -> Self {
        Self {
            strategy,
            value: Cow::Borrowed(value),
            pattern: Cow::Borrowed(pattern),
            role,
        }
    }

    /// Creates a descriptor with the given strategy and default parameters
    pub const fn new(strategy: Strategy) -> Self {
        Self::from_parts(strategy, "", "", AriaRole::None)
    }

    /// Raw selector fallback (`Strategy::Unset`)
    pub const fn selector(selector: &'static str) -> Self {
        Self::from_parts(Strategy::Unset, selector, "", AriaRole::None)
    }

    pub const fn alt_text(text: &'static str) -> Self {
        Self::from_parts(Strategy::AltText, text, "", AriaRole::None)
    }

    pub const fn label(text: &'static str) -> Self {
        Self::from_parts(Strategy::Label, text, "", AriaRole::None)
    }

    pub const fn placeholder(text: &'static str) -> Self {
        Self::from_parts(Strategy::Placeholder, text, "", AriaRole::None)
    }

    /// Role locator with an accessible-name filter (may be empty)
    pub const fn role(role: AriaRole, name: &'static str) -> Self {
        Self::from_parts(Strategy::Role, name, "", role)
    }

    pub const fn test_id(id: &'static str) -> Self {
        Self::from_parts(Strategy::TestId, id, "", AriaRole::None)
    }

    pub const fn text(text: &'static str) -> Self {
        Self::from_parts(Strategy::Text, text, "", AriaRole::None)
    }

    pub const fn title(text: &'static str) -> Self {
        Self::from_parts(Strategy::Title, text, "", AriaRole::None)
    }

    /// Returns a copy with `value` replaced
    pub fn with_value(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.value = value.into();
        self
    }

    /// Returns a copy with `pattern` replaced
    pub fn with_pattern(mut self, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Returns a copy with `role` replaced
    pub fn with_role(mut self, role: AriaRole) -> Self {
        self.role = role;
        self
    }

    /// Whether `pattern` is the active parameter
    pub fn uses_pattern(&self) -> bool {
        !self.pattern.is_empty()
    }

    /// Returns the active text argument, compiling `pattern` if it is set
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn text_match(&self) -> Result<TextMatch<'_>> {
        if !self.uses_pattern() {
            return Ok(TextMatch::Value(&self.value));
        }
        Regex::new(&self.pattern)
            .map(TextMatch::Pattern)
            .map_err(|source| Error::InvalidPattern {
                pattern: self.pattern.to_string(),
                source,
            })
    }
}

/// Text argument passed to the text-like session queries
#[derive(Debug, Clone)]
pub enum TextMatch<'a> {
    /// Literal text, passed through unchanged
    Value(&'a str),
    /// Compiled regular expression
    Pattern(Regex),
}

impl TextMatch<'_> {
    /// Returns the literal text, or the pattern source
    pub fn as_str(&self) -> &str {
        match self {
            TextMatch::Value(value) => value,
            TextMatch::Pattern(regex) => regex.as_str(),
        }
    }
}

// Regex has no PartialEq; compare patterns by source
impl PartialEq for TextMatch<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TextMatch::Value(a), TextMatch::Value(b)) => a == b,
            (TextMatch::Pattern(a), TextMatch::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let locate_by = LocateBy::default();
        assert_eq!(locate_by.strategy, Strategy::Unset);
        assert_eq!(locate_by.value, "");
        assert_eq!(locate_by.pattern, "");
        assert_eq!(locate_by.role, AriaRole::None);
    }

    #[test]
    fn test_const_construction() {
        const SUBMIT: LocateBy = LocateBy::role(AriaRole::Button, "Submit");
        assert_eq!(SUBMIT.strategy, Strategy::Role);
        assert_eq!(SUBMIT.role, AriaRole::Button);
        assert_eq!(SUBMIT.value, "Submit");
    }

    #[test]
    fn test_text_match_prefers_pattern() {
        let locate_by = LocateBy::text("ignored").with_pattern("^Sign (in|up)$");
        let text_match = locate_by.text_match().unwrap();
        assert!(matches!(&text_match, TextMatch::Pattern(re) if re.is_match("Sign up")));
        assert_eq!(text_match.as_str(), "^Sign (in|up)$");
    }

    #[test]
    fn test_text_match_uses_value_without_pattern() {
        let locate_by = LocateBy::label("Username");
        assert_eq!(locate_by.text_match().unwrap(), TextMatch::Value("Username"));
    }

    #[test]
    fn test_invalid_pattern() {
        let locate_by = LocateBy::text("").with_pattern("[invalid(");
        let err = locate_by.text_match().unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "[invalid("));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let locate_by: LocateBy =
            serde_json::from_str(r#"{"strategy": "role", "role": "button", "value": "Submit"}"#)
                .unwrap();
        assert_eq!(locate_by, LocateBy::role(AriaRole::Button, "Submit"));

        let locate_by: LocateBy = serde_json::from_str("{}").unwrap();
        assert_eq!(locate_by, LocateBy::default());
    }
}
