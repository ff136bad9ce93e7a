// SelectorSession - browser-free Session producing Playwright selectors
//
// Renders each query into the selector string Playwright's own getBy*
// methods send to the driver (the `internal:*` selector engines). The
// resulting Selector can be handed to any Playwright binding's
// `locator()` call, logged, or asserted on in tests without a browser.
//
// Escaping rules:
// - Text engines (label, text) take a JSON string plus a case flag:
//   `"Sign in"i` (case-insensitive substring) or `"Sign in"s` (exact)
// - Attribute engines quote with backslash-escaped `\` and `"`
// - Patterns render as `/source/`, with unescaped quotes backslash-escaped
//   and `>>` escaped so they cannot be read as a selector chain
//
// See: https://playwright.dev/docs/other-locators

use crate::aria_role::AriaRole;
use crate::locate_by::TextMatch;
use crate::session::{GetByRoleOptions, Session};
use regex::Regex;
use std::convert::Infallible;
use std::fmt;
use std::sync::LazyLock;

/// A Playwright selector string
///
/// Chained selectors are joined with ` >> `, matching Playwright's
/// selector chaining syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector(String);

impl Selector {
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    /// Returns the selector string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates a selector for `selector` scoped inside this one
    pub fn locator(&self, selector: &str) -> Selector {
        Selector(format!("{} >> {}", self.0, selector))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Selector {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// [`Session`] that resolves locators into [`Selector`] strings
///
/// # Example
///
/// ```ignore
/// use playwright_page_factory::{init_annotated_locators, SelectorSession};
///
/// let session = SelectorSession::scoped("form#login");
/// let mut page = LoginPage::default();
/// init_annotated_locators(&session, &mut page)?;
///
/// let username = page.username.as_ref().unwrap();
/// assert_eq!(username.as_str(), "form#login >> internal:label=\"Username\"i");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorSession {
    scope: Option<Selector>,
    exact: bool,
}

impl SelectorSession {
    /// Session resolving against the whole page
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose selectors are chained after `parent`
    pub fn scoped(parent: impl Into<String>) -> Self {
        Self {
            scope: Some(Selector::new(parent)),
            exact: false,
        }
    }

    /// Render literal values as exact, case-sensitive matches
    ///
    /// By default literal values follow Playwright's `getBy*` default of
    /// case-insensitive substring matching. Test ids are always exact.
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    fn finish(&self, selector: String) -> Result<Selector, Infallible> {
        Ok(match &self.scope {
            Some(scope) => scope.locator(&selector),
            None => Selector(selector),
        })
    }

    fn text_engine(&self, engine: &str, text: &TextMatch<'_>) -> Result<Selector, Infallible> {
        let body = match text {
            TextMatch::Value(value) => escape_for_text_selector(value, self.exact),
            TextMatch::Pattern(regex) => escape_regex_for_selector(regex.as_str()),
        };
        self.finish(format!("internal:{engine}={body}"))
    }

    fn attribute_engine(
        &self,
        attribute: &str,
        text: &TextMatch<'_>,
        exact: bool,
    ) -> Result<Selector, Infallible> {
        let body = match text {
            TextMatch::Value(value) => escape_for_attribute_selector(value, exact),
            TextMatch::Pattern(regex) => escape_regex_for_selector(regex.as_str()),
        };
        let engine = if attribute == "data-testid" {
            "testid"
        } else {
            "attr"
        };
        self.finish(format!("internal:{engine}=[{attribute}={body}]"))
    }
}

impl Session for SelectorSession {
    type Locator = Selector;
    type Error = Infallible;

    fn get_by_alt_text(&self, text: &TextMatch<'_>) -> Result<Selector, Infallible> {
        self.attribute_engine("alt", text, self.exact)
    }

    fn get_by_label(&self, text: &TextMatch<'_>) -> Result<Selector, Infallible> {
        self.text_engine("label", text)
    }

    fn get_by_placeholder(&self, text: &TextMatch<'_>) -> Result<Selector, Infallible> {
        self.attribute_engine("placeholder", text, self.exact)
    }

    fn get_by_role(
        &self,
        role: AriaRole,
        options: &GetByRoleOptions,
    ) -> Result<Selector, Infallible> {
        let mut selector = format!("internal:role={role}");
        if let Some(name) = &options.name {
            let exact = options.exact.unwrap_or(self.exact);
            selector.push_str(&format!(
                "[name={}]",
                escape_for_attribute_selector(name, exact)
            ));
        }
        self.finish(selector)
    }

    fn get_by_test_id(&self, test_id: &TextMatch<'_>) -> Result<Selector, Infallible> {
        self.attribute_engine("data-testid", test_id, true)
    }

    fn get_by_text(&self, text: &TextMatch<'_>) -> Result<Selector, Infallible> {
        self.text_engine("text", text)
    }

    fn get_by_title(&self, text: &TextMatch<'_>) -> Result<Selector, Infallible> {
        self.attribute_engine("title", text, self.exact)
    }

    fn locator(&self, selector: &str) -> Result<Selector, Infallible> {
        self.finish(selector.to_string())
    }
}

fn case_flag(exact: bool) -> char {
    if exact { 's' } else { 'i' }
}

// JSON string literal, as JSON.stringify would produce
fn escape_for_text_selector(text: &str, exact: bool) -> String {
    let quoted = serde_json::Value::String(text.to_string()).to_string();
    format!("{quoted}{}", case_flag(exact))
}

fn escape_for_attribute_selector(value: &str, exact: bool) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"{}", case_flag(exact))
}

// Quotes preceded by an even number of backslashes are unescaped
static UNESCAPED_QUOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(^|[^\\])((?:\\\\)*)(["'`])"#).expect("quote regex is valid")
});

fn escape_regex_for_selector(source: &str) -> String {
    let quoted = UNESCAPED_QUOTE.replace_all(source, r"${1}${2}\${3}");
    format!("/{}/", quoted.replace(">>", "\\>\\>"))
}
