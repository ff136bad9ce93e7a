// Locating strategies
//
// The closed set of ways a page object field can ask for an element.
// Each strategy except `Unset` corresponds to one of Playwright's
// `getBy*` queries; `Unset` falls back to a raw selector.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy used to locate an element
///
/// # Example
///
/// ```ignore
/// use playwright_page_factory::Strategy;
///
/// let strategy: Strategy = "test_id".parse()?;
/// assert_eq!(strategy, Strategy::TestId);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Match by the `alt` attribute (images, areas)
    AltText,
    /// Match by associated `<label>` or `aria-label` text
    Label,
    /// Match by the `placeholder` attribute
    Placeholder,
    /// Match by ARIA role, filtered by accessible name
    Role,
    /// Match by the `data-testid` attribute
    TestId,
    /// Match by visible text content
    Text,
    /// Match by the `title` attribute
    Title,
    /// No declared strategy; the value is used as a raw selector
    #[default]
    Unset,
}

impl Strategy {
    /// Every strategy, in declaration order
    pub const ALL: [Strategy; 8] = [
        Strategy::AltText,
        Strategy::Label,
        Strategy::Placeholder,
        Strategy::Role,
        Strategy::TestId,
        Strategy::Text,
        Strategy::Title,
        Strategy::Unset,
    ];

    /// Returns the snake_case name used in manifests and logs
    pub const fn as_str(self) -> &'static str {
        match self {
            Strategy::AltText => "alt_text",
            Strategy::Label => "label",
            Strategy::Placeholder => "placeholder",
            Strategy::Role => "role",
            Strategy::TestId => "test_id",
            Strategy::Text => "text",
            Strategy::Title => "title",
            Strategy::Unset => "unset",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Accepts both the snake_case manifest names and the Rust variant names
impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| {
                strategy.as_str() == s || format!("{strategy:?}").eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| Error::InvalidArgument(format!("unknown locator strategy '{s}'")))
    }
}
