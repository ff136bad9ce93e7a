// Session - the automation capability locators are resolved against
//
// The page factory never talks to a browser itself. A Session is whatever
// can turn a query into a locator handle: a Playwright page or frame, a
// scoped locator, or the browser-free SelectorSession in this crate.
//
// Handles are opaque to the engine; it only passes them through into the
// page object's fields.

use crate::aria_role::AriaRole;
use crate::locate_by::TextMatch;

/// Query surface needed to resolve page object locators
///
/// Method names follow Playwright's `getBy*` family.
///
/// # Example
///
/// ```ignore
/// use playwright_page_factory::{AriaRole, GetByRoleOptions, Session, TextMatch};
///
/// struct PageSession { /* driver handle */ }
///
/// impl Session for PageSession {
///     type Locator = MyLocator;
///     type Error = MyDriverError;
///
///     fn get_by_label(&self, text: &TextMatch<'_>) -> Result<MyLocator, MyDriverError> {
///         // ask the driver
///     }
///     // ...
/// }
/// ```
pub trait Session {
    /// Locator handle produced by this session
    type Locator;

    /// Error raised when the session rejects a query
    type Error: std::error::Error + Send + Sync + 'static;

    /// Locates elements by their `alt` attribute
    fn get_by_alt_text(&self, text: &TextMatch<'_>) -> Result<Self::Locator, Self::Error>;

    /// Locates input elements by associated label text
    fn get_by_label(&self, text: &TextMatch<'_>) -> Result<Self::Locator, Self::Error>;

    /// Locates input elements by placeholder text
    fn get_by_placeholder(&self, text: &TextMatch<'_>) -> Result<Self::Locator, Self::Error>;

    /// Locates elements by ARIA role and the given options
    fn get_by_role(
        &self,
        role: AriaRole,
        options: &GetByRoleOptions,
    ) -> Result<Self::Locator, Self::Error>;

    /// Locates elements by test id attribute
    fn get_by_test_id(&self, test_id: &TextMatch<'_>) -> Result<Self::Locator, Self::Error>;

    /// Locates elements by text content
    fn get_by_text(&self, text: &TextMatch<'_>) -> Result<Self::Locator, Self::Error>;

    /// Locates elements by their `title` attribute
    fn get_by_title(&self, text: &TextMatch<'_>) -> Result<Self::Locator, Self::Error>;

    /// Locates elements by a raw selector string
    fn locator(&self, selector: &str) -> Result<Self::Locator, Self::Error>;
}

/// Options for [`Session::get_by_role`]
///
/// See: <https://playwright.dev/docs/api/class-page#page-get-by-role>
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetByRoleOptions {
    /// Accessible name filter. `Some("")` is a real filter, not "no filter".
    pub name: Option<String>,
    /// Whether the name must match exactly (case-sensitive, whole string)
    pub exact: Option<bool>,
}

impl GetByRoleOptions {
    /// Create a new builder for GetByRoleOptions
    pub fn builder() -> GetByRoleOptionsBuilder {
        GetByRoleOptionsBuilder::default()
    }
}

/// Builder for GetByRoleOptions
#[derive(Debug, Clone, Default)]
pub struct GetByRoleOptionsBuilder {
    name: Option<String>,
    exact: Option<bool>,
}

impl GetByRoleOptionsBuilder {
    /// Set the accessible name filter
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Require an exact name match
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact);
        self
    }

    /// Build the GetByRoleOptions
    pub fn build(self) -> GetByRoleOptions {
        GetByRoleOptions {
            name: self.name,
            exact: self.exact,
        }
    }
}
