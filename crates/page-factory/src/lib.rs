//! playwright-page-factory: Declarative page objects for Playwright
//!
//! Page object fields declare *how* to find their element; the page factory
//! turns those declarations into locators when the page object is
//! initialized. Nothing here drives a browser: locators are produced by a
//! [`Session`], which can be a Playwright page wrapper or the built-in
//! [`SelectorSession`].
//!
//! # Examples
//!
//! ## Derived page object
//!
//! ```ignore
//! use playwright_page_factory::{init_annotated_locators, PageObject, Selector, SelectorSession};
//!
//! #[derive(Default, PageObject)]
//! struct LoginPage {
//!     #[locate_by(strategy = Label, value = "Username")]
//!     username: Option<Selector>,
//!     #[locate_by(strategy = Placeholder, pattern = "(?i)password")]
//!     password: Option<Selector>,
//!     #[locate_by(strategy = Role, role = Button, value = "Submit")]
//!     submit: Option<Selector>,
//!     #[locate_by(value = "#login-button")]
//!     login: Option<Selector>,
//! }
//!
//! fn main() -> playwright_page_factory::Result<()> {
//!     let mut page = LoginPage::default();
//!     let report = init_annotated_locators(&SelectorSession::new(), &mut page)?;
//!     assert!(report.is_complete());
//!
//!     assert_eq!(
//!         page.submit.unwrap().as_str(),
//!         "internal:role=button[name=\"Submit\"i]"
//!     );
//!     assert_eq!(page.login.unwrap().as_str(), "#login-button");
//!     Ok(())
//! }
//! ```
//!
//! ## Runtime page object
//!
//! ```ignore
//! use playwright_page_factory::{init_annotated_locators, LocateBy, LocatorMap, SelectorSession};
//!
//! let mut page = LocatorMap::new();
//! let username = page.register("username", LocateBy::label("Username"))?;
//! init_annotated_locators(&SelectorSession::new(), &mut page)?;
//!
//! assert_eq!(page.get(username).unwrap().as_str(), "internal:label=\"Username\"i");
//! ```
//!
//! # Resolution rules
//!
//! | strategy | session call |
//! |---|---|
//! | `AltText`, `Label`, `Placeholder`, `TestId`, `Text`, `Title` | `get_by_*(pattern)` if `pattern` is set, else `get_by_*(value)` |
//! | `Role` | `get_by_role(role, name = value)`; `pattern` ignored |
//! | `Unset` | `locator(value)` |

pub mod aria_role;
pub mod error;
pub mod locate_by;
pub mod locator_map;
pub mod page_factory;
pub mod resolver;
pub mod selector;
pub mod session;
pub mod strategy;

pub use aria_role::AriaRole;
pub use error::{Error, FieldAccessError, Result};
pub use locate_by::{LocateBy, TextMatch};
pub use locator_map::{LocatorKey, LocatorManifest, LocatorMap, ManifestField};
pub use page_factory::{
    FieldOutcome, InitReport, LocatorField, LocatorSlot, PageFactory, PageObject,
    init_annotated_locators,
};
pub use resolver::{DispatchTable, Resolver};
pub use selector::{Selector, SelectorSession};
pub use session::{GetByRoleOptions, GetByRoleOptionsBuilder, Session};
pub use strategy::Strategy;

/// Derive macro implementing [`PageObject`] from `#[locate_by(...)]` field
/// attributes.
///
/// Re-exported from the `playwright-page-factory-macros` crate when the
/// `macros` feature is enabled (default-on).
#[cfg(feature = "macros")]
pub use playwright_page_factory_macros::PageObject;
