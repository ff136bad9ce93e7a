// PageFactory - populates page object locator fields
//
// A page object lists its locator fields (name, descriptor, slot) through
// the PageObject trait, usually via #[derive(PageObject)]. The factory
// resolves every descriptor first and only then writes the handles, so a
// failed resolution leaves the page object exactly as it was.
//
// Slot write failures do not abort initialization; they are reported per
// field in the returned InitReport.

use crate::error::{Error, FieldAccessError, Result};
use crate::locate_by::LocateBy;
use crate::resolver::DispatchTable;
use crate::session::Session;
use crate::strategy::Strategy;
use std::cell::OnceCell;
use std::sync::OnceLock;

/// A type whose fields hold locators described by [`LocateBy`] descriptors
///
/// `L` is the locator handle type of the session the page object is
/// initialized against.
///
/// # Example
///
/// ```ignore
/// use playwright_page_factory::{AriaRole, PageObject};
///
/// #[derive(PageObject)]
/// struct LoginPage<L> {
///     #[locate_by(strategy = Label, value = "Username")]
///     username: Option<L>,
///     #[locate_by(strategy = Role, role = Button, value = "Submit")]
///     submit: Option<L>,
///     #[locate_by(value = "#login-button")]
///     login: Option<L>,
///     visits: u32, // not a locator, never touched
/// }
/// ```
pub trait PageObject<L> {
    /// Returns the locator fields declared directly on this type
    ///
    /// Nested page objects are not included.
    fn locator_fields<'a>(&'a mut self) -> Vec<LocatorField<'a, L>>
    where
        L: 'a;
}

/// One locator field of a page object
pub struct LocatorField<'a, L> {
    name: &'a str,
    locate_by: &'a LocateBy,
    slot: &'a mut dyn LocatorSlot<L>,
}

impl<'a, L> LocatorField<'a, L> {
    pub fn new(name: &'a str, locate_by: &'a LocateBy, slot: &'a mut dyn LocatorSlot<L>) -> Self {
        Self {
            name,
            locate_by,
            slot,
        }
    }

    /// Field name
    pub fn name(&self) -> &str {
        self.name
    }

    /// Descriptor declared on the field
    pub fn locate_by(&self) -> &LocateBy {
        self.locate_by
    }
}

/// A field type that can receive a resolved locator
pub trait LocatorSlot<L> {
    /// Stores the locator, replacing any previous one if the slot allows it
    fn assign(&mut self, locator: L) -> std::result::Result<(), FieldAccessError>;
}

impl<L> LocatorSlot<L> for Option<L> {
    fn assign(&mut self, locator: L) -> std::result::Result<(), FieldAccessError> {
        *self = Some(locator);
        Ok(())
    }
}

impl<L> LocatorSlot<L> for OnceLock<L> {
    fn assign(&mut self, locator: L) -> std::result::Result<(), FieldAccessError> {
        self.set(locator).map_err(|_| FieldAccessError::AlreadySet)
    }
}

impl<L> LocatorSlot<L> for OnceCell<L> {
    fn assign(&mut self, locator: L) -> std::result::Result<(), FieldAccessError> {
        self.set(locator).map_err(|_| FieldAccessError::AlreadySet)
    }
}

/// Outcome of writing one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    /// Field name
    pub field: String,
    /// Strategy the field was resolved with
    pub strategy: Strategy,
    /// Whether the locator was stored
    pub result: std::result::Result<(), FieldAccessError>,
}

/// Per-field results of [`PageFactory::init_annotated_locators`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use = "slot write failures are only reported here"]
pub struct InitReport {
    outcomes: Vec<FieldOutcome>,
}

impl InitReport {
    /// All outcomes, in field declaration order
    pub fn outcomes(&self) -> &[FieldOutcome] {
        &self.outcomes
    }

    /// Outcomes whose slot write failed
    pub fn failures(&self) -> impl Iterator<Item = &FieldOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.result.is_err())
    }

    /// Whether every field received its locator
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Number of locator fields visited
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Converts the first slot failure into an error
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldAccess`] naming the first field that could not
    /// be written.
    pub fn into_result(self) -> Result<()> {
        match self.outcomes.into_iter().find(|o| o.result.is_err()) {
            Some(FieldOutcome {
                field,
                result: Err(source),
                ..
            }) => Err(Error::FieldAccess { field, source }),
            _ => Ok(()),
        }
    }
}

/// Initializes page object locators through a dispatch table
///
/// # Example
///
/// ```ignore
/// use playwright_page_factory::{PageFactory, SelectorSession};
///
/// let mut page = LoginPage::default();
/// let report = PageFactory::new().init_annotated_locators(&SelectorSession::new(), &mut page)?;
/// assert!(report.is_complete());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PageFactory<'t> {
    table: &'t DispatchTable,
}

impl PageFactory<'static> {
    /// Factory using [`DispatchTable::standard`]
    pub fn new() -> Self {
        Self::with_table(DispatchTable::standard())
    }
}

impl Default for PageFactory<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> PageFactory<'t> {
    /// Factory using the given table
    pub fn with_table(table: &'t DispatchTable) -> Self {
        Self { table }
    }

    /// Resolves every locator field of `page` and stores the handles
    ///
    /// Existing handles are replaced, so calling this again re-resolves the
    /// page object against `session`.
    ///
    /// # Errors
    ///
    /// Fails without touching any field if a descriptor's pattern is
    /// invalid ([`Error::InvalidPattern`]) or the session rejects a query
    /// ([`Error::Session`]). The error carries the field name as context.
    pub fn init_annotated_locators<S, P>(&self, session: &S, page: &mut P) -> Result<InitReport>
    where
        S: Session,
        P: PageObject<S::Locator> + ?Sized,
    {
        let fields = page.locator_fields();

        let mut resolved = Vec::with_capacity(fields.len());
        for field in &fields {
            let resolver = self.table.lookup(field.locate_by.strategy);
            let locator = resolver
                .resolve(session, field.locate_by)
                .map_err(|e| e.context(format!("Failed to resolve field '{}'", field.name)))?;
            tracing::debug!(
                field = field.name,
                strategy = %field.locate_by.strategy,
                resolver = ?resolver,
                "Resolved locator"
            );
            resolved.push(locator);
        }

        let mut outcomes = Vec::with_capacity(fields.len());
        for (mut field, locator) in fields.into_iter().zip(resolved) {
            let result = field.slot.assign(locator);
            if let Err(e) = &result {
                tracing::warn!(field = field.name, error = %e, "Locator not assigned");
            }
            outcomes.push(FieldOutcome {
                field: field.name.to_string(),
                strategy: field.locate_by.strategy,
                result,
            });
        }

        Ok(InitReport { outcomes })
    }
}

/// Initializes `page` against `session` using the standard dispatch table
///
/// See [`PageFactory::init_annotated_locators`].
pub fn init_annotated_locators<S, P>(session: &S, page: &mut P) -> Result<InitReport>
where
    S: Session,
    P: PageObject<S::Locator> + ?Sized,
{
    PageFactory::new().init_annotated_locators(session, page)
}
