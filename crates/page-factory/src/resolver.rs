// Resolvers and the dispatch table
//
// A Resolver turns (session, descriptor) into a locator handle. The
// DispatchTable maps every Strategy to its Resolver. The mapping comes
// from an exhaustive match, so adding a Strategy without a resolver is a
// compile error and a lookup can never miss.
//
// Architecture:
// - Text-like strategies share one algorithm: pattern if set, else value
// - Role ignores pattern and always passes value as the name filter
// - Unset is the raw-selector fallback, using value verbatim

use crate::error::{Error, Result};
use crate::locate_by::{LocateBy, TextMatch};
use crate::session::{GetByRoleOptions, Session};
use crate::strategy::Strategy;
use std::sync::OnceLock;

/// Resolution algorithm for one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolver {
    /// `get_by_alt_text` with the active text argument
    AltText,
    /// `get_by_label` with the active text argument
    Label,
    /// `get_by_placeholder` with the active text argument
    Placeholder,
    /// `get_by_role` filtered by accessible name
    Role,
    /// `get_by_test_id` with the active text argument
    TestId,
    /// `get_by_text` with the active text argument
    Text,
    /// `get_by_title` with the active text argument
    Title,
    /// `locator(value)`, used when no strategy is declared
    RawSelector,
}

impl Resolver {
    /// Whether this is the raw-selector fallback
    pub fn is_fallback(self) -> bool {
        self == Resolver::RawSelector
    }

    /// Resolves a descriptor into a locator handle
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPattern`] if the descriptor's pattern does not compile
    /// - [`Error::Session`] if the session rejects the query
    pub fn resolve<S: Session>(self, session: &S, locate_by: &LocateBy) -> Result<S::Locator> {
        match self {
            Resolver::AltText => by_text_match(locate_by, |m| session.get_by_alt_text(m)),
            Resolver::Label => by_text_match(locate_by, |m| session.get_by_label(m)),
            Resolver::Placeholder => by_text_match(locate_by, |m| session.get_by_placeholder(m)),
            Resolver::Role => by_role(session, locate_by),
            Resolver::TestId => by_text_match(locate_by, |m| session.get_by_test_id(m)),
            Resolver::Text => by_text_match(locate_by, |m| session.get_by_text(m)),
            Resolver::Title => by_text_match(locate_by, |m| session.get_by_title(m)),
            Resolver::RawSelector => by_raw_selector(session, locate_by),
        }
    }
}

fn by_text_match<L, E, F>(locate_by: &LocateBy, query: F) -> Result<L>
where
    E: std::error::Error + Send + Sync + 'static,
    F: FnOnce(&TextMatch<'_>) -> std::result::Result<L, E>,
{
    let text_match = locate_by.text_match()?;
    query(&text_match).map_err(Error::session)
}

fn by_role<S: Session>(session: &S, locate_by: &LocateBy) -> Result<S::Locator> {
    let options = GetByRoleOptions::builder()
        .name(&*locate_by.value)
        .build();
    session
        .get_by_role(locate_by.role, &options)
        .map_err(Error::session)
}

fn by_raw_selector<S: Session>(session: &S, locate_by: &LocateBy) -> Result<S::Locator> {
    session.locator(&locate_by.value).map_err(Error::session)
}

impl From<Strategy> for Resolver {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::AltText => Resolver::AltText,
            Strategy::Label => Resolver::Label,
            Strategy::Placeholder => Resolver::Placeholder,
            Strategy::Role => Resolver::Role,
            Strategy::TestId => Resolver::TestId,
            Strategy::Text => Resolver::Text,
            Strategy::Title => Resolver::Title,
            Strategy::Unset => Resolver::RawSelector,
        }
    }
}

/// Immutable Strategy -> Resolver mapping
///
/// Build one with [`DispatchTable::new`] and pass it by reference, or use
/// the process-wide [`DispatchTable::standard`] instance. Tables are never
/// mutated after construction and are safe to share between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTable {
    resolvers: [Resolver; Strategy::ALL.len()],
}

impl DispatchTable {
    /// Builds the table from the exhaustive Strategy -> Resolver mapping
    pub fn new() -> Self {
        let resolvers = Strategy::ALL.map(Resolver::from);
        tracing::trace!(entries = resolvers.len(), "Built locator dispatch table");
        Self { resolvers }
    }

    /// Returns the shared table, building it on first use
    pub fn standard() -> &'static DispatchTable {
        static STANDARD: OnceLock<DispatchTable> = OnceLock::new();
        STANDARD.get_or_init(DispatchTable::new)
    }

    /// Returns the resolver for a strategy
    ///
    /// `Strategy::Unset` yields [`Resolver::RawSelector`]; every other
    /// strategy yields its own resolver.
    pub fn lookup(&self, strategy: Strategy) -> Resolver {
        self.resolvers[strategy.index()]
    }

    /// Looks up the descriptor's strategy and resolves it
    pub fn resolve<S: Session>(&self, session: &S, locate_by: &LocateBy) -> Result<S::Locator> {
        self.lookup(locate_by.strategy).resolve(session, locate_by)
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}
