// Recording Session - in-memory Session for integration tests
//
// Records every query it receives and returns a Handle describing that
// query, so tests can assert exactly which session call a descriptor was
// routed to. Raw selectors listed in `reject` fail with RejectedQuery.

// Note: Functions appear "unused" because each test binary compiles separately,
// but they ARE used across multiple test files. Suppress false-positive warnings.
#![allow(dead_code)]

use parking_lot::Mutex;
use playwright_page_factory::{AriaRole, GetByRoleOptions, Session, TextMatch};

/// Text argument as received by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Value(String),
    Pattern(String),
}

impl From<&TextMatch<'_>> for Arg {
    fn from(text: &TextMatch<'_>) -> Self {
        match text {
            TextMatch::Value(value) => Arg::Value(value.to_string()),
            TextMatch::Pattern(regex) => Arg::Pattern(regex.as_str().to_string()),
        }
    }
}

/// One session query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    AltText(Arg),
    Label(Arg),
    Placeholder(Arg),
    Role { role: AriaRole, name: Option<String> },
    TestId(Arg),
    Text(Arg),
    Title(Arg),
    Locator(String),
}

/// Locator handle returned by RecordingSession
///
/// `seq` is the position of the call in the session's log, so handles from
/// a second initialization differ from the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handle {
    pub call: Call,
    pub seq: usize,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("session rejected selector '{0}'")]
pub struct RejectedQuery(pub String);

#[derive(Debug, Default)]
pub struct RecordingSession {
    calls: Mutex<Vec<Call>>,
    reject: Vec<String>,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session that fails raw-selector queries for `selector`
    pub fn rejecting(selector: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reject: vec![selector.to_string()],
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) -> Result<Handle, RejectedQuery> {
        if let Call::Locator(selector) = &call {
            if self.reject.contains(selector) {
                return Err(RejectedQuery(selector.clone()));
            }
        }
        let mut calls = self.calls.lock();
        calls.push(call.clone());
        Ok(Handle {
            call,
            seq: calls.len() - 1,
        })
    }
}

impl Session for RecordingSession {
    type Locator = Handle;
    type Error = RejectedQuery;

    fn get_by_alt_text(&self, text: &TextMatch<'_>) -> Result<Handle, RejectedQuery> {
        self.record(Call::AltText(text.into()))
    }

    fn get_by_label(&self, text: &TextMatch<'_>) -> Result<Handle, RejectedQuery> {
        self.record(Call::Label(text.into()))
    }

    fn get_by_placeholder(&self, text: &TextMatch<'_>) -> Result<Handle, RejectedQuery> {
        self.record(Call::Placeholder(text.into()))
    }

    fn get_by_role(
        &self,
        role: AriaRole,
        options: &GetByRoleOptions,
    ) -> Result<Handle, RejectedQuery> {
        self.record(Call::Role {
            role,
            name: options.name.clone(),
        })
    }

    fn get_by_test_id(&self, test_id: &TextMatch<'_>) -> Result<Handle, RejectedQuery> {
        self.record(Call::TestId(test_id.into()))
    }

    fn get_by_text(&self, text: &TextMatch<'_>) -> Result<Handle, RejectedQuery> {
        self.record(Call::Text(text.into()))
    }

    fn get_by_title(&self, text: &TextMatch<'_>) -> Result<Handle, RejectedQuery> {
        self.record(Call::Title(text.into()))
    }

    fn locator(&self, selector: &str) -> Result<Handle, RejectedQuery> {
        self.record(Call::Locator(selector.to_string()))
    }
}

/// Install a test-friendly tracing subscriber (RUST_LOG controls output)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
