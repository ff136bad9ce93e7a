// Integration tests for resolvers and the dispatch table
//
// Tests cover:
// - Value vs pattern routing for every text-like strategy
// - Role routing (name filter passed through, pattern ignored)
// - Raw-selector fallback for Unset
// - Error propagation (invalid patterns, session errors)

mod recording_session;

use playwright_page_factory::{
    AriaRole, DispatchTable, Error, LocateBy, Resolver, Session, Strategy,
};
use recording_session::{Arg, Call, RecordingSession, RejectedQuery};

const TEXT_LIKE: [Strategy; 6] = [
    Strategy::AltText,
    Strategy::Label,
    Strategy::Placeholder,
    Strategy::TestId,
    Strategy::Text,
    Strategy::Title,
];

fn expected_call(strategy: Strategy, arg: Arg) -> Call {
    match strategy {
        Strategy::AltText => Call::AltText(arg),
        Strategy::Label => Call::Label(arg),
        Strategy::Placeholder => Call::Placeholder(arg),
        Strategy::TestId => Call::TestId(arg),
        Strategy::Text => Call::Text(arg),
        Strategy::Title => Call::Title(arg),
        other => panic!("{other} is not text-like"),
    }
}

fn resolve_one(locate_by: &LocateBy) -> (RecordingSession, Call) {
    let session = RecordingSession::new();
    let handle = DispatchTable::standard()
        .resolve(&session, locate_by)
        .expect("resolution should succeed");
    (session, handle.call)
}

// ============================================================================
// Text-like strategies
// ============================================================================

#[test]
fn test_value_routes_to_value_query() {
    for strategy in TEXT_LIKE {
        let locate_by = LocateBy::new(strategy).with_value("Username");
        let (session, call) = resolve_one(&locate_by);

        let expected = expected_call(strategy, Arg::Value("Username".to_string()));
        assert_eq!(call, expected, "{strategy}");
        assert_eq!(session.calls(), vec![expected]);
    }
}

#[test]
fn test_pattern_wins_over_value() {
    for strategy in TEXT_LIKE {
        let locate_by = LocateBy::new(strategy)
            .with_value("this value is ignored")
            .with_pattern("^User(name)?$");
        let (_, call) = resolve_one(&locate_by);

        assert_eq!(
            call,
            expected_call(strategy, Arg::Pattern("^User(name)?$".to_string())),
            "{strategy}"
        );
    }
}

#[test]
fn test_empty_value_is_passed_through() {
    let (_, call) = resolve_one(&LocateBy::new(Strategy::Text));
    assert_eq!(call, Call::Text(Arg::Value(String::new())));
}

// ============================================================================
// Role and raw selectors
// ============================================================================

#[test]
fn test_role_passes_role_and_name() {
    let (_, call) = resolve_one(&LocateBy::role(AriaRole::Button, "Submit"));
    assert_eq!(
        call,
        Call::Role {
            role: AriaRole::Button,
            name: Some("Submit".to_string()),
        }
    );
}

#[test]
fn test_role_keeps_empty_name_filter() {
    let (_, call) = resolve_one(&LocateBy::role(AriaRole::Navigation, ""));
    assert_eq!(
        call,
        Call::Role {
            role: AriaRole::Navigation,
            name: Some(String::new()),
        }
    );
}

#[test]
fn test_role_ignores_pattern() {
    let plain = LocateBy::role(AriaRole::Link, "Home");
    let (_, without_pattern) = resolve_one(&plain);

    // Even an invalid pattern has no effect on a Role descriptor
    for pattern in ["^Ho", "[invalid("] {
        let (_, with_pattern) = resolve_one(&plain.clone().with_pattern(pattern));
        assert_eq!(with_pattern, without_pattern);
    }
}

#[test]
fn test_unset_uses_raw_selector() {
    let (session, call) = resolve_one(&LocateBy::selector("#login-button"));
    assert_eq!(call, Call::Locator("#login-button".to_string()));
    assert_eq!(session.calls().len(), 1);
}

#[test]
fn test_unset_ignores_pattern_and_role() {
    let locate_by = LocateBy::selector("css=form >> text=Login")
        .with_pattern("[invalid(")
        .with_role(AriaRole::Button);
    let (_, call) = resolve_one(&locate_by);
    assert_eq!(call, Call::Locator("css=form >> text=Login".to_string()));
}

// ============================================================================
// Dispatch table
// ============================================================================

#[test]
fn test_lookup_returns_strategy_resolver() {
    let table = DispatchTable::new();
    let expected = [
        (Strategy::AltText, Resolver::AltText),
        (Strategy::Label, Resolver::Label),
        (Strategy::Placeholder, Resolver::Placeholder),
        (Strategy::Role, Resolver::Role),
        (Strategy::TestId, Resolver::TestId),
        (Strategy::Text, Resolver::Text),
        (Strategy::Title, Resolver::Title),
        (Strategy::Unset, Resolver::RawSelector),
    ];
    for (strategy, resolver) in expected {
        assert_eq!(table.lookup(strategy), resolver);
    }
}

#[test]
fn test_resolver_can_be_called_directly() {
    let session = RecordingSession::new();
    let handle = Resolver::Label
        .resolve(&session, &LocateBy::text("Username"))
        .unwrap();
    // The resolver decides the query, not the descriptor's strategy
    assert_eq!(handle.call, Call::Label(Arg::Value("Username".to_string())));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_invalid_pattern_fails_without_session_call() {
    let session = RecordingSession::new();
    let err = DispatchTable::standard()
        .resolve(&session, &LocateBy::text("").with_pattern("[invalid("))
        .unwrap_err();

    assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "[invalid("));
    assert!(session.calls().is_empty());
}

#[test]
fn test_session_error_propagates_unchanged() {
    let session = RecordingSession::rejecting("#gone");
    let err = DispatchTable::standard()
        .resolve(&session, &LocateBy::selector("#gone"))
        .unwrap_err();

    let Error::Session(source) = &err else {
        panic!("expected session error, got {err:?}");
    };
    assert_eq!(
        source.downcast_ref::<RejectedQuery>(),
        Some(&RejectedQuery("#gone".to_string()))
    );
}

#[test]
fn test_resolves_every_strategy_through_generic_session() {
    fn resolve_all<S: Session>(session: &S) -> Vec<S::Locator> {
        Strategy::ALL
            .into_iter()
            .map(|strategy| {
                DispatchTable::standard()
                    .resolve(session, &LocateBy::new(strategy).with_value("x"))
                    .unwrap()
            })
            .collect()
    }

    let session = RecordingSession::new();
    assert_eq!(resolve_all(&session).len(), Strategy::ALL.len());
    assert_eq!(session.calls().len(), Strategy::ALL.len());
}
