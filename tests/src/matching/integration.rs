#![cfg(test)]
use bandmatch_core::{RecordingScopeLog, ScopeEvent, User};
use tracing::Level;

use crate::utils::SharedBuf;

/// The canonical demonstration: billy likes paul simon.
#[test]
fn billy_finds_paul_simon() {
    let billy: User = User::new("billy", "paul simon");
    let bands: Vec<String> = vec!["paul simon".into(), "the kooks".into()];

    let log = RecordingScopeLog::new();
    let found = billy.favorite_band_matches_with(&bands, &log);

    assert_eq!(found, Some("paul simon"));
    assert_eq!(log.events().len(), 1 + bands.len());
}

#[test]
fn every_scope_line_carries_favorite_band() {
    let user: User = User::new("billy", "paul simon");
    let log = RecordingScopeLog::new();

    user.favorite_band_matches_with(&["the kooks", "radiohead", "paul simon"], &log);

    let events: Vec<ScopeEvent> = log.events();
    assert!(matches!(events[0], ScopeEvent::UserScope(_)));
    assert_eq!(log.callback_count(), 3);
    assert!(
        events.iter().all(|e| e.favorite_band() == "paul simon"),
        "Scope lines lost the user's favorite band: {:?}",
        events
    );
}

#[test]
fn no_match_and_empty_input() {
    let user: User = User::new("billy", "paul simon");

    assert_eq!(user.favorite_band_matches(&["the kooks", "radiohead"]), None);

    let empty: Vec<&str> = Vec::new();
    assert_eq!(user.favorite_band_matches(&empty), None);
}

#[test]
fn duplicate_match_returns_index_zero() {
    let user: User = User::new("billy", "paul simon");
    let bands: Vec<String> = vec!["paul simon".into(), "paul simon".into()];

    let found: &str = user.favorite_band_matches(&bands).unwrap();
    assert!(std::ptr::eq(found, bands[0].as_str()));
    assert!(!std::ptr::eq(found, bands[1].as_str()));
}

#[test]
fn case_sensitive_comparison() {
    let user: User = User::new("billy", "Paul Simon");
    let log = RecordingScopeLog::new();

    assert_eq!(user.favorite_band_matches_with(&["paul simon"], &log), None);
    assert!(log.events().iter().all(|e| e.favorite_band() == "Paul Simon"));
}

#[test]
fn tracing_sink_emits_both_scopes() {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .finish();

    let found = tracing::subscriber::with_default(subscriber, || {
        User::new("billy", "paul simon")
            .favorite_band_matches(&["paul simon", "the kooks"])
            .map(str::to_string)
    });

    assert_eq!(found.as_deref(), Some("paul simon"));

    let output: String = buf.contents();
    assert_eq!(output.matches("in User scope: paul simon").count(), 1);
    assert_eq!(
        output.matches("in the anonymous function scope: paul simon").count(),
        2
    );
    assert!(
        !output.contains("favorite_band="),
        "Band recorded twice per line: {}",
        output
    );
}
