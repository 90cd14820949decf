//! # User Model
//!
//! A user with a favorite band, and the query that looks that band up in a
//! list of candidates.

use crate::scope::{ScopeLog, TracingScopeLog};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    favorite_band: String,
}

impl User {
    pub fn new(name: impl Into<String>, favorite_band: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            favorite_band: favorite_band.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn favorite_band(&self) -> &str {
        &self.favorite_band
    }

    /// Returns the first entry of `bands` equal to the favorite band.
    ///
    /// Scope diagnostics are emitted as `debug` tracing events.
    pub fn favorite_band_matches<'b, S>(&self, bands: &'b [S]) -> Option<&'b str>
    where
        S: AsRef<str>,
    {
        self.favorite_band_matches_with(bands, &TracingScopeLog)
    }

    /// Same as [`favorite_band_matches`](Self::favorite_band_matches), reporting to `log`.
    ///
    /// The whole list is filtered before the first match is taken, so `log`
    /// sees one callback line per element even when the match is at index 0.
    pub fn favorite_band_matches_with<'b, S, L>(&self, bands: &'b [S], log: &L) -> Option<&'b str>
    where
        S: AsRef<str>,
        L: ScopeLog + ?Sized,
    {
        log.user_scope(&self.favorite_band);
        self.matching_bands(bands, log).into_iter().next()
    }

    /// Every entry of `bands` equal to the favorite band, in input order.
    ///
    /// Comparison is exact and case-sensitive.
    pub fn matching_bands<'b, S, L>(&self, bands: &'b [S], log: &L) -> Vec<&'b str>
    where
        S: AsRef<str>,
        L: ScopeLog + ?Sized,
    {
        bands
            .iter()
            .map(|band| band.as_ref())
            .filter(|band| {
                log.callback_scope(&self.favorite_band);
                *band == self.favorite_band
            })
            .collect()
    }
}
