//! Address-backed navigation state.
//!
//! The viewer keeps its selection in a URL query string so that the exact
//! view can be reproduced by passing the address back on the command line.
//! Writes rewrite the address in place; nothing is fetched or reopened.

use crate::config::LOCATION_BASE;
use crate::error::{AppError, Result};
use reqwest::Url;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    /// Parses a full URL, a bare query (`?usr=LHC1`) or `key=value` pairs.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let parsed = if has_scheme(input) {
            Url::parse(input)
        } else {
            let query = input.trim_start_matches('?');
            Url::parse(LOCATION_BASE).and_then(|base| base.join(&format!("?{}", query)))
        };

        parsed
            .map(|url| Self { url })
            .map_err(|e| AppError::InvalidLocation(format!("{}: {}", input, e)))
    }

    /// Reads the first occurrence of a query parameter.
    pub fn get_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Sets a query parameter in place.
    ///
    /// The first occurrence keeps its position and takes the new value, later
    /// duplicates are dropped, and an absent parameter is appended.
    pub fn set_param(&mut self, name: &str, value: &str) {
        let mut replaced = false;
        let mut pairs: Vec<(String, String)> = Vec::new();

        for (key, current) in self.url.query_pairs() {
            if key == name {
                if !replaced {
                    pairs.push((key.into_owned(), value.to_string()));
                    replaced = true;
                }
            } else {
                pairs.push((key.into_owned(), current.into_owned()));
            }
        }

        if !replaced {
            pairs.push((name.to_string(), value.to_string()));
        }

        self.url.query_pairs_mut().clear().extend_pairs(pairs);
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

/// Only text before the query can carry a scheme; `?ref=https://...` is a bare query.
fn has_scheme(input: &str) -> bool {
    let head = input.split('?').next().unwrap_or_default();
    head.contains("://")
}

impl Default for Location {
    fn default() -> Self {
        Self {
            url: Url::parse(LOCATION_BASE).expect("LOCATION_BASE must be an absolute URL"),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
