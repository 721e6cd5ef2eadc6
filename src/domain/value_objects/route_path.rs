//! Route Path Value Object
//!
//! A normalized absolute route such as `/dashboard/policies/new`:
//! - Always starts with `/`
//! - No query string or fragment
//! - No empty segments, trailing `/` removed (except for the root itself)
//!
//! Matching is done per segment, so `/dashboard/policies-archive` is never
//! treated as lying beneath `/dashboard/policies`.

use std::fmt;

use serde::Serialize;

/// Error when route validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePathError {
    /// Route is empty
    Empty,
    /// Route does not start with `/`
    NotAbsolute,
    /// Route carries a `?query` or `#fragment`
    HasQueryOrFragment,
    /// Route contains `//`
    EmptySegment,
    /// Route contains `.` or `..` segments
    RelativeSegment,
    /// A segment starts or ends with whitespace
    PaddedSegment,
}

impl fmt::Display for RoutePathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutePathError::Empty => write!(f, "route is empty"),
            RoutePathError::NotAbsolute => write!(f, "route must start with '/'"),
            RoutePathError::HasQueryOrFragment => {
                write!(f, "route must not contain a query string or fragment")
            }
            RoutePathError::EmptySegment => write!(f, "route contains an empty segment"),
            RoutePathError::RelativeSegment => {
                write!(f, "route contains '.' or '..' segments")
            }
            RoutePathError::PaddedSegment => {
                write!(f, "route segment starts or ends with whitespace")
            }
        }
    }
}

impl std::error::Error for RoutePathError {}

/// A validated, normalized route path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RoutePath(String);

impl RoutePath {
    /// Parse a route from a menu declaration.
    ///
    /// Strict: anything other than a clean absolute route is rejected.
    pub fn parse(raw: &str) -> Result<Self, RoutePathError> {
        if raw.is_empty() {
            return Err(RoutePathError::Empty);
        }
        if !raw.starts_with('/') {
            return Err(RoutePathError::NotAbsolute);
        }
        if raw.contains(['?', '#']) {
            return Err(RoutePathError::HasQueryOrFragment);
        }

        let trimmed = raw.strip_suffix('/').unwrap_or(raw);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        if trimmed[1..].split('/').any(str::is_empty) {
            return Err(RoutePathError::EmptySegment);
        }
        if trimmed[1..].split('/').any(|s| s == "." || s == "..") {
            return Err(RoutePathError::RelativeSegment);
        }
        if trimmed[1..].split('/').any(|s| s.trim() != s) {
            return Err(RoutePathError::PaddedSegment);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Interpret the location reported by the router.
    ///
    /// Lenient: whitespace around segments, a query string, a fragment,
    /// repeated slashes and a trailing slash are dropped. Returns `None` when nothing
    /// route-like is left, which callers treat as "no entry active".
    pub fn from_location(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let end = raw.find(['?', '#']).unwrap_or(raw.len());
        let raw = &raw[..end];
        if !raw.starts_with('/') {
            return None;
        }

        let segments: Vec<&str> = raw
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if segments.iter().any(|s| *s == "." || *s == "..") {
            return None;
        }
        if segments.is_empty() {
            return Some(Self::root());
        }
        Some(Self(format!("/{}", segments.join("/"))))
    }

    /// The root route `/`
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Get the route as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate the route's segments (none for the root)
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Number of segments; used to rank competing matches
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// True if `self` equals `ancestor` or lies beneath it on a segment boundary.
    pub fn is_within(&self, ancestor: &RoutePath) -> bool {
        let mut mine = self.segments();
        ancestor
            .segments()
            .all(|segment| mine.next() == Some(segment))
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
