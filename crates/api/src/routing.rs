//! Navigation routes

use std::fmt;
use std::str::FromStr;

use roster_domain::{Result, RosterError};

const PROFILE_PREFIX: &str = "/user/";

/// The two pages of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Directory,
    /// `/user/{id}`
    Profile(String),
}

impl Route {
    /// Parse a path. Unknown paths are `RosterError::NotFound`.
    ///
    /// # Errors
    /// `RosterError::NotFound` when `path` names no page.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();
        if path == "/" || path.is_empty() {
            return Ok(Self::Directory);
        }
        match path.strip_prefix(PROFILE_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => Ok(Self::Profile(id.to_string())),
            _ => Err(RosterError::NotFound(format!("no page at {path}"))),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Directory => "/".to_string(),
            Self::Profile(id) => format!("{PROFILE_PREFIX}{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
