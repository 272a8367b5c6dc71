//! Version value object
//!
//! `major.minor.micro.qualifier`, where omitted numeric parts default to `0`
//! and the qualifier defaults to empty.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{CapReqError, CapReqResult};

/// A four-part component version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Version {
    major: u32,
    minor: u32,
    micro: u32,
    qualifier: String,
}

impl Version {
    /// Create a version without qualifier
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: String::new(),
        }
    }

    /// Create a version with a qualifier
    ///
    /// Fails when the qualifier contains characters outside `[A-Za-z0-9_-]`.
    pub fn with_qualifier(
        major: u32,
        minor: u32,
        micro: u32,
        qualifier: &str,
    ) -> CapReqResult<Self> {
        if !qualifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(CapReqError::invalid_argument(format!(
                "invalid version qualifier '{}'",
                qualifier
            )));
        }
        Ok(Self {
            major,
            minor,
            micro,
            qualifier: qualifier.to_string(),
        })
    }

    /// Parse `major[.minor[.micro[.qualifier]]]`
    pub fn parse(s: &str) -> CapReqResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CapReqError::invalid_argument("empty version"));
        }

        let mut parts = trimmed.splitn(4, '.');
        let mut numbers = [0u32; 3];
        for (idx, slot) in numbers.iter_mut().enumerate() {
            match parts.next() {
                Some(part) => {
                    *slot = part.parse().map_err(|_| {
                        CapReqError::invalid_argument(format!(
                            "invalid version '{}': component {} is not a number",
                            trimmed,
                            idx + 1
                        ))
                    })?;
                }
                None => break,
            }
        }
        let qualifier = match parts.next() {
            Some("") => {
                return Err(CapReqError::invalid_argument(format!(
                    "invalid version '{}': empty qualifier",
                    trimmed
                )))
            }
            Some(q) => q,
            None => "",
        };

        Self::with_qualifier(numbers[0], numbers[1], numbers[2], qualifier)
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn micro(&self) -> u32 {
        self.micro
    }

    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.micro, &self.qualifier).cmp(&(
            other.major,
            other.minor,
            other.micro,
            &other.qualifier,
        ))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = CapReqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
