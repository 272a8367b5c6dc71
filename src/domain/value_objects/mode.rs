//! Mode value object - discriminates capabilities from requirements
//!
//! - `Capability` mode: something a resource provides
//! - `Requirement` mode: something a resource needs

use serde::{Deserialize, Serialize};

/// Which side of a wire a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapReqMode {
    /// Provided by the owning resource
    Capability,
    /// Needed by the owning resource
    Requirement,
}

impl CapReqMode {
    /// Returns true if this is capability mode
    pub fn is_capability(&self) -> bool {
        matches!(self, CapReqMode::Capability)
    }

    /// Returns true if this is requirement mode
    pub fn is_requirement(&self) -> bool {
        matches!(self, CapReqMode::Requirement)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CapReqMode::Capability => "capability",
            CapReqMode::Requirement => "requirement",
        }
    }
}

impl std::fmt::Display for CapReqMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
