//! External capability/requirement shapes.
//!
//! Stand-ins for types a resolver or repository would hand in: they share no
//! code with `CapReq` and only implement the port traits.

use capreq::{Attributes, CapReq, Capability, Directives, Requirement, ResourceId};

#[derive(Debug, Clone)]
pub struct ForeignParts {
    pub namespace: String,
    pub directives: Directives,
    pub attributes: Attributes,
    pub owner: Option<ResourceId>,
}

impl ForeignParts {
    pub fn mirror(record: &CapReq) -> Self {
        Self {
            namespace: record.namespace().to_string(),
            directives: record.directives().clone(),
            attributes: record.attributes().clone(),
            owner: record.owner().cloned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ForeignCapability(pub ForeignParts);

#[derive(Debug, Clone)]
pub struct ForeignRequirement(pub ForeignParts);

impl ForeignCapability {
    pub fn mirror(record: &CapReq) -> Self {
        Self(ForeignParts::mirror(record))
    }
}

impl ForeignRequirement {
    pub fn mirror(record: &CapReq) -> Self {
        Self(ForeignParts::mirror(record))
    }
}

impl Capability for ForeignCapability {
    fn namespace(&self) -> &str {
        &self.0.namespace
    }
    fn directives(&self) -> &Directives {
        &self.0.directives
    }
    fn attributes(&self) -> &Attributes {
        &self.0.attributes
    }
    fn owner(&self) -> Option<&ResourceId> {
        self.0.owner.as_ref()
    }
}

impl Requirement for ForeignRequirement {
    fn namespace(&self) -> &str {
        &self.0.namespace
    }
    fn directives(&self) -> &Directives {
        &self.0.directives
    }
    fn attributes(&self) -> &Attributes {
        &self.0.attributes
    }
    fn owner(&self) -> Option<&ResourceId> {
        self.0.owner.as_ref()
    }
}
