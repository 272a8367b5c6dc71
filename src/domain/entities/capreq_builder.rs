//! CapReq builder
//!
//! Assembles capabilities and requirements one entry at a time, mostly for
//! synthetic requirements that are not read from resource metadata.

use crate::domain::ports::{Attributes, Directives};
use crate::domain::value_objects::namespace::{
    REQUIREMENT_FILTER_DIRECTIVE, REQUIREMENT_RESOLUTION_DIRECTIVE, RESOLUTION_OPTIONAL,
};
use crate::domain::value_objects::{Attr, CapReqMode, ResourceId};
use crate::error::{CapReqError, CapReqResult};

use super::CapReq;

#[derive(Debug, Clone, Default)]
pub struct CapReqBuilder {
    namespace: String,
    owner: Option<ResourceId>,
    directives: Directives,
    attributes: Attributes,
}

impl CapReqBuilder {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Start a requirement that selects `capability` by its primary attribute
    ///
    /// The filter is `(<namespace>=<value>)`. Fails when the capability has
    /// no attribute keyed by its namespace.
    pub fn requirement_for(capability: &CapReq) -> CapReqResult<Self> {
        let value = capability.primary_attribute().ok_or_else(|| {
            CapReqError::invalid_argument(format!(
                "capability {} has no '{}' attribute to select on",
                capability.detail(),
                capability.namespace()
            ))
        })?;
        let filter = format!(
            "({}={})",
            capability.namespace(),
            escape_filter_value(&value.to_string())
        );
        Ok(Self::new(capability.namespace()).filter(filter))
    }

    pub fn with_owner(mut self, owner: ResourceId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn add_directive(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.directives.insert(key.into(), value.into());
        self
    }

    pub fn add_directives<K, V>(mut self, directives: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.directives
            .extend(directives.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn add_attribute(mut self, key: impl Into<String>, value: impl Into<Attr>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn add_attributes<K, V>(mut self, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Attr>,
    {
        self.attributes
            .extend(attributes.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set the `filter` directive
    pub fn filter(self, filter: impl Into<String>) -> Self {
        self.add_directive(REQUIREMENT_FILTER_DIRECTIVE, filter)
    }

    /// Mark the requirement as optional
    pub fn optional(self) -> Self {
        self.add_directive(REQUIREMENT_RESOLUTION_DIRECTIVE, RESOLUTION_OPTIONAL)
    }

    pub fn build_capability(self) -> CapReqResult<CapReq> {
        self.build(CapReqMode::Capability)
    }

    pub fn build_requirement(self) -> CapReqResult<CapReq> {
        self.build(CapReqMode::Requirement)
    }

    pub fn build(self, mode: CapReqMode) -> CapReqResult<CapReq> {
        CapReq::new(
            Some(mode),
            Some(&self.namespace),
            self.owner,
            self.directives,
            self.attributes,
        )
    }
}

/// Escape `\`, `*`, `(` and `)` for use as a filter value
pub fn escape_filter_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '*' | '(' | ')') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
