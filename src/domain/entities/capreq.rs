//! CapReq entity - one capability or requirement of a resource
//!
//! The record is an immutable value: construction snapshots the caller's
//! directive and attribute tables into sorted maps, and nothing hands out a
//! mutable path afterwards. That immutability is what makes the cached hash
//! sound.
//!
//! Equality is polymorphic over three shapes:
//!
//! 1. another `CapReq` (mode is compared too),
//! 2. an external [`Capability`], only while this record is in capability mode,
//! 3. an external [`Requirement`], only while this record is in requirement mode.
//!
//! Only the direction `CapReq == other` is guaranteed. Whether an external
//! type considers itself equal to a `CapReq` is up to that type.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use serde::Serialize;

use crate::domain::ports::{Attributes, Capability, Directives, Requirement};
use crate::domain::value_objects::namespace::{
    REQUIREMENT_FILTER_DIRECTIVE, REQUIREMENT_RESOLUTION_DIRECTIVE, RESOLUTION_OPTIONAL,
};
use crate::domain::value_objects::{Attr, CapReqMode, ResourceId};
use crate::error::{CapReqError, CapReqResult};

/// Marker appended to the rendering of an optional requirement
pub const OPTIONAL_MARKER: &str = "%OPT";

/// Rendered in place of a missing primary attribute or filter
const MISSING: &str = "null";

/// A capability or requirement, with structural identity
#[derive(Clone, Serialize)]
pub struct CapReq {
    mode: CapReqMode,
    namespace: String,
    owner: Option<ResourceId>,
    directives: Directives,
    attributes: Attributes,
    /// Filled on first hash. Racing initializers compute the same value.
    #[serde(skip)]
    hash_code: OnceLock<u64>,
}

/// The right-hand side of [`CapReq::equals`]
#[derive(Clone, Copy)]
pub enum Comparand<'a> {
    Native(&'a CapReq),
    Capability(&'a dyn Capability),
    Requirement(&'a dyn Requirement),
}

impl<'a> From<&'a CapReq> for Comparand<'a> {
    fn from(record: &'a CapReq) -> Self {
        Comparand::Native(record)
    }
}

impl CapReq {
    /// Create a record
    ///
    /// Fails with `InvalidArgument` when `mode` or `namespace` is absent.
    /// An empty namespace is accepted. Directives and attributes are copied
    /// out of the given iterators, so the caller's own maps stay independent
    /// of the record.
    pub fn new<D, DK, DV, A, AK, AV>(
        mode: Option<CapReqMode>,
        namespace: Option<&str>,
        owner: Option<ResourceId>,
        directives: D,
        attributes: A,
    ) -> CapReqResult<Self>
    where
        D: IntoIterator<Item = (DK, DV)>,
        DK: Into<String>,
        DV: Into<String>,
        A: IntoIterator<Item = (AK, AV)>,
        AK: Into<String>,
        AV: Into<Attr>,
    {
        let mode = mode.ok_or_else(|| CapReqError::invalid_argument("mode must not be null"))?;
        let namespace = namespace
            .ok_or_else(|| CapReqError::invalid_argument("namespace must not be null"))?
            .to_string();

        Ok(Self {
            mode,
            namespace,
            owner,
            directives: directives
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            hash_code: OnceLock::new(),
        })
    }

    /// Create a capability-mode record
    pub fn capability<D, DK, DV, A, AK, AV>(
        namespace: &str,
        owner: Option<ResourceId>,
        directives: D,
        attributes: A,
    ) -> CapReqResult<Self>
    where
        D: IntoIterator<Item = (DK, DV)>,
        DK: Into<String>,
        DV: Into<String>,
        A: IntoIterator<Item = (AK, AV)>,
        AK: Into<String>,
        AV: Into<Attr>,
    {
        Self::new(
            Some(CapReqMode::Capability),
            Some(namespace),
            owner,
            directives,
            attributes,
        )
    }

    /// Create a requirement-mode record
    pub fn requirement<D, DK, DV, A, AK, AV>(
        namespace: &str,
        owner: Option<ResourceId>,
        directives: D,
        attributes: A,
    ) -> CapReqResult<Self>
    where
        D: IntoIterator<Item = (DK, DV)>,
        DK: Into<String>,
        DV: Into<String>,
        A: IntoIterator<Item = (AK, AV)>,
        AK: Into<String>,
        AV: Into<Attr>,
    {
        Self::new(
            Some(CapReqMode::Requirement),
            Some(namespace),
            owner,
            directives,
            attributes,
        )
    }

    pub fn mode(&self) -> CapReqMode {
        self.mode
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn directives(&self) -> &Directives {
        &self.directives
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn owner(&self) -> Option<&ResourceId> {
        self.owner.as_ref()
    }

    /// The attribute keyed by the namespace itself, if any
    pub fn primary_attribute(&self) -> Option<&Attr> {
        self.attributes.get(&self.namespace)
    }

    /// The requirement filter directive, if any
    pub fn filter(&self) -> Option<&str> {
        self.directives
            .get(REQUIREMENT_FILTER_DIRECTIVE)
            .map(String::as_str)
    }

    /// True when the resolution directive is `optional`
    pub fn is_optional(&self) -> bool {
        self.directives
            .get(REQUIREMENT_RESOLUTION_DIRECTIVE)
            .is_some_and(|v| v == RESOLUTION_OPTIONAL)
    }

    /// Polymorphic equality against any of the three supported shapes
    pub fn equals(&self, other: Comparand<'_>) -> bool {
        match other {
            Comparand::Native(other) => self.equals_native(other),
            Comparand::Capability(other) => self.equals_capability(other),
            Comparand::Requirement(other) => self.equals_requirement(other),
        }
    }

    /// Compare against an external capability
    ///
    /// Always false for a requirement-mode record, unless `other` is itself a
    /// native record (then the native rules apply).
    pub fn equals_capability(&self, other: &dyn Capability) -> bool {
        if let Some(native) = other.as_capreq() {
            return self.equals_native(native);
        }
        self.mode.is_capability()
            && self.same_fields(
                other.namespace(),
                other.attributes(),
                other.directives(),
                other.owner(),
            )
    }

    /// Compare against an external requirement
    ///
    /// Always false for a capability-mode record, unless `other` is itself a
    /// native record.
    pub fn equals_requirement(&self, other: &dyn Requirement) -> bool {
        if let Some(native) = other.as_capreq() {
            return self.equals_native(native);
        }
        self.mode.is_requirement()
            && self.same_fields(
                other.namespace(),
                other.attributes(),
                other.directives(),
                other.owner(),
            )
    }

    fn equals_native(&self, other: &CapReq) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.mode == other.mode
            && self.same_fields(
                &other.namespace,
                &other.attributes,
                &other.directives,
                other.owner.as_ref(),
            )
    }

    fn same_fields(
        &self,
        namespace: &str,
        attributes: &Attributes,
        directives: &Directives,
        owner: Option<&ResourceId>,
    ) -> bool {
        self.namespace == namespace
            && self.attributes == *attributes
            && self.directives == *directives
            && self.owner.as_ref() == owner
    }

    /// Structural hash, computed on first use and cached
    ///
    /// Covers mode, namespace, owner, directives and attributes. The maps
    /// are sorted, so entry insertion order never shows up here.
    pub fn hash_code(&self) -> u64 {
        *self.hash_code.get_or_init(|| self.compute_hash())
    }

    fn compute_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.mode.hash(&mut hasher);
        self.namespace.hash(&mut hasher);
        self.owner.hash(&mut hasher);
        self.directives.hash(&mut hasher);
        self.attributes.hash(&mut hasher);
        hasher.finish()
    }

    /// Short diagnostic rendering (same as `Display`)
    ///
    /// For logs and error messages only; never use it as a key.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Long diagnostic rendering: `[namespace]{attributes}{directives}`
    pub fn detail(&self) -> String {
        let mut out = format!("[{}]", self.namespace);
        push_map(&mut out, &self.attributes);
        push_map(&mut out, &self.directives);
        out
    }
}

fn push_map<V: fmt::Display>(out: &mut String, map: &std::collections::BTreeMap<String, V>) {
    out.push('{');
    for (idx, (k, v)) in map.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(k);
        out.push('=');
        out.push_str(&v.to_string());
    }
    out.push('}');
}

impl PartialEq for CapReq {
    fn eq(&self, other: &Self) -> bool {
        self.equals_native(other)
    }
}

impl Eq for CapReq {}

impl<'a> PartialEq<dyn Capability + 'a> for CapReq {
    fn eq(&self, other: &(dyn Capability + 'a)) -> bool {
        self.equals_capability(other)
    }
}

impl<'a> PartialEq<dyn Requirement + 'a> for CapReq {
    fn eq(&self, other: &(dyn Requirement + 'a)) -> bool {
        self.equals_requirement(other)
    }
}

impl Hash for CapReq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for CapReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            CapReqMode::Capability => match self.primary_attribute() {
                Some(value) => write!(f, "{}={}", self.namespace, value),
                None => write!(f, "{}={}", self.namespace, MISSING),
            },
            CapReqMode::Requirement => {
                f.write_str(self.filter().unwrap_or(MISSING))?;
                if self.is_optional() {
                    f.write_str(OPTIONAL_MARKER)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for CapReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapReq")
            .field("mode", &self.mode)
            .field("namespace", &self.namespace)
            .field("owner", &self.owner)
            .field("directives", &self.directives)
            .field("attributes", &self.attributes)
            .finish()
    }
}

impl Capability for CapReq {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn directives(&self) -> &Directives {
        &self.directives
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn owner(&self) -> Option<&ResourceId> {
        self.owner.as_ref()
    }

    fn as_capreq(&self) -> Option<&CapReq> {
        Some(self)
    }
}

impl Requirement for CapReq {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn directives(&self) -> &Directives {
        &self.directives
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn owner(&self) -> Option<&ResourceId> {
        self.owner.as_ref()
    }

    fn as_capreq(&self) -> Option<&CapReq> {
        Some(self)
    }
}
