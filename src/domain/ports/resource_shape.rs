//! Capability and Requirement ports
//!
//! The shapes a resolver or repository hands us from outside. Anything that
//! can report a namespace, directives, attributes and an owner can be
//! compared against a [`CapReq`]; no shared base type is needed.

use std::collections::BTreeMap;

use crate::domain::entities::CapReq;
use crate::domain::value_objects::{Attr, ResourceId};

/// Directive table: string keys to string values
pub type Directives = BTreeMap<String, String>;

/// Attribute table: string keys to typed values
pub type Attributes = BTreeMap<String, Attr>;

/// Something a resource provides
pub trait Capability {
    fn namespace(&self) -> &str;
    fn directives(&self) -> &Directives;
    fn attributes(&self) -> &Attributes;
    fn owner(&self) -> Option<&ResourceId>;

    /// The native record behind this view, if there is one
    ///
    /// Lets equality take the native path (which also compares mode) when a
    /// `CapReq` is passed around as a trait object.
    fn as_capreq(&self) -> Option<&CapReq> {
        None
    }
}

/// Something a resource needs, filtered over capability attributes
pub trait Requirement {
    fn namespace(&self) -> &str;
    fn directives(&self) -> &Directives;
    fn attributes(&self) -> &Attributes;
    fn owner(&self) -> Option<&ResourceId>;

    /// The native record behind this view, if there is one
    fn as_capreq(&self) -> Option<&CapReq> {
        None
    }
}
