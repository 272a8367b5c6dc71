//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Resolvers and repositories outside this crate implement them.

pub mod resource_shape;

pub use resource_shape::{Attributes, Capability, Directives, Requirement};
