//! capreq - identity of capabilities and requirements
//!
//! A resolver compares, hashes and deduplicates the capabilities resources
//! provide and the requirements they declare. This crate supplies those
//! values with a structural identity that holds across representations: a
//! record built here compares equal to a foreign capability or requirement
//! that reports the same namespace, directives, attributes and owner.

pub mod config;
pub mod domain;
pub mod error;
pub mod reader;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{CapReq, CapReqBuilder, Comparand};
pub use domain::ports::{Attributes, Capability, Directives, Requirement};
pub use domain::services::CapReqSet;
pub use domain::value_objects::{namespace, Attr, CapReqMode, ResourceId, Version};
pub use error::{CapReqError, CapReqResult};
pub use reader::{read_manifest, read_manifest_str, ReadReport, ReaderOptions};
