//! Domain Value Objects
//!
//! Immutable value types that the capability/requirement record is built
//! from.

mod attr;
mod mode;
pub mod namespace;
mod resource_id;
mod version;

pub use attr::Attr;
pub use mode::CapReqMode;
pub use resource_id::ResourceId;
pub use version::Version;
