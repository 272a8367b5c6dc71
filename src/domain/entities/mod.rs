//! Domain Entities
//!
//! - `CapReq` - A capability or requirement with structural identity
//! - `CapReqBuilder` - Incremental construction of `CapReq` records

mod capreq;
mod capreq_builder;

pub use capreq::{CapReq, Comparand, OPTIONAL_MARKER};
pub use capreq_builder::{escape_filter_value, CapReqBuilder};
