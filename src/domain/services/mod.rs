//! Domain Services
//!
//! Pure logic built on the record identity contract.
//! These services have no I/O dependencies and are easily testable.

mod dedup;

pub use dedup::CapReqSet;
