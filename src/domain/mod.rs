//! Domain Layer
//!
//! The identity core of capreq - pure value semantics without I/O.
//!
//! ## Structure
//!
//! - `entities/` - The `CapReq` record and its builder
//! - `value_objects/` - Immutable value types (Mode, Attr, Version, ResourceId)
//! - `services/` - Logic built on record identity (deduplication)
//! - `ports/` - The external Capability/Requirement shapes records compare against
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system and never logs
//! 2. **Immutable values** - Records are fixed at construction
//! 3. **Ports** - Foreign capability/requirement types meet us through traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
