//! ODLM model layer
//!
//! Identity keys, resource kinds and the typed views of the ODLM and OLM
//! objects the tree walks through.
//!
//! Structure:
//! - `resource_ref.rs` - namespace/name identity key
//! - `resource_kind.rs` - kinds the cluster client can fetch
//! - `odlm.rs` - best-effort typed views of request and registry specs
//! - `value.rs` - safe navigation over untyped JSON objects

pub mod odlm;
pub mod resource_kind;
pub mod resource_ref;
pub mod value;

pub use odlm::{Operand, OperandRegistrySpec, OperandRequestSpec, Operator, Request};
pub use resource_kind::ResourceKind;
pub use resource_ref::ResourceRef;
pub use value::ValuePath;
