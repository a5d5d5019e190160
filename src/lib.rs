//! kubectl-odlm library
//!
//! Resolves what an ODLM OperandRequest generated on a cluster and renders it
//! as a tree. The binary is a thin CLI over this; the library is also what the
//! integration tests drive against an in-memory cluster.

pub mod config;
pub mod kube;
pub mod models;
pub mod output;
pub mod tree;

pub use crate::kube::{ClusterClient, ClusterError};
pub use models::{ResourceKind, ResourceRef};
pub use tree::{DisplayRow, GraphResolver, RenderConfig, RequestNode, ResolveError, TreeNode};
