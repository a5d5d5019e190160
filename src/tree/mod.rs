//! OperandRequest tree
//!
//! Resolves the chain OperandRequest → OperandRegistry → Subscription →
//! ClusterServiceVersion → example instances, and renders it as an indented
//! tree. Similar to `kubectl tree`, but following ODLM's registry indirection
//! instead of owner references.

pub mod age;
pub mod diagnostics;
mod models;
pub mod render;
mod resolver;
pub mod status;

pub use diagnostics::{DiagnosticSink, RecordingSink, Skip, TracingSink};
pub use models::{InstanceNode, LinkGroup, RequestNode, SubscriptionNode, TreeNode, VersionNode};
pub use render::{DisplayRow, RenderConfig, render, render_request};
pub use resolver::{ALM_EXAMPLES_ANNOTATION, GraphResolver, OPERATORS_NAMESPACE, ResolveError};
