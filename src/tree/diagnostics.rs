//! Reporting of nodes dropped during resolution
//!
//! Anything below the root request that cannot be resolved is left out of the
//! tree. Each drop is reported to a `DiagnosticSink` so it can be logged or,
//! in tests, asserted on.

use std::fmt;
use std::sync::Mutex;

use crate::models::ResourceRef;

/// Why a node or subtree was left out of the tree
#[derive(Debug, Clone, PartialEq)]
pub enum Skip {
    /// The request spec could not be read; no links were followed
    RequestSpec { request: ResourceRef, reason: String },
    /// Registry fetch or decode failed; all of its operands are dropped
    Registry { registry: ResourceRef, reason: String },
    /// No catalog entry in the registry carries the operand name
    Operand { registry: ResourceRef, operand: String },
    Subscription { subscription: ResourceRef, reason: String },
    Version { version: ResourceRef, reason: String },
    /// The example annotation is not a JSON array
    Examples { version: ResourceRef, reason: String },
    /// One example template is malformed
    Template {
        version: ResourceRef,
        index: usize,
        reason: String,
    },
    Instance {
        kind: String,
        instance: ResourceRef,
        reason: String,
    },
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::RequestSpec { request, reason } => {
                write!(f, "OperandRequest {} spec: {}", request, reason)
            }
            Skip::Registry { registry, reason } => {
                write!(f, "OperandRegistry {}: {}", registry, reason)
            }
            Skip::Operand { registry, operand } => write!(
                f,
                "operand {} has no entry in OperandRegistry {}",
                operand, registry
            ),
            Skip::Subscription {
                subscription,
                reason,
            } => write!(f, "Subscription {}: {}", subscription, reason),
            Skip::Version { version, reason } => {
                write!(f, "ClusterServiceVersion {}: {}", version, reason)
            }
            Skip::Examples { version, reason } => write!(
                f,
                "alm-examples of ClusterServiceVersion {}: {}",
                version, reason
            ),
            Skip::Template {
                version,
                index,
                reason,
            } => write!(
                f,
                "alm-examples[{}] of ClusterServiceVersion {}: {}",
                index, version, reason
            ),
            Skip::Instance {
                kind,
                instance,
                reason,
            } => write!(f, "{} {}: {}", kind, instance, reason),
        }
    }
}

/// Receiver of skip reports
pub trait DiagnosticSink: Send + Sync {
    fn skipped(&self, skip: Skip);
}

/// Logs every skip as a warning
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn skipped(&self, skip: Skip) {
        tracing::warn!("Skipping {}", skip);
    }
}

/// Keeps every skip in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    skips: Mutex<Vec<Skip>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips reported so far, in order
    pub fn skips(&self) -> Vec<Skip> {
        self.skips
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn skipped(&self, skip: Skip) {
        tracing::debug!("Recording skip: {}", skip);
        self.skips
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(skip);
    }
}
