//! Kubernetes client module
//!
//! Handles connection to the Kubernetes API server and provides the
//! `ClusterClient` the tree resolver reads through.
//!
//! HTTP/HTTPS proxies are honoured through the standard `HTTP_PROXY`,
//! `HTTPS_PROXY` and `NO_PROXY` environment variables.

mod cluster;

pub use cluster::{ClusterClient, ClusterError, KubeCluster};
#[cfg(test)]
pub use cluster::MockClusterClient;

use anyhow::{Context, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::path::Path;

/// Where to find the cluster
#[derive(Debug, Clone, Default)]
pub struct ClientOptions<'a> {
    /// Explicit kubeconfig file, overriding `KUBECONFIG`
    pub kubeconfig: Option<&'a Path>,
    /// Context to use instead of the current one
    pub context: Option<&'a str>,
}

/// A connected client plus the namespace of the selected context
pub struct Connection {
    pub client: Client,
    pub default_namespace: String,
}

/// Initialize and return a Kubernetes client
///
/// Without options this uses the default kubeconfig loading strategy:
/// 1. In-cluster config (if running in a pod)
/// 2. KUBECONFIG environment variable
/// 3. ~/.kube/config
pub async fn create_client(options: &ClientOptions<'_>) -> Result<Connection> {
    let kube_options = KubeConfigOptions {
        context: options.context.map(str::to_string),
        ..Default::default()
    };

    let config = match (options.kubeconfig, options.context) {
        (Some(path), _) => {
            let kubeconfig = Kubeconfig::read_from(path)
                .with_context(|| format!("Failed to read kubeconfig: {}", path.display()))?;
            Config::from_custom_kubeconfig(kubeconfig, &kube_options)
                .await
                .context("Failed to load kubeconfig")?
        }
        (None, Some(_)) => Config::from_kubeconfig(&kube_options)
            .await
            .context("Failed to load kubeconfig context")?,
        (None, None) => Config::infer()
            .await
            .context("Failed to infer Kubernetes configuration")?,
    };

    tracing::debug!(
        "Using cluster {} (namespace {})",
        config.cluster_url,
        config.default_namespace
    );

    let default_namespace = config.default_namespace.clone();
    let client = Client::try_from(config).context("Failed to create Kubernetes client")?;
    Ok(Connection {
        client,
        default_namespace,
    })
}
