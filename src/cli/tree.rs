//! `tree` command

use anyhow::{Context, Result};
use chrono::Utc;
use std::io::IsTerminal;

use kubectl_odlm::config::{Config, ConfigLoader};
use kubectl_odlm::kube::{self, ClientOptions, KubeCluster};
use kubectl_odlm::models::ResourceRef;
use kubectl_odlm::output::{add_tree_rows, tree_table};
use kubectl_odlm::tree::{GraphResolver, RenderConfig, TracingSink, render_request};

use super::GlobalOptions;

/// Print the tree of one OperandRequest, or of every request in the namespace
pub async fn run_tree(options: &GlobalOptions, name: Option<&str>) -> Result<()> {
    let config = ConfigLoader::load().context("Failed to load configuration")?;

    let connection = kube::create_client(&ClientOptions {
        kubeconfig: options.kubeconfig.as_deref(),
        context: options.context.as_deref(),
    })
    .await?;

    let namespace = effective_namespace(options, &config, &connection.default_namespace);
    tracing::debug!(
        "Resolving OperandRequests in namespace {} (operators namespace {})",
        namespace,
        config.operators_namespace
    );

    let cluster = KubeCluster::new(connection.client);
    let sink = TracingSink;
    let resolver = GraphResolver::new(&cluster, &sink)
        .with_operators_namespace(config.operators_namespace.clone());

    let requests = match name {
        Some(name) => vec![resolver.resolve(&ResourceRef::new(namespace, name)).await?],
        None => resolver.resolve_all(&namespace).await?,
    };

    let color = !options.no_color && config.color.enabled(std::io::stdout().is_terminal());
    let render_config = RenderConfig::new(Utc::now()).with_color(color);

    let mut table = tree_table();
    for request in &requests {
        add_tree_rows(&mut table, &render_request(request, &render_config));
    }

    let stdout = std::io::stdout();
    table
        .write_to(&mut stdout.lock(), render_config.color)
        .context("Failed to write output")?;

    Ok(())
}

/// `--namespace`, then config and environment, then the kubeconfig context
fn effective_namespace(options: &GlobalOptions, config: &Config, context_namespace: &str) -> String {
    options
        .namespace
        .clone()
        .or_else(|| config.default_namespace.clone())
        .unwrap_or_else(|| context_namespace.to_string())
}
