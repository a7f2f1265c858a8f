use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use tfarchive::cli::Cli;
use tfarchive::{Classifier, ClassifierConfig, discover_terraform_files, generate_removal_scripts};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClassifierConfig::default();

    let files = discover_terraform_files(&cli.root_dir, &config)
        .await
        .wrap_err_with(|| {
            format!(
                "error whilst listing Terraform files from root directory {}",
                cli.root_dir.display()
            )
        })?;

    let classifier = Arc::new(Classifier::new(config));
    let summaries = generate_removal_scripts(&cli.root_dir, &cli.output_dir, files, classifier)
        .await
        .wrap_err("error whilst generating archived repositories state removal output")?;

    tracing::info!(count = summaries.len(), "state removal scripts generated");
    println!("{}", tfarchive::output::render_summary(&summaries));

    Ok(())
}
