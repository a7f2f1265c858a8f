use std::path::PathBuf;

use clap::Parser;

/// Generate Terragrunt state removal scripts for archived GitHub repositories.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Root directory to start processing Terraform files from (one directory level down)
    #[arg(
        long,
        env = "TFARCHIVE_ROOT_DIR",
        default_value = "../terraform-github/terraform/repos"
    )]
    pub root_dir: PathBuf,

    /// Directory the Terragrunt state removal scripts should be written to
    #[arg(long, env = "TFARCHIVE_OUTPUT_DIR", default_value = "./output")]
    pub output_dir: PathBuf,
}
