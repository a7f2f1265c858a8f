//! tfarchive - Terraform archived repository state pruning
//!
//! A library for finding archived GitHub repositories declared in Terraform and
//! generating the Terragrunt state removal commands for them.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod prune;
pub mod resource;
pub mod terraform;

pub use discovery::{TerraformFile, discover_terraform_files};
pub use error::ArchiveError;
pub use prune::{generate_removal_scripts, process_terraform_file};
pub use resource::{ArchivedResources, QualifiedIdentifier};
pub use terraform::{Classifier, ClassifierConfig};
