//! Terraform configuration parsing and archived repository classification.

mod classifier;
mod document;
mod error;
mod evaluator;

pub use classifier::{Classifier, ClassifierConfig};
pub use document::{AttributeExpression, ConfigBlock, ConfigDocument};
pub use error::{EvaluationError, ParseError};
pub use evaluator::{Evaluator, HclEvaluator, Literal, ValueKind};
