use std::fmt;

use hcl::Value;
use hcl::eval::{Context, Evaluate};

use super::{AttributeExpression, EvaluationError};

/// The literal type an attribute is expected to evaluate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => f.write_str("bool"),
            ValueKind::String => f.write_str("string"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Bool(bool),
    String(String),
}

impl Literal {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Bool(value) => Some(*value),
            Literal::String(_) => None,
        }
    }
}

/// Resolves attribute expressions to literals without any outside state:
/// no variables, no functions, no references to other blocks.
pub trait Evaluator: Send + Sync {
    fn evaluate(
        &self,
        expr: &AttributeExpression,
        expected: ValueKind,
    ) -> Result<Literal, EvaluationError>;

    fn evaluate_bool(&self, expr: &AttributeExpression) -> Result<bool, EvaluationError> {
        self.evaluate(expr, ValueKind::Bool)
            .map(|literal| literal.as_bool() == Some(true))
    }

    fn evaluate_string(&self, expr: &AttributeExpression) -> Result<String, EvaluationError> {
        match self.evaluate(expr, ValueKind::String)? {
            Literal::String(value) => Ok(value),
            Literal::Bool(_) => Err(EvaluationError::TypeMismatch {
                expected: ValueKind::String,
                found: "bool",
            }),
        }
    }
}

/// [`Evaluator`] backed by `hcl::eval` with an empty [`Context`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HclEvaluator;

impl HclEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for HclEvaluator {
    fn evaluate(
        &self,
        expr: &AttributeExpression,
        expected: ValueKind,
    ) -> Result<Literal, EvaluationError> {
        let ctx = Context::new();
        let value = expr.as_expression().evaluate(&ctx)?;

        match (expected, value) {
            // NOTE: Anything other than a literal `true` means "not archived"
            (ValueKind::Bool, Value::Bool(b)) => Ok(Literal::Bool(b)),
            (ValueKind::Bool, _) => Ok(Literal::Bool(false)),
            (ValueKind::String, Value::String(s)) => Ok(Literal::String(s)),
            (ValueKind::String, other) => Err(EvaluationError::TypeMismatch {
                expected,
                found: value_type_name(&other),
            }),
        }
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "tuple",
        Value::Object(_) => "object",
    }
}
