//! Command implementations

mod outline;
mod stats;

use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use structwalk_model::{Visitor, WalkError, visit, visit_max_depth};
use structwalk_value::Value;
use tracing::debug;

pub use outline::run_outline;
pub use stats::run_stats;

/// Reads and parses a JSON document.
fn load_document(path: &Path) -> Result<Value> {
    debug!("Loading {}", path.display());
    let content = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    Value::from_json_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))
}

/// Walks `model`, honoring an optional depth limit.
fn walk<'v, V>(
    model: &'v Value,
    visitor: &mut V,
    max_depth: Option<usize>,
) -> Result<(), WalkError<V::Error>>
where
    V: Visitor<'v>,
{
    match max_depth {
        Some(max_depth) => visit_max_depth(model, visitor, max_depth),
        None => visit(model, visitor),
    }
}
