//! Outline command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use structwalk_model::Outline;
use tracing::debug;

use super::{load_document, walk};
use crate::config::{OutputFormat, WalkConfig};

pub fn run_outline(config: &WalkConfig, file: &Path) -> Result<()> {
    let model = load_document(file)?;

    let mut outline = Outline::new().show_values(config.show_values);
    walk(&model, &mut outline, config.max_depth).into_diagnostic()?;
    debug!(entries = outline.entries().len(), "Outline recorded");

    match config.format {
        OutputFormat::Text => {
            let text = outline.render_text(config.indent);
            if !text.is_empty() {
                println!("{text}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(outline.entries()).into_diagnostic()?;
            println!("{json}");
        }
    }

    Ok(())
}
