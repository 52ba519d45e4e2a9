//! Catalog loading from TOML.
//!
//! A catalog file looks like:
//!
//! ```toml
//! title = "Placement test"
//!
//! [[parts]]
//! id = "listening"
//! title = "Part 1: Listening"
//!
//! [[questions]]
//! id = "l1"
//! part = "listening"
//! kind = "listening"
//! prompt = "Where is the speaker going?"
//! options = ["To the bank", "To the station", "Home"]
//! correct = 1
//! ```

use crate::exam::error::CatalogError;
use crate::exam::model::{Catalog, Part, Question};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const SAMPLE_CATALOG: &str = include_str!("sample_exam.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    parts: Vec<Part>,
    #[serde(default)]
    questions: Vec<Question>,
}

fn default_title() -> String {
    "Exam".to_string()
}

pub fn parse_catalog(contents: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(contents)?;
    Catalog::new(file.title, file.parts, file.questions)
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog from {}", path.display()))?;
    let catalog = parse_catalog(&contents)
        .with_context(|| format!("Failed to load catalog {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        parts = catalog.parts().len(),
        questions = catalog.question_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// The built-in practice exam used when no catalog file is configured.
pub fn sample_catalog() -> Result<Catalog> {
    parse_catalog(SAMPLE_CATALOG).context("Built-in sample catalog is invalid")
}
