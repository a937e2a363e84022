/// Naming audit report generation.
use constants::class::SemanticClass;
use constants::path::classify_path;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Error types for audit operations.
#[derive(Debug)]
pub enum AuditError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    MissingAssetDir(PathBuf),
}

impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        AuditError::IoError(err)
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        AuditError::JsonError(err)
    }
}

impl std::fmt::Display for AuditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditError::IoError(e) => write!(f, "IO error: {}", e),
            AuditError::JsonError(e) => write!(f, "JSON error: {}", e),
            AuditError::MissingAssetDir(path) => {
                write!(f, "Asset directory does not exist: {}", path.display())
            }
        }
    }
}

impl std::error::Error for AuditError {}

/// Per-class entry in the audit report.
#[derive(Serialize, Deserialize, Debug)]
pub struct ClassBreakdown {
    pub class_name: String,
    pub stencil_value: u8,
    pub paths: Vec<String>,
}

/// Naming audit results for one asset library.
/// Surfaces listed under `unclassified` would be left untagged by the
/// runtime sweep and are invisible to the segmentation output.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuditReport {
    /// Classified paths grouped by stencil code.
    pub classes: BTreeMap<u8, ClassBreakdown>,
    /// Paths no class could be derived from.
    pub unclassified: Vec<String>,
    pub total_assets: usize,
}

impl AuditReport {
    /// Classifies every discovered path and groups the results by class.
    pub fn build(paths: &[String]) -> Self {
        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.green/blue}] {pos}/{len} assets ({percent}%) {msg}")
                .unwrap()
                .progress_chars("█▉▊▋▌▍▎▏"),
        );
        pb.set_message("Classifying assets");

        let mut report = AuditReport {
            classes: BTreeMap::new(),
            unclassified: Vec::new(),
            total_assets: paths.len(),
        };

        for path in paths {
            let class = classify_path(path);
            if class == SemanticClass::None {
                report.unclassified.push(path.clone());
            } else {
                report
                    .classes
                    .entry(class.stencil_value())
                    .or_insert_with(|| ClassBreakdown {
                        class_name: class.name().to_string(),
                        stencil_value: class.stencil_value(),
                        paths: Vec::new(),
                    })
                    .paths
                    .push(path.clone());
            }
            pb.inc(1);
        }

        pb.finish_with_message("Assets classified");
        report
    }

    /// Writes the report as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<(), AuditError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        println!("Generated audit report: {}", path.display());
        Ok(())
    }

    /// Prints a per-class summary for quick inspection.
    pub fn print_summary(&self) {
        println!("Audit Summary:");
        println!("  Total assets: {}", self.total_assets);

        for breakdown in self.classes.values() {
            println!(
                "  {} (code {}): {} assets",
                breakdown.class_name,
                breakdown.stencil_value,
                breakdown.paths.len()
            );
        }

        if self.unclassified.is_empty() {
            println!("  All assets follow the naming convention");
        } else {
            println!("  Unclassified: {} assets", self.unclassified.len());
            for path in &self.unclassified {
                println!("    - {}", path);
            }
        }
    }
}
