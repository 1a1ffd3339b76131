use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::profile::Industry;
use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub business: String,
}

/// Marketing copy for one industry landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerticalPage {
    pub industry: Industry,
    pub headline: String,
    pub subheadline: String,
    #[serde(default)]
    pub pain_points: Vec<ContentBlock>,
    pub features: Vec<ContentBlock>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    pub testimonial: Option<Testimonial>,
    pub cta_label: String,
}

impl VerticalPage {
    #[must_use]
    pub fn slug(&self) -> &'static str {
        self.industry.slug()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerticalsFile {
    pub verticals: Vec<VerticalPage>,
}

impl VerticalsFile {
    #[must_use]
    pub fn find(&self, industry: Industry) -> Option<&VerticalPage> {
        self.verticals.iter().find(|v| v.industry == industry)
    }
}

/// Load and validate landing page content from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_verticals(path: &Path) -> Result<VerticalsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::VerticalsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: VerticalsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::VerticalsFileParse)?;

    validate_verticals(&file)?;

    Ok(file)
}

fn validate_verticals(file: &VerticalsFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for page in &file.verticals {
        if page.industry == Industry::Other {
            return Err(ConfigError::Validation(
                "'other' has no landing page".to_string(),
            ));
        }

        if !seen.insert(page.industry) {
            return Err(ConfigError::Validation(format!(
                "duplicate landing page for '{}'",
                page.slug()
            )));
        }

        if page.headline.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "landing page '{}' has an empty headline",
                page.slug()
            )));
        }

        if page.features.is_empty() {
            return Err(ConfigError::Validation(format!(
                "landing page '{}' must list at least one feature",
                page.slug()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "verticals_test.rs"]
mod tests;
