use std::path::Path;

use anyhow::{Context as _, Result};
use brickset::LegoSetRepository;
use log::debug;

use crate::formatters::{Formatter, OutputFormat};

/// Execution context of the CLI
pub struct Context {
    /// The loaded sets
    repository: LegoSetRepository,

    /// Where the sets were loaded from
    source: String,

    /// Output format
    format: OutputFormat,

    /// Verbosity level
    verbosity: u8,

    /// Current formatter
    formatter: Box<dyn Formatter>,
}

impl Context {
    /// Load the data file and build a context around it
    pub fn load(data: &Path, verbosity: u8, format: OutputFormat) -> Result<Self> {
        let source = data.to_string_lossy().into_owned();
        let repository = LegoSetRepository::from_resource(&source)
            .with_context(|| format!("Failed to load sets from {}", source))?;
        debug!("Context ready with {} sets", repository.len());

        Ok(Self::new(repository, source, verbosity, format))
    }

    /// Build a context around an already loaded repository
    pub fn new(repository: LegoSetRepository, source: String, verbosity: u8, format: OutputFormat) -> Self {
        Context {
            repository,
            source,
            format,
            verbosity,
            formatter: format.formatter(),
        }
    }

    /// Get the repository
    pub fn repository(&self) -> &LegoSetRepository {
        &self.repository
    }

    /// Get the data source description
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the current formatter
    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Set the output format
    pub fn set_format(&mut self, format: OutputFormat) {
        if format != self.format {
            self.format = format;
            self.formatter = format.formatter();
        }
    }

    /// Get the verbosity level
    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }
}
