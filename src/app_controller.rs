use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::document_processor::{self, ProcessedDocument};
use crate::errors::SubtitleError;
use crate::file_utils::FileManager;
use crate::variables::{SubstitutionStats, VariableTable};

// @module: Application controller for subtitle normalization

/// Options for a single run, usually coming from the command line
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    // @field: Subtitle file to process
    pub input_path: PathBuf,

    // @field: Explicit output path; derived from the input when absent
    pub output_path: Option<PathBuf>,

    // @field: Explicit variables file; derived from config when absent
    pub variables_path: Option<PathBuf>,

    // @field: Overwrite the input file
    pub in_place: bool,

    // @field: Overwrite an existing output file
    pub force_overwrite: bool,

    // @field: Report diagnostics without writing anything
    pub dry_run: bool,
}

/// What a run did
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub segment_count: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: SubstitutionStats,
    /// Where the document was written, `None` when nothing was written
    pub output_path: Option<PathBuf>,
    /// Where the variable table was saved, `None` when it was not saved
    pub variables_path: Option<PathBuf>,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Process one subtitle file
    pub fn run(&self, request: &RunRequest) -> Result<RunSummary> {
        let input_path = &request.input_path;
        if !FileManager::file_exists(input_path) {
            return Err(anyhow!("Input file does not exist: {:?}", input_path));
        }

        let text = FileManager::read_document(input_path)?;

        let variables_path = self.variables_path(request);
        let table = match &variables_path {
            Some(path) => Some(Self::load_table(path)?),
            None => None,
        };

        let processed = document_processor::process_document(&text, table);
        self.report(input_path, &processed);

        let mut summary = RunSummary {
            segment_count: processed.segments.len(),
            errors: processed.diagnostics.errors.clone(),
            warnings: processed.diagnostics.warnings.clone(),
            stats: processed.stats,
            output_path: None,
            variables_path: None,
        };

        if self.config.strict && processed.diagnostics.has_errors() {
            return Err(SubtitleError::ValidationFailed {
                file: input_path.display().to_string(),
                count: processed.diagnostics.errors.len(),
            }
            .into());
        }

        if request.dry_run {
            info!("Dry run, nothing written");
            return Ok(summary);
        }

        let output_path = self.output_path(request);
        if output_path.exists() && !request.force_overwrite && !request.in_place {
            warn!("Skipping file, output already exists (use -f to force overwrite): {:?}", output_path);
        } else {
            FileManager::write_document(&output_path, &self.render_output(&processed.output_text))?;
            info!("Success: {:?}", output_path);
            summary.output_path = Some(output_path);
        }

        if let (Some(path), Some(table)) = (variables_path, processed.variables.as_ref()) {
            if processed.stats.new_count > 0 {
                FileManager::save_variable_table(&path, table)?;
                info!(
                    "Recorded {} new variable(s) in {:?}, fill in their values for the next run",
                    processed.stats.new_count, path
                );
                summary.variables_path = Some(path);
            }
        }

        Ok(summary)
    }

    fn load_table(path: &Path) -> Result<VariableTable> {
        if FileManager::file_exists(path) {
            let table = FileManager::load_variable_table(path)?;
            debug!("Loaded {} variable(s) from {:?}", table.len(), path);
            Ok(table)
        } else {
            debug!("No variables file at {:?}, starting with an empty table", path);
            Ok(VariableTable::new())
        }
    }

    fn variables_path(&self, request: &RunRequest) -> Option<PathBuf> {
        if !self.config.variables.enabled {
            return None;
        }

        let path = request.variables_path.clone().unwrap_or_else(|| {
            request
                .input_path
                .parent()
                .unwrap_or(Path::new(""))
                .join(&self.config.variables.file_name)
        });
        Some(path)
    }

    fn output_path(&self, request: &RunRequest) -> PathBuf {
        if request.in_place {
            return request.input_path.clone();
        }

        request.output_path.clone().unwrap_or_else(|| {
            let extension = request
                .input_path
                .extension()
                .map(|ext| ext.to_string_lossy().to_string())
                .unwrap_or_else(|| "srt".to_string());
            FileManager::generate_output_path(&request.input_path, &self.config.output.suffix, &extension)
        })
    }

    fn render_output(&self, output_text: &str) -> String {
        if self.config.output.trailing_newline && !output_text.is_empty() {
            format!("{}\n", output_text)
        } else {
            output_text.to_string()
        }
    }

    fn report(&self, input_path: &Path, processed: &ProcessedDocument) {
        for message in processed.errors() {
            error!("{}", message);
        }
        for message in processed.warnings() {
            warn!("{}", message);
        }

        info!(
            "{:?}: {} segments, {} errors, {} warnings",
            input_path,
            processed.segments.len(),
            processed.errors().len(),
            processed.warnings().len()
        );

        if processed.variables.is_some() {
            info!(
                "Variables: {} substituted, {} unhandled, {} new",
                processed.stats.substituted_count,
                processed.stats.unhandled_count,
                processed.stats.new_count
            );
        }
    }
}
