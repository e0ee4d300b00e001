use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{SubtitleError, VariableError};
use crate::variables::VariableTable;

// @module: File and directory utilities

const UTF8_BOM: char = '\u{feff}';

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @generates: Output path for a processed subtitle
    // @params: input_file, suffix, extension
    pub fn generate_output_path<P: AsRef<Path>>(input_file: P, suffix: &str, extension: &str) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = input_file.parent().unwrap_or(Path::new(""));

        // Get the file stem (filename without extension)
        let stem = input_file.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push('.');
        output_filename.push_str(suffix);
        output_filename.push('.');
        output_filename.push_str(extension);

        output_dir.join(output_filename)
    }

    /// Read a subtitle document as UTF-8 text, dropping a leading BOM
    pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read subtitle file: {}", path.display()))?;

        let text = String::from_utf8(bytes)
            .map_err(|e| SubtitleError::InvalidEncoding(format!("{}: {}", path.display(), e)))?;

        Ok(match text.strip_prefix(UTF8_BOM) {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }

    /// Write a document, creating parent directories if needed
    pub fn write_document<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write subtitle file: {}", path.display()))?;
        Ok(())
    }

    /// Load a variable table from a JSON object file
    pub fn load_variable_table<P: AsRef<Path>>(path: P) -> Result<VariableTable> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read variables file: {}", path.display()))?;

        let table = serde_json::from_str(&content)
            .map_err(|e| VariableError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(table)
    }

    /// Save a variable table as pretty JSON, keeping key order
    pub fn save_variable_table<P: AsRef<Path>>(path: P, table: &VariableTable) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(table)
            .map_err(|e| VariableError::SerializeError(e.to_string()))?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write variables file: {}", path.display()))?;
        Ok(())
    }
}
