use super::error::{CliError, Result};
use course_activity_core::{parse_activity_script, Activity, ActivityDocument, ActivityRef};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk representation of an activity definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DefinitionFormat {
    /// Interchange JSON document
    Json,
    /// Legacy `var activity = [...]` script
    Legacy,
}

impl DefinitionFormat {
    /// Guess the format from the file extension
    pub fn detect(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(DefinitionFormat::Json),
            "js" => Some(DefinitionFormat::Legacy),
            _ => None,
        }
    }
}

/// A definition file plus the format it is read in
#[derive(Debug, Clone)]
pub struct DefinitionSource {
    path: PathBuf,
    format: DefinitionFormat,
}

impl DefinitionSource {
    /// An explicit `format` wins over the file extension
    pub fn new(path: impl Into<PathBuf>, format: Option<DefinitionFormat>) -> Result<Self> {
        let path = path.into();
        let format = match format.or_else(|| DefinitionFormat::detect(&path)) {
            Some(format) => format,
            None => return Err(CliError::unknown_format(path)),
        };
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> DefinitionFormat {
        self.format
    }

    /// Course position taken from an `activity-<unit>.<lesson>` file name
    pub fn reference(&self) -> Option<ActivityRef> {
        ActivityRef::from_file_name(&self.path)
    }

    pub fn read_to_string(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(CliError::definition_not_found(self.path.clone()));
        }
        tracing::debug!(path = %self.path.display(), format = ?self.format, "Reading definition");
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Read the document without validating it
    pub fn read_document(&self) -> Result<ActivityDocument> {
        parse_document(&self.read_to_string()?, self.format)
    }

    /// Read and validate
    pub fn load(&self) -> Result<Activity> {
        Ok(Activity::from_document(self.read_document()?)?)
    }
}

pub fn parse_document(contents: &str, format: DefinitionFormat) -> Result<ActivityDocument> {
    match format {
        DefinitionFormat::Json => Ok(ActivityDocument::from_json(contents)?),
        DefinitionFormat::Legacy => Ok(parse_activity_script(contents)?),
    }
}

/// Write to `output`, or to stdout when no path is given
pub fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, contents)?;
            tracing::info!(path = %path.display(), "Wrote output");
        }
        None => println!("{}", contents),
    }
    Ok(())
}
