//! Import of lead rows exported from the Airtable leads table.

mod parser;

use super::domain::LeadRecord;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum LeadImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for LeadImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadImportError::Io(err) => write!(f, "failed to read lead export: {}", err),
            LeadImportError::Csv(err) => write!(f, "invalid lead CSV data: {}", err),
        }
    }
}

impl std::error::Error for LeadImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeadImportError::Io(err) => Some(err),
            LeadImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LeadImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LeadImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct AirtableLeadImporter;

impl AirtableLeadImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<LeadRecord>, LeadImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Columns missing from the export simply leave the matching fields absent.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<LeadRecord>, LeadImportError> {
        Ok(parser::parse_records(reader)?)
    }
}
