pub mod json;
pub mod md;

use crate::error::GpaError;
use crate::types::report::GpaReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &GpaReport, format: OutputFormat) -> Result<String, GpaError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(GpaError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
