use crate::types::report::GpaReport;

pub fn to_json(report: &GpaReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
