//! Response encoding.
//!
//! Reports go out as a single line `report <json>`; rejected layouts as
//! `error <message>`. Newlines never appear inside a response.

use crate::error::PlanError;
use crate::layout::EvaluationReport;

/// Encodes a report as compact single-line JSON.
pub fn encode_report(report: &EvaluationReport) -> Result<String, PlanError> {
    Ok(serde_json::to_string(report)?)
}

/// Formats the response line for an evaluation result.
pub fn format_response(result: &Result<EvaluationReport, PlanError>) -> String {
    match result.as_ref().map_err(|e| e.clone()).and_then(encode_report) {
        Ok(json) => format!("report {}", json),
        Err(e) => format_error(&e),
    }
}

/// Formats an error line, flattening any line breaks in the message.
pub fn format_error(err: &PlanError) -> String {
    let message = err.to_string().replace(['\r', '\n'], " ");
    format!("error {}", message)
}
