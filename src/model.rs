use serde::Serialize;

/// Structured summary of a resume document.
///
/// Every field except `raw_text` is a best-effort heuristic guess; a missing
/// field is a normal outcome, not an error. `raw_text` always carries the
/// extracted text verbatim.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: Option<f64>,
    pub raw_text: String,
}
