use std::io::Write;

use jiff::tz::TimeZone;
use serde::Serialize;

use peace_core::models::assessment::AssessmentResult;

use crate::error::ExportError;

pub const HEADERS: [&str; 7] = [
    "Assessment Type",
    "Score",
    "Severity",
    "Interpretation",
    "Recommendations",
    "Resources",
    "Completed At",
];

/// Separator for list-valued columns.
pub const LIST_DELIMITER: &str = "; ";

/// One result flattened to text columns, in header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvRecord {
    pub assessment_type: String,
    pub score: String,
    pub severity: String,
    pub interpretation: String,
    pub recommendations: String,
    pub resources: String,
    /// `YYYY-MM-DD` in UTC.
    pub completed_at: String,
}

impl CsvRecord {
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.assessment_type,
            &self.score,
            &self.severity,
            &self.interpretation,
            &self.recommendations,
            &self.resources,
            &self.completed_at,
        ]
    }
}

impl From<&AssessmentResult> for CsvRecord {
    fn from(result: &AssessmentResult) -> Self {
        CsvRecord {
            assessment_type: result.instrument.as_str().to_string(),
            score: result.score.to_string(),
            severity: result.severity.as_str().to_string(),
            interpretation: result.interpretation.clone(),
            recommendations: result.recommendations.join(LIST_DELIMITER),
            resources: result.resources.join(LIST_DELIMITER),
            completed_at: result
                .completed_at
                .to_zoned(TimeZone::UTC)
                .date()
                .to_string(),
        }
    }
}

/// Wrap in double quotes, doubling any embedded quote.
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn row<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields.into_iter().map(quote).collect::<Vec<_>>().join(",")
}

/// Header line followed by one line per result, joined with `\n` and no
/// trailing newline. Results are written in the order given.
pub fn to_csv(results: &[AssessmentResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(row(HEADERS));
    lines.extend(results.iter().map(|r| row(CsvRecord::from(r).fields())));
    lines.join("\n")
}

pub fn write_csv<W: Write>(results: &[AssessmentResult], mut writer: W) -> Result<(), ExportError> {
    writer.write_all(to_csv(results).as_bytes())?;
    writer.flush()?;
    Ok(())
}
