//! Comparison table: one summary row per experiment, written as CSV.

use crate::runner::ExperimentResult;
use serde::Serialize;

pub const COLUMNS: [&str; 9] = [
    "Experiment ID",
    "Persona",
    "Model",
    "Temperature",
    "Top-P",
    "Total Queries",
    "Successful",
    "Avg Iterations",
    "Avg Duration (s)",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub experiment_id: u32,
    pub persona: String,
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub total_queries: usize,
    pub successful: usize,
    pub avg_iterations: f64,
    pub avg_duration_secs: f64,
}

impl ComparisonRow {
    pub fn from_result(result: &ExperimentResult) -> Self {
        let logs = &result.agent_logs;
        let mean = |total: f64| {
            if logs.is_empty() {
                0.0
            } else {
                total / logs.len() as f64
            }
        };

        Self {
            experiment_id: result.experiment_id,
            persona: result.persona_key.clone(),
            model: result.model.clone(),
            temperature: result.temperature,
            top_p: result.top_p,
            total_queries: result.query_results.len(),
            successful: result.query_results.iter().filter(|q| q.success).count(),
            avg_iterations: mean(logs.iter().map(|l| f64::from(l.iterations)).sum()),
            avg_duration_secs: mean(logs.iter().map(|l| l.duration_secs).sum()),
        }
    }

    fn fields(&self) -> [String; 9] {
        [
            self.experiment_id.to_string(),
            self.persona.clone(),
            self.model.clone(),
            self.temperature.to_string(),
            self.top_p.to_string(),
            self.total_queries.to_string(),
            self.successful.to_string(),
            self.avg_iterations.to_string(),
            format!("{:.3}", self.avg_duration_secs),
        ]
    }
}

/// Quote a field if it contains a comma, quote, or line break.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn csv_line<S: AsRef<str>>(fields: &[S]) -> String {
    let escaped: Vec<String> = fields.iter().map(|f| escape_field(f.as_ref())).collect();
    escaped.join(",")
}

/// Render rows as CSV text, header first.
pub fn to_csv(rows: &[ComparisonRow]) -> String {
    let mut out = csv_line(&COLUMNS);
    out.push('\n');
    for row in rows {
        out.push_str(&csv_line(&row.fields()));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ComparisonRow {
        ComparisonRow {
            experiment_id: 3,
            persona: "friendly_cot".into(),
            model: "gpt-4o".into(),
            temperature: 0.3,
            top_p: 1.0,
            total_queries: 5,
            successful: 4,
            avg_iterations: 1.5,
            avg_duration_secs: 2.25,
        }
    }

    #[test]
    fn escapes_only_when_needed() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn renders_header_and_rows() {
        let csv = to_csv(&[row()]);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Experiment ID,Persona,Model,Temperature,Top-P,Total Queries,Successful,Avg Iterations,Avg Duration (s)")
        );
        assert_eq!(lines.next(), Some("3,friendly_cot,gpt-4o,0.3,1,5,4,1.5,2.250"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_table_is_just_the_header() {
        assert_eq!(to_csv(&[]).lines().count(), 1);
    }
}
