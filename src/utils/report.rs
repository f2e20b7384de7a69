use crate::core::JobReport;
use crate::domain::model::JobStatus;
use crate::utils::error::{AlgoError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

impl std::str::FromStr for ReportFormat {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(AlgoError::Validation {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: text, json, csv".to_string(),
            }),
        }
    }
}

pub fn render(reports: &[JobReport], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(reports)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        ReportFormat::Csv => render_csv(reports),
    }
}

fn render_text(reports: &[JobReport]) -> String {
    let mut out = String::new();
    for report in reports {
        match (&report.output, &report.error) {
            (Some(output), _) => out.push_str(&format!("{}: {}\n", report.name, output)),
            (None, Some(error)) => out.push_str(&format!("{}: error: {}\n", report.name, error)),
            (None, None) => out.push_str(&format!("{}: none\n", report.name)),
        }
    }
    out
}

fn render_csv(reports: &[JobReport]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "kind", "input", "status", "output", "error"])?;

    for report in reports {
        let status = match report.status {
            JobStatus::Ok => "ok",
            JobStatus::Error => "error",
        };
        let output = report
            .output
            .as_ref()
            .map(|o| o.to_string())
            .unwrap_or_default();
        writer.write_record([
            report.name.as_str(),
            report.kind.as_str(),
            report.input.as_str(),
            status,
            output.as_str(),
            report.error.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| AlgoError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| AlgoError::Validation {
        field: "report".to_string(),
        value: String::new(),
        reason: format!("CSV output is not valid UTF-8: {}", e),
    })
}
