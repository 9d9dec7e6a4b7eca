use crate::cli::OutputFormat;
use colored::Colorize;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: "error".to_string(),
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err)
                .unwrap_or_else(|_| format!(r#"{{"error": true, "message": "{}"}}"#, err))
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

/// Informational progress line; suppressed in JSON mode so stdout stays a
/// single parseable document
pub fn output_info(message: &str, format: OutputFormat) {
    if matches!(format, OutputFormat::Text) {
        println!("{}", message);
    }
}
