use rostra_core::extraction::pdftotext::PdftotextProvider;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), rostra_core::error::RosterError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let provider = PdftotextProvider::new();
    let file_name = pdf_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| pdf_file.display().to_string());
    let parsed = rostra_core::parse_pdf(&pdf_bytes, &provider, &file_name)?;

    for w in &parsed.diagnostics.warnings {
        eprintln!("warning: {}", w.reason);
    }

    match output_file {
        Some(path) => {
            // Always write the JSON envelope when saving to file
            let json = serde_json::to_string_pretty(&parsed.capture)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} duty day(s), written to {}",
                parsed.capture.duties.len(),
                path.display()
            );
            if !parsed.diagnostics.skipped_lines.is_empty() {
                eprintln!(
                    "  {} non-data line(s) skipped during parsing",
                    parsed.diagnostics.skipped_lines.len()
                );
            }
        }
        None => {
            let output_str = match output_format {
                "json" => serde_json::to_string_pretty(&parsed.capture)?,
                _ => output::table::format_parsed(&parsed),
            };
            println!("{output_str}");
        }
    }

    Ok(())
}
