use rostra_core::audit::{audit, compute_windows, AuditOptions};
use rostra_core::error::RosterError;
use rostra_core::extraction::pdftotext::PdftotextProvider;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    fortnight_start: &str,
    pay_date: Option<&str>,
    own_accom_hotel: String,
    output_format: &str,
    show_all: bool,
) -> Result<(), RosterError> {
    let fortnight_start = rostra_core::parse_iso_date(fortnight_start)?;
    let pay_date = pay_date.map(rostra_core::parse_iso_date).transpose()?;
    let periods = compute_windows(fortnight_start, pay_date);

    // Capture JSON replays through the same path as a fresh PDF parse
    let is_json = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let duties = if is_json {
        let json_bytes = std::fs::read(&input_file)?;
        let (capture, warnings) = rostra_core::load_capture(&json_bytes);
        for w in &warnings {
            eprintln!("warning: {}", w.reason);
        }
        capture.duties
    } else {
        let pdf_bytes = std::fs::read(&input_file)?;
        let provider = PdftotextProvider::new();
        let file_name = input_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input_file.display().to_string());
        let parsed = rostra_core::parse_pdf(&pdf_bytes, &provider, &file_name)?;
        for w in &parsed.diagnostics.warnings {
            eprintln!("warning: {}", w.reason);
        }
        parsed.capture.duties
    };

    let options = AuditOptions { own_accom_hotel };
    let result = audit(&duties, &periods, &options);

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_audit(&result, show_all),
    }

    Ok(())
}
