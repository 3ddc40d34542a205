use rostra_core::audit::{AuditResult, Bucket};
use rostra_core::ParsedRoster;

pub fn format_parsed(parsed: &ParsedRoster) -> String {
    let mut out = String::new();
    let duties = &parsed.capture.duties;

    out.push_str(&format!(
        "Parsed {} duty day(s) from {} ({} page(s), {} line(s))\n\n",
        duties.len(),
        parsed.capture.file_name,
        parsed.diagnostics.page_count,
        parsed.diagnostics.line_count
    ));

    for day in duties {
        out.push_str(&format!("{}\n", day.start_date));
        push_field(&mut out, "duty", &join_display(&day.duty_codes));
        push_field(&mut out, "flights", &day.flights.join(" "));
        push_field(&mut out, "sectors", &day.sectors.join(" "));
        push_field(&mut out, "times", &day.times.join(" "));
        push_field(&mut out, "hotels", &day.hotels.join(" "));
        push_field(&mut out, "remarks", &day.remarks.join(", "));
    }

    if !parsed.diagnostics.skipped_lines.is_empty() {
        out.push_str(&format!(
            "\n{} non-data line(s) skipped\n",
            parsed.diagnostics.skipped_lines.len()
        ));
    }

    out
}

pub fn print_audit(result: &AuditResult, show_all: bool) {
    println!("Current window:   {}", result.current);
    println!("Previous window:  {}", result.prev);
    println!("Inferred pay date: {}", result.inferred_pay_date);
    if let Some(delta) = result.pay_delta_days {
        println!("Pay date delta:    {delta:+} day(s) vs inferred");
    }
    println!();

    let rows: Vec<_> = result
        .rows
        .iter()
        .filter(|r| show_all || r.bucket != Bucket::Outside)
        .collect();

    if rows.is_empty() {
        println!("No duty days fall inside the pay windows.");
        return;
    }

    for row in rows {
        let flags = row
            .flags
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "  {:<8} {:<8} {:<20} {:<24} {}",
            row.start_date,
            row.bucket.to_string(),
            row.flights.join(" "),
            row.sectors.join(" "),
            flags
        );
    }

    let outside = result
        .rows
        .iter()
        .filter(|r| r.bucket == Bucket::Outside)
        .count();
    if outside > 0 && !show_all {
        println!("\n{} duty day(s) outside both windows (use --all to show)", outside);
    }
}

fn push_field(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        out.push_str(&format!("  {:<8} {}\n", label, value));
    }
}

fn join_display<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
