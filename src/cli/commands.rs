use crate::error::FillResult;
use crate::report::render_report;
use crate::types::ReportPayload;
use colored::Colorize;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Execute the fill command: the same fill the server does, offline.
pub fn fill(
    input: PathBuf,
    template: PathBuf,
    output: PathBuf,
    verbose: bool,
) -> FillResult<()> {
    println!("{}", "Reportfill - Filling report template".bold().green());
    println!("   Data:     {}", input.display());
    println!("   Template: {}", template.display());
    println!();

    let raw = fs::read_to_string(&input)?;
    let json: Value = serde_json::from_str(&raw)?;
    let payload = ReportPayload::from_json(&json);

    if verbose {
        println!("{}", "Parsed payload:".cyan());
        println!("   Exchange rate: {}", payload.exchange_rate);
        println!(
            "   Period: {} to {}",
            payload.period_from, payload.period_to
        );
        println!("   Regions: {}", payload.regions.len());
        println!();
    }

    let (bytes, outcome) = render_report(&template, &payload)?;
    fs::write(&output, &bytes)?;

    println!("{}", "Report written".bold().green());
    println!("   Output: {}", output.display());
    println!("   Regions filled: {}", outcome.regions_filled.len());
    for name in &outcome.regions_filled {
        println!("      {}", name.bright_blue());
    }
    if !outcome.skipped.is_empty() {
        println!(
            "   {} {} region(s) skipped:",
            "Warning:".yellow(),
            outcome.skipped.len()
        );
        for skip in &outcome.skipped {
            println!("      {} ({})", skip.code.yellow(), skip.reason);
        }
    }

    Ok(())
}
