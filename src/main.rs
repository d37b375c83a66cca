use clap::{Parser, Subcommand};
use reportfill::cli;
use reportfill::error::FillResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reportfill")]
#[command(about = "Fill the sponsorship report template from JSON financial data.")]
#[command(long_about = "Reportfill - sponsorship report template filler

Takes a JSON payload (financial summary plus per-region/per-child
breakdowns), writes the values into the fixed cells of the report
template, recomputes subtotal and grand-total cells, and writes the
filled workbook.

COMMANDS:
  fill - Fill a template from a JSON data file

EXAMPLES:
  reportfill fill data.json report_template.xlsx filled.xlsx
  reportfill fill data.json report_template.xlsx filled.xlsx --verbose

The HTTP server lives in the separate reportfill-server binary.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Fill a report template from a JSON data file.

Regions whose code matches no sheet in the template are skipped and
listed; no sheet is ever created for them. Subtotal and grand-total
cells are recomputed from the line items, not taken from the input.")]
    /// Fill a report template from a JSON data file
    Fill {
        /// Path to JSON data file
        input: PathBuf,

        /// Path to the spreadsheet template (.xlsx)
        template: PathBuf,

        /// Output file path (.xlsx)
        output: PathBuf,

        /// Show parsed payload details
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> FillResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fill {
            input,
            template,
            output,
            verbose,
        } => cli::fill(input, template, output, verbose),
    }
}
