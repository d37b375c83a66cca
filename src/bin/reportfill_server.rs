//! Reportfill server binary
//!
//! HTTP endpoint for the sponsorship report filler.

use clap::Parser;
use reportfill::api::{run_api_server, server::ApiConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reportfill-server")]
#[command(version)]
#[command(about = "Reportfill server - HTTP endpoint for the sponsorship report filler")]
#[command(long_about = r#"
Reportfill server

Endpoints:
  - POST /populate-excel - Fill the report template, returns the .xlsx file
  - POST /convert        - Legacy alias for /populate-excel
  - GET  /health         - Health check
  - GET  /version        - Server version info
  - GET  /               - API documentation

Features:
  - CORS enabled for cross-origin requests
  - Graceful shutdown on SIGINT/SIGTERM
  - JSON error responses, tracing and structured logging

Example usage:
  reportfill-server                              # 0.0.0.0:10000, ./report_template.xlsx
  reportfill-server --port 3000 --template /srv/templates/report.xlsx

  curl -X POST http://localhost:10000/populate-excel \
    -H "Content-Type: application/json" \
    -d @data.json -o filled.xlsx
"#)]
struct Args {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "10000", env = "PORT")]
    port: u16,

    /// Path to the spreadsheet template
    #[arg(short, long, default_value = "report_template.xlsx", env = "REPORT_TEMPLATE")]
    template: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        template_path: args.template,
    };

    run_api_server(config).await
}
