use clap::Parser;
use ferrous_dnsmap_domain::config::LogFormat;
use ferrous_dnsmap_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-dnsmap")]
#[command(version)]
#[command(about = "Ferrous DNS Mapper - Render Cloudflare DNS records as a Markdown hierarchy")]
struct Cli {
    /// Cloudflare API token, or the output file when --token or
    /// CLOUDFLARE_API_TOKEN already supplies the token
    #[arg(value_name = "API_TOKEN")]
    first: Option<String>,

    /// Output file, or "-" for stdout
    #[arg(value_name = "OUTPUT_FILE")]
    second: Option<String>,

    /// Cloudflare API token with Zone:Read and DNS:Read permissions
    #[arg(long, env = "CLOUDFLARE_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Exclude TXT and verification records (SPF, DKIM, DMARC, ACME)
    #[arg(long)]
    notxt: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Provider API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long)]
    log_format: Option<LogFormat>,
}

impl Cli {
    /// Splits the positionals into (token, output file).
    ///
    /// Two positionals are always `API_TOKEN OUTPUT_FILE`. A lone positional
    /// is the output file once `--token` or the environment holds the token.
    fn token_and_output(&self) -> (Option<String>, Option<String>) {
        match (&self.token, &self.first, &self.second) {
            (_, Some(token), Some(output)) => (Some(token.clone()), Some(output.clone())),
            (Some(token), Some(output), None) => (Some(token.clone()), Some(output.clone())),
            (None, Some(token), None) => (Some(token.clone()), None),
            (token, None, _) => (token.clone(), None),
        }
    }

    fn overrides(self) -> (Option<String>, CliOverrides) {
        let (api_token, output_path) = self.token_and_output();
        let overrides = CliOverrides {
            api_token,
            base_url: self.base_url,
            output_path,
            exclude_txt: self.notxt,
            log_level: self.log_level,
            log_format: self.log_format,
        };
        (self.config, overrides)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config_path, cli_overrides) = Cli::parse().overrides();

    let config = bootstrap::load_config(config_path.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous DNS Mapper v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config)?;

    match services.generate_hierarchy.execute().await {
        Ok(report) => {
            info!(
                zones = report.zones,
                records = report.records,
                roots = report.roots,
                "✓ Mindmap generated: {}",
                services.destination
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Failed to generate hierarchy");
            Err(e.into())
        }
    }
}
