use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use scpd_client::logging::{self, LoggingMode};
use scpd_client::{ClientConfig, ParseReport, ScpdClient};
use upnp_typedef::{Service, Value};

mod render;

/// UPnP service description inspector
///
/// Loads an SCPD document from a device URL or a local file, then prints a
/// summary, a JSON view, or the document as re-serialized from the model.
#[derive(Parser, Debug)]
#[command(name = "scpd-tool")]
#[command(about = "Fetch, inspect and re-serialize UPnP service descriptions")]
#[command(version)]
pub struct Args {
    /// Description URL, e.g. http://192.168.1.10:1400/xml/RenderingControl1.xml
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub url: Option<String>,

    /// Read the description from a local file instead of a URL
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "10")]
    pub timeout: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Exit with an error if any entry was skipped or rejected
    #[arg(long)]
    pub strict: bool,

    /// Convert a value against a state variable's declared data type
    #[arg(long = "check", value_name = "VARIABLE=VALUE")]
    pub checks: Vec<String>,

    /// Increase log output (-v for development logs, -vv for debug logs)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Summary,
    Json,
    Xml,
}

impl Args {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout == 0 {
            return Err(anyhow::anyhow!("Timeout must be positive"));
        }

        if let Some(url) = &self.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(anyhow::anyhow!("Invalid URL '{}': expected http:// or https://", url));
            }
        }

        Ok(())
    }

    /// Logging mode from the verbosity flag, or `None` to defer to `SCPD_LOG_MODE`
    fn logging_mode(&self) -> Option<LoggingMode> {
        match self.verbose {
            0 => None,
            1 => Some(LoggingMode::Development),
            _ => Some(LoggingMode::Debug),
        }
    }
}

fn init_tracing(args: &Args) -> Result<()> {
    let result = match args.logging_mode() {
        Some(mode) => logging::init_logging(mode),
        None => logging::init_logging_from_env(),
    };
    result.context("Failed to initialize logging")
}

fn load(args: &Args) -> Result<(Service, ParseReport)> {
    let mut service = Service::new();

    let report = match (&args.url, &args.file) {
        (_, Some(path)) => {
            info!("Loading service description from {}", path.display());
            let xml = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            scpd::parse_str(&xml, &mut service)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        (Some(url), None) => {
            info!("Fetching service description from {}", url);
            let config = ClientConfig::new().with_timeout(args.timeout_duration());
            let client = ScpdClient::with_config(config);
            client
                .fetch_and_parse(url, &mut service, args.timeout_duration())
                .with_context(|| format!("Failed to load {}", url))?
        }
        (None, None) => return Err(anyhow::anyhow!("Either a URL or --file is required")),
    };

    Ok((service, report))
}

/// Parse `VARIABLE=VALUE` and convert the value with the variable's data type
fn check_value(service: &Service, check: &str) -> Result<(String, Value)> {
    let (name, text) = check
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Invalid check '{}': expected VARIABLE=VALUE", check))?;

    let variable = service
        .state_variable(name)
        .ok_or_else(|| anyhow::anyhow!("No state variable named '{}'", name))?;

    let value = variable
        .parse_value(text)
        .with_context(|| format!("Value for {} ({})", name, variable.data_type_name()))?;

    Ok((name.to_string(), value))
}

fn run(args: Args) -> Result<()> {
    args.validate()?;
    init_tracing(&args)?;

    let (service, report) = load(&args)?;
    debug!(
        "Loaded {} actions and {} state variables",
        service.action_count(),
        service.state_variable_count()
    );

    for skipped in &report.skipped {
        warn!("Skipped {}", skipped);
    }

    match args.format {
        OutputFormat::Summary => print!("{}", render::summary(&service, &report)),
        OutputFormat::Json => {
            let view = render::ServiceView::new(&service, &report);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Xml => println!("{}", scpd::to_xml(&service)?),
    }

    for check in &args.checks {
        let (name, value) = check_value(&service, check)?;
        println!("{} = {} ({:?})", name, value, value.kind());
    }

    if args.strict && !report.is_clean() {
        return Err(anyhow::anyhow!(
            "{} entries skipped, {} rejected",
            report.skipped.len(),
            report.rejected.len()
        ));
    }

    Ok(())
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
