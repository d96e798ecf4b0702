use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::Level;

use stripe2qif::{QifExporter, StripeClient, StripeConfig, parse_from_date};

#[derive(Parser, Debug)]
#[command(
    name = "stripe2qif",
    version,
    about = "Export Stripe transfers as a QIF bank statement"
)]
struct Cli {
    /// Stripe API key, required.
    #[arg(long, value_name = "STRIPE_API_KEY")]
    api_key: Option<String>,

    /// A date to list all transfers after, exclusive. If not specified,
    /// start of time is used.
    #[arg(long, value_name = "dd/mm/yyyy", default_value = "01/01/1900")]
    from: String,

    /// The maximum number of transfers to return. Maximum is 100, will
    /// assume 100 if not provided.
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    count: u32,
}

fn init_logger() {
    let verbosity = std::env::var("VERBOSITY").unwrap_or_else(|_| "WARN".to_string());
    let level = match verbosity.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "INFO" => Level::INFO,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::WARN,
    };

    // Logs go to stderr; stdout carries the rendered document only.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();

    let Some(api_key) = cli.api_key else {
        // Usage goes to stdout, matching the help flag.
        println!("Error: Missing required options.");
        Cli::command().print_help()?;
        std::process::exit(1);
    };

    let since = parse_from_date(&cli.from)?;

    let client = StripeClient::new(StripeConfig::new(api_key));
    let document = QifExporter::new(client)
        .since(since)
        .count(cli.count)
        .export()
        .await?;

    // The rendered document already ends with the trailing blank line.
    print!("{}", document.render());

    Ok(())
}
