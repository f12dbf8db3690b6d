use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use roman_service::http::{convert_decimal, convert_roman, Envelope, Rejection};

#[derive(Parser)]
#[command(name = "roman-cli")]
#[command(about = "Client for the Roman numeral conversion service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Convert locally instead of calling the service
    #[arg(long)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// Convert a Roman numeral to an integer
    ToInt { roman: String },
    /// Convert an integer to a Roman numeral
    ToRoman { value: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.offline {
        let json = convert_locally(&cli.command)?;
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    let client = reqwest::Client::new();
    let path = match &cli.command {
        Commands::Health => "/health".to_string(),
        Commands::ToInt { roman } => format!("/roman_to_int/{}", roman),
        Commands::ToRoman { value } => format!("/int_to_roman/{}", value),
    };

    let res = client
        .get(format!("{}{}", cli.url.trim_end_matches('/'), path))
        .send()
        .await?;
    print_response(res).await?;

    Ok(())
}

/// Produce the same envelope the service would, without a network round trip.
fn convert_locally(command: &Commands) -> Result<Value, serde_json::Error> {
    match command {
        Commands::Health => serde_json::to_value(Envelope::ok("OK")),
        Commands::ToInt { roman } => envelope(convert_roman(roman)),
        Commands::ToRoman { value } => envelope(convert_decimal(value)),
    }
}

fn envelope<T: Serialize>(outcome: Result<T, Rejection>) -> Result<Value, serde_json::Error> {
    match outcome {
        Ok(result) => serde_json::to_value(Envelope::ok(result)),
        Err(rejection) => serde_json::to_value(Envelope::error(rejection.message)),
    }
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
    }
    Ok(())
}
