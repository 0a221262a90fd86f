use clap::Parser;
use radius_client::{create_client, AccessRequestOptions, ClientConfig};
use radius_proto::{AttributeType, ResponseCode};
use std::process;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Send one RADIUS Access-Request and print the outcome
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// User name to authenticate
    username: String,

    /// Password, hidden on the wire with the shared secret
    password: String,

    /// Shared secret
    secret: String,

    /// RADIUS server host
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// RADIUS server port
    #[arg(long, default_value_t = 1812)]
    port: u16,

    /// Response timeout in milliseconds
    #[arg(long, default_value_t = 3000)]
    timeout_ms: u64,

    /// Calling-Station-Id to send
    #[arg(long)]
    calling_station_id: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::new(&cli.host)
        .with_port(cli.port)
        .with_timeout(Duration::from_millis(cli.timeout_ms));
    let client = match create_client(config) {
        Ok(client) => client,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(2);
        }
    };

    let mut options = AccessRequestOptions::new(&cli.secret)
        .attribute(AttributeType::UserName, cli.username.as_str())
        .attribute(AttributeType::UserPassword, cli.password.as_str());
    if let Some(station) = cli.calling_station_id {
        options = options.attribute(AttributeType::CallingStationId, station);
    }

    println!("Server: {}:{}", cli.host, cli.port);
    println!("Username: {}", cli.username);

    match client.access_request(options).await {
        Ok(response) => {
            match response.code {
                ResponseCode::Accept => println!("\n✓ Access-Accept"),
                ResponseCode::Reject => println!("\n✗ Access-Reject"),
                ResponseCode::Challenge => println!("\n→ Access-Challenge"),
            }
            for (attr_type, values) in &response.attributes {
                let name = AttributeType::from_u8(*attr_type)
                    .map(|t| t.name().to_string())
                    .unwrap_or_else(|| format!("Attribute-{}", attr_type));
                for value in values {
                    println!("  {}: {}", name, value);
                }
            }
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("Could not render response: {}", e),
            }
            if response.code != ResponseCode::Accept {
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Access-Request failed: {}", e);
            process::exit(1);
        }
    }
}
