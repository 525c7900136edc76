//! Example: Check credentials and look up rates and KYC status.
//!
//! Reads `XUMM_APIKEY` and `XUMM_APISECRET` from the environment or `.env`.
//!
//! Run with: cargo run --example ping -- rPEPPER7kfTD9w2To4CQk6UCfuHM9c6GDY

use xumm_api_client::XummError;
use xumm_api_client::platform::XummRestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = match XummRestClient::from_env() {
        Ok(client) => client,
        Err(e) if e.is_config() => {
            eprintln!("Configuration error: {e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let details = client.ping().await?;
    println!(
        "Application: {} ({})",
        details.application.name, details.application.uuidv4
    );

    let rates = client.get_rates("usd").await?;
    println!("1 XRP = {} {}", rates.xrp, rates.meta.currency.code);

    if let Some(subject) = std::env::args().nth(1) {
        match client.get_kyc_status(&subject).await {
            Ok(status) => println!("KYC status of {subject}: {status}"),
            Err(XummError::Api(api_error)) => println!("API error: {api_error}"),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
