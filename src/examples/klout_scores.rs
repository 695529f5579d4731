//! Klout Scores Example
//!
//! Looks up scores and profiles for the screen names given on the command
//! line, after the API key.
//!
//! Run with: cargo run --example klout_scores -- <api_key> alice bob

use klout_rs::Client;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("klout_rs=debug,klout_scores=info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .try_init()?;

    let mut args = std::env::args().skip(1);
    let api_key = match args.next() {
        Some(key) => key,
        None => anyhow::bail!("usage: klout_scores <api_key> <screen_name>..."),
    };

    let names: Vec<String> = args.collect();
    if names.is_empty() {
        anyhow::bail!("usage: klout_scores <api_key> <screen_name>...");
    }

    tracing::info!("Looking up {} screen names", names.len());
    let client = Client::new(api_key)?;

    println!("Scores:");
    for record in client.scores(names.as_slice()).await? {
        println!("   {}", record);
    }

    for user in client.users(names.as_slice()).await? {
        println!("\n{} (id {})", user.name()?, user.id()?);
        println!("   Klout: {:.2} ({})", user.klout()?, user.classification()?);
        println!("   True reach: {}", user.true_reach()?);
        println!(
            "   Amplification: {:.2}, network: {:.2}",
            user.amplification()?,
            user.network()?
        );
        println!("   Topics: {:?}", user.topics().await?);
        println!("   Influenced by: {}", user.influencers().await?.join(", "));
        println!("   Influences: {}", user.influencees().await?.join(", "));
    }

    Ok(())
}
