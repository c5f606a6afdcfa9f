use anyhow::Context;
use cast_client::config::cli::{Command, Lookup};
use cast_client::utils::logger;
use cast_client::{ApiClient, CastSource, CliConfig};
use clap::Parser;
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{}", text);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let resolved = match cli.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if resolved.log_json {
        logger::init_json_logger(resolved.verbose);
    } else {
        logger::init_cli_logger(resolved.verbose);
    }
    tracing::debug!("Resolved settings: {:?}", resolved.settings);

    let client = ApiClient::new(&resolved.settings).context("Failed to build HTTP client")?;

    match cli.command {
        Command::Actress { lookup } => match lookup {
            Lookup::Get { id } => print_json(&client.get_actress(id).await)?,
            Lookup::List => print_json(&client.get_all_actresses().await)?,
            Lookup::Many { ids } => print_json(&client.get_actresses(&ids).await)?,
        },
        Command::Actor { lookup } => match lookup {
            Lookup::Get { id } => print_json(&client.get_actor(id).await)?,
            Lookup::List => print_json(&client.get_all_actors().await)?,
            Lookup::Many { ids } => print_json(&client.get_actors(&ids).await)?,
        },
        Command::Couple => {
            let couple = client.random_couple().await;
            print_json(&couple)?
        }
    }

    Ok(())
}
