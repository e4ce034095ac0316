mod cli;
mod dictionary;
mod enrich;
mod export;
mod input;
mod lang;
mod pipeline;
mod report;
mod translate;

#[cfg(test)]
mod testing;

pub const USER_AGENT: &str = concat!("wordcard/", env!("CARGO_PKG_VERSION"));

use std::time::Duration;

use clap::Parser;
use reqwest::Client;
use tracing::info;

use cli::Cli;
use dictionary::DictionaryClient;
use pipeline::{RunOptions, RunOutcome};
use translate::GoogleTranslateClient;

/// TCP connection establishment timeout. Per-request bounds live in each client.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wordcard=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let http = Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?;
    let dictionary = DictionaryClient::from_env(http.clone());
    let translator = GoogleTranslateClient::from_env(http);

    let options = RunOptions {
        target: cli.target,
        output: cli.output,
    };

    let mut stdout = std::io::stdout().lock();
    let outcome = pipeline::run(&cli.words, &dictionary, &translator, &options, &mut stdout)
        .await
        .inspect_err(|e| tracing::error!("run failed: {e}"))?;

    if let RunOutcome::Completed {
        input_count,
        records,
    } = outcome
    {
        info!(
            input_count,
            records = records.len(),
            output = %options.output.display(),
            "run complete"
        );
    }
    Ok(())
}
