use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use shared::{submit_question, AskClient, Phase, ResultsState, TicketCounter};
use socratic::{render, Config};
use tracing_subscriber::EnvFilter;

/// Ask the Socratic dialogue agent a question.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Backend base URL. Falls back to SOCRATIC_URL, then http://127.0.0.1:8000.
    #[arg(long)]
    url: Option<String>,

    /// The question; multiple words are joined with spaces.
    question: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env(cli.url)?;
    let client = AskClient::new(config.transport()?);

    let question = cli.question.join(" ");
    let mut state = ResultsState::default();
    let ticket = TicketCounter::default().next();

    if !submit_question(&client, &question, ticket, |action| state.apply(action)).await {
        tracing::debug!("empty question, nothing sent");
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", render(&state));

    if state.phase == Phase::Failed {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
