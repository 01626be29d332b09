mod display;
mod input;
mod session;

use std::path::PathBuf;
use std::process::ExitCode;

use askmynotes_ai::{Analyzer, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, prompt};
use askmynotes_core::{AnalysisRequest, TopicId, topics};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::session::{Outcome, Session};

#[derive(Parser, Debug)]
#[command(name = "askmynotes")]
#[command(about = "Turn study notes into an explanation, a summary, and exam questions")]
#[command(version)]
struct Cli {
    /// Gemini API key
    #[arg(long, env = "API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Model used for generation
    #[arg(long, env = "ASKMYNOTES_MODEL", default_value = DEFAULT_MODEL, global = true)]
    model: String,

    /// Base URL of the generative API
    #[arg(long, env = "ASKMYNOTES_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the reference topics notes can be grounded in
    Topics {
        /// Also print each topic's grounding text
        #[arg(long)]
        content: bool,
    },
    /// Analyse notes and print the explanation, summary, and exam questions
    Analyze {
        #[command(flatten)]
        input: NotesInput,

        /// Print the result as JSON instead of panels
        #[arg(long)]
        json: bool,
    },
    /// Print the instruction and output contract without calling the API
    Prompt {
        #[command(flatten)]
        input: NotesInput,
    },
}

#[derive(Args, Debug)]
struct NotesInput {
    /// Reference topic: python, dsa, ml, or general
    #[arg(long, short = 't', default_value = "general")]
    topic: TopicId,

    /// Notes text (reads --file or stdin when omitted)
    #[arg(long, short = 'n', conflicts_with = "file")]
    notes: Option<String>,

    /// Read notes from a file
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,
}

impl NotesInput {
    fn read(self) -> anyhow::Result<(String, TopicId)> {
        let notes = input::read_notes(self.notes, self.file.as_deref())?;
        Ok((notes, self.topic))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();
    info!("askmynotes v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Topics { content } => {
            display::print_topics(topics(), content);
            Ok(ExitCode::SUCCESS)
        }
        Command::Prompt { input } => {
            let (notes, topic) = input.read()?;
            match AnalysisRequest::new(notes, topic) {
                Ok(request) => {
                    display::print_prompt(&prompt::build(&request))?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("{e}");
                    Ok(ExitCode::from(2))
                }
            }
        }
        Command::Analyze { input, json } => {
            let (notes, topic) = input.read()?;
            let client = GeminiClient::with_base_url(cli.model, cli.base_url);
            info!(model = client.model(), topic = %topic, "dispatching analysis");
            let analyzer = Analyzer::new(client, cli.api_key);
            let mut session = Session::new(notes, topic);

            eprintln!("Synthesizing...");
            match session.trigger(&analyzer).await {
                Outcome::Completed => {
                    if let Some(result) = session.result() {
                        if json {
                            println!("{}", serde_json::to_string_pretty(result)?);
                        } else {
                            display::print_result(result);
                        }
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Outcome::Rejected => {
                    eprintln!("{}", session.error().unwrap_or_default());
                    Ok(ExitCode::from(2))
                }
                Outcome::Failed | Outcome::Ignored => {
                    eprintln!("{}", session.error().unwrap_or_default());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
