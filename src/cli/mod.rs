//! Command-line surface: argument parsing and the read-eval loop.

use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::error;

use crate::agent::Agent;
use crate::config::JarvisConfig;
use crate::error::{JarvisError, Result};

pub const GREETING: &str = "J.A.R.V.I.S. is online. How may I be of service, Sir?";
pub const FAREWELL: &str = "Logging off. Do try not to set anything on fire while I'm away.";
pub const PROMPT: &str = "> ";
pub const EXIT_COMMAND: &str = "exit";

/// J.A.R.V.I.S., a small local assistant with tools
#[derive(Parser, Debug, Default)]
#[command(name = "jarvis", version, about = "J.A.R.V.I.S. — conversational agent with tools")]
pub struct Cli {
    /// Model to use (defaults to JARVIS_MODEL or llama3.2:3b)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Conversation turns kept in memory
    #[arg(long)]
    pub max_turns: Option<usize>,

    /// Provider calls allowed per request
    #[arg(long)]
    pub max_tool_iterations: Option<usize>,

    /// Ollama server URL
    #[arg(long)]
    pub ollama_url: Option<String>,
}

impl Cli {
    /// Layer command-line overrides on top of `config`.
    pub fn apply(&self, mut config: JarvisConfig) -> Result<JarvisConfig> {
        if let Some(ref model) = self.model {
            config = config.with_model(model.clone());
        }
        if let Some(turns) = self.max_turns {
            config = config.with_max_turns(turns);
        }
        if let Some(iterations) = self.max_tool_iterations {
            config = config.with_max_tool_iterations(iterations);
        }
        if let Some(ref url) = self.ollama_url {
            config = config.with_ollama_base_url(url.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

/// Map a fatal request error to a short user-facing explanation.
pub fn format_error_help(err: &JarvisError) -> String {
    match err {
        JarvisError::Network(e) if e.is_timeout() => {
            "the language model took too long to answer.".to_string()
        }
        JarvisError::Network(_) => {
            "I could not reach the language model. Is Ollama running?".to_string()
        }
        JarvisError::Api { status: 404, message } => {
            format!("the model is not available ({message}). Try `ollama pull <model>`.")
        }
        JarvisError::DispatchLoopExceeded { limit } => {
            format!("I could not settle on an answer after {limit} attempts.")
        }
        other => other.to_string(),
    }
}

/// Run the interactive loop until `exit` or end of input.
///
/// A failed request is reported and the session continues; its memory is
/// left as it was when the failure happened.
pub async fn run_repl<R, W>(agent: &mut Agent, input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "{GREETING}")?;
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(output)?;
            break;
        };
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case(EXIT_COMMAND) {
            writeln!(output, "{FAREWELL}")?;
            break;
        }

        match agent.process_query(query).await {
            Ok(answer) => writeln!(output, "<- J.A.R.V.I.S.: {answer}")?,
            Err(e) => {
                error!(error = %e, "request failed");
                writeln!(
                    output,
                    "I'm sorry, Sir, something went wrong: {}",
                    format_error_help(&e)
                )?;
            }
        }
    }

    Ok(())
}
