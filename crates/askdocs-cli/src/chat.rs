//! Interactive chat session

use colored::*;

use askdocs_core::{Result, TextGenerator, VectorStore};
use askdocs_rag::RagEngine;

use crate::ui::{UserInput, read_user_input};

/// Whether the input is one of the exit control tokens
///
/// Matched case-insensitively before any retrieval or generation happens.
pub fn is_exit_command(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "exit" | "quit")
}

/// The interactive read loop
///
/// Each query is independent; no conversation history is sent to the model.
pub struct ChatSession<V: VectorStore, G: TextGenerator> {
    engine: RagEngine<V, G>,
}

impl<V: VectorStore, G: TextGenerator> ChatSession<V, G> {
    pub fn new(engine: RagEngine<V, G>) -> Self {
        Self { engine }
    }

    /// Run the loop until exit, interrupt, or end of input
    pub async fn run(&mut self) -> Result<()> {
        let mut history = Vec::new();

        loop {
            let input = match read_user_input(&mut history).await? {
                UserInput::Interrupted => {
                    println!("\n{}", "Session ended.".dimmed());
                    break;
                }
                UserInput::Line(line) => line,
            };

            if input.is_empty() {
                continue;
            }

            if is_exit_command(&input) {
                println!("{}", "Goodbye!".green());
                break;
            }

            println!("{} Thinking...", "🤖".blue());

            match self.engine.answer(&input).await {
                Ok(outcome) => {
                    // Failure text is shown in place of an answer; the loop
                    // keeps accepting queries either way
                    println!(
                        "\n{} {}\n",
                        "assistant:".cyan().bold(),
                        outcome.display_text()
                    );
                }
                Err(e) => {
                    println!("{} Query failed: {}", "❌".red(), e);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_tokens_are_case_insensitive() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("Exit"));
        assert!(is_exit_command("EXIT"));
        assert!(is_exit_command("quit"));
        assert!(is_exit_command("Quit"));
    }

    #[test]
    fn test_queries_are_not_exit_commands() {
        assert!(!is_exit_command("What is the refund policy?"));
        assert!(!is_exit_command("exit strategy for the project"));
        assert!(!is_exit_command(""));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(is_exit_command("  exit  "));
        assert!(is_exit_command("\tquit\n"));
    }
}
