//! Interactive multi-tool assistant.
//!
//! This binary provides a REPL with two tools sharing one session: a
//! chatbot that converses against the full transcript, and a text
//! summarizer that condenses pasted text into a three-line summary.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage (requires OPENROUTER_API_KEY in the environment)
//! sidekick
//!
//! # Disable colors (useful for piping output)
//! sidekick --no-color
//! ```
//!
//! # Commands
//!
//! While the assistant is running, you can use slash commands:
//! - `/help` - Show available commands
//! - `/mode <chat|summarize>` - Switch tools
//! - `/clear` - Clear conversation history (chat mode only)
//! - `/history` - Show the conversation so far
//! - `/stats` - Show session statistics
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use sidekick::repl::{
    Mode, ReplArgs, ReplCommand, ReplConfig, Session, help_text, parse_command_for,
};
use sidekick::{OpenRouter, PlainTextRenderer, Renderer, Role};

/// Main entry point for the sidekick application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ReplArgs::from_command_line_relaxed("sidekick [OPTIONS]");
    let config = ReplConfig::from(args);
    let use_color = config.use_color;

    let client = match OpenRouter::new(None) {
        Ok(client) => client,
        Err(err) => {
            // Fatal: no request client is constructed without a credential.
            eprintln!("{err}");
            eprintln!("Set OPENROUTER_API_KEY in your environment and try again.");
            std::process::exit(1);
        }
    };

    let mut session = Session::new(client, config);
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    println!("Multi-Tool Assistant (model: {})", session.model());
    println!("Type /help for commands, /quit to exit\n");
    if let Some(greeting) = session.mode().greeting(session.transcript().is_empty()) {
        renderer.print_message(Role::Assistant, greeting);
    }

    loop {
        let prompt = match session.mode() {
            Mode::Chat => "You: ",
            Mode::Summarize => "Text: ",
        };

        let readline = rl.readline(prompt);

        match readline {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                // Check for slash commands; while summarizing, only lines
                // that parse cleanly count (pasted text may start with `/`).
                if let Some(cmd) = parse_command_for(&line, session.mode()) {
                    match cmd {
                        ReplCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ReplCommand::Mode(mode) => {
                            session.set_mode(mode);
                            match mode {
                                Mode::Chat => {
                                    renderer.print_info("Chat mode. Type a message to begin.");
                                }
                                Mode::Summarize => {
                                    renderer.print_info(
                                        "Summarizer mode. Paste text, then finish with a line \
                                         containing only '.'",
                                    );
                                }
                            }
                            let empty = session.transcript().is_empty();
                            if let Some(greeting) = session.mode().greeting(empty) {
                                renderer.print_message(Role::Assistant, greeting);
                            }
                        }
                        ReplCommand::Clear => {
                            if session.mode() == Mode::Chat {
                                session.clear();
                                renderer.print_info("Conversation cleared.");
                            } else {
                                renderer.print_info("/clear is only available in chat mode.");
                            }
                        }
                        ReplCommand::History => {
                            print_history(&session, &mut renderer);
                        }
                        ReplCommand::Stats => {
                            print_stats(&session);
                        }
                        ReplCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ReplCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                match session.mode() {
                    Mode::Chat => {
                        match session.chat(&line).await {
                            Ok(Some(reply)) => {
                                renderer.print_message(Role::Assistant, &reply);
                            }
                            Ok(None) => {}
                            Err(err) => {
                                renderer.print_error(&err.to_string());
                            }
                        }
                    }
                    Mode::Summarize => {
                        let Some(document) = read_document(&mut rl, &line) else {
                            println!();
                            continue;
                        };
                        match session.summarize(&document).await {
                            Ok(summary) => {
                                println!("Summary:");
                                renderer.print_text(&summary);
                            }
                            Err(err) if err.is_validation() => {
                                renderer.print_warning(&err.to_string());
                            }
                            Err(err) => {
                                renderer.print_error(&err.to_string());
                            }
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

/// Collects a multi-line document starting from the first pasted line.
///
/// Lines are accumulated until the user enters a `.` on its own line (or
/// Ctrl+D). Returns `None` if the capture is cancelled with Ctrl+C.
fn read_document(rl: &mut DefaultEditor, first_line: &str) -> Option<String> {
    let mut lines = vec![first_line.to_string()];

    loop {
        match rl.readline("... ") {
            Ok(line) => {
                if line.trim() == "." {
                    break;
                }
                lines.push(line);
            }
            Err(ReadlineError::Eof) => break,
            Err(_) => return None,
        }
    }

    Some(lines.join("\n"))
}

fn print_history<C: sidekick::CompletionBackend>(
    session: &Session<C>,
    renderer: &mut dyn Renderer,
) {
    if session.transcript().is_empty() {
        renderer.print_info("No conversation yet.");
        return;
    }
    for message in session.transcript().all() {
        renderer.print_message(message.role, &message.content);
    }
}

fn print_stats<C: sidekick::CompletionBackend>(session: &Session<C>) {
    let stats = session.stats();
    println!("    Session Statistics:");
    println!("      Model: {}", stats.model);
    println!("      Mode: {}", stats.mode);
    println!("      Messages: {}", stats.message_count);
    println!(
        "      Total tokens: {} in / {} out ({} requests)",
        stats.total_prompt_tokens, stats.total_completion_tokens, stats.total_requests
    );
    if let Some(input) = stats.last_turn_prompt_tokens {
        let output = stats.last_turn_completion_tokens.unwrap_or(0);
        println!("      Last turn tokens: {input} in / {output} out");
    }
}
