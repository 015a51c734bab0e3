mod history;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use crate::context::Context;
use crate::commands;
use crate::formatters::OutputFormat;
use self::history::History;

const HISTORY_FILE: &str = ".brickset_history";
const HISTORY_SIZE: usize = 1000;

/// Interactive mode (REPL)
pub struct Repl {
    /// Execution context
    context: Context,

    /// Line editor
    editor: DefaultEditor,

    /// Persisted history
    history: History,
}

/// What the loop should do after a line
enum Flow {
    Continue,
    Exit,
}

impl Repl {
    /// Create a new REPL
    pub fn new(context: Context) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        let mut history = History::new(HISTORY_FILE, HISTORY_SIZE);
        if let Err(e) = history.load() {
            log::warn!("Could not load history: {}", e);
        }

        for cmd in history.get_all() {
            let _ = editor.add_history_entry(cmd.as_str());
        }

        Ok(Repl {
            context,
            editor,
            history,
        })
    }

    /// Run the REPL until `.exit` or end of input
    pub fn run(&mut self) -> Result<()> {
        println!("{}", self.context.formatter().format_info("brickset - interactive mode"));
        println!("{}", self.context.formatter().format_info("Type .help for help or .exit to quit"));

        loop {
            match self.editor.readline("brickset> ") {
                Ok(line) => {
                    let _ = self.editor.add_history_entry(line.as_str());
                    self.history.add(&line);

                    match self.process_line(line.trim()) {
                        Ok(Flow::Exit) => break,
                        Ok(Flow::Continue) => {},
                        Err(e) => {
                            println!("{}", self.context.formatter().format_error(&format!("{}", e)));
                        }
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted (Ctrl-C)");
                    continue;
                },
                Err(ReadlineError::Eof) => {
                    break;
                },
                Err(err) => {
                    println!("{}", self.context.formatter().format_error(&format!("Error: {}", err)));
                    break;
                }
            }
        }

        self.history.save()?;

        Ok(())
    }

    /// Handle one line of input
    fn process_line(&mut self, line: &str) -> Result<Flow> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        if let Some(cmd) = line.strip_prefix('.') {
            return Ok(self.process_special_command(cmd));
        }

        commands::query::execute(&mut self.context, line)?;
        Ok(Flow::Continue)
    }

    /// Handle dot-commands
    fn process_special_command(&mut self, cmd: &str) -> Flow {
        let parts: Vec<&str> = cmd.split_whitespace().collect();

        match parts.first().copied().unwrap_or("") {
            "help" => {
                self.print_help();
            },
            "exit" | "quit" => {
                return Flow::Exit;
            },
            "format" => {
                let format = match parts.get(1).copied() {
                    Some("text") => OutputFormat::Text,
                    Some("json") => OutputFormat::Json,
                    Some("table") => OutputFormat::Table,
                    Some(_) => {
                        println!("{}", self.context.formatter().format_error("Unknown format"));
                        return Flow::Continue;
                    },
                    None => {
                        println!("{}", self.context.formatter().format_error("Usage: .format <text|json|table>"));
                        return Flow::Continue;
                    }
                };

                self.context.set_format(format);
                println!("{}", self.context.formatter().format_success(&format!("Format set to {}", parts[1])));
            },
            "history" => {
                let commands = match parts.get(1) {
                    Some(pattern) => self.history.search(pattern),
                    None => self.history.get_all().to_vec(),
                };

                if commands.is_empty() {
                    println!("History is empty.");
                } else {
                    for (i, cmd) in commands.iter().enumerate() {
                        println!("{}: {}", i + 1, cmd);
                    }
                }
            },
            _ => {
                println!("{}", self.context.formatter().format_error(&format!("Unknown command: {}", cmd)));
            }
        }

        Flow::Continue
    }

    /// Print the help text
    fn print_help(&self) {
        println!("Commands:");
        println!("  .help                     Show this help");
        println!("  .exit, .quit              Leave the shell");
        println!("  .format <text|json|table> Set the output format");
        println!("  .history [pattern]        Show past commands (optionally filtered)");
        println!();
        println!("Queries:");
        println!("  count_tag(\"<tag>\")          Number of sets with the tag");
        println!("  name_exists(\"<name>\"|null)  Whether a set has exactly this name");
        println!("  tags_desc                   Distinct tags, descending");
        println!("  total_pieces                Sum of all piece counts");
        println!("  partition_pieces(<n>)       Distinct piece counts above / not above n");
        println!("  packaging_types             Number of sets per packaging type");
    }
}
