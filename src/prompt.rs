use std::io::{self, BufRead, IsTerminal, Write};

/// Yes/no confirmation asked before the manifest is modified.
///
/// Injected into the installer so tests can script answers without a
/// terminal.
pub trait Prompt {
    /// Ask `question`, returning true when the user confirms.
    fn confirm(&mut self, question: &str) -> bool;
}

/// Reads the answer from the process stdin.
///
/// The question goes to stderr so it is visible even when stdout is
/// piped. A non-terminal stdin answers no, so scripted runs never hang
/// waiting for a confirmation nobody will type.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        eprint!("{question} [y/N] ");
        let _ = io::stderr().flush();

        if !io::stdin().is_terminal() {
            eprintln!();
            return false;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
