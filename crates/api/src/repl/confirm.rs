//! Terminal confirmation prompt

use std::io::{self, BufRead, Write};

use roster_core::Confirmation;

/// Asks on stdout and reads `y`/`n` from stdin. Anything but yes declines.
///
/// The read parks the calling worker with `block_in_place`, so this must run
/// on the multi-threaded runtime the binary starts.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        let mut stdout = io::stdout();
        let _ = write!(stdout, "{prompt} [y/N] ");
        let _ = stdout.flush();

        tokio::task::block_in_place(|| read_answer(io::stdin().lock()))
    }
}

fn read_answer(mut input: impl BufRead) -> bool {
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(_) => false,
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn answer_is_read_in_place_on_a_worker() {
        let confirmed = tokio::task::block_in_place(|| read_answer(Cursor::new("yes\n")));
        assert!(confirmed);
        assert!(!tokio::task::block_in_place(|| read_answer(Cursor::new(""))));
    }

    #[test]
    fn only_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
        assert!(!is_yes("yep"));
    }
}
