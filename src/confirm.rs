//! Confirmation strategies for the destructive step.

use std::io::{self, BufRead, Write};

/// A yes/no gate asked once before any removal begins.
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Blocking console prompt. Answers `y` or `yes` (any case) proceed;
/// everything else aborts.
pub struct ConsoleConfirmer;

impl Confirmer for ConsoleConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} (y/n): ", prompt);
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }

        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Always proceeds; used with `--yes`.
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(bool);

    impl Confirmer for Fixed {
        fn confirm(&self, _prompt: &str) -> bool {
            self.0
        }
    }

    #[test]
    fn test_assume_yes_always_confirms() {
        assert!(AssumeYes.confirm("Remove everything?"));
    }

    #[test]
    fn test_injected_confirmer_is_honored() {
        let gate: Box<dyn Confirmer> = Box::new(Fixed(false));
        assert!(!gate.confirm("Remove everything?"));
    }
}
