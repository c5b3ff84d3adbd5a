//! Port interfaces the front-end provides to the view controllers

/// Synchronous yes/no gate in front of destructive actions
pub trait Confirmation {
    /// Ask the user `prompt`; `true` means proceed.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
