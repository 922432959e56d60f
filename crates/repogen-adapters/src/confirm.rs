//! Confirmation adapters for non-interactive runs.
//!
//! The interactive stdin prompt lives in the CLI crate; these stubs cover
//! `--yes`, `--quiet`, and automated tests.

use std::sync::{Arc, Mutex};

use repogen_core::{application::ports::Confirmer, error::RepogenResult};

/// Answers yes to everything (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirmer for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> RepogenResult<bool> {
        Ok(true)
    }
}

/// Answers no to everything (`--quiet`: never block on a prompt).
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirmer for NeverConfirm {
    fn confirm(&self, _prompt: &str) -> RepogenResult<bool> {
        Ok(false)
    }
}

/// Fixed-answer confirmer that records every prompt (testing helper).
#[derive(Debug, Clone)]
pub struct RecordingConfirmer {
    answer: bool,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl RecordingConfirmer {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirmer for RecordingConfirmer {
    fn confirm(&self, prompt: &str) -> RepogenResult<bool> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stubs_answer_without_blocking() {
        assert!(AlwaysConfirm.confirm("?").unwrap());
        assert!(!NeverConfirm.confirm("?").unwrap());
    }

    #[test]
    fn recording_confirmer_keeps_prompts() {
        let confirmer = RecordingConfirmer::answering(true);
        confirmer.confirm("first?").unwrap();
        confirmer.confirm("second?").unwrap();
        assert_eq!(confirmer.prompts(), ["first?", "second?"]);
    }
}
