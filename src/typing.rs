//! Typing-text animation.
//!
//! A timer-driven state machine that types a phrase one character at a time,
//! holds it, deletes it one character at a time, then moves to the next
//! phrase. The rotation is cyclic and never terminates. The host writes
//! [`TypingStep::text`] into the display element and waits
//! [`TypingStep::delay_ms`] before calling [`TypingAnimator::advance`] again.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::config::Timings;
use crate::error::ConfigError;

/// Ordered, non-empty, cyclic phrase rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Vec<Vec<char>>,
}

impl PhraseList {
    /// Build a rotation from `phrases`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPhrases`] when `phrases` is empty.
    pub fn new<I, S>(phrases: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        if phrases.is_empty() {
            return Err(ConfigError::EmptyPhrases);
        }
        Ok(Self { phrases })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always `false` once constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    fn get(&self, index: usize) -> &[char] {
        &self.phrases[index % self.phrases.len()]
    }
}

/// Whether the animator is currently adding or removing characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Typing,
    Deleting,
}

/// Position of the animation within the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypingState {
    /// Index into the phrase list.
    pub phrase_index: usize,
    /// Number of characters currently displayed.
    pub cursor: usize,
    pub mode: Mode,
}

/// Output of one animation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    /// Text to display after this step.
    pub text: String,
    /// Milliseconds to wait before the next step.
    pub delay_ms: u32,
}

/// Owns the phrase rotation and the current [`TypingState`].
#[derive(Debug, Clone)]
pub struct TypingAnimator {
    phrases: PhraseList,
    timings: Timings,
    state: TypingState,
}

impl TypingAnimator {
    #[must_use]
    pub fn new(phrases: PhraseList, timings: Timings) -> Self {
        Self { phrases, timings, state: TypingState::default() }
    }

    #[must_use]
    pub fn state(&self) -> TypingState {
        self.state
    }

    /// Move one character forward or backward and report what to display.
    pub fn advance(&mut self) -> TypingStep {
        let phrase = self.phrases.get(self.state.phrase_index);
        let len = phrase.len();

        match self.state.mode {
            Mode::Typing => {
                self.state.cursor = (self.state.cursor + 1).min(len);
                let text = phrase[..self.state.cursor].iter().collect();
                let delay_ms = if self.state.cursor == len {
                    self.state.mode = Mode::Deleting;
                    self.timings.hold_full_ms
                } else {
                    self.timings.type_delay_ms
                };
                TypingStep { text, delay_ms }
            }
            Mode::Deleting => {
                self.state.cursor = self.state.cursor.saturating_sub(1);
                let text = phrase[..self.state.cursor].iter().collect();
                let delay_ms = if self.state.cursor == 0 {
                    self.state.mode = Mode::Typing;
                    self.state.phrase_index = (self.state.phrase_index + 1) % self.phrases.len();
                    self.timings.hold_empty_ms
                } else {
                    self.timings.delete_delay_ms
                };
                TypingStep { text, delay_ms }
            }
        }
    }
}
