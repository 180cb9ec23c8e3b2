//! Typewriter effect for the hero title
//!
//! A pure state machine: each [`TypingEffect::tick`] yields the text to show
//! and how long to wait before the next tick. The browser crate owns the
//! timer; nothing here knows about time.

use crate::config::TypingConfig;
use crate::error::{Error, Result};

/// Output of one typing step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub next_delay_ms: u32,
}

/// Cycles through phrases one character at a time
#[derive(Debug, Clone)]
pub struct TypingEffect {
    phrases: Vec<Vec<char>>,
    type_ms: u32,
    delete_ms: u32,
    hold_ms: u32,
    next_phrase_ms: u32,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl TypingEffect {
    /// Build the effect from config
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if there are no phrases or any phrase
    /// is empty; an empty phrase would never reach its end.
    pub fn new(config: &TypingConfig) -> Result<Self> {
        if config.phrases.is_empty() {
            return Err(Error::invalid_config(
                "typing.phrases",
                "at least one phrase is required",
            ));
        }
        if let Some(index) = config.phrases.iter().position(String::is_empty) {
            return Err(Error::invalid_config(
                format!("typing.phrases[{index}]"),
                "phrases must not be empty",
            ));
        }

        Ok(Self {
            phrases: config
                .phrases
                .iter()
                .map(|p| p.chars().collect())
                .collect(),
            type_ms: config.type_ms,
            delete_ms: config.delete_ms,
            hold_ms: config.hold_ms,
            next_phrase_ms: config.next_phrase_ms,
            phrase: 0,
            chars: 0,
            deleting: false,
        })
    }

    /// Index of the phrase currently being typed or deleted
    #[must_use]
    pub const fn phrase_index(&self) -> usize {
        self.phrase
    }

    /// Whether the effect is currently deleting
    #[must_use]
    pub const fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advance by one character and report what to display
    pub fn tick(&mut self) -> TypingFrame {
        let current = self.phrases.get(self.phrase).map_or(&[][..], Vec::as_slice);
        let len = current.len();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }
        let text: String = current.iter().take(self.chars).collect();

        let mut next_delay_ms = if self.deleting {
            self.delete_ms
        } else {
            self.type_ms
        };

        if !self.deleting && self.chars == len {
            next_delay_ms = self.hold_ms;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len().max(1);
            next_delay_ms = self.next_phrase_ms;
        }

        TypingFrame {
            text,
            next_delay_ms,
        }
    }
}
