//! Cycles through phrases one character at a time: type, hold, delete, next.
//!
//! Pure state machine; the caller owns the clock and sleeps for whatever
//! [`Typewriter::step`] returns.

use std::time::Duration;

use crate::config::SiteConfig;
use crate::content::HERO_ROLES;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypewriterError {
    #[error("a typewriter needs at least one phrase")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSequence {
    pub phrases: &'static [&'static str],
    pub keystroke: Duration,
    pub hold: Duration,
}

impl TypeSequence {
    /// The rotating role line under the name in the hero section.
    pub fn hero(config: &SiteConfig) -> Self {
        Self {
            phrases: HERO_ROLES,
            keystroke: config.type_speed,
            hold: config.type_hold,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    sequence: TypeSequence,
    phrase: usize,
    // counted in chars, not bytes
    visible: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(sequence: TypeSequence) -> Result<Self, TypewriterError> {
        if sequence.phrases.is_empty() {
            return Err(TypewriterError::Empty);
        }
        Ok(Self {
            sequence,
            phrase: 0,
            visible: 0,
            phase: Phase::Typing,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    /// The part of the current phrase that is on screen.
    pub fn text(&self) -> &'static str {
        let phrase = self.current();
        match phrase.char_indices().nth(self.visible) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Advances one frame and returns how long to wait before the next one.
    pub fn step(&mut self) -> Duration {
        let len = self.current().chars().count();
        match self.phase {
            Phase::Typing => {
                if self.visible < len {
                    self.visible += 1;
                }
                if self.visible >= len {
                    self.phase = Phase::Holding;
                    return self.sequence.hold;
                }
            }
            Phase::Holding | Phase::Deleting => {
                self.phase = Phase::Deleting;
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.phrase = (self.phrase + 1) % self.sequence.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
        self.sequence.keystroke
    }

    fn current(&self) -> &'static str {
        self.sequence.phrases[self.phrase]
    }
}
