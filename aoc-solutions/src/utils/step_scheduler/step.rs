use std::fmt;

use thiserror::Error;

/// Raised when a character cannot name a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid step id {0:?}, expected an uppercase letter A-Z")]
pub struct InvalidStepId(pub char);

/// A step named by a single uppercase letter, ordered alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepId(u8);

impl StepId {
    pub fn new(letter: char) -> Result<Self, InvalidStepId> {
        if letter.is_ascii_uppercase() {
            Ok(StepId(letter as u8))
        } else {
            Err(InvalidStepId(letter))
        }
    }

    pub fn letter(self) -> char {
        char::from(self.0)
    }

    /// 1-based position in the alphabet: A = 1 ... Z = 26
    pub fn ordinal(self) -> u64 {
        u64::from(self.0 - b'A' + 1)
    }

    /// Time a worker needs for this step: `base_duration + ordinal`, or
    /// `None` if that overflows
    pub fn duration(self, base_duration: u64) -> Option<u64> {
        base_duration.checked_add(self.ordinal())
    }
}

impl TryFrom<char> for StepId {
    type Error = InvalidStepId;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        StepId::new(letter)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
