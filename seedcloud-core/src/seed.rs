//! Validated five-digit seeds

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a seed
pub const SEED_LEN: usize = 5;

/// A string of exactly five ASCII decimal digits.
///
/// The only way to obtain a `Seed` is through [`Seed::parse`] (or `FromStr`),
/// so every value that reaches the layout generator is already valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Seed {
    /// ASCII digit bytes, as entered
    text: [u8; SEED_LEN],
}

impl Seed {
    /// Seed shown before the user submits anything
    pub const DEFAULT: Seed = Seed { text: *b"12345" };

    /// Validate `input` against `^[0-9]{5}$` after trimming surrounding whitespace.
    ///
    /// # Example
    /// ```rust
    /// use seedcloud_core::Seed;
    ///
    /// let seed = Seed::parse(" 23104 ").unwrap();
    /// assert_eq!(seed.value(), 23104);
    /// assert!(Seed::parse("12a45").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != SEED_LEN || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(Error::InvalidSeedFormat(input.to_string()));
        }

        let mut text = [0u8; SEED_LEN];
        text.copy_from_slice(bytes);
        Ok(Self { text })
    }

    /// Base-10 value of the seed, in `0..=99999`
    pub fn value(&self) -> u32 {
        self.digits()
            .iter()
            .fold(0u32, |acc, &d| acc * 10 + u32::from(d))
    }

    /// All five digits, most significant first
    pub fn digits(&self) -> [u8; SEED_LEN] {
        self.text.map(|b| b - b'0')
    }

    /// Digit at `index` (0 is the leftmost).
    ///
    /// # Panics
    /// Panics if `index >= 5`.
    pub fn digit(&self, index: usize) -> u8 {
        self.text[index] - b'0'
    }

    /// The seed as the original five-character string
    pub fn as_str(&self) -> &str {
        // only ASCII digits are ever stored
        std::str::from_utf8(&self.text).unwrap_or_default()
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Seed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Seed {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Seed> for String {
    fn from(seed: Seed) -> Self {
        seed.as_str().to_owned()
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
