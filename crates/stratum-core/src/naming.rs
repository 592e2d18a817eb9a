//! Display names for grids and levels.
//!
//! - Vertical grids are numbered from `1`.
//! - Horizontal grids are lettered from `A`. Past `Z` the [`LetterScheme`]
//!   decides: [`LetterScheme::Extended`] continues spreadsheet-style
//!   (`AA`, `AB`, ...), [`LetterScheme::Strict`] refuses.
//! - Levels are `"<prefix> <n>"` starting at [`Naming::first_level_number`],
//!   because level 1 is the ground datum the host document already has.
//!
//! # Example
//!
//! ```
//! # use stratum_core::naming::{Naming, letter_label};
//! assert_eq!(letter_label(0), "A");
//! assert_eq!(letter_label(26), "AA");
//!
//! let naming = Naming::default();
//! assert_eq!(naming.level_label(0).as_deref(), Some("Level 2"));
//! ```

use serde::Deserialize;

use crate::error::LayoutError;

/// Number of single-letter labels.
pub const ALPHABET_LEN: u32 = 26;

/// How horizontal grids are lettered once the alphabet runs out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterScheme {
    /// `A..Z`, then `AA..AZ`, `BA..ZZ`, `AAA..` with no upper bound.
    #[default]
    Extended,
    /// `A..Z` only; more than 26 horizontal grids is an invalid request.
    Strict,
}

/// Naming options for a layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Naming {
    letters: LetterScheme,
    level_prefix: String,
    first_level_number: u32,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            letters: LetterScheme::default(),
            level_prefix: "Level".to_string(),
            first_level_number: 2,
        }
    }
}

impl Naming {
    /// Creates naming options.
    ///
    /// # Arguments
    ///
    /// * `letters` - Scheme for horizontal grid labels.
    /// * `level_prefix` - Word placed before the level number; empty for bare numbers.
    /// * `first_level_number` - Number of the first generated level.
    pub fn new(letters: LetterScheme, level_prefix: impl Into<String>, first_level_number: u32) -> Self {
        Self {
            letters,
            level_prefix: level_prefix.into(),
            first_level_number,
        }
    }

    pub fn letters(&self) -> LetterScheme {
        self.letters
    }

    pub fn level_prefix(&self) -> &str {
        &self.level_prefix
    }

    pub fn first_level_number(&self) -> u32 {
        self.first_level_number
    }

    /// Returns a copy using the given letter scheme.
    pub fn with_letters(mut self, letters: LetterScheme) -> Self {
        self.letters = letters;
        self
    }

    /// Checks that `count` horizontal grids can be lettered under this scheme.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`] under [`LetterScheme::Strict`]
    /// when `count` exceeds [`ALPHABET_LEN`].
    pub fn check_horizontal_count(&self, count: u32) -> Result<(), LayoutError> {
        match self.letters {
            LetterScheme::Strict if count > ALPHABET_LEN => Err(LayoutError::invalid_parameter(
                "horizontal.count",
                format!("at most {ALPHABET_LEN} horizontal grids can be lettered A..Z, got {count}"),
            )),
            _ => Ok(()),
        }
    }

    /// Label for the level at 0-based position `index`.
    ///
    /// Returns `None` if the level number does not fit in a `u32`.
    pub fn level_label(&self, index: u32) -> Option<String> {
        let number = self.first_level_number.checked_add(index)?;
        if self.level_prefix.is_empty() {
            Some(number.to_string())
        } else {
            Some(format!("{} {number}", self.level_prefix))
        }
    }
}

/// Label for the vertical grid at 0-based position `index`.
pub fn number_label(index: u32) -> String {
    (u64::from(index) + 1).to_string()
}

/// Label for the horizontal grid at 0-based position `index`.
///
/// Bijective base-26, the way spreadsheet columns are named.
pub fn letter_label(index: u32) -> String {
    let mut remaining = u64::from(index) + 1;
    let mut letters = Vec::new();
    while remaining > 0 {
        remaining -= 1;
        let digit = (remaining % u64::from(ALPHABET_LEN)) as u8;
        letters.push(char::from(b'A' + digit));
        remaining /= u64::from(ALPHABET_LEN);
    }
    letters.iter().rev().collect()
}
