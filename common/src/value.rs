//! Fixed-width display value.
//!
//! A display always shows exactly [`DIGIT_COUNT`] characters. Values reach the
//! display two ways:
//!
//! - **Digit entry**: the current text shifts left by one and the pressed digit
//!   becomes the last character (`"005"` + `3` -> `"053"`).
//! - **External set**: any `Display` value is stringified, left-padded with
//!   [`PAD_CHAR`] and cut down to its last [`DIGIT_COUNT`] characters
//!   (`7` -> `"007"`, `12345` -> `"345"`). Non-digit characters are kept as
//!   literal text; only the length is enforced.
//!
//! # Significant Digits
//!
//! The first character in `1..=9` starts the significant part of the value.
//! Everything before it is a leading zero (or literal filler) and is rendered
//! dim. `"000"` has no significant part at all.
//!
//! # Memory
//!
//! The text lives in a `heapless::String` sized for three 4-byte chars, so
//! values never allocate and the type stays usable on `no_std` targets.

use core::fmt::{self, Write};
use core::iter;

use heapless::String;

use crate::config::{DIGIT_COUNT, PAD_CHAR, VALUE_CAPACITY};
use crate::render::split_for_render;

/// Returns true for characters that start the highlighted part of a value.
#[inline]
const fn is_significant(c: char) -> bool { matches!(c, '1'..='9') }

/// Exactly [`DIGIT_COUNT`] characters of display text.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DisplayValue {
    text: String<VALUE_CAPACITY>,
}

impl DisplayValue {
    /// The all-zero value, `"000"`.
    pub fn zero() -> Self { Self::from_chars(iter::repeat_n(PAD_CHAR, DIGIT_COUNT)) }

    /// Coerce any displayable input into a display value.
    ///
    /// The input is formatted without allocating: only the last
    /// [`DIGIT_COUNT`] characters are retained while formatting, then the
    /// result is left-padded with [`PAD_CHAR`].
    pub fn coerce<T>(value: &T) -> Self
    where
        T: fmt::Display + ?Sized,
    {
        let mut tail = TailWriter::new();
        // TailWriter never reports an error
        write!(tail, "{value}").ok();

        let padding = DIGIT_COUNT - tail.len;
        Self::from_chars(iter::repeat_n(PAD_CHAR, padding).chain(tail.chars()))
    }

    /// Shift the value left by one character and append `digit`.
    pub fn shift_in(
        &mut self,
        digit: char,
    ) {
        let next = Self::from_chars(self.text.chars().skip(1).chain(iter::once(digit)));
        *self = next;
    }

    /// Index (in chars) of the first significant digit, if any.
    #[inline]
    pub fn significant_start(&self) -> Option<usize> { self.text.chars().position(is_significant) }

    /// Split the value into its leading part and its significant part.
    ///
    /// When no significant digit exists the whole value is the leading part and
    /// the significant part is empty. The two parts always concatenate back to
    /// the full value.
    pub fn split(&self) -> (&str, &str) {
        let split = split_for_render(self.as_str());
        (split.dim, split.lit)
    }

    /// The value text.
    #[inline]
    pub fn as_str(&self) -> &str { self.text.as_str() }

    /// Iterate over the value characters.
    #[inline]
    pub fn chars(&self) -> core::str::Chars<'_> { self.text.chars() }

    fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut text = String::new();
        for c in chars.into_iter().take(DIGIT_COUNT) {
            // VALUE_CAPACITY fits DIGIT_COUNT chars of any width
            text.push(c).ok();
        }
        Self { text }
    }
}

impl Default for DisplayValue {
    fn default() -> Self { Self::zero() }
}

impl fmt::Display for DisplayValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for DisplayValue {
    fn eq(
        &self,
        other: &str,
    ) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for DisplayValue {
    fn eq(
        &self,
        other: &&str,
    ) -> bool {
        self.as_str() == *other
    }
}

// =============================================================================
// Tail Writer
// =============================================================================

/// `fmt::Write` sink that keeps only the last [`DIGIT_COUNT`] characters.
struct TailWriter {
    tail: [char; DIGIT_COUNT],
    len: usize,
}

impl TailWriter {
    const fn new() -> Self {
        Self {
            tail: [PAD_CHAR; DIGIT_COUNT],
            len: 0,
        }
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_ { self.tail[..self.len].iter().copied() }
}

impl Write for TailWriter {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.len < DIGIT_COUNT {
                self.tail[self.len] = c;
                self.len += 1;
            } else {
                self.tail.rotate_left(1);
                self.tail[DIGIT_COUNT - 1] = c;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Coercion Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_zero_value() {
        assert_eq!(DisplayValue::zero(), "000");
        assert_eq!(DisplayValue::default(), DisplayValue::zero());
    }

    #[test]
    fn test_coerce_pads_short_numbers() {
        assert_eq!(DisplayValue::coerce(&7), "007");
        assert_eq!(DisplayValue::coerce(&42u8), "042");
        assert_eq!(DisplayValue::coerce(&0), "000");
    }

    #[test]
    fn test_coerce_keeps_last_three_chars() {
        assert_eq!(DisplayValue::coerce(&12345), "345");
        assert_eq!(DisplayValue::coerce(&1000), "000");
        assert_eq!(DisplayValue::coerce("987654321"), "321");
    }

    #[test]
    fn test_coerce_accepts_literal_text() {
        // Only length is enforced, content is taken as-is
        assert_eq!(DisplayValue::coerce("ab"), "0ab");
        assert_eq!(DisplayValue::coerce(&-5), "0-5");
        assert_eq!(DisplayValue::coerce(&1.5f32), "1.5");
        assert_eq!(DisplayValue::coerce(""), "000");
    }

    #[test]
    fn test_coerce_multibyte_chars_count_as_one() {
        let value = DisplayValue::coerce("x°€ü");
        assert_eq!(value, "°€ü");
        assert_eq!(value.chars().count(), DIGIT_COUNT);
    }

    #[test]
    fn test_coerce_always_three_chars() {
        for n in [0u32, 1, 9, 10, 99, 100, 999, 1000, 65_535, u32::MAX] {
            let value = DisplayValue::coerce(&n);
            assert_eq!(value.chars().count(), DIGIT_COUNT, "{n} produced {value}");
        }
    }

    // -------------------------------------------------------------------------
    // Digit Entry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_shift_in_sequence() {
        let mut value = DisplayValue::zero();
        value.shift_in('5');
        assert_eq!(value, "005");
        value.shift_in('3');
        assert_eq!(value, "053");
        value.shift_in('0');
        assert_eq!(value, "530");
    }

    #[test]
    fn test_shift_in_drops_literal_prefix() {
        let mut value = DisplayValue::coerce("a-b");
        value.shift_in('1');
        assert_eq!(value, "-b1");
    }

    // -------------------------------------------------------------------------
    // Significant Digit Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_significant_start() {
        assert_eq!(DisplayValue::zero().significant_start(), None);
        assert_eq!(DisplayValue::coerce(&5).significant_start(), Some(2));
        assert_eq!(DisplayValue::coerce(&50).significant_start(), Some(1));
        assert_eq!(DisplayValue::coerce(&500).significant_start(), Some(0));
        assert_eq!(DisplayValue::coerce("0a0").significant_start(), None);
    }

    #[test]
    fn test_split_zero_is_all_leading() {
        let value = DisplayValue::zero();
        assert_eq!(value.split(), ("000", ""));
    }

    #[test]
    fn test_split_round_trip() {
        for n in 0..1000u32 {
            let value = DisplayValue::coerce(&n);
            let (leading, significant) = value.split();
            let mut joined = std::string::String::from(leading);
            joined.push_str(significant);
            assert_eq!(joined, value.as_str(), "split of {value} did not round-trip");
            assert!(leading.chars().all(|c| c == '0'), "leading part of {value} is {leading}");
        }
    }

    #[test]
    fn test_split_multibyte_prefix() {
        let value = DisplayValue::coerce("€07");
        assert_eq!(value.split(), ("€0", "7"));
    }
}
