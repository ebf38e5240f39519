//! Candidate character sets.

use std::collections::BTreeSet;

/// Decimal digits, the default candidate set.
pub const DIGITS_CHARSET: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Standard ASCII density ramp (10 levels).
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Block character set (5 levels) using Unicode block characters.
pub const BLOCKS_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Minimal character set (4 levels).
pub const MINIMAL_CHARSET: &[char] = &[' ', '.', ':', '#'];

/// First printable ASCII character.
pub const PRINTABLE_FIRST: char = ' ';
/// Last printable ASCII character.
pub const PRINTABLE_LAST: char = '~';

/// Named starting points for a [`CharacterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// '0' through '9'
    #[default]
    Digits,
    /// Standard ASCII density ramp (10 levels)
    Standard,
    /// Unicode block characters (5 levels)
    Blocks,
    /// Minimal set (4 levels)
    Minimal,
    /// Every printable ASCII character
    Printable,
}

impl Preset {
    /// Build the character set for this preset.
    pub fn charset(&self) -> CharacterSet {
        match self {
            Preset::Digits => CharacterSet::from_chars(DIGITS_CHARSET.iter().copied()),
            Preset::Standard => CharacterSet::from_chars(STANDARD_CHARSET.iter().copied()),
            Preset::Blocks => CharacterSet::from_chars(BLOCKS_CHARSET.iter().copied()),
            Preset::Minimal => CharacterSet::from_chars(MINIMAL_CHARSET.iter().copied()),
            Preset::Printable => CharacterSet::from_chars(PRINTABLE_FIRST..=PRINTABLE_LAST),
        }
    }

    /// Cycle to the next preset.
    ///
    /// Order: Digits -> Standard -> Blocks -> Minimal -> Printable -> Digits
    pub fn next(&self) -> Self {
        match self {
            Preset::Digits => Preset::Standard,
            Preset::Standard => Preset::Blocks,
            Preset::Blocks => Preset::Minimal,
            Preset::Minimal => Preset::Printable,
            Preset::Printable => Preset::Digits,
        }
    }

    /// Get a human-readable name for the preset.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Digits => "digits",
            Preset::Standard => "standard",
            Preset::Blocks => "blocks",
            Preset::Minimal => "minimal",
            Preset::Printable => "printable",
        }
    }

    /// Parse a preset from its name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "digits" => Some(Preset::Digits),
            "standard" => Some(Preset::Standard),
            "blocks" => Some(Preset::Blocks),
            "minimal" => Some(Preset::Minimal),
            "printable" | "all" => Some(Preset::Printable),
            _ => None,
        }
    }
}

/// A set of distinct candidate characters.
///
/// Iteration is always in ascending code point order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterSet {
    chars: BTreeSet<char>,
}

impl CharacterSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from any characters; duplicates collapse.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Add one character. Returns false if it was already present.
    pub fn add(&mut self, ch: char) -> bool {
        self.chars.insert(ch)
    }

    /// Add every character in `first..=last`. An inverted range adds nothing.
    pub fn add_range(&mut self, first: char, last: char) {
        self.chars.extend(first..=last);
    }

    /// Add every printable ASCII character.
    pub fn add_printable(&mut self) {
        self.add_range(PRINTABLE_FIRST, PRINTABLE_LAST);
    }

    /// Remove one character. Returns false if it was absent.
    pub fn remove(&mut self, ch: char) -> bool {
        self.chars.remove(&ch)
    }

    /// Remove every character in `first..=last`.
    pub fn remove_range(&mut self, first: char, last: char) {
        for ch in first..=last {
            self.chars.remove(&ch);
        }
    }

    /// Remove every character.
    pub fn clear(&mut self) {
        self.chars.clear();
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for CharacterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}

impl<'a> IntoIterator for &'a CharacterSet {
    type Item = char;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_is_digits() {
        let set = Preset::default().charset();
        assert_eq!(set.len(), 10);
        assert_eq!(set.iter().collect::<String>(), "0123456789");
    }

    #[test]
    fn test_iteration_is_sorted_and_deduplicated() {
        let set = CharacterSet::from_chars("#.#@ .".chars());
        assert_eq!(set.iter().collect::<String>(), " #.@");
    }

    #[test]
    fn test_add_and_remove_ranges() {
        let mut set = CharacterSet::new();
        set.add_range('a', 'e');
        assert_eq!(set.len(), 5);
        set.remove_range('b', 'd');
        assert_eq!(set.iter().collect::<String>(), "ae");
        set.add_range('z', 'a');
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_printable_covers_ascii() {
        let mut set = CharacterSet::new();
        set.add_printable();
        assert_eq!(set.len(), 95);
        assert!(set.contains(' '));
        assert!(set.contains('~'));
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_preset_cycle_and_names() {
        let mut preset = Preset::Digits;
        for _ in 0..5 {
            assert_eq!(Preset::from_name(preset.name()), Some(preset));
            preset = preset.next();
        }
        assert_eq!(preset, Preset::Digits);
        assert_eq!(Preset::from_name("BLOCKS"), Some(Preset::Blocks));
        assert_eq!(Preset::from_name("nope"), None);
    }
}
