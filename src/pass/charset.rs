//! Character classes for password generation.

use super::GenerationConfig;

/// A fixed, named set of candidate characters. All sets are ASCII.
#[derive(Debug, PartialEq, Eq)]
pub struct CharacterClass {
    pub name: &'static str,
    chars: &'static [u8],
}

pub const LETTERS: CharacterClass = CharacterClass {
    name: "letters",
    chars: b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
};

pub const DIGITS: CharacterClass = CharacterClass {
    name: "digits",
    chars: b"0123456789",
};

pub const SYMBOLS: CharacterClass = CharacterClass {
    name: "symbols",
    chars: b"!@#$%^&*()_+[]{}|;:,.<>?/",
};

/// Enumeration order matters: seed characters are drawn in this order.
pub const ALL: [&CharacterClass; 3] = [&LETTERS, &DIGITS, &SYMBOLS];

impl CharacterClass {
    pub fn bytes(&self) -> &'static [u8] {
        self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars.contains(&(c as u8))
    }
}

/// Classes switched on by the config, in enumeration order.
pub fn enabled(config: &GenerationConfig) -> Vec<&'static CharacterClass> {
    let flags = [
        config.include_letters,
        config.include_numbers,
        config.include_symbols,
    ];

    ALL.into_iter()
        .zip(flags)
        .filter_map(|(class, on)| on.then_some(class))
        .collect()
}

/// Concatenate the given classes into one draw pool.
pub fn pool(classes: &[&CharacterClass]) -> Vec<u8> {
    let mut chars = Vec::with_capacity(classes.iter().map(|c| c.len()).sum());
    for class in classes {
        chars.extend_from_slice(class.bytes());
    }
    chars
}

/// Size of the draw pool (for entropy calculation).
pub fn size(config: &GenerationConfig) -> usize {
    enabled(config).iter().map(|c| c.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(letters: bool, numbers: bool, symbols: bool) -> GenerationConfig {
        GenerationConfig {
            length: 12,
            include_letters: letters,
            include_numbers: numbers,
            include_symbols: symbols,
        }
    }

    #[test]
    fn class_sizes() {
        assert_eq!(LETTERS.len(), 52);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 25);
    }

    #[test]
    fn enabled_keeps_enumeration_order() {
        let classes = enabled(&config(true, false, true));
        assert_eq!(classes, vec![&LETTERS, &SYMBOLS]);

        assert!(enabled(&config(false, false, false)).is_empty());
    }

    #[test]
    fn pool_is_concatenation() {
        let chars = pool(&[&DIGITS, &SYMBOLS]);
        assert_eq!(&chars[..10], b"0123456789");
        assert_eq!(chars.len(), 35);
    }

    #[test]
    fn size_matches_pool() {
        assert_eq!(size(&config(true, true, true)), 87);
        assert_eq!(size(&config(true, true, false)), 62);
        assert_eq!(size(&config(false, false, false)), 0);
    }

    #[test]
    fn contains_rejects_other_classes() {
        assert!(SYMBOLS.contains('/'));
        assert!(!SYMBOLS.contains('-'));
        assert!(!DIGITS.contains('a'));
        assert!(!LETTERS.contains('é'));
    }
}
