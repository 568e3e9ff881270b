//! Generation configuration.

/// Parameters for one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_letters: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl GenerationConfig {
    pub const MIN_LENGTH: usize = 6;
    pub const MAX_LENGTH: usize = 20;
    pub const DEFAULT_LENGTH: usize = 12;

    /// Set the length, clamped to the slider bounds.
    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH);
    }

    pub fn enabled_count(&self) -> usize {
        [
            self.include_letters,
            self.include_numbers,
            self.include_symbols,
        ]
        .into_iter()
        .filter(|&on| on)
        .count()
    }

    pub fn has_any_class(&self) -> bool {
        self.enabled_count() > 0
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            include_letters: true,
            include_numbers: true,
            include_symbols: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.length, 12);
        assert!(config.include_letters);
        assert!(config.include_numbers);
        assert!(!config.include_symbols);
        assert_eq!(config.enabled_count(), 2);
    }

    #[test]
    fn set_length_clamps() {
        let mut config = GenerationConfig::default();
        config.set_length(2);
        assert_eq!(config.length, GenerationConfig::MIN_LENGTH);
        config.set_length(99);
        assert_eq!(config.length, GenerationConfig::MAX_LENGTH);
        config.set_length(15);
        assert_eq!(config.length, 15);
    }

    #[test]
    fn no_class_enabled() {
        let config = GenerationConfig {
            include_letters: false,
            include_numbers: false,
            ..Default::default()
        };
        assert!(!config.has_any_class());
    }
}
