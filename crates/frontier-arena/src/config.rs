//! Arena configuration parameters.

use frontier_core::WORD_BYTES;

/// Configuration for an [`Arena`](crate::Arena).
///
/// Controls the initial reservation and the hard ceiling that turns an
/// allocation into [`ArrayError::AllocatorExhausted`](frontier_core::ArrayError::AllocatorExhausted).
/// Values are read once at construction.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Words reserved up front.
    ///
    /// Default: 1024 (32KB at 32 bytes per word). Also the minimum step
    /// the buffer grows by.
    pub initial_words: usize,

    /// Maximum number of words the arena may ever hold.
    ///
    /// Default: 33_554_432 (1GB at 32 bytes per word). This stands in for
    /// address-space exhaustion: an allocation that would move the frontier
    /// past it fails.
    pub max_words: usize,
}

impl ArenaConfig {
    /// Default initial reservation: 1024 words.
    pub const DEFAULT_INITIAL_WORDS: usize = 1024;

    /// Default ceiling: 32M words.
    pub const DEFAULT_MAX_WORDS: usize = 1 << 25;

    /// Create a config with the given initial reservation and the default ceiling.
    pub fn new(initial_words: usize) -> Self {
        Self {
            initial_words,
            max_words: Self::DEFAULT_MAX_WORDS,
        }
    }

    /// Replace the ceiling.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Initial reservation in bytes.
    pub fn initial_bytes(&self) -> usize {
        self.initial_words * WORD_BYTES
    }

    /// Ceiling in bytes.
    pub fn max_bytes(&self) -> usize {
        self.max_words * WORD_BYTES
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ceiling_is_1gb() {
        let config = ArenaConfig::default();
        assert_eq!(config.max_bytes(), 1024 * 1024 * 1024);
        assert_eq!(config.initial_bytes(), 32 * 1024);
    }

    #[test]
    fn with_max_words_overrides_ceiling() {
        let config = ArenaConfig::new(16).with_max_words(64);
        assert_eq!(config.initial_words, 16);
        assert_eq!(config.max_words, 64);
    }
}
