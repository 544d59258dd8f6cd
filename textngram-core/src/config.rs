//! Construction parameters for n-gram sequences

use crate::encoding::TextEncoding;
use crate::error::{NgramError, Result};

/// Window size used when none is given: bigrams
pub const DEFAULT_WINDOW_SIZE: usize = 2;

/// Parameters for building an [`NgramSequence`](crate::NgramSequence)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramConfig {
    /// Code points per window
    pub window_size: usize,
    /// Source encoding; `None` means the process-wide default at build time
    pub encoding: Option<TextEncoding>,
}

impl Default for NgramConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            encoding: None,
        }
    }
}

impl NgramConfig {
    /// Bigram configuration
    pub fn bigram() -> Self {
        Self::default()
    }

    /// Trigram configuration
    pub fn trigram() -> Self {
        Self {
            window_size: 3,
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> NgramConfigBuilder {
        NgramConfigBuilder::default()
    }

    /// Encoding this configuration resolves to right now
    pub fn resolved_encoding(&self) -> TextEncoding {
        self.encoding.unwrap_or_default()
    }

    /// Check the window size
    pub fn validate(&self) -> Result<()> {
        if self.window_size < 1 {
            return Err(NgramError::InvalidArgument {
                window_size: self.window_size,
            });
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct NgramConfigBuilder {
    config: NgramConfig,
}

impl NgramConfigBuilder {
    /// Set the window size
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.config.window_size = window_size;
        self
    }

    /// Set the source encoding
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.config.encoding = Some(encoding);
        self
    }

    /// Set the source encoding by label
    pub fn encoding_label(mut self, label: &str) -> Result<Self> {
        self.config.encoding = Some(TextEncoding::for_label(label)?);
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<NgramConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
