//! Composition configuration for the studio prompt pipeline

use std::time::Duration;

use crate::error::ComposeError;

#[derive(Debug, Clone)]
pub struct ComposeConfig {
    /// Minimum trimmed character count for a submittable prompt
    pub min_prompt_chars: usize,
    /// Longest image edge after lossy compression
    pub compress_max_dimension: u32,
    /// JPEG quality used for lossy compression (1..=100)
    pub compress_quality: u8,
    /// When false, images are always encoded raw
    pub compression_enabled: bool,
    /// Optional cap on pending attachments (None = unlimited)
    pub max_attachments: Option<usize>,
    /// Endpoint of the HTTP scaffolding service
    pub scaffold_endpoint: Option<String>,
    /// Transport timeout for one scaffolding call
    pub scaffold_timeout_secs: u64,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            min_prompt_chars: 4,
            compress_max_dimension: 2048,
            compress_quality: 80,
            compression_enabled: true,
            max_attachments: None,
            scaffold_endpoint: None,
            scaffold_timeout_secs: 120,
        }
    }
}

impl ComposeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_prompt_chars(mut self, chars: usize) -> Self {
        self.min_prompt_chars = chars;
        self
    }

    pub fn with_compression(mut self, max_dimension: u32, quality: u8) -> Self {
        self.compress_max_dimension = max_dimension;
        self.compress_quality = quality;
        self
    }

    pub fn without_compression(mut self) -> Self {
        self.compression_enabled = false;
        self
    }

    pub fn with_max_attachments(mut self, max: usize) -> Self {
        self.max_attachments = Some(max);
        self
    }

    pub fn with_scaffold_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.scaffold_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_scaffold_timeout(mut self, secs: u64) -> Self {
        self.scaffold_timeout_secs = secs;
        self
    }

    pub fn scaffold_timeout(&self) -> Duration {
        Duration::from_secs(self.scaffold_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.min_prompt_chars == 0 {
            return Err(ComposeError::ConfigError(
                "minimum prompt length must be at least 1".to_string(),
            ));
        }
        if !(1..=100).contains(&self.compress_quality) {
            return Err(ComposeError::ConfigError(format!(
                "image quality must be within 1..=100, got {}",
                self.compress_quality
            )));
        }
        if self.compress_max_dimension == 0 {
            return Err(ComposeError::ConfigError(
                "image max dimension must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(chars) = std::env::var("STUDIO_MIN_PROMPT_CHARS") {
            if let Ok(val) = chars.parse::<usize>() {
                config.min_prompt_chars = val;
            }
        }

        if let Ok(dim) = std::env::var("STUDIO_IMAGE_MAX_DIM") {
            if let Ok(val) = dim.parse::<u32>() {
                config.compress_max_dimension = val;
            }
        }

        if let Ok(quality) = std::env::var("STUDIO_IMAGE_QUALITY") {
            if let Ok(val) = quality.parse::<u8>() {
                config.compress_quality = val;
            }
        }

        if let Ok(flag) = std::env::var("STUDIO_IMAGE_COMPRESS") {
            config.compression_enabled = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            );
        }

        if let Ok(max) = std::env::var("STUDIO_MAX_ATTACHMENTS") {
            if let Ok(val) = max.parse::<usize>() {
                config.max_attachments = Some(val);
            }
        }

        if let Ok(url) = std::env::var("STUDIO_SCAFFOLD_URL") {
            if !url.trim().is_empty() {
                config.scaffold_endpoint = Some(url);
            }
        }

        if let Ok(timeout) = std::env::var("STUDIO_SCAFFOLD_TIMEOUT") {
            if let Ok(val) = timeout.parse::<u64>() {
                config.scaffold_timeout_secs = val;
            }
        }

        config
    }
}
