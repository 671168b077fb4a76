//! Configuration structures and constants for the seximal-core library.
//!
//! This module provides the configuration system for conversion behavior:
//! the time-scale convention, quantity formatting precision, and clock
//! display options.

use crate::error::{CoreError, CoreResult};
use crate::time::Convention;

// Default constants

/// Default number of significant figures for formatted quantities.
pub const DEFAULT_SIG_FIGS: usize = 6;

/// Upper bound accepted for significant figures; beyond this an f64 has no
/// more decimal digits to give.
pub const MAX_SIG_FIGS: usize = 15;

/// Main configuration structure for the seximal-core library.
///
/// Typically created by the consumer of the library (e.g. seximal-cli) and
/// passed to the conversion entry points. All fields have sensible
/// defaults; the builder provides a convenient way to override them.
///
/// # Examples
///
/// ```rust
/// use seximal_core::config::CoreConfig;
/// use seximal_core::time::Convention;
///
/// let config = CoreConfig::builder()
///     .convention(Convention::MinuteBased)
///     .sig_figs(4)
///     .show_sixths(false)
///     .build();
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Scale policy relating standard seconds to seximal time units
    pub convention: Convention,

    /// Significant figures for formatted quantities (1..=15)
    pub sig_figs: usize,

    /// Whether clock output carries the trailing sixths digit
    pub show_sixths: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            convention: Convention::default(),
            sig_figs: DEFAULT_SIG_FIGS,
            show_sixths: true,
        }
    }
}

impl CoreConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }

    /// Checks the configuration for out-of-range values.
    pub fn validate(&self) -> CoreResult<()> {
        if self.sig_figs == 0 || self.sig_figs > MAX_SIG_FIGS {
            return Err(CoreError::Config(format!(
                "sig_figs must be between 1 and {MAX_SIG_FIGS}, got {}",
                self.sig_figs
            )));
        }
        Ok(())
    }
}

/// Builder for [`CoreConfig`].
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn convention(mut self, convention: Convention) -> Self {
        self.config.convention = convention;
        self
    }

    #[must_use]
    pub fn sig_figs(mut self, sig_figs: usize) -> Self {
        self.config.sig_figs = sig_figs;
        self
    }

    #[must_use]
    pub fn show_sixths(mut self, show_sixths: bool) -> Self {
        self.config.show_sixths = show_sixths;
        self
    }

    #[must_use]
    pub fn build(self) -> CoreConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CoreConfig::default();
        assert_eq!(config.convention, Convention::SecondBased);
        assert_eq!(config.sig_figs, DEFAULT_SIG_FIGS);
        assert!(config.show_sixths);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = CoreConfig::builder()
            .convention(Convention::MinuteBased)
            .sig_figs(3)
            .show_sixths(false)
            .build();
        assert_eq!(config.convention, Convention::MinuteBased);
        assert_eq!(config.sig_figs, 3);
        assert!(!config.show_sixths);
    }

    #[test]
    fn test_validate_rejects_out_of_range_sig_figs() {
        let config = CoreConfig::builder().sig_figs(0).build();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        let config = CoreConfig::builder().sig_figs(16).build();
        assert!(config.validate().is_err());
    }
}
