//! Selector tuning, loadable from RON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{MatchError, Result};

/// Parameters of the adaptive monster selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Fraction by which an option sharing an attribute with a past pick is reduced.
    pub reduction_percentage: f64,
    /// Lower bound for every option's weight and probability.
    pub minimum_probability: f64,
    /// Optional cap on remembered picks; the oldest are forgotten first. The default `None`
    /// keeps every pick of the session until [`reset`](crate::AdaptiveSelector::reset).
    pub history_limit: Option<usize>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            reduction_percentage: 0.5,
            minimum_probability: 0.01,
            history_limit: None,
        }
    }
}

impl SelectorConfig {
    /// Multiplier applied to options that share an attribute with a past pick.
    pub fn reduction_factor(&self) -> f64 {
        1.0 - self.reduction_percentage
    }

    /// Multiplier applied to the other options of a catalog with `catalog_size` entries.
    ///
    /// Catalogs with fewer than two entries are never reweighted; `1.0` is returned.
    pub fn promotion_factor(&self, catalog_size: usize) -> f64 {
        if catalog_size < 2 {
            return 1.0;
        }
        1.0 + self.reduction_percentage / (catalog_size - 1) as f64
    }

    /// Checks the parameters on their own and against a catalog of `catalog_size` entries.
    pub fn validate(&self, catalog_size: usize) -> Result<()> {
        let p = self.reduction_percentage;
        if p.is_nan() || p <= 0.0 || p > 1.0 {
            return Err(MatchError::InvalidConfig(format!(
                "reduction_percentage must be in (0, 1], got {}",
                self.reduction_percentage
            )));
        }
        if self.minimum_probability.is_nan() || self.minimum_probability <= 0.0 {
            return Err(MatchError::InvalidConfig(format!(
                "minimum_probability must be positive, got {}",
                self.minimum_probability
            )));
        }
        if self.minimum_probability * catalog_size as f64 > 1.0 {
            return Err(MatchError::InvalidConfig(format!(
                "minimum_probability {} cannot hold for {} options",
                self.minimum_probability, catalog_size
            )));
        }
        Ok(())
    }

    pub fn from_ron_str(source: &str) -> Result<Self> {
        ron::from_str(source).map_err(|e| MatchError::Deserialization(e.to_string()))
    }

    /// Loads a config file. Missing fields fall back to their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_ron_str(&source)?;
        info!(path = %path.as_ref().display(), ?config, "loaded selector config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SelectorConfig::default();
        assert_eq!(config.reduction_percentage, 0.5);
        assert_eq!(config.minimum_probability, 0.01);
        assert_eq!(config.history_limit, None);
        assert_eq!(config.reduction_factor(), 0.5);
        assert_eq!(config.promotion_factor(2), 1.5);
        assert_eq!(config.promotion_factor(9), 1.0625);
        assert_eq!(config.promotion_factor(1), 1.0);
    }

    #[test]
    fn test_validate() {
        assert!(SelectorConfig::default().validate(9).is_ok());
        assert!(SelectorConfig::default().validate(100).is_ok());
        assert!(SelectorConfig::default().validate(101).is_err());

        let zero = SelectorConfig {
            reduction_percentage: 0.0,
            ..Default::default()
        };
        assert!(matches!(zero.validate(2), Err(MatchError::InvalidConfig(_))));

        let nan_floor = SelectorConfig {
            minimum_probability: f64::NAN,
            ..Default::default()
        };
        assert!(nan_floor.validate(2).is_err());
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config = SelectorConfig::from_ron_str("(reduction_percentage: 0.25)").unwrap();
        assert_eq!(config.reduction_percentage, 0.25);
        assert_eq!(config.minimum_probability, 0.01);
        assert_eq!(config.history_limit, None);

        let capped = SelectorConfig::from_ron_str("(history_limit: Some(32))").unwrap();
        assert_eq!(capped.history_limit, Some(32));
    }

    #[test]
    fn test_malformed_ron() {
        assert!(matches!(
            SelectorConfig::from_ron_str("(reduction_percentage: )"),
            Err(MatchError::Deserialization(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "(reduction_percentage: 0.3, minimum_probability: 0.05, history_limit: None)"
        )
        .unwrap();

        let config = SelectorConfig::load(file.path()).unwrap();
        assert_eq!(
            config,
            SelectorConfig {
                reduction_percentage: 0.3,
                minimum_probability: 0.05,
                history_limit: None,
            }
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SelectorConfig::load(dir.path().join("missing.ron")),
            Err(MatchError::Io(_))
        ));
    }
}
