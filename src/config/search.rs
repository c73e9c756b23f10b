//! Search configuration section.
//!
//! The recognized options of the candidate space: the multiplier search
//! budget, the inclusive shift bound, and the table sizes to try. Larger
//! budgets trade runtime for a chance at better constants; none of the
//! values are semantically special.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::hasher::MAX_SHIFT;

/// Multiplier indices above this would overflow the mixing product's
/// comfortable headroom in 64 bits.
const MAX_MULTIPLIER_INDEX_LIMIT: u64 = 1 << 31;

/// Search space configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Upper bound (exclusive) for the multiplier base index; candidate
    /// multipliers are `2 * index + 1` for `index` in `[1, bound)`
    pub max_multiplier_index: u64,

    /// Largest right-shift to try (inclusive)
    pub max_shift: u32,

    /// Power-of-two table sizes to try, in enumeration order
    pub modulus_candidates: Vec<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_multiplier_index: 100_000,
            max_shift: MAX_SHIFT,
            modulus_candidates: vec![128, 256],
        }
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_multiplier_index < 2 {
            return Err(ConfigError::ValidationError(
                "max_multiplier_index must be at least 2 so the search space is non-empty"
                    .to_string(),
            ));
        }

        if self.max_multiplier_index > MAX_MULTIPLIER_INDEX_LIMIT {
            return Err(ConfigError::ValidationError(format!(
                "max_multiplier_index must be at most {MAX_MULTIPLIER_INDEX_LIMIT}"
            )));
        }

        if self.max_shift > MAX_SHIFT {
            return Err(ConfigError::ValidationError(format!(
                "max_shift must be at most {MAX_SHIFT}: got {}",
                self.max_shift
            )));
        }

        if self.modulus_candidates.is_empty() {
            return Err(ConfigError::ValidationError(
                "modulus_candidates must not be empty".to_string(),
            ));
        }

        for &modulus in &self.modulus_candidates {
            if modulus < 2 || !modulus.is_power_of_two() {
                return Err(ConfigError::ValidationError(format!(
                    "modulus candidates must be powers of two of at least 2: got {modulus}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_config_is_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_multiplier_index, 100_000);
        assert_eq!(config.max_shift, MAX_SHIFT);
        assert_eq!(config.modulus_candidates, vec![128, 256]);
    }

    #[test_case(SearchConfig { max_multiplier_index: 1, ..Default::default() }; "degenerate budget")]
    #[test_case(SearchConfig { max_multiplier_index: (1 << 31) + 1, ..Default::default() }; "oversized budget")]
    #[test_case(SearchConfig { max_shift: 23, ..Default::default() }; "shift past accumulator range")]
    #[test_case(SearchConfig { modulus_candidates: vec![], ..Default::default() }; "no moduli")]
    #[test_case(SearchConfig { modulus_candidates: vec![100], ..Default::default() }; "non power of two modulus")]
    #[test_case(SearchConfig { modulus_candidates: vec![128, 1], ..Default::default() }; "degenerate modulus")]
    fn test_invalid_configs_are_rejected(config: SearchConfig) {
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_custom_moduli_are_accepted() {
        let config = SearchConfig {
            modulus_candidates: vec![64, 512, 1024],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
