use super::error::MiningError;

/// Minimum support threshold, either absolute or relative to the number of
/// transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    Count(usize),
    Fraction(f64),
}

impl MinSupport {
    /// Resolves the threshold to an absolute transaction count.
    ///
    /// Fractions are rounded up, so `Fraction(0.5)` over 5 transactions
    /// requires 3 occurrences.
    pub fn resolve(&self, num_transactions: usize) -> Result<usize, MiningError> {
        match *self {
            MinSupport::Count(0) => Err(MiningError::InvalidMinSupport { value: "0".to_string() }),
            MinSupport::Count(count) => Ok(count),
            MinSupport::Fraction(fraction) => {
                if !(fraction > 0.0 && fraction <= 1.0) {
                    return Err(MiningError::InvalidMinSupport { value: fraction.to_string() });
                }
                let min_count = (fraction * num_transactions as f64).ceil() as usize;
                Ok(min_count.max(1))
            }
        }
    }
}

impl Default for MinSupport {
    fn default() -> Self {
        MinSupport::Fraction(0.5)
    }
}

#[derive(Debug, Clone)]
pub struct MiningConfig {
    pub min_support: MinSupport,
    pub max_len: Option<usize>,
    pub parallel: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: MinSupport::default(),
            max_len: None,
            parallel: true,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: MinSupport) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_min_count(min_count: usize) -> Self {
        Self::new(MinSupport::Count(min_count))
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Checks the configuration and resolves the absolute support threshold.
    pub fn validate(&self, num_transactions: usize) -> Result<usize, MiningError> {
        if self.max_len == Some(0) {
            return Err(MiningError::InvalidMaxLen);
        }
        self.min_support.resolve(num_transactions)
    }
}
