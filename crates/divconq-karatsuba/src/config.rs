use core::num::NonZeroUsize;

use crate::error::{Error, Result};

pub const BASE_CASE_DIGITS_ENV: &str = "DIVCONQ_KARATSUBA_BASE_CASE_DIGITS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KaratsubaConfig {
    base_case_digits: NonZeroUsize,
}

impl Default for KaratsubaConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KaratsubaConfig {
    /// Creates a new default configuration: only single-digit operands are multiplied directly.
    pub const fn new() -> Self {
        KaratsubaConfig {
            base_case_digits: NonZeroUsize::MIN,
        }
    }

    /// Creates a new default configuration and seeds it from the environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::new();
        if let Some(value) = lookup(BASE_CASE_DIGITS_ENV) {
            let digits = value
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|_| Error::InvalidConfig {
                    name: BASE_CASE_DIGITS_ENV,
                    value,
                })?;
            config.set_base_case_digits(digits);
        }

        Ok(config)
    }

    /// Operands with at most this many digits are multiplied directly instead of being split.
    pub fn base_case_digits(&self) -> usize {
        self.base_case_digits.get()
    }

    pub fn set_base_case_digits(&mut self, digits: NonZeroUsize) -> &mut Self {
        self.base_case_digits = digits;
        self
    }
}
