//! Linear per-token pricing tables.
//!
//! ```rust
//! use mprovider::{ModelPricing, TokenUsage};
//!
//! let pricing = ModelPricing::new(3.0, 15.0);
//! let cost = pricing.estimate(&TokenUsage::new(1_000_000, 1_000_000));
//! assert_eq!(cost, 18.0);
//! ```

use crate::TokenUsage;

const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// US dollars per million tokens, split by direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPricing {
    pub input_cost_per_million: f64,
    pub output_cost_per_million: f64,
}

impl ModelPricing {
    pub const fn new(input_cost_per_million: f64, output_cost_per_million: f64) -> Self {
        Self {
            input_cost_per_million,
            output_cost_per_million,
        }
    }

    pub fn estimate(&self, usage: &TokenUsage) -> f64 {
        let input_cost =
            (f64::from(usage.input_tokens) / TOKENS_PER_MILLION) * self.input_cost_per_million;
        let output_cost =
            (f64::from(usage.output_tokens) / TOKENS_PER_MILLION) * self.output_cost_per_million;
        input_cost + output_cost
    }
}
