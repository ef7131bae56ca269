//! Discount codes and the transforms they apply.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An amount transform attached to a discount code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountRule {
    /// Scales the amount, e.g. `0.8` for 20% off.
    Multiply(f64),
    /// Subtracts a fixed amount in the request's currency units.
    Flat(f64),
    /// Arbitrary pure transform registered in code.
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

impl DiscountRule {
    /// Applies the rule to an amount.
    pub fn apply(&self, amount: f64) -> f64 {
        match self {
            DiscountRule::Multiply(factor) => amount * factor,
            DiscountRule::Flat(off) => amount - off,
            DiscountRule::Custom(transform) => transform(amount),
        }
    }
}

/// Mapping from discount code to rule.
///
/// Codes are matched exactly. The default table carries the built-in
/// `SUMMER20` and `WELCOME10` codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountTable {
    rules: HashMap<String, DiscountRule>,
}

impl DiscountTable {
    /// Creates a table with no codes at all.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Adds or replaces a code, returning the table.
    pub fn with(mut self, code: impl Into<String>, rule: DiscountRule) -> Self {
        self.register(code, rule);
        self
    }

    /// Adds or replaces a code. Returns the rule it replaced, if any.
    pub fn register(&mut self, code: impl Into<String>, rule: DiscountRule) -> Option<DiscountRule> {
        self.rules.insert(code.into(), rule)
    }

    /// Copies every code of `other` into this table, overriding clashes.
    pub fn merge(&mut self, other: DiscountTable) {
        self.rules.extend(other.rules);
    }

    /// Looks up the rule for a code.
    pub fn lookup(&self, code: &str) -> Option<&DiscountRule> {
        self.rules.get(code)
    }

    /// Returns the registered codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for DiscountTable {
    fn default() -> Self {
        Self::empty()
            .with("SUMMER20", DiscountRule::Multiply(0.8))
            .with("WELCOME10", DiscountRule::Flat(10.0))
    }
}
