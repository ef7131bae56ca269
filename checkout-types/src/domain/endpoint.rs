//! Gateway endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A target endpoint on the external payment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Card charges
    Credit,
    /// PayPal charges
    Paypal,
    /// Refunds of any method
    Refund,
}

impl Endpoint {
    /// Returns the path of this endpoint relative to the gateway base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Credit => "/payments/credit",
            Endpoint::Paypal => "/payments/paypal",
            Endpoint::Refund => "/payments/refund",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
