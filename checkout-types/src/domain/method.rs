//! Supported payment methods.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::endpoint::Endpoint;
use crate::error::PaymentError;

/// Payment methods the orchestrator knows how to validate and dispatch.
///
/// Adding a method means adding a variant here; every `match` on it
/// (validation rules, endpoint routing) then has to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
}

impl PaymentMethod {
    /// Returns the wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::Paypal => "paypal",
        }
    }

    /// Returns the gateway endpoint charges for this method are sent to.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            PaymentMethod::CreditCard => Endpoint::Credit,
            PaymentMethod::Paypal => Endpoint::Paypal,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "paypal" => Ok(PaymentMethod::Paypal),
            other => Err(PaymentError::UnsupportedMethod(other.to_string())),
        }
    }
}
