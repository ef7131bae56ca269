//! Request validation.
//!
//! Pure guards, run before anything else in the pipeline.

use checkout_types::{Metadata, PaymentError, PaymentMethod};

/// Checks that `amount` is a positive finite number.
pub fn validate_amount(amount: f64) -> Result<(), PaymentError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(PaymentError::InvalidAmount(amount));
    }
    Ok(())
}

/// Parses the method and checks its required metadata.
pub fn validate(method: &str, metadata: &Metadata) -> Result<PaymentMethod, PaymentError> {
    let method: PaymentMethod = method.parse()?;

    match method {
        PaymentMethod::CreditCard => {
            if !has_field(metadata, "cardNumber") || !has_field(metadata, "expiry") {
                return Err(PaymentError::InvalidMetadata("Invalid card metadata".into()));
            }
        }
        PaymentMethod::Paypal => {
            if !has_field(metadata, "paypalAccount") {
                return Err(PaymentError::InvalidMetadata("Invalid PayPal metadata".into()));
            }
        }
    }

    Ok(method)
}

fn has_field(metadata: &Metadata, key: &str) -> bool {
    metadata
        .get(key)
        .is_some_and(|value| !value.is_empty())
}
