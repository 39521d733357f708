//! Identifier checks shared by the resource accessors. All run before any request is built.

use crate::error::ArgumentError;

/// Device pins are exactly 8 hex digits, either case.
pub const DEVICE_PIN_LEN: usize = 8;

/// Reject empty identifiers; `what` names the identifier in the error.
pub fn require_present(what: &'static str, value: &str) -> Result<(), ArgumentError> {
    if value.is_empty() {
        return Err(ArgumentError::Missing { what });
    }
    Ok(())
}

pub fn is_device_pin(pin: &str) -> bool {
    pin.len() == DEVICE_PIN_LEN && hex::decode(pin).is_ok()
}

pub fn device_pin(pin: &str) -> Result<(), ArgumentError> {
    if !is_device_pin(pin) {
        return Err(ArgumentError::InvalidDevicePin {
            pin: pin.to_string(),
        });
    }
    Ok(())
}
