//! Conversion between wire floats and the exact decimal stored in price
//! columns.
//!
//! Prices live in `numeric(10, 2)` columns. `Decimal` is the only
//! representation inside the store; `f64` exists only outside this module,
//! so binary-float noise never reaches a column.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::errors::ModelError;

/// Fractional digits carried by the price columns.
const SCALE: u32 = 2;

/// Encode a wire float into the stored decimal representation.
///
/// Rounds to [`SCALE`] digits, exactly what the column itself would keep.
pub fn encode(value: f64) -> Result<Decimal, ModelError> {
    let d = Decimal::from_f64(value)
        .ok_or_else(|| ModelError::Price(format!("not a finite number: {value}")))?;
    Ok(d.round_dp(SCALE))
}

pub fn encode_opt(value: Option<f64>) -> Result<Option<Decimal>, ModelError> {
    value.map(encode).transpose()
}

/// Decode a stored decimal back into a wire float.
///
/// Failure means the stored value is outside `f64` range, which a
/// `numeric(10, 2)` column cannot produce: treat it as store corruption.
pub fn decode(value: Decimal) -> Result<f64, ModelError> {
    value
        .to_f64()
        .ok_or_else(|| ModelError::Corrupt(format!("price not representable: {value}")))
}

pub fn decode_opt(value: Option<Decimal>) -> Result<Option<f64>, ModelError> {
    value.map(decode).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_two_fraction_digits_exactly() {
        for v in [0.0, 99.99, 2_500_000.0, 150_000.50] {
            let stored = encode(v).unwrap();
            assert_eq!(decode(stored).unwrap(), v);
        }
    }

    #[test]
    fn null_stays_null() {
        assert_eq!(encode_opt(None).unwrap(), None);
        assert_eq!(decode_opt(None).unwrap(), None);
    }

    #[test]
    fn optional_value_round_trips() {
        let stored = encode_opt(Some(99.99)).unwrap();
        assert_eq!(decode_opt(stored).unwrap(), Some(99.99));
    }

    #[test]
    fn rejects_non_finite_input() {
        assert!(encode(f64::NAN).is_err());
        assert!(encode(f64::INFINITY).is_err());
    }

    #[test]
    fn rounds_to_column_scale() {
        let stored = encode(1.999).unwrap();
        assert_eq!(stored.to_string(), "2.00");
    }
}
