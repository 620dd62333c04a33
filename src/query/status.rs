//! Payment and fulfillment status vocabularies.
//!
//! Status filters are free-form strings such as `"paid, declined"` or
//! `"SHIPPED DELIVERED"`. [`normalize_statuses`] splits them into uppercase
//! tokens and the `validate_*` functions check every token against its
//! vocabulary. Legacy synonyms are accepted: `ACCEPTED` is `PAID`, `QUEUED`
//! is `AWAITING_PAYMENT` and `NEW` is `AWAITING_PROCESSING`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::query::errors::{StatusKind, ValidationError};

/// Payment status of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    /// `PAID`, legacy name `ACCEPTED`.
    Paid,
    /// `DECLINED`.
    Declined,
    /// `CANCELLED`.
    Cancelled,
    /// `AWAITING_PAYMENT`, legacy name `QUEUED`.
    AwaitingPayment,
    /// `CHARGEABLE`.
    Chargeable,
    /// `REFUNDED`.
    Refunded,
    /// `INCOMPLETE`.
    Incomplete,
}

impl PaymentStatus {
    /// Every payment status, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Paid,
        Self::Declined,
        Self::Cancelled,
        Self::AwaitingPayment,
        Self::Chargeable,
        Self::Refunded,
        Self::Incomplete,
    ];

    /// Returns the current API name of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::Declined => "DECLINED",
            Self::Cancelled => "CANCELLED",
            Self::AwaitingPayment => "AWAITING_PAYMENT",
            Self::Chargeable => "CHARGEABLE",
            Self::Refunded => "REFUNDED",
            Self::Incomplete => "INCOMPLETE",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        match token.as_str() {
            "PAID" | "ACCEPTED" => Ok(Self::Paid),
            "DECLINED" => Ok(Self::Declined),
            "CANCELLED" => Ok(Self::Cancelled),
            "AWAITING_PAYMENT" | "QUEUED" => Ok(Self::AwaitingPayment),
            "CHARGEABLE" => Ok(Self::Chargeable),
            "REFUNDED" => Ok(Self::Refunded),
            "INCOMPLETE" => Ok(Self::Incomplete),
            _ => Err(ValidationError::InvalidStatus {
                kind: StatusKind::Payment,
                token,
            }),
        }
    }
}

/// Fulfillment status of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FulfillmentStatus {
    /// `AWAITING_PROCESSING`, legacy name `NEW`.
    AwaitingProcessing,
    /// `PROCESSING`.
    Processing,
    /// `SHIPPED`.
    Shipped,
    /// `DELIVERED`.
    Delivered,
    /// `WILL_NOT_DELIVER`.
    WillNotDeliver,
    /// `RETURNED`.
    Returned,
}

impl FulfillmentStatus {
    /// Every fulfillment status, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::AwaitingProcessing,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::WillNotDeliver,
        Self::Returned,
    ];

    /// Returns the current API name of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingProcessing => "AWAITING_PROCESSING",
            Self::Processing => "PROCESSING",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::WillNotDeliver => "WILL_NOT_DELIVER",
            Self::Returned => "RETURNED",
        }
    }
}

impl FromStr for FulfillmentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        match token.as_str() {
            "AWAITING_PROCESSING" | "NEW" => Ok(Self::AwaitingProcessing),
            "PROCESSING" => Ok(Self::Processing),
            "SHIPPED" => Ok(Self::Shipped),
            "DELIVERED" => Ok(Self::Delivered),
            "WILL_NOT_DELIVER" => Ok(Self::WillNotDeliver),
            "RETURNED" => Ok(Self::Returned),
            _ => Err(ValidationError::InvalidStatus {
                kind: StatusKind::Fulfillment,
                token,
            }),
        }
    }
}

macro_rules! status_traits {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

status_traits!(PaymentStatus);
status_traits!(FulfillmentStatus);

/// Splits a status string into uppercase tokens.
///
/// Commas and runs of whitespace separate tokens. Order and duplicates are
/// preserved; empty pieces are dropped. No vocabulary check happens here.
///
/// ```rust
/// use ecwid_api::query::normalize_statuses;
///
/// assert_eq!(
///     normalize_statuses(" paid,declined  PAID "),
///     vec!["PAID", "DECLINED", "PAID"]
/// );
/// assert!(normalize_statuses("  ").is_empty());
/// ```
#[must_use]
pub fn normalize_statuses(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Normalizes `input` and checks every token against the payment vocabulary.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidStatus`] naming the first unknown token.
pub fn validate_payment_statuses(input: &str) -> Result<Vec<String>, ValidationError> {
    validate::<PaymentStatus>(input)
}

/// Normalizes `input` and checks every token against the fulfillment vocabulary.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidStatus`] naming the first unknown token.
pub fn validate_fulfillment_statuses(input: &str) -> Result<Vec<String>, ValidationError> {
    validate::<FulfillmentStatus>(input)
}

fn validate<T>(input: &str) -> Result<Vec<String>, ValidationError>
where
    T: FromStr<Err = ValidationError>,
{
    let tokens = normalize_statuses(input);
    for token in &tokens {
        token.parse::<T>()?;
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_synonyms_parse_to_same_status() {
        assert_eq!(
            "PAID".parse::<PaymentStatus>().unwrap(),
            "ACCEPTED".parse::<PaymentStatus>().unwrap()
        );
        assert_eq!(
            "queued".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::AwaitingPayment
        );
    }

    #[test]
    fn test_fulfillment_synonyms_parse_to_same_status() {
        assert_eq!(
            "NEW".parse::<FulfillmentStatus>().unwrap(),
            FulfillmentStatus::AwaitingProcessing
        );
    }

    #[test]
    fn test_every_status_round_trips_through_its_name() {
        for status in PaymentStatus::ALL {
            assert_eq!(status.as_str().parse::<PaymentStatus>().unwrap(), status);
        }
        for status in FulfillmentStatus::ALL {
            assert_eq!(
                status.as_str().parse::<FulfillmentStatus>().unwrap(),
                status
            );
        }
    }

    #[test]
    fn test_vocabularies_do_not_overlap() {
        for status in PaymentStatus::ALL {
            assert!(status.as_str().parse::<FulfillmentStatus>().is_err());
        }
        assert!("SHIPPED".parse::<PaymentStatus>().is_err());
    }

    #[test]
    fn test_normalize_handles_mixed_separators() {
        assert_eq!(
            normalize_statuses("paid,\tdeclined\n refunded,,incomplete"),
            vec!["PAID", "DECLINED", "REFUNDED", "INCOMPLETE"]
        );
    }

    #[test]
    fn test_validate_keeps_synonyms_as_typed() {
        assert_eq!(
            validate_payment_statuses("accepted queued").unwrap(),
            vec!["ACCEPTED", "QUEUED"]
        );
    }

    #[test]
    fn test_validate_rejects_unknown_token() {
        let error = validate_fulfillment_statuses("SHIPPED, LOST").unwrap_err();
        assert_eq!(
            error,
            ValidationError::InvalidStatus {
                kind: StatusKind::Fulfillment,
                token: "LOST".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_rejects_token_from_other_vocabulary() {
        assert!(validate_payment_statuses("PAID SHIPPED").is_err());
    }

    #[test]
    fn test_status_serde_uses_api_names() {
        let json = serde_json::to_string(&FulfillmentStatus::WillNotDeliver).unwrap();
        assert_eq!(json, "\"WILL_NOT_DELIVER\"");

        let status: PaymentStatus = serde_json::from_str("\"ACCEPTED\"").unwrap();
        assert_eq!(status, PaymentStatus::Paid);
    }
}
