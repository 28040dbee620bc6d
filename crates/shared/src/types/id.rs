//! Typed IDs for type-safe entity references.
//!
//! Identifiers are issued by the external service and are opaque to us
//! (they are not UUIDs), so each wrapper holds the raw string. Using typed
//! IDs still prevents passing a `TransactionId` where an `EmployeeId` is
//! expected.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an empty identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("identifier must not be blank")]
pub struct BlankIdError;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an ID from the raw identifier issued by the service.
            #[must_use]
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Returns the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = BlankIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(BlankIdError);
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

typed_id!(EmployeeId, "Unique identifier for an employee record.");
typed_id!(
    TransactionId,
    "Unique identifier for a collection or deposit record."
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_roundtrips_raw_value() {
        let id = EmployeeId::new("65f1c0ffee");
        assert_eq!(id.as_str(), "65f1c0ffee");
        assert_eq!(id.to_string(), "65f1c0ffee");
        assert_eq!(id.into_inner(), "65f1c0ffee");
    }

    #[test]
    fn test_typed_id_from_str_trims() {
        let id = EmployeeId::from_str("  abc123 ").unwrap();
        assert_eq!(id, EmployeeId::new("abc123"));
    }

    #[test]
    fn test_typed_id_from_str_rejects_blank() {
        assert_eq!(EmployeeId::from_str(""), Err(BlankIdError));
        assert_eq!(TransactionId::from_str("   "), Err(BlankIdError));
    }

    #[test]
    fn test_typed_id_serializes_transparently() {
        let id = EmployeeId::new("e-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"e-1\"");
        let back: EmployeeId = serde_json::from_str("\"e-1\"").unwrap();
        assert_eq!(back, id);
    }
}
