use serde::{Deserialize, Serialize};

use coffeeshop_core::{DomainError, DomainResult, ValueObject};

/// Validated customer name: between [`CustomerName::MIN_LEN`] and
/// [`CustomerName::MAX_LEN`] characters inclusive.
///
/// Length is counted in characters (Unicode scalar values), not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerName(String);

impl CustomerName {
    pub const MIN_LEN: usize = 1;
    pub const MAX_LEN: usize = 15;

    pub fn parse(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let len = name.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(DomainError::validation(format!(
                "name must be between {} and {} characters (got {len})",
                Self::MIN_LEN,
                Self::MAX_LEN
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for CustomerName {}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CustomerName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CustomerName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CustomerName> for String {
    fn from(value: CustomerName) -> Self {
        value.0
    }
}
