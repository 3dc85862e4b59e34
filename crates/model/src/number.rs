use std::fmt;
use std::str::FromStr;

/// A seven digit subscriber number, rendered as `DDD-DDDD`.
///
/// The type can only hold values that satisfy the numbering plan: the
/// three digit prefix never starts with `0` or `1` and never has the
/// reserved `D11` service form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhoneNumber(u32);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneNumberError {
    #[error("value {0} is outside the numbering domain")]
    OutOfRange(u32),
    #[error("prefix {0:03} is reserved by the numbering plan")]
    ReservedPrefix(u32),
    #[error("malformed record {0:?}, expected the DDD-DDDD form")]
    Malformed(String),
}

impl PhoneNumber {
    /// One past the largest raw value a number can take.
    pub const DOMAIN_SIZE: u32 = 10_000_000;

    const PREFIX_DIVISOR: u32 = 10_000;

    pub fn new(value: u32) -> Result<Self, PhoneNumberError> {
        if value >= Self::DOMAIN_SIZE {
            return Err(PhoneNumberError::OutOfRange(value));
        }
        let prefix = value / Self::PREFIX_DIVISOR;
        if prefix / 100 < 2 || prefix % 100 == 11 {
            return Err(PhoneNumberError::ReservedPrefix(prefix));
        }
        Ok(PhoneNumber(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    fn prefix(self) -> u32 {
        self.0 / Self::PREFIX_DIVISOR
    }

    fn line(self) -> u32 {
        self.0 % Self::PREFIX_DIVISOR
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}-{:04}", self.prefix(), self.line())
    }
}

impl FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 8 || bytes[3] != b'-' {
            return Err(PhoneNumberError::Malformed(s.to_string()));
        }
        let mut value = 0;
        for &byte in bytes[..3].iter().chain(&bytes[4..]) {
            if !byte.is_ascii_digit() {
                return Err(PhoneNumberError::Malformed(s.to_string()));
            }
            value = value * 10 + u32::from(byte - b'0');
        }
        PhoneNumber::new(value)
    }
}
