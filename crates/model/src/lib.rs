pub mod bitset;
pub mod generator;
pub mod number;

pub use bitset::BitSet;
pub use generator::PhoneNumberGenerator;
pub use number::{PhoneNumber, PhoneNumberError};
