use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::bitset::BitSet;
use crate::number::PhoneNumber;

/// An endless stream of unique, valid phone numbers.
///
/// Draws uniform values over the whole numbering domain from a
/// non-cryptographic generator and rejects anything already seen or
/// outside the numbering plan. Consumers cap the stream with `take`;
/// asking for more numbers than the plan admits never terminates.
pub struct PhoneNumberGenerator {
    rng: SmallRng,
    seen: BitSet,
}

impl PhoneNumberGenerator {
    pub fn new() -> Self {
        PhoneNumberGenerator {
            rng: SmallRng::from_os_rng(),
            seen: BitSet::new(PhoneNumber::DOMAIN_SIZE as usize),
        }
    }
}

impl Default for PhoneNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PhoneNumberGenerator {
    type Item = PhoneNumber;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = self.rng.random_range(0..PhoneNumber::DOMAIN_SIZE);
            if self.seen.contains(candidate as usize) {
                continue;
            }
            let Ok(number) = PhoneNumber::new(candidate) else {
                continue;
            };
            self.seen.insert(candidate as usize);
            return Some(number);
        }
    }
}
