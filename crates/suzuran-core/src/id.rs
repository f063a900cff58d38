//! Record identifier generation.

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random fragment; 36^11 keeps collisions negligible for
/// catalog-sized collections even within one millisecond.
const RANDOM_FRAGMENT_LEN: usize = 11;

/// Produces identifiers that are unique within a collection's lifetime.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default scheme: a random base-36 fragment followed by the base-36
/// millisecond timestamp, e.g. `k3j9x0q2m1alrx2b8c4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base36IdGenerator;

impl IdGenerator for Base36IdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        let mut id: String = (0..RANDOM_FRAGMENT_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        id.push_str(&to_base36(millis));
        id
    }
}

/// UUID v4 identifiers, for callers that prefer a standard format.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Encodes `n` in lowercase base 36.
pub fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.iter().rev().collect()
}
