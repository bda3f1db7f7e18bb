//! Task ID generation.
//!
//! IDs are 40 lowercase hex characters: a SHA-256 digest of a random,
//! time-perturbed seed, truncated. Uniqueness against existing store
//! contents is not checked; the collision probability is accepted as
//! negligible. Disambiguation happens at lookup time via prefix matching.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use sha2::{Digest, Sha256};

/// Length of a generated task ID in hex characters
pub const TASK_ID_LEN: usize = 40;

/// Source of new task identifiers.
///
/// The add operation takes this as a parameter so tests can supply a
/// deterministic sequence instead of the random default.
pub trait IdGenerator {
    fn generate(&mut self) -> String;
}

/// Default generator backed by the thread RNG
#[derive(Debug, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&mut self) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos())
            .unwrap_or(0);
        let seed: u64 = rand::thread_rng().gen();

        let mut hasher = Sha256::new();
        hasher.update(seed.to_le_bytes());
        hasher.update(nanos.to_le_bytes());
        let digest = hex::encode(hasher.finalize());
        digest[..TASK_ID_LEN].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_fixed_length_hex() {
        let mut ids = RandomIdGenerator;
        for _ in 0..32 {
            let id = ids.generate();
            assert_eq!(id.len(), TASK_ID_LEN);
            assert!(id.chars().all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase()));
        }
    }

    #[test]
    fn consecutive_ids_differ() {
        let mut ids = RandomIdGenerator;
        let first = ids.generate();
        let second = ids.generate();
        assert_ne!(first, second);
    }
}
