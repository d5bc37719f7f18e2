use crate::Generator;
use snip_core::short_id::SHORT_ID_LENGTH;
use snip_core::ShortId;
use uuid::Uuid;

/// Generates short ids from the first 8 hex digits of a random v4 UUID.
///
/// That leaves 32 bits of entropy: plenty for uniqueness in a single
/// process, but collisions are possible and must be handled by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomHexGenerator;

impl RandomHexGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for RandomHexGenerator {
    fn generate(&self) -> ShortId {
        let mut buf = Uuid::encode_buffer();
        let hex = Uuid::new_v4().simple().encode_lower(&mut buf);
        ShortId::new_unchecked(&hex[..SHORT_ID_LENGTH])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_valid_short_ids() {
        let generator = RandomHexGenerator::new();

        for _ in 0..100 {
            let id = generator.generate();
            assert!(ShortId::new(id.as_str()).is_ok(), "invalid id {id}");
        }
    }

    #[test]
    fn generated_ids_are_distinct() {
        let generator = RandomHexGenerator::new();

        let ids: HashSet<_> = (0..1_000).map(|_| generator.generate()).collect();
        // 1000 draws from 2^32 collide with probability ~1e-4.
        assert!(ids.len() >= 999);
    }
}
