pub mod random;
pub mod seq;

pub use random::RandomHexGenerator;
pub use seq::SeqGenerator;

use snip_core::ShortId;

/// Trait for generating short ids.
///
/// Implementations are pure generators that don't interact with storage.
/// A generated id is only a candidate: the shortening service checks it
/// against the store and asks for another one on collision.
pub trait Generator: Send + Sync + 'static {
    /// Generates a candidate short id.
    fn generate(&self) -> ShortId;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&self) -> ShortId {
        (**self).generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_generators_are_generators() {
        let generators: Vec<Box<dyn Generator>> = vec![
            Box::new(RandomHexGenerator::new()),
            Box::new(SeqGenerator::new()),
        ];

        for generator in generators {
            assert!(ShortId::new(generator.generate().as_str()).is_ok());
        }
    }
}
