//! Allele draws: random alleles for founders, inherited alleles for
//! everybody else.
use crate::{Allele, Person};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

impl Distribution<Allele> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Allele {
        match rng.gen_range(0..3) {
            0 => Allele::A,
            1 => Allele::B,
            _ => Allele::O,
        }
    }
}

/// Draws one of A, B or O with equal probability.
pub fn random_allele<R: Rng + ?Sized>(rng: &mut R) -> Allele {
    rng.gen()
}

/// Picks one of `parent`'s two alleles with equal probability.
pub fn inherit<R: Rng + ?Sized>(parent: &Person, rng: &mut R) -> Allele {
    parent.alleles()[rng.gen_range(0..2usize)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_allele_draws_every_symbol() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            match random_allele(&mut rng) {
                Allele::A => counts[0] += 1,
                Allele::B => counts[1] += 1,
                Allele::O => counts[2] += 1,
            }
        }
        // Roughly uniform: each symbol lands well inside [800, 1200].
        for count in counts.iter() {
            assert!(*count > 800 && *count < 1200, "{:?}", counts);
        }
    }

    #[test]
    fn test_inherit_picks_a_parent_allele() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let parent = Person::founder([Allele::A, Allele::B]);
        let mut seen = [false; 2];
        for _ in 0..100 {
            match inherit(&parent, &mut rng) {
                Allele::A => seen[0] = true,
                Allele::B => seen[1] = true,
                Allele::O => panic!("O is not one of the parent's alleles"),
            }
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn test_homozygous_parent_always_passes_same_allele() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let parent = Person::founder([Allele::O, Allele::O]);
        assert!((0..50).all(|_| inherit(&parent, &mut rng) == Allele::O));
    }
}
