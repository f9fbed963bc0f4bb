use crate::genetics::{inherit, random_allele};
use crate::{Allele, Person};
use log::trace;
use rand::Rng;

/// Creates a family of `generations` generations and returns its youngest
/// member.
///
/// Founders (`generations <= 1`) get two random alleles. Everybody else gets
/// both parents built first, then allele 0 inherited from parent 0 and
/// allele 1 from parent 1. The draw order is fixed so a seeded `rng`
/// always yields the same family.
///
/// Recursion depth equals `generations`.
pub fn create_family<R: Rng + ?Sized>(generations: u32, rng: &mut R) -> Person {
    if generations <= 1 {
        let first = random_allele(rng);
        let second = random_allele(rng);
        return Person::founder([first, second]);
    }

    let parents = [
        create_family(generations - 1, rng),
        create_family(generations - 1, rng),
    ];
    let alleles = [inherit(&parents[0], rng), inherit(&parents[1], rng)];
    Person::with_parents(parents, alleles)
}

/// Frees `person` and all of their ancestors.
///
/// Parent 0's line goes first, then parent 1's, and a person is released
/// only after both of their parents.
pub fn free_family(person: Option<Person>) {
    release_family(person, &mut |_| {});
}

pub(crate) fn release_family<F>(person: Option<Person>, on_release: &mut F)
where
    F: FnMut([Allele; 2]),
{
    let person = match person {
        Some(person) => person,
        None => return,
    };

    let (alleles, parents) = person.into_parts();
    if let Some(parents) = parents {
        let [first, second] = *parents;
        release_family(Some(first), on_release);
        release_family(Some(second), on_release);
    }

    trace!("releasing person with blood type {}{}", alleles[0], alleles[1]);
    on_release(alleles);
}
