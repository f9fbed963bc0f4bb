#![crate_name = "bloodline"]
//! Simulates the inheritance of ABO blood type alleles through a family.
//!
//! A family is a perfect binary tree of [`Person`]s rooted at the youngest
//! member. The oldest generation (founders) receives random alleles and
//! every younger person inherits one allele from each of their two parents.
use std::fmt;

pub mod prelude;

pub mod config;
pub mod error;
pub mod family;
pub mod genetics;
pub mod printer;

pub use config::{Simulation, SimulationBuilder};
pub use error::{Error, Result};

/// Default number of generations in a family
pub const GENERATIONS: u32 = 3;

/// Default number of spaces printed per generation
pub const INDENT_LENGTH: usize = 4;

/// Largest generation count whose family size fits in a `usize`
pub const MAX_GENERATIONS: u32 = usize::BITS - 1;

/// A blood type allele
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Allele {
    A,
    B,
    O,
}

impl Allele {
    /// Every allele, in the order the random generator maps them
    pub const ALL: [Allele; 3] = [Allele::A, Allele::B, Allele::O];

    pub fn as_char(self) -> char {
        match self {
            Allele::A => 'A',
            Allele::B => 'B',
            Allele::O => 'O',
        }
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One member of a family
///
/// A person owns both of their parents. Founders have no parents, everybody
/// else has exactly two.
#[derive(Debug)]
pub struct Person {
    parents: Option<Box<[Person; 2]>>,
    alleles: [Allele; 2],
}

impl Person {
    pub(crate) fn founder(alleles: [Allele; 2]) -> Self {
        Self {
            parents: None,
            alleles,
        }
    }

    pub(crate) fn with_parents(parents: [Person; 2], alleles: [Allele; 2]) -> Self {
        Self {
            parents: Some(Box::new(parents)),
            alleles,
        }
    }

    pub fn alleles(&self) -> [Allele; 2] {
        self.alleles
    }

    /// Both parents, or `None` for a founder
    pub fn parents(&self) -> Option<&[Person; 2]> {
        self.parents.as_deref()
    }

    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }

    /// Splits a person into their alleles and their parents.
    pub(crate) fn into_parts(self) -> ([Allele; 2], Option<Box<[Person; 2]>>) {
        (self.alleles, self.parents)
    }
}

/// Number of people in a family of `generations` generations
///
/// Returns `None` when the count does not fit in a `usize`.
pub fn node_count(generations: u32) -> Option<usize> {
    1usize.checked_shl(generations).map(|n| n - 1)
}
