//! Simulation settings and the build, print, free sequence.
use crate::error::{Error, Result};
use crate::family::{create_family, free_family};
use crate::printer::print_family;
use crate::{node_count, Person, GENERATIONS, INDENT_LENGTH, MAX_GENERATIONS};
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Write;

pub struct SimulationBuilder {
    generations: u32,
    indent_width: usize,
    seed: Option<u64>,
}

impl SimulationBuilder {
    /// Construct a new builder with the default settings
    ///
    /// Defaults to `GENERATIONS` generations, `INDENT_LENGTH` spaces per
    /// generation and a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            generations: GENERATIONS,
            indent_width: INDENT_LENGTH,
            seed: None,
        }
    }

    pub fn generations(&mut self, generations: u32) -> &mut Self {
        self.generations = generations;
        self
    }

    pub fn indent_width(&mut self, indent_width: usize) -> &mut Self {
        self.indent_width = indent_width;
        self
    }

    /// Seeds the random generator so runs are reproducible.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(&self) -> Result<Simulation> {
        if self.generations == 0 {
            return Err(Error::InvalidGenerations {
                generations: self.generations,
            });
        }
        if self.generations > MAX_GENERATIONS {
            return Err(Error::TooManyGenerations {
                generations: self.generations,
                max: MAX_GENERATIONS,
            });
        }

        let rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(Simulation {
            generations: self.generations,
            indent_width: self.indent_width,
            rng,
        })
    }
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A configured simulation that owns its random generator
pub struct Simulation {
    generations: u32,
    indent_width: usize,
    rng: ChaCha8Rng,
}

impl Simulation {
    pub fn generations(&self) -> u32 {
        self.generations
    }

    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// Builds a new family and returns its youngest member.
    pub fn create_family(&mut self) -> Person {
        create_family(self.generations, &mut self.rng)
    }

    /// Builds a family, prints it to `out` and frees it.
    ///
    /// The family is freed even when printing fails.
    pub fn run<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<()> {
        debug!(
            "creating family of {} generations ({} people)",
            self.generations,
            node_count(self.generations).unwrap_or_default()
        );
        let family = self.create_family();
        debug!("family created");

        let printed = print_family(out, Some(&family), 0, self.indent_width);
        free_family(Some(family));
        printed?;

        out.flush()?;
        Ok(())
    }
}
