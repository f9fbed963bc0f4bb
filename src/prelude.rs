pub use crate::family::{create_family, free_family};
pub use crate::genetics::{inherit, random_allele};
pub use crate::printer::print_family;
pub use crate::{Allele, Person, Simulation, SimulationBuilder};
