use crate::Person;
use std::io::{self, Write};

/// Prints `person` and all of their ancestors, youngest first.
///
/// Each person takes one line indented by `generation * indent_width`
/// spaces, followed by parent 0's line and then parent 1's line.
pub fn print_family<W: Write + ?Sized>(
    out: &mut W,
    person: Option<&Person>,
    generation: usize,
    indent_width: usize,
) -> io::Result<()> {
    let person = match person {
        Some(person) => person,
        None => return Ok(()),
    };

    let [first, second] = person.alleles();
    writeln!(
        out,
        "{:indent$}Generation {}, blood type {}{}",
        "",
        generation,
        first,
        second,
        indent = generation * indent_width
    )?;

    if let Some(parents) = person.parents() {
        for parent in parents.iter() {
            print_family(out, Some(parent), generation + 1, indent_width)?;
        }
    }
    Ok(())
}
