//! Interactive console prompts.
//!
//! Each prompt loops until the input is accepted. Readers and writers are
//! generic so the loops can be driven from tests.

use std::io::{self, BufRead, Write};

use crate::animals::{SkinTypeCatalog, SkinTypeFilter};

const INVALID_INPUT: &str = "Invalid input. Please try again.";
const INVALID_SKIN_TYPE: &str = "Invalid skin type. Please try again.";

/// Ask `question` until `accept` returns a value.
///
/// The trailing line ending is stripped before validation. End of input is
/// an `UnexpectedEof` error rather than another round.
pub fn prompt_until<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    question: &str,
    retry_message: &str,
    mut accept: F,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Option<T>,
{
    loop {
        write!(output, "{question}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid answer was given",
            ));
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        if let Some(value) = accept(answer) {
            return Ok(value);
        }
        writeln!(output, "{retry_message}")?;
    }
}

/// Animal names are non-empty and purely alphabetic.
pub fn is_valid_animal_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(char::is_alphabetic)
}

/// Ask for the animal to look up.
pub fn ask_animal_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    prompt_until(
        input,
        output,
        "Enter the name of the animal: ",
        INVALID_INPUT,
        |answer| is_valid_animal_name(answer).then(|| answer.to_string()),
    )
}

/// Print the available skin types to `output`.
pub fn print_choices<W: Write>(output: &mut W, catalog: &SkinTypeCatalog) -> io::Result<()> {
    writeln!(output, "Possible skin types:")?;
    for choice in catalog.choices() {
        writeln!(output, "{choice}")?;
    }
    Ok(())
}

/// List the catalog and ask for a skin-type filter.
pub fn ask_skin_type<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    catalog: &SkinTypeCatalog,
) -> io::Result<SkinTypeFilter> {
    print_choices(output, catalog)?;
    prompt_until(
        input,
        output,
        "Enter the skin type of the animals: ",
        INVALID_SKIN_TYPE,
        |answer| catalog.parse_filter(answer),
    )
}
