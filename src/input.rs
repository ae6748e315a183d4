//! Interactive prompts for the building size
//!
//! Reprompts until the answer is a number inside the accepted range. Only a
//! closed input stream or an I/O failure ends the loop with an error.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use log::warn;

use crate::simulation::{Floor, MAX_FLOORS, MAX_PASSENGERS, MIN_FLOORS, MIN_PASSENGERS};

/// A question asked on the console
#[derive(Debug, Clone)]
pub struct Prompt {
    /// What is being counted, e.g. "pisos"
    pub noun: &'static str,
    /// Noun used when the answer is out of range
    pub range_noun: &'static str,
    pub range: RangeInclusive<u32>,
}

impl Prompt {
    pub fn floors() -> Self {
        Self {
            noun: "pisos",
            range_noun: "pisos",
            range: MIN_FLOORS..=MAX_FLOORS,
        }
    }

    pub fn passengers() -> Self {
        Self {
            noun: "clientes",
            range_noun: "usuarios",
            range: (MIN_PASSENGERS as u32)..=(MAX_PASSENGERS as u32),
        }
    }

    fn question(&self) -> String {
        format!(
            "Ingrese el numero de {} [{} - {}]: ",
            self.noun,
            self.range.start(),
            self.range.end()
        )
    }

    /// Check one line of input; `Err` holds the message to show the user
    pub fn parse(&self, line: &str) -> std::result::Result<u32, String> {
        let (low, high) = (self.range.start(), self.range.end());
        match line.trim().parse::<i128>() {
            Ok(value) if value >= i128::from(*low) && value <= i128::from(*high) => {
                Ok(value as u32)
            }
            Ok(_) => Err(format!(
                "Debe ingresar un numero de {} entre {} y {}",
                self.range_noun, low, high
            )),
            Err(_) => Err(format!(
                "Debe ingresar un valor numerico entre {} y {}",
                low, high
            )),
        }
    }

    /// Ask until a valid answer is given
    pub fn ask<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<u32> {
        loop {
            write!(output, "{}", self.question())?;
            output.flush().context("Failed to flush prompt")?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("Failed to read answer")?;
            if read == 0 {
                anyhow::bail!("Input closed while asking for the number of {}", self.noun);
            }

            match self.parse(&line) {
                Ok(value) => return Ok(value),
                Err(message) => {
                    warn!("Rejected answer {:?} for {}", line.trim(), self.noun);
                    writeln!(output, "{}", message)?;
                }
            }
        }
    }
}

/// Ask for the number of floors
pub fn prompt_floor_count<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Floor> {
    Prompt::floors().ask(input, output)
}

/// Ask for the number of passengers
pub fn prompt_passenger_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<usize> {
    Ok(Prompt::passengers().ask(input, output)? as usize)
}
