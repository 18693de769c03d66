use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::sizing::mission::{validate_delta_v_budget, MissionParameters, ParameterField};

enum Entry {
    Value(f64),
    Blank,
    Unparsable,
    Eof,
}

/// Line-oriented prompts for mission parameters. Blank or unusable answers
/// fall back to the default shown in brackets.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompter { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn read_entry(&mut self, prompt: &str, default: f64) -> io::Result<Entry> {
        write!(self.writer, "{} [{:?}]: ", prompt, default)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(Entry::Eof);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Entry::Blank);
        }
        Ok(trimmed.parse::<f64>().map_or(Entry::Unparsable, Entry::Value))
    }

    fn resolve(&mut self, entry: Entry, default: f64) -> io::Result<f64> {
        match entry {
            Entry::Value(value) => Ok(value),
            Entry::Unparsable => {
                writeln!(self.writer, "Invalid input. Using default value.")?;
                Ok(default)
            }
            Entry::Blank | Entry::Eof => Ok(default),
        }
    }

    pub fn read_f64(&mut self, prompt: &str, default: f64) -> io::Result<f64> {
        let entry = self.read_entry(prompt, default)?;
        self.resolve(entry, default)
    }

    /// Reads one field; a value outside the field's range is replaced by the default.
    pub fn read_field(&mut self, field: ParameterField, default: f64) -> io::Result<f64> {
        let value = self.read_f64(field.label(), default)?;
        match field.check(value) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(%err, "substituting default");
                writeln!(self.writer, "Value out of range. Using default value.")?;
                Ok(default)
            }
        }
    }

    /// Asks for the budget in km/s until it converts to an accepted m/s value.
    pub fn read_delta_v_budget(&mut self, default: f64) -> io::Result<f64> {
        let default_km_s = default / 1000.0;
        loop {
            let entry = self.read_entry(ParameterField::DeltaVBudget.label(), default_km_s)?;
            let at_eof = matches!(entry, Entry::Eof);
            let delta_v_km_s = self.resolve(entry, default_km_s)?;

            match validate_delta_v_budget(delta_v_km_s * 1000.0) {
                Ok(delta_v_budget) => return Ok(delta_v_budget),
                Err(_) if at_eof => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "input ended before a valid delta-v budget was entered",
                    ))
                }
                Err(_) => writeln!(
                    self.writer,
                    "Please enter a delta-v budget between 9.3 and 10.0 km/s."
                )?,
            }
        }
    }

    pub fn read_mission(&mut self, defaults: &MissionParameters) -> io::Result<MissionParameters> {
        let mut params = *defaults;
        for field in ParameterField::ALL {
            let value = match field {
                ParameterField::DeltaVBudget => self.read_delta_v_budget(defaults.delta_v_budget)?,
                _ => self.read_field(field, defaults.get(field))?,
            };
            params.set(field, value);
        }
        Ok(params)
    }
}
