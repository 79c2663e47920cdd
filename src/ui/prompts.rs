use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::domain::{Airport, SeasonChoice, TimeSlot};
use crate::ui::ui_text::UI_TEXT;
use crate::utils::text_utils::clean_field;

pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// The input stream ended while a prompt was waiting for an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input closed")
    }
}

impl std::error::Error for InputClosed {}

/// Line-oriented console over any reader/writer pair.
/// Every `ask_*` method re-prompts until it gets a valid answer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to console")
    }

    /// Print `prompt` and read one trimmed line. `InputClosed` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt).context("Failed to write to console")?;
        self.output.flush().context("Failed to flush console")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from console")?;
        if read == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_string())
    }

    fn ask_until<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, &'static str>,
    ) -> Result<T> {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(message) => self.say(message)?,
            }
        }
    }

    pub fn ask_departure(&mut self) -> Result<Airport> {
        self.ask_until(UI_TEXT.departure_prompt, |line| {
            Airport::parse(line).ok_or(UI_TEXT.departure_invalid)
        })
    }

    /// The date is only echoed back; it plays no part in the judgement.
    pub fn ask_date(&mut self) -> Result<NaiveDate> {
        self.ask_until(UI_TEXT.date_prompt, |line| {
            NaiveDate::parse_from_str(&clean_field(line), DATE_FORMAT).map_err(|_| UI_TEXT.date_invalid)
        })
    }

    /// Returns the clock text as typed together with its slot
    pub fn ask_time_slot(&mut self) -> Result<(String, TimeSlot)> {
        self.ask_until(UI_TEXT.time_prompt, |line| {
            let clock = clean_field(line);
            TimeSlot::classify(&clock)
                .map(|slot| (clock.clone(), slot))
                .ok_or(UI_TEXT.time_invalid)
        })
    }

    pub fn ask_season(&mut self) -> Result<SeasonChoice> {
        self.ask_until(UI_TEXT.season_prompt, |line| {
            SeasonChoice::normalize(line).ok_or(UI_TEXT.season_invalid)
        })
    }

    pub fn ask_price(&mut self) -> Result<u32> {
        self.ask_until(UI_TEXT.price_prompt, parse_price_answer)
    }

    pub fn ask_yes(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.read_line(prompt)?;
        Ok(clean_field(&answer).eq_ignore_ascii_case("y"))
    }
}

/// Positive whole number, full-width digits allowed
pub fn parse_price_answer(line: &str) -> Result<u32, &'static str> {
    let cleaned = clean_field(line);
    match cleaned.parse::<i64>() {
        Ok(value) if value <= 0 => Err(UI_TEXT.price_not_positive),
        Ok(value) => u32::try_from(value).map_err(|_| UI_TEXT.price_not_integer),
        Err(_) => Err(UI_TEXT.price_not_integer),
    }
}
