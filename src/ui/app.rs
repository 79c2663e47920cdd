use std::io::{BufRead, Write};

use anyhow::{Result, anyhow};

use crate::config::ANALYSIS;
use crate::domain::{Airport, SeasonChoice, TimeSlot};
use crate::engine::FareEngine;
use crate::models::{FareQuery, Verdict};
use crate::ui::prompts::{Console, DATE_FORMAT, InputClosed, parse_price_answer};
use crate::ui::render::{render_mode, render_summary, render_verdict};
use crate::ui::ui_text::UI_TEXT;

/// Interactive menu-driven session over a loaded engine
pub struct FareSniperApp<R, W> {
    engine: FareEngine,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> FareSniperApp<R, W> {
    pub fn new(engine: FareEngine, console: Console<R, W>) -> Self {
        Self { engine, console }
    }

    /// Run until the user exits. Closing the input stream counts as exiting.
    pub fn run(&mut self) -> Result<()> {
        match self.main_menu() {
            Err(e) if e.is::<InputClosed>() => {
                log::info!("Input closed, leaving the session");
                Ok(())
            }
            other => other,
        }
    }

    fn banner(&mut self) -> Result<()> {
        self.console.say(UI_TEXT.app_title)?;
        self.console.say(&format!(
            "Coverage: {} ({}).\n",
            ANALYSIS.route_description, ANALYSIS.sample_period
        ))?;
        self.console.say(UI_TEXT.usage_seasonal)?;
        self.console.say(UI_TEXT.usage_general)?;
        self.console.say(UI_TEXT.usage_time_slot)?;
        self.console.say("")
    }

    fn main_menu(&mut self) -> Result<()> {
        self.banner()?;
        loop {
            self.console.say(UI_TEXT.menu_header)?;
            self.console.say(UI_TEXT.menu_summary)?;
            self.console.say(UI_TEXT.menu_judge)?;
            self.console.say(UI_TEXT.menu_exit)?;

            match self.console.read_line(UI_TEXT.menu_prompt)?.as_str() {
                "1" => {
                    self.show_summary()?;
                    self.console.read_line(UI_TEXT.summary_done)?;
                }
                "2" => self.judge_loop()?,
                "3" => {
                    self.console.say(UI_TEXT.goodbye)?;
                    return Ok(());
                }
                _ => self.console.say(UI_TEXT.menu_invalid)?,
            }
        }
    }

    fn show_summary(&mut self) -> Result<()> {
        match self.engine.summary() {
            Some(summary) => self.console.say(&render_summary(&summary)),
            None => self.console.say(UI_TEXT.empty_sample),
        }
    }

    fn judge_loop(&mut self) -> Result<()> {
        self.console.say(&format!("\n{}\n", UI_TEXT.judge_header))?;
        loop {
            let departure = self.console.ask_departure()?;
            let arrival = departure.other_end();
            self.console
                .say(&format!("{} {}", UI_TEXT.arrival_auto, arrival))?;

            let date = self.console.ask_date()?;
            let (clock, time_slot) = self.console.ask_time_slot()?;
            let season = self.console.ask_season()?;
            let price = self.console.ask_price()?;

            let query = FareQuery::new(departure, time_slot, season, price);
            let verdict = self.engine.judge(&query);
            log::debug!("Judged {:?}", verdict);

            self.console.say(&format!("\n{}", UI_TEXT.result_header))?;
            self.console.say(&format!(
                "Query: {}, date {}, departing {}",
                query.route(),
                date.format(DATE_FORMAT),
                clock
            ))?;
            self.console.say(&render_mode(&verdict))?;
            self.console.say(&render_verdict(&verdict))?;
            self.console.say(&format!("{}\n", UI_TEXT.separator))?;

            if !self.console.ask_yes(UI_TEXT.judge_again)? {
                self.console.say(&format!("{}\n", UI_TEXT.judge_leave))?;
                return Ok(());
            }
        }
    }
}

/// Validate one-shot command-line arguments into a query, using the same rules
/// as the interactive prompts.
pub fn query_from_args(from: &str, time: &str, season: &str, price: &str) -> Result<FareQuery> {
    let departure = Airport::parse(from).ok_or_else(|| anyhow!(UI_TEXT.departure_invalid))?;
    let time_slot = TimeSlot::classify(time).ok_or_else(|| anyhow!(UI_TEXT.time_invalid))?;
    let season = SeasonChoice::normalize(season).ok_or_else(|| anyhow!(UI_TEXT.season_invalid))?;
    let price = parse_price_answer(price).map_err(|message| anyhow!(message))?;
    Ok(FareQuery::new(departure, time_slot, season, price))
}

/// Render a one-shot verdict as text or JSON
pub fn verdict_output(verdict: &Verdict, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(verdict)?)
    } else {
        Ok(format!("{}\n{}", render_mode(verdict), render_verdict(verdict)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FareRecord, Season};
    use crate::models::PriceTier;
    use std::io::Cursor;

    fn engine() -> FareEngine {
        FareEngine::new(
            [5000, 7000, 9000]
                .into_iter()
                .map(|price| {
                    FareRecord::new(Airport::Tpe, Airport::Nrt, Season::Peak, TimeSlot::Morning, price)
                })
                .collect(),
        )
    }

    fn run_session(input: &str) -> String {
        let mut output = Vec::new();
        {
            let console = Console::new(Cursor::new(input.as_bytes().to_vec()), &mut output);
            let mut app = FareSniperApp::new(engine(), console);
            app.run().unwrap();
        }
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_full_judgement_session() {
        let text = run_session("2\ntpe\n2026/01/03\n09:59\n旺\n6000\nn\n3\n");

        assert!(text.contains("Arrival set automatically to NRT"));
        assert!(text.contains("Query: TPE→NRT, date 2026/01/03, departing 09:59"));
        assert!(text.contains("season known"));
        assert!(text.contains("Verdict: very cheap."));
        assert!(text.contains(UI_TEXT.goodbye));
    }

    #[test]
    fn test_unknown_season_uses_general_table() {
        let text = run_session("2\nTPE\n2026/03/10\n07:15\n不知道\n8001\nn\n3\n");
        assert!(text.contains("season unknown"));
        assert!(text.contains("Verdict: very expensive."));
    }

    #[test]
    fn test_missing_group_reports_insufficient_sample() {
        let text = run_session("2\nNRT\n2026/03/10\n16:00\n淡\n5000\nn\n3\n");
        assert!(text.contains(UI_TEXT.insufficient_sample));
    }

    #[test]
    fn test_menu_rejects_bad_choice_and_survives_eof() {
        let text = run_session("9\n1\n\n");
        assert!(text.contains(UI_TEXT.menu_invalid));
        assert!(text.contains("[Overall fare distribution (TWD)]"));
        assert!(!text.contains(UI_TEXT.goodbye));
    }

    #[test]
    fn test_query_from_args() {
        let query = query_from_args("nrt", "15:00", "off-peak", "7200").unwrap();
        assert_eq!(query.departure, Airport::Nrt);
        assert_eq!(query.arrival, Airport::Tpe);
        assert_eq!(query.time_slot, TimeSlot::Evening);
        assert_eq!(query.season, SeasonChoice::Known(Season::OffPeak));

        assert!(query_from_args("TPE", "23:00", "旺", "5000").is_err());
        assert!(query_from_args("TPE", "08:00", "winter", "5000").is_err());
        assert!(query_from_args("TPE", "08:00", "旺", "0").is_err());
        assert!(query_from_args("KIX", "08:00", "旺", "5000").is_err());
    }

    #[test]
    fn test_verdict_output_formats() {
        let verdict = engine().judge(&query_from_args("TPE", "08:00", "旺", "7000").unwrap());
        assert_eq!(verdict.tier(), Some(PriceTier::CheapOrFair));

        let json = verdict_output(&verdict, true).unwrap();
        assert!(json.contains("\"status\": \"judged\""));
        assert!(json.contains("\"tier\": \"cheap_or_fair\""));

        let text = verdict_output(&verdict, false).unwrap();
        assert!(text.starts_with("Mode: season known"));
    }
}
