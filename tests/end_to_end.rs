use std::io::Write;

use clap::Parser;
use fare_sniper::{Cli, FareEngine, FareQuery, PriceTier, Season, SeasonChoice, TimeSlot, Verdict};
use fare_sniper::{Airport, run_app};

const SAMPLE: &str = "\
出發地,目的地,淡旺季,飛行時間,票價
TPE,NRT,旺,早,5000
TPE,NRT,旺,早,7000
TPE,NRT,旺,早,9000
TPE,NRT,淡,早,4200
NRT,TPE,淡,晚,8800
NRT,TPE,旺,晚,10400
TPE,NRT,淡,午,not-a-number
";

fn sample_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> String {
    let cli = Cli::parse_from(args);
    let mut output = Vec::new();
    run_app(&cli, std::io::empty(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn load_build_and_judge() {
    let file = sample_file();
    let engine = FareEngine::from_csv(file.path()).unwrap();
    assert_eq!(engine.sample().len(), 6);

    let seasonal = FareQuery::new(Airport::Tpe, TimeSlot::Morning, Season::Peak.into(), 6000);
    assert_eq!(engine.judge(&seasonal).tier(), Some(PriceTier::VeryCheap));

    // general TPE morning group: 4200, 5000, 7000, 9000
    let general = FareQuery::new(Airport::Tpe, TimeSlot::Morning, SeasonChoice::Unknown, 6000);
    let verdict = engine.judge(&general);
    let judgement = verdict.judgement().unwrap();
    assert_eq!((judgement.band.p25, judgement.band.p50, judgement.band.p75), (4800, 6000, 7500));
    assert_eq!(judgement.tier, PriceTier::CheapOrFair);

    let missing = FareQuery::new(Airport::Nrt, TimeSlot::Noon, SeasonChoice::Unknown, 6000);
    assert!(matches!(engine.judge(&missing), Verdict::InsufficientSample { .. }));
}

#[test]
fn judge_command_prints_json() {
    let file = sample_file();
    let path = file.path().to_str().unwrap();
    let out = run(&[
        "fare-sniper", "--data", path, "--json", "judge", "--from", "NRT", "--time", "18:45",
        "--season", "淡", "--price", "8800",
    ]);

    let verdict: Verdict = serde_json::from_str(&out).unwrap();
    let judgement = verdict.judgement().unwrap();
    assert_eq!(judgement.query.arrival, Airport::Tpe);
    assert_eq!(judgement.tier, PriceTier::VeryCheap);
}

#[test]
fn summary_command_prints_tables() {
    let file = sample_file();
    let path = file.path().to_str().unwrap();
    let out = run(&["fare-sniper", "--data", path, "summary"]);
    assert!(out.contains("[By direction]"));
    assert!(out.contains("NRT→TPE"));
}

#[test]
fn interactive_mode_exits_cleanly_on_closed_input() {
    let file = sample_file();
    let path = file.path().to_str().unwrap();
    let out = run(&["fare-sniper", "--data", path]);
    assert!(out.contains("Choose an option:"));
}

#[test]
fn missing_sample_file_is_an_error() {
    let cli = Cli::parse_from(["fare-sniper", "--data", "/no/such/fares.csv"]);
    assert!(run_app(&cli, std::io::empty(), Vec::new()).is_err());
}
