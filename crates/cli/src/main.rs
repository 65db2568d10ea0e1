use dicetown_core::{resolve_income, DiceRng, Player, Ruleset};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Debug, Clone)]
struct CliOptions {
    seed: Option<u64>,
    rolls: u32,
    players: Vec<String>,
    json: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            seed: None,
            rolls: 10,
            players: vec!["Alfred".to_string(), "Bradley".to_string()],
            json: false,
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                let seed = value.parse().map_err(|_| format!("bad seed: {value}"))?;
                options.seed = Some(seed);
            }
            "--rolls" => {
                let value = iter.next().ok_or("--rolls needs a value")?;
                options.rolls = value.parse().map_err(|_| format!("bad roll count: {value}"))?;
            }
            "--players" => {
                let value = iter.next().ok_or("--players needs a comma-separated list")?;
                let names: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect();
                if names.len() < 2 {
                    return Err("need at least two players".to_string());
                }
                options.players = names;
            }
            "--json" => options.json = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(options)
}

#[derive(Debug, Serialize)]
struct PlayerIncome {
    name: String,
    gains: i64,
    stolen: i64,
    losses: i64,
    net: i64,
    stash: i64,
}

#[derive(Debug, Serialize)]
struct RollReport {
    turn: u32,
    active: String,
    roll: u8,
    incomes: Vec<PlayerIncome>,
}

fn play(options: &CliOptions) -> Result<Vec<RollReport>, String> {
    let rules = Ruleset::standard();
    let mut rng = match options.seed {
        Some(seed) => DiceRng::from_seed(seed),
        None => DiceRng::from_entropy(),
    };
    let mut roster: Vec<Player> = options
        .players
        .iter()
        .map(|name| Player::new(name.clone()))
        .collect();

    let mut reports = Vec::with_capacity(options.rolls as usize);
    for turn in 0..options.rolls {
        let active = roster[turn as usize % roster.len()].clone();
        let roll = rng.roll();
        // Resolve everyone against the same pre-roll snapshot, then apply.
        let snapshot = roster.clone();
        let mut incomes = Vec::with_capacity(roster.len());
        for player in &mut roster {
            let subject = snapshot
                .iter()
                .find(|seat| seat.name == player.name)
                .ok_or_else(|| format!("unknown player: {}", player.name))?;
            let turn_income = resolve_income(subject, &active, &snapshot, roll, &rules)
                .map_err(|err| err.to_string())?;
            player.apply_income(turn_income.net);
            incomes.push(PlayerIncome {
                name: player.name.clone(),
                gains: turn_income.gains,
                stolen: turn_income.stolen,
                losses: turn_income.losses,
                net: turn_income.net,
                stash: player.stash,
            });
        }
        reports.push(RollReport {
            turn: turn + 1,
            active: active.name,
            roll,
            incomes,
        });
    }
    Ok(reports)
}

fn print_reports(reports: &[RollReport]) {
    for report in reports {
        println!(
            "turn {:>2}: {} rolls a {}",
            report.turn, report.active, report.roll
        );
        for entry in &report.incomes {
            println!(
                "  {:<12} gains {:>2}  stolen {:>2}  losses {:>2}  net {:>3}  stash {:>3}",
                entry.name, entry.gains, entry.stolen, entry.losses, entry.net, entry.stash
            );
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: dicetown-cli [--seed N] [--rolls N] [--players a,b,c] [--json]");
            return ExitCode::FAILURE;
        }
    };
    match play(&options) {
        Ok(reports) => {
            if options.json {
                match serde_json::to_string_pretty(&reports) {
                    Ok(body) => println!("{body}"),
                    Err(err) => {
                        eprintln!("{err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_reports(&reports);
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let options = parse_args(&[]).unwrap();
        assert_eq!(options.rolls, 10);
        assert_eq!(options.players.len(), 2);
        assert!(!options.json);
    }

    #[test]
    fn parses_flags() {
        let options = parse_args(&args(&[
            "--seed", "9", "--rolls", "3", "--players", "a,b,c", "--json",
        ]))
        .unwrap();
        assert_eq!(options.seed, Some(9));
        assert_eq!(options.rolls, 3);
        assert_eq!(options.players, vec!["a", "b", "c"]);
        assert!(options.json);
    }

    #[test]
    fn rejects_single_player_and_unknown_flags() {
        assert!(parse_args(&args(&["--players", "solo"])).is_err());
        assert!(parse_args(&args(&["--verbose"])).is_err());
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let options = parse_args(&args(&["--seed", "11", "--rolls", "6"])).unwrap();
        let first = play(&options).unwrap();
        let second = play(&options).unwrap();
        let stashes = |reports: &[RollReport]| -> Vec<i64> {
            reports
                .iter()
                .flat_map(|report| report.incomes.iter().map(|entry| entry.stash))
                .collect()
        };
        assert_eq!(stashes(&first), stashes(&second));
    }
}
