//! opgrid: solve operator grid boards from the command line.

mod logger;
mod print;

use std::error::Error;
use std::fs;
use std::io::{self, Read};

use log::info;
use opgrid_core::{Board, BoardGen};
use opgrid_search::{Scoring, SearchConfig, Solver, Strategy};
use rand::SeedableRng;
use rand::rngs::StdRng;

const USAGE: &str = "\
usage: opgrid <bfs|bds|ids|astar|idastar> [options] [board-file]
       opgrid gen <rows> <cols> [seed]

Reads the board from standard input when no file is given.

options:
  --max-depth <n>   deepest IDDFS bound (default 100)
  --max-steps <n>   give up after n expansions
  --value           rank greedy search by path value instead of cost";

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(cmd) = args.first() else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };
    match cmd.as_str() {
        "-h" | "--help" => {
            println!("{USAGE}");
            Ok(())
        }
        "gen" => generate(&args[1..]),
        _ => solve(cmd, &args[1..]),
    }
}

fn solve(strategy: &str, args: &[String]) -> Result<(), Box<dyn Error>> {
    let strategy: Strategy = strategy.parse()?;
    let (config, file) = parse_options(args)?;

    let input = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let board: Board = input.parse()?;
    let solver = Solver::with_config(&board, config)?;

    let report = solver.run(strategy);
    info!(
        "{strategy}: {} expanded, {} generated, {} iterations",
        report.stats.expanded, report.stats.generated, report.stats.iterations
    );
    print::write_outcome(&mut io::stdout().lock(), &report.outcome)?;
    Ok(())
}

fn parse_options(args: &[String]) -> Result<(SearchConfig, Option<&str>), Box<dyn Error>> {
    let mut config = SearchConfig::default();
    let mut file = None;
    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--max-depth" => config.max_depth = flag_value(&mut it, arg)?.parse()?,
            "--max-steps" => config.max_steps = Some(flag_value(&mut it, arg)?.parse()?),
            "--value" => config.scoring = Scoring::Value,
            a if file.is_none() && !a.starts_with("--") => file = Some(a),
            a => return Err(format!("unexpected argument `{a}`\n\n{USAGE}").into()),
        }
    }
    Ok((config, file))
}

fn flag_value<'a>(
    it: &mut std::slice::Iter<'a, String>,
    flag: &str,
) -> Result<&'a str, Box<dyn Error>> {
    match it.next() {
        Some(v) => Ok(v.as_str()),
        None => Err(format!("{flag} needs a value").into()),
    }
}

fn generate(args: &[String]) -> Result<(), Box<dyn Error>> {
    let [rows, cols, rest @ ..] = args else {
        return Err(format!("gen needs <rows> <cols>\n\n{USAGE}").into());
    };
    let rows: i32 = rows.parse()?;
    let cols: i32 = cols.parse()?;
    let board = match rest {
        [] => BoardGen::new(rand::rng()).generate(rows, cols)?,
        [seed] => BoardGen::new(StdRng::seed_from_u64(seed.parse()?)).generate(rows, cols)?,
        _ => return Err(format!("gen takes at most one seed\n\n{USAGE}").into()),
    };
    print!("{board}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn options_fill_config() {
        let a = args(&["--max-steps", "50", "board.txt", "--value", "--max-depth", "7"]);
        let (config, file) = parse_options(&a).unwrap();
        assert_eq!(config.max_steps, Some(50));
        assert_eq!(config.max_depth, 7);
        assert_eq!(config.scoring, Scoring::Value);
        assert_eq!(file, Some("board.txt"));
    }

    #[test]
    fn bad_options_are_rejected() {
        assert!(parse_options(&args(&["--max-steps"])).is_err());
        assert!(parse_options(&args(&["--max-depth", "deep"])).is_err());
        assert!(parse_options(&args(&["a.txt", "b.txt"])).is_err());
        assert!(parse_options(&args(&["--fast"])).is_err());
    }

    #[test]
    fn no_options_is_default() {
        let (config, file) = parse_options(&[]).unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(file, None);
    }
}
