use anyhow::Context;
use clap::{ArgAction, Parser};
use hanoi::{parse_disks, parse_peg, MovePrinter, Peg, Pegs, Puzzle, Solution};
use serde::Serialize;
use std::io::{self, BufWriter};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "hanoi",
    version,
    about = "Print the Tower of Hanoi move sequence"
)]
struct Cli {
    #[arg(
        allow_negative_numbers = true,
        help = "Number of disks; when omitted, `n [source destination auxiliary]` is read from stdin"
    )]
    disks: Option<String>,
    #[arg(long, value_parser = parse_peg, help = "Source peg label")]
    from: Option<Peg>,
    #[arg(long, value_parser = parse_peg, help = "Destination peg label")]
    to: Option<Peg>,
    #[arg(long, value_parser = parse_peg, help = "Auxiliary peg label")]
    via: Option<Peg>,
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    verbose: u8,
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy(),
        level => {
            let directive = match level {
                1 => LevelFilter::INFO,
                2 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            };
            EnvFilter::builder()
                .with_default_directive(directive.into())
                .parse_lossy("")
        }
    };

    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn puzzle_from(cli: &Cli) -> anyhow::Result<Puzzle> {
    let base = match &cli.disks {
        Some(token) => Puzzle::new(parse_disks(token)?, Pegs::default()),
        None => Puzzle::read_from(io::stdin().lock()).context("reading puzzle from stdin")?,
    };

    let pegs = Pegs::new(
        cli.from.unwrap_or(base.pegs.source),
        cli.to.unwrap_or(base.pegs.destination),
        cli.via.unwrap_or(base.pegs.auxiliary),
    )?;
    Ok(Puzzle::new(base.disks, pegs))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let puzzle = puzzle_from(&cli)?;
    info!(disks = puzzle.disks, moves = puzzle.move_count(), "Starting");

    if cli.json {
        let solution = Solution::solve(&puzzle)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: solution
            })?
        );
        return Ok(());
    }

    let mut printer = MovePrinter::new(BufWriter::new(io::stdout().lock()));
    hanoi::solve(&puzzle, &mut printer)?;
    let written = printer.count();
    printer.finish().context("writing move log")?;

    info!(moves = written, "Done");
    Ok(())
}
