use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use arena_core::{CombatRules, CreatureSummary, Session, SessionParams};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Turn-based combat between a player and a monster")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fight by reading commands from stdin until one side dies.
    Play(PlayArgs),
}

#[derive(Args)]
struct PlayArgs {
    /// Seed for stat rolls and combat; falls back to ARENA_SEED, then entropy.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file lowering the stat caps or changing heal allowances.
    #[arg(long)]
    rules: Option<PathBuf>,
    /// Print the battle report as JSON once the battle ends.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
        .ok();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play(args) => handle_play(args),
    }
}

fn handle_play(args: PlayArgs) -> Result<()> {
    let mut session = start_session(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let state = session.run(io::stdin().lock(), &mut out)?;
    if !state.is_over() {
        writeln!(out, "Input ended with no winner")?;
    }
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&session.report())?)?;
    }
    out.flush()?;
    Ok(())
}

fn start_session(args: &PlayArgs) -> Result<Session> {
    let rules = match args.rules.as_deref() {
        Some(path) => CombatRules::from_path(path)?,
        None => CombatRules::default(),
    };
    let params = match args.seed {
        Some(seed) => SessionParams::from_seed(seed),
        None => SessionParams::from_env(),
    };
    info!(target: "arena_cli", seed = params.seed, "starting battle");

    println!("Creating player...");
    let session = Session::spawn(&rules, &params).context("generated stats were rejected")?;
    println!("Player characteristics:");
    println!("{}\n", CreatureSummary::from(session.player()));
    println!("Creating monster...");
    println!("Monster characteristics:");
    println!("{}\n", CreatureSummary::from(session.monster()));
    println!("Your battle begins... (seed {})", params.seed);
    Ok(session)
}
