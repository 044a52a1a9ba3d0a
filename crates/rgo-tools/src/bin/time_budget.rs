//! Print the time budget the engine would use for its next move
//!
//! ```text
//! time_budget --clock clock.json --size 19 --stones 120
//! time_budget --mode byoyomi --main-time 0 --periods 3 --period-time 30 --lag-buffer 1
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rgo_clock::{
    estimate_turns_left, get_time, Board, ClockMode, ClockState, Stone, StoneGrid, TimeBudget,
    TimeSettings,
};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Largest board the stone-count fill accepts (the board is square)
const MAX_BOARD_SIZE: usize = 52;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Unlimited,
    Absolute,
    Fischer,
    Byoyomi,
}

impl From<ModeArg> for ClockMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Unlimited => ClockMode::Unlimited,
            ModeArg::Absolute => ClockMode::Absolute,
            ModeArg::Fischer => ClockMode::Fischer,
            ModeArg::Byoyomi => ClockMode::Byoyomi,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "time_budget")]
#[command(about = "Compute min/recommended/max thinking time for the next move")]
struct Args {
    /// Clock settings as JSON; overrides the clock flags below
    #[arg(long)]
    clock: Option<PathBuf>,

    /// Time control system
    #[arg(long, value_enum, default_value = "unlimited")]
    mode: ModeArg,

    /// Main time in seconds (also used as main time left)
    #[arg(long, default_value_t = 0.0)]
    main_time: f64,

    /// Fischer increment in seconds
    #[arg(long, default_value_t = 0.0)]
    increment: f64,

    /// Number of byo-yomi periods
    #[arg(long, default_value_t = 0)]
    periods: i32,

    /// Moves per byo-yomi period (1 = Japanese byo-yomi)
    #[arg(long, default_value_t = 1)]
    stones_per_period: i32,

    /// Seconds per byo-yomi period
    #[arg(long, default_value_t = 0.0)]
    period_time: f64,

    /// Lag buffer in seconds; overrides the value from --clock
    #[arg(long)]
    lag_buffer: Option<f64>,

    /// Board size (square)
    #[arg(long, default_value_t = 19)]
    size: usize,

    /// Fill this many points (alternating colors) instead of reading --board
    #[arg(long, default_value_t = 0)]
    stones: usize,

    /// Board diagram: one row per line, `.` empty, `X` black, `O` white
    #[arg(long, conflicts_with_all = ["size", "stones"])]
    board: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Serialize)]
struct Report {
    clock: ClockState,
    board_area: usize,
    stones_on_board: usize,
    approx_turns_left: f64,
    lag_buffer: f64,
    budget: TimeBudget,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );
    builder
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&args) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let settings = load_settings(args)?;
    let clock = settings.clock_state().context("clock settings describe an inconsistent clock")?;
    let lag_buffer = resolve_lag_buffer(args, &settings)?;

    let board = load_board(args)?;
    log::debug!("clock: {clock}");
    log::debug!("board:\n{board}");

    let budget = get_time(&board, &clock, lag_buffer)?;
    let report = Report {
        clock,
        board_area: board.area(),
        stones_on_board: board.count_stones(),
        approx_turns_left: estimate_turns_left(board.area(), board.count_stones()),
        lag_buffer,
        budget,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn load_settings(args: &Args) -> Result<TimeSettings> {
    if let Some(path) = &args.clock {
        return TimeSettings::load(path)
            .with_context(|| format!("failed to load clock settings from {}", path.display()));
    }
    Ok(TimeSettings {
        mode: args.mode.into(),
        main_time: args.main_time,
        increment: args.increment,
        periods: args.periods,
        stones_per_period: args.stones_per_period,
        period_time: args.period_time,
        ..TimeSettings::default()
    })
}

fn resolve_lag_buffer(args: &Args, settings: &TimeSettings) -> Result<f64> {
    let lag_buffer = args.lag_buffer.unwrap_or(settings.lag_buffer);
    if lag_buffer.is_nan() || lag_buffer < 0.0 {
        bail!("--lag-buffer must be non-negative, got {lag_buffer}");
    }
    Ok(lag_buffer)
}

fn load_board(args: &Args) -> Result<Board> {
    if let Some(path) = &args.board {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read board from {}", path.display()))?;
        let rows: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        return Board::from_rows(&rows)
            .with_context(|| format!("{} is not a rectangular board diagram", path.display()));
    }

    if args.size == 0 {
        bail!("--size must be at least 1");
    }
    if args.size > MAX_BOARD_SIZE {
        bail!("--size {} is larger than the maximum of {MAX_BOARD_SIZE}", args.size);
    }
    let Some(area) = args.size.checked_mul(args.size) else {
        bail!("--size {} overflows the board area", args.size);
    };
    if args.stones > area {
        bail!("--stones {} does not fit on a {}x{} board", args.stones, args.size, args.size);
    }
    let mut board = Board::new(args.size, args.size);
    for i in 0..args.stones {
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        board.set_stone(i % args.size, i / args.size, stone);
    }
    Ok(board)
}
