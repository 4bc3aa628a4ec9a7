use anyhow::Context;
use gamecrush_core::{
    format_hand, Event, EventBus, GameConfig, HandKind, HandResult, Modifier, RngState, RunState,
};
use gamecrush_data::{load_action_script, load_game_config, ActionScript};
use log::warn;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const MAX_SIM_DRAWS: usize = 1_000_000;

#[derive(Debug, Clone, Default, PartialEq)]
struct CliOptions {
    seed: Option<u64>,
    config: Option<PathBuf>,
    auto_json: Option<PathBuf>,
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Empty,
    Draw,
    NewRun,
    Status,
    Sim(usize),
    Help,
    Quit,
}

#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    modifier: Option<&'a Modifier>,
    result: &'a HandResult,
    status: &'a str,
}

#[derive(Debug, Default, PartialEq)]
struct SimSummary {
    draws: usize,
    kinds: BTreeMap<HandKind, usize>,
    total_score: u64,
}

impl SimSummary {
    fn mean_score(&self) -> f64 {
        if self.draws == 0 {
            return 0.0;
        }
        self.total_score as f64 / self.draws as f64
    }
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--json" => options.json = true,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    options.seed = value.parse::<u64>().ok();
                    if options.seed.is_none() {
                        warn!("ignoring invalid seed {value:?}, using a random seed");
                    }
                    idx += 1;
                }
            }
            "--config" => {
                if let Some(value) = args.get(idx + 1) {
                    options.config = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--auto-json" | "--auto-perform-json" => {
                if let Some(value) = args.get(idx + 1) {
                    options.auto_json = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            other => warn!("ignoring unknown argument {other:?}"),
        }
        idx += 1;
    }
    options
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(Command::Empty);
    };
    let command = match head.to_ascii_lowercase().as_str() {
        "d" | "draw" => Command::Draw,
        "n" | "new" | "new_run" => Command::NewRun,
        "s" | "status" => Command::Status,
        "h" | "?" | "help" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        "sim" => {
            let count = match parts.next() {
                Some(value) => value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid draw count {value:?}"))?,
                None => 1000,
            };
            if count == 0 || count > MAX_SIM_DRAWS {
                return Err(format!("draw count must be between 1 and {MAX_SIM_DRAWS}"));
            }
            Command::Sim(count)
        }
        other => return Err(format!("unknown command {other:?}, try `help`")),
    };
    if parts.next().is_some() && !matches!(command, Command::Sim(_)) {
        return Err(format!("`{head}` takes no arguments"));
    }
    Ok(command)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);

    let script = match options.auto_json.as_ref() {
        Some(path) => Some(
            load_action_script(path)
                .with_context(|| format!("load action script from {}", path.display()))?,
        ),
        None => None,
    };
    let seed = options.seed.or(script.as_ref().and_then(|s| s.seed));
    let mut run = build_run(&options, seed)?;

    match script {
        Some(script) => run_script(&mut run, &script, options.json),
        None => run_interactive(&mut run, options.json),
    }
}

fn build_run(options: &CliOptions, seed: Option<u64>) -> anyhow::Result<RunState> {
    let config = match options.config.as_ref() {
        Some(path) => load_game_config(path)?,
        None => GameConfig::standard(),
    };
    let rng = match seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    Ok(RunState::with_rng(config, rng))
}

/// Picks the first modifier so a fresh run can draw right away.
fn start_run(run: &mut RunState, events: &mut EventBus) -> anyhow::Result<()> {
    run.new_run(events).context("start run")?;
    Ok(())
}

fn run_script(run: &mut RunState, script: &ActionScript, json: bool) -> anyhow::Result<()> {
    let mut events = EventBus::default();
    start_run(run, &mut events)?;
    if json {
        events.drain().for_each(drop);
    } else {
        drain_events(&mut events);
    }
    for (idx, action) in script.actions.iter().enumerate() {
        run.apply(*action, &mut events)
            .with_context(|| format!("action #{idx} ({action:?})"))?;
        if json {
            events.drain().for_each(drop);
            print_json(run)?;
        } else {
            drain_events(&mut events);
        }
    }
    if !json {
        print_state(run);
    }
    Ok(())
}

fn run_interactive(run: &mut RunState, json: bool) -> anyhow::Result<()> {
    let mut events = EventBus::default();
    println!("GameCrush: Doudizhu-inspired hand evaluator");
    println!("seed: {}", run.rng.seed());
    start_run(run, &mut events)?;
    report(run, &mut events, json)?;
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().context("flush stdout")?;
        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("read command")?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("error: {err}");
                continue;
            }
        };
        match command {
            Command::Empty => {}
            Command::Draw => {
                run.draw_hand(&mut events)?;
                report(run, &mut events, json)?;
            }
            Command::NewRun => {
                run.new_run(&mut events)?;
                report(run, &mut events, json)?;
            }
            Command::Status => report(run, &mut events, json)?,
            Command::Sim(count) => {
                let summary = simulate(run, count)?;
                print_summary(&summary);
            }
            Command::Help => print_help(),
            Command::Quit => break,
        }
    }
    Ok(())
}

fn report(run: &RunState, events: &mut EventBus, json: bool) -> anyhow::Result<()> {
    if json {
        events.drain().for_each(drop);
        return print_json(run);
    }
    drain_events(events);
    print_state(run);
    Ok(())
}

/// Draws `count` independent hands with the active modifier, leaving the
/// stored result as it was.
fn simulate(run: &mut RunState, count: usize) -> anyhow::Result<SimSummary> {
    let mut summary = SimSummary::default();
    for _ in 0..count {
        let result = run.sample_hand()?;
        *summary.kinds.entry(result.kind).or_insert(0) += 1;
        summary.total_score += result.score;
        summary.draws += 1;
    }
    Ok(summary)
}

fn print_json(run: &RunState) -> anyhow::Result<()> {
    let snapshot = Snapshot {
        modifier: run.modifier(),
        result: run.result(),
        status: run.status(),
    };
    let line = serde_json::to_string(&snapshot).context("serialize run snapshot")?;
    println!("{line}");
    Ok(())
}

fn print_state(run: &RunState) {
    let modifier = run
        .modifier()
        .map(Modifier::label)
        .unwrap_or_else(|| "(none)".to_string());
    let result = run.result();
    println!("modifier: {modifier}");
    println!("hand:     {}", format_hand(&result.hand));
    println!("type:     {}", result.kind);
    println!("score:    {}", result.score);
    println!("status:   {}", run.status());
}

fn drain_events(events: &mut EventBus) {
    for event in events.drain() {
        match event {
            Event::RunStarted {
                modifier,
                add,
                mult,
            } => println!("event: run started with {modifier} (add {add:+}, mult x{mult})"),
            Event::HandDrawn { hand, kind, score } => {
                println!("event: drew [{}] -> {kind}, {score}", format_hand(&hand))
            }
        }
    }
}

fn print_summary(summary: &SimSummary) {
    println!("simulated {} hands", summary.draws);
    for (kind, count) in summary.kinds.iter().rev() {
        let share = *count as f64 * 100.0 / summary.draws as f64;
        println!("  {:<22} {:>8} {:>6.2}%", kind.display_name(), count, share);
    }
    println!("mean score: {:.2}", summary.mean_score());
}

fn print_help() {
    println!("commands:");
    println!("  d, draw      draw and score a new hand");
    println!("  n, new       start a new run with a fresh modifier");
    println!("  s, status    show the current modifier and hand");
    println!("  sim [N]      score N sample hands (default 1000)");
    println!("  h, help      show this help");
    println!("  q, quit      exit");
}
