use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};

use hintwarp::config::Settings;
use hintwarp::modes::{init_hints, run_mode, HintMode};
use hintwarp::platform::headless::HeadlessPlatform;
use hintwarp::sources::{HistoryFile, MemoryHistory, PositionHistory};
use hintwarp::{logging, ScreenId, Selection};

fn print_usage() {
    eprintln!("hintwarp - keyboard-driven pointer hints");
    eprintln!();
    eprintln!("Usage: hintwarp [options] <mode>");
    eprintln!();
    eprintln!("Modes:");
    eprintln!("  full [--sift]     Hint grid on every screen, optionally refined");
    eprintln!("  history           Hints on previously recorded pointer positions");
    eprintln!("  hintspec          Hints read from stdin as 'label x y' records");
    eprintln!("  sift              Refinement grid around the pointer");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Settings file (default: user config dir)");
    eprintln!("  --screens <WxH[,WxH]>    Simulated screens (default: 1920x1080)");
    eprintln!("  --pointer <S:X:Y>        Initial pointer screen and position");
    eprintln!("  --keys <script>          Keys to type, e.g. \"ab\" or \"a backspace C-u b\"");
    eprintln!("  --history <path>         Position history file");
    eprintln!();
    eprintln!("In --keys, a word that names a key (esc, tab, end, home, ...) sends that");
    eprintln!("key. Separate its letters with spaces to type them: \"t a b\".");
    eprintln!();
    eprintln!("Prints '<label> <screen> <x> <y>' on success. Exits 1 when the");
    eprintln!("selection is cancelled or nothing matches.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  hintwarp --keys abc --screens 1920x1080,2560x1440 full");
    eprintln!("  echo 'q 300 200' | hintwarp --keys q hintspec");
}

fn get_arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_screens(value: &str) -> anyhow::Result<Vec<(i32, i32)>> {
    value
        .split(',')
        .map(|s| -> anyhow::Result<(i32, i32)> {
            let (w, h) = s
                .split_once('x')
                .with_context(|| format!("screen '{}' is not WxH", s))?;
            Ok((w.trim().parse()?, h.trim().parse()?))
        })
        .collect()
}

fn parse_pointer(value: &str) -> anyhow::Result<(ScreenId, i32, i32)> {
    let parts: Vec<&str> = value.split(':').collect();
    let [screen, x, y] = parts.as_slice() else {
        bail!("pointer '{}' is not S:X:Y", value);
    };
    Ok((ScreenId(screen.parse()?), x.parse()?, y.parse()?))
}

/// Flags that take a value, so their value is never mistaken for the mode
const VALUE_FLAGS: [&str; 5] = ["--config", "--screens", "--pointer", "--keys", "--history"];

fn parse_mode(args: &[String]) -> Option<HintMode> {
    let sift = args.iter().any(|a| a == "--sift");
    let (_, mode) = args.iter().enumerate().find(|&(i, a)| {
        !a.starts_with("--") && !(i > 0 && VALUE_FLAGS.contains(&args[i - 1].as_str()))
    })?;

    match mode.as_str() {
        "full" => Some(HintMode::Full { sift }),
        "history" => Some(HintMode::History),
        "hintspec" => Some(HintMode::HintSpec),
        "sift" => Some(HintMode::Sift),
        _ => None,
    }
}

fn open_history(args: &[String], settings: &Settings) -> Box<dyn PositionHistory> {
    let path = get_arg_value(args, "--history")
        .map(PathBuf::from)
        .or_else(|| settings.history_file.clone())
        .or_else(HistoryFile::default_path);

    match path {
        Some(path) => Box::new(HistoryFile::new(path)),
        None => {
            log::warn!("No history location available, history will not persist");
            Box::new(MemoryHistory::new())
        }
    }
}

fn run(args: &[String], mode: HintMode) -> anyhow::Result<Selection> {
    let settings = match get_arg_value(args, "--config") {
        Some(path) => Settings::load_from(&PathBuf::from(&path))
            .with_context(|| format!("failed to load settings from {}", path))?,
        None => Settings::load(),
    };

    let screens = match get_arg_value(args, "--screens") {
        Some(value) => parse_screens(&value)?,
        None => vec![(1920, 1080)],
    };

    let mut platform = HeadlessPlatform::new(screens);
    if let Some(value) = get_arg_value(args, "--pointer") {
        let (screen, x, y) = parse_pointer(&value)?;
        platform = platform.with_pointer(screen, x, y);
    }
    if let Some(script) = get_arg_value(args, "--keys") {
        platform.push_keys(&script)?;
    }

    let mut history = open_history(args, &settings);

    init_hints(&mut platform, &settings.hints)?;
    let selection = run_mode(mode, &mut platform, &settings.hints, history.as_mut(), std::io::stdin().lock())?;
    Ok(selection)
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help" || a == "help") {
        print_usage();
        std::process::exit(if args.is_empty() { 2 } else { 0 });
    }

    if let Err(e) = logging::init() {
        eprintln!("Warning: file logging unavailable: {}", e);
    }

    let Some(mode) = parse_mode(&args) else {
        eprintln!("Error: missing or unknown mode");
        print_usage();
        std::process::exit(2);
    };

    match run(&args, mode) {
        Ok(Selection::Resolved(r)) => {
            println!("{} {} {} {}", r.label, r.screen.0, r.x, r.y);
        }
        Ok(Selection::Cancelled) => {
            std::process::exit(1);
        }
        Ok(Selection::NoMatch) => {
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
