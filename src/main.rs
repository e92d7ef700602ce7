use std::env;
use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use log::debug;

use numdle::game::{random_loss_message, random_win_message, GameStore, JsonFileStorage};
use numdle::model::{DailyStats, GameStatus};

fn init_logging() {
    env_logger::init();
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let storage = JsonFileStorage::new(JsonFileStorage::default_path());
    let mut store = GameStore::new(Box::new(storage));

    if args.iter().any(|a| a == "--stats") {
        print_stats(store.stats());
        return;
    }

    let date = match resolve_date(&args) {
        Some(date) => date,
        None => {
            eprintln!("usage: numdle [YYYY-MM-DD] [--stats]");
            return;
        }
    };
    debug!(target: "main", "playing {}", date);

    store.load_or_init(date);
    println!("numdle {}", date);
    render_sequence(&store);

    if store.status().is_terminal() {
        println!("Already finished: {}.", store.status());
        reveal(&store);
        return;
    }

    let stdin = io::stdin();
    while store.status() == GameStatus::Playing {
        print!("guess #{}: ", store.guesses().len() + 1);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!();
                return;
            }
            Ok(_) => (),
        }

        let Ok(value) = line.trim().parse::<i64>() else {
            println!("Enter a whole number.");
            continue;
        };

        store.submit_guess(value);
        render_sequence(&store);

        match store.status() {
            GameStatus::Playing => println!("Not quite; one more number revealed."),
            GameStatus::Won => println!("{}", random_win_message()),
            GameStatus::Lost => println!("{}", random_loss_message()),
        }
    }

    reveal(&store);
    print_stats(store.stats());
}

fn resolve_date(args: &[String]) -> Option<NaiveDate> {
    match args.iter().find(|a| !a.starts_with("--")) {
        Some(arg) => NaiveDate::parse_from_str(arg, "%Y-%m-%d").ok(),
        None => Some(chrono::Local::now().date_naive()),
    }
}

fn render_sequence(store: &GameStore) {
    let Some(sequence) = store.daily_sequence() else {
        return;
    };
    let revealed = store.revealed_count();

    let mut cells: Vec<String> = Vec::with_capacity(sequence.numbers.len());
    for (i, number) in sequence.numbers.iter().enumerate() {
        if i < revealed || store.status().is_terminal() {
            cells.push(number.to_string());
        } else {
            cells.push("?".to_string());
        }
    }
    println!("  {}", cells.join("  "));
}

fn reveal(store: &GameStore) {
    if let Some(sequence) = store.daily_sequence() {
        println!("Pattern: {} - {}", sequence.pattern, sequence.explanation);
    }
}

fn print_stats(stats: &DailyStats) {
    println!(
        "Played {} | Won {} | Streak {} (best {})",
        stats.played, stats.won, stats.current_streak, stats.max_streak
    );
    for (attempts, count) in &stats.guess_distribution {
        println!("  {} attempt{}: {}", attempts, if *attempts == 1 { "" } else { "s" }, count);
    }
}
