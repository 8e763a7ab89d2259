use crossterm::style::Stylize;
use stats_core::{WordStatistics, WordTracker};
use std::io::{stdin, stdout, Write};

fn main() {
    let mut tracker = WordTracker::new();

    println!("Word frequency tracker. Type words, ':report' to rank them, 'exit' to quit.");
    println!("---------------------------------------------------------------");

    loop {
        print!("> ");
        let _ = stdout().flush();

        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("[ERROR] Could not read input: {}", e);
                break;
            }
        }
        let line = input.trim();

        match line {
            "exit" => break,
            ":report" => print_report(&tracker),
            ":json" => match serde_json::to_string_pretty(&tracker.statistics()) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("[ERROR] Could not serialize report: {}", e),
            },
            _ => {
                // Every whitespace-separated token on the line is one word.
                for word in line.split_whitespace() {
                    if let Err(e) = tracker.add_word(Some(word)) {
                        eprintln!("[ERROR] {}", e);
                    }
                }
            }
        }
    }

    println!("\nFinal report:");
    print_report(&tracker);
}

fn print_report(tracker: &WordTracker) {
    let entries = tracker.statistics();
    if entries.is_empty() {
        println!("No words tracked yet.");
        return;
    }

    println!("{}", "Rank  Count  Word".bold());
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{:>4}  {:>5}  {}",
            i + 1,
            entry.count,
            entry.word.as_str().cyan()
        );
    }
}
