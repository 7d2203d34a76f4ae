//! A small CLI driver exercising the library against a fixed sample
//! automaton. Out of scope as "hard" functionality (§1) — it contains no
//! original algebraic logic, only argument handling and library calls.

use std::process::ExitCode;

use byte_automata::automaton::Automaton;
use byte_automata::closures::{factor, prefix, subword, suffix};
use byte_automata::error::parse_word;
use byte_automata::mirror::mirror;
use byte_automata::recognition::accepts;

/// The scenario-S2 automaton from the spec's end-to-end examples: I={3},
/// F={6}, transitions (3,'a',5), (5,'a',5), (5,'b',3), (5,'c',6).
fn sample_automaton() -> Automaton {
    let mut a = Automaton::new();
    a.add_initial(3);
    a.add_final(6);
    a.add_transition(3, b'a', 5);
    a.add_transition(5, b'a', 5);
    a.add_transition(5, b'b', 3);
    a.add_transition(5, b'c', 6);
    a
}

fn usage() -> &'static str {
    "usage: byte_automata_cli <dump|accepts|mirror|prefix|suffix|factor|subword> [word]"
}

/// Initializes debug tracing. The trace level can be controlled via the
/// `RUST_LOG` environment variable. Only compiled in debug builds.
#[cfg(debug_assertions)]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

#[cfg(not(debug_assertions))]
fn init_tracing() {}

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{}", usage());
        return ExitCode::FAILURE;
    };

    let sample = sample_automaton();

    match command.as_str() {
        "dump" => {
            print!("{}", sample.dump());
            ExitCode::SUCCESS
        }
        "mirror" => {
            print!("{}", mirror(&sample).dump());
            ExitCode::SUCCESS
        }
        "prefix" => {
            print!("{}", prefix(&sample).dump());
            ExitCode::SUCCESS
        }
        "suffix" => {
            print!("{}", suffix(&sample).dump());
            ExitCode::SUCCESS
        }
        "factor" => {
            print!("{}", factor(&sample).dump());
            ExitCode::SUCCESS
        }
        "subword" => {
            print!("{}", subword(&sample).dump());
            ExitCode::SUCCESS
        }
        "accepts" => {
            let Some(word_arg) = args.get(1) else {
                eprintln!("accepts requires a word argument");
                return ExitCode::FAILURE;
            };
            match parse_word(word_arg) {
                Ok(word) => {
                    println!("{}", accepts(&sample, &word));
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("{err}");
                    ExitCode::FAILURE
                }
            }
        }
        _ => {
            eprintln!("{}", usage());
            ExitCode::FAILURE
        }
    }
}
