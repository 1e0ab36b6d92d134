//! Console drill loop.
//!
//! Run with: `cargo run --example console -- --min-digits 1 --max-digits 2 --exercises 3`
//!
//! Generates a fixed number of exercises, reads one integer answer per
//! exercise from stdin, prints the verdict, then prints the session statistics.
//! Set `RUST_LOG=number_drill_gen=debug` to see the engine's events.

use std::io::{self, BufRead, Write};

use clap::Parser;
use number_drill_gen::{Trainer, TrainerConfig};

#[derive(Parser)]
#[command(name = "console", about = "Arithmetic drill in the terminal")]
struct Args {
    /// Minimum number of digits per operand (1-3)
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    min_digits: i64,

    /// Maximum number of digits per operand (1-3)
    #[arg(long, default_value = "2", allow_negative_numbers = true)]
    max_digits: i64,

    /// Number of exercises to solve
    #[arg(long, default_value = "3")]
    exercises: usize,

    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = TrainerConfig {
        min_digits: args.min_digits,
        max_digits: args.max_digits,
        rng_seed: args.seed,
    };
    let mut trainer = Trainer::from_config(&config);

    println!("=== Mathematical Trainer ===");
    println!("Difficulty: {}-{} digits", trainer.min_digits(), trainer.max_digits());
    println!("Number of exercises: {}", args.exercises);
    println!("{}", "-".repeat(30));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for i in 0..args.exercises {
        let exercise = trainer.generate_exercise();
        println!();
        println!("Exercise {}: {exercise}", i + 1);
        print!("Your answer: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            println!("Training interrupted by user");
            break;
        };
        match line?.trim().parse::<i64>() {
            Ok(answer) => {
                let result = trainer.check_answer(&exercise, answer, 0.0);
                println!("Result: {}", result.message);
            }
            Err(_) => println!("Error: enter an integer"),
        }
    }

    let stats = trainer.stats();
    println!();
    println!("{}", "=".repeat(30));
    println!("Statistics:");
    println!("Total exercises: {}", stats.total_exercises);
    println!("Correct answers: {}", stats.correct_answers);
    println!("Incorrect answers: {}", stats.incorrect_answers);
    println!("Accuracy: {}%", stats.accuracy);
    Ok(())
}
