//! Learning-curve balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze progression balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 1000 runs at 80% accuracy
//!   cargo run --bin simulate -- -n 100 -a 0.6    # 100 runs at 60% accuracy
//!   cargo run --bin simulate -- --seed 42        # Reproducible run

use questline::core::PlayerClass;
use questline::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, show_achievements) = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║            QUESTLINE BALANCE SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Accuracy:       {:.0}%", config.accuracy * 100.0);
    println!("  Class:          {:?}", config.class);
    println!("  Target Quests:  {}", config.target_quests);
    println!("  Max Attempts:   {}", config.max_attempts);
    println!("  Quests per Day: {}", config.quests_per_day);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Show per-achievement unlock rates if requested
    if show_achievements {
        println!("{}", report.achievement_table_text());
    }

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut show_achievements = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-a" | "--accuracy" => {
                if i + 1 < args.len() {
                    config.accuracy = args[i + 1].parse().unwrap_or(0.8);
                    i += 1;
                }
            }
            "-c" | "--class" => {
                if i + 1 < args.len() {
                    config.class = match args[i + 1].to_lowercase().as_str() {
                        "practitioner" => PlayerClass::Practitioner,
                        "builder" => PlayerClass::Builder,
                        "architect" => PlayerClass::Architect,
                        _ => PlayerClass::Beginner,
                    };
                    i += 1;
                }
            }
            "-q" | "--quests" => {
                if i + 1 < args.len() {
                    if let Ok(target) = args[i + 1].parse::<usize>() {
                        config.target_quests = target;
                        i += 1;
                    }
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--attempts" => {
                if i + 1 < args.len() {
                    config.max_attempts = args[i + 1].parse().unwrap_or(400);
                    i += 1;
                }
            }
            "--per-day" => {
                if i + 1 < args.len() {
                    config.quests_per_day = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            "--achievements" => {
                show_achievements = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick_check();
            }
            "--full" => {
                config = SimConfig::full_clear_test();
            }
            _ => {}
        }
        i += 1;
    }

    (config, show_achievements)
}

fn print_help() {
    println!("Questline Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 1000)");
    println!("    -a, --accuracy <A>  Answer accuracy from 0.0 to 1.0 (default: 0.8)");
    println!("    -c, --class <C>     Starting class: beginner, practitioner, builder,");
    println!("                        architect (default: beginner)");
    println!("    -q, --quests <Q>    Target quest count to clear (default: all 18)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    --attempts <T>      Max quest attempts per run (default: 400)");
    println!("    --per-day <P>       Quest attempts per simulated day (default: 3)");
    println!("    --achievements      Show per-achievement unlock rates");
    println!("    -v, --verbose       Verbose output");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick test (100 runs)");
    println!("    --full              Full clear test (200 runs at 90% accuracy)");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                      # Default run");
    println!("    cargo run --bin simulate -- -n 100 -a 0.6    # 100 runs at 60% accuracy");
    println!("    cargo run --bin simulate -- --seed 42        # Reproducible");
    println!("    cargo run --bin simulate -- --quick          # Quick balance check");
    println!("    cargo run --bin simulate -- -c architect     # Head-start class");
    println!("    cargo run --bin simulate -- --full --achievements  # Full with unlock rates");
}
