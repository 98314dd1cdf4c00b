use beam_cutter::error::PackingFailure;
use beam_cutter::input::{parse_requirements, parse_stock};
use beam_cutter::render;
use beam_cutter::solver::Solver;
use beam_cutter::types::{Bin, PlanSummary, StockGroup};
use clap::Parser;
use serde::Serialize;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "beam_cutter",
    about = "1D beam cutting planner (First-Fit Decreasing)"
)]
struct Cli {
    /// Available stock as LENGTH:QTY (default: 2700:8)
    #[arg(long, num_args = 1..)]
    stock: Vec<String>,

    /// Required pieces as LENGTH:QTY (e.g. 504:12 281:12 850:12)
    #[arg(long = "cuts", num_args = 1.., required = true)]
    cuts: Vec<String>,

    /// Show a proportional bar for each beam
    #[arg(long)]
    layout: bool,

    /// Print the plan or failure as JSON
    #[arg(long)]
    json: bool,

    /// Log placement decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    bins: &'a [Bin],
    summary: PlanSummary,
}

#[derive(Serialize)]
struct FailureOutput<'a> {
    message: String,
    failure: &'a PackingFailure,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let stock = if cli.stock.is_empty() {
        vec![StockGroup::default()]
    } else {
        parse_stock(&cli.stock).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        })
    };

    let demands = parse_requirements(&cli.cuts).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let solver = Solver::new(stock, demands);
    let plan = match solver.solve() {
        Ok(plan) => plan,
        Err(failure) => {
            if cli.json {
                let out = FailureOutput {
                    message: failure.to_string(),
                    failure: &failure,
                };
                println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
            }
            eprintln!("Error: {}", failure);
            std::process::exit(2);
        }
    };

    if cli.json {
        let out = PlanOutput {
            bins: &plan.bins,
            summary: plan.summary(),
        };
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return;
    }

    if cli.layout {
        print!("{}", render::render_plan(&plan));
    } else {
        for bin in &plan.bins {
            let cuts: Vec<String> = bin.cuts.iter().map(|c| format!("{c}mm")).collect();
            println!(
                "Beam {} ({}mm): [{}] waste {}mm",
                bin.id + 1,
                bin.capacity,
                cuts.join(", "),
                bin.remaining
            );
        }
    }
    println!();
    print!("{}", render::render_summary(&plan.summary()));
}
