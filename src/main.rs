use anyhow::{Context, Result};
use clap::Parser;
use newsvendor_sim::io::reporting;
use newsvendor_sim::{NewsvendorSimulation, SimulationConfig, SimulationResult};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(author, version, about = "Bookstore newsvendor simulation", long_about = None)]
struct Cli {
    /// Books to stock each day (multiples of 10 between 50 and 110 by convention)
    #[arg(long, default_value_t = 90, allow_negative_numbers = true)]
    stock: i64,

    /// Number of days to simulate
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    days: i64,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Ignore --seed and seed from OS entropy
    #[arg(long)]
    entropy: bool,

    /// Write the daily breakdown to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the per-day-type summary to this CSV file
    #[arg(long)]
    summary_output: Option<PathBuf>,

    /// Print the day type and demand tables before running
    #[arg(long)]
    show_distribution: bool,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level.as_str())),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== Bookstore Inventory Simulation ===");

    // 1. SETUP CONFIGURATION
    let sim = NewsvendorSimulation::new(SimulationConfig::default())
        .context("building simulation from default configuration")?;

    if cli.show_distribution {
        print_distribution(&sim);
    }

    // 2. CHECK STOCK CONVENTION
    // The engine accepts any non-negative stock; the 50..=110 step 10 rule is ours.
    if !(50..=110).contains(&cli.stock) || cli.stock % 10 != 0 {
        warn!(
            stock = cli.stock,
            "stock is outside the usual 50..=110 range in steps of 10"
        );
    }

    // 3. RUN SIMULATION
    let seed = if cli.entropy { None } else { Some(cli.seed) };
    let stock = u32::try_from(cli.stock)
        .with_context(|| format!("stock must be a non-negative integer, got {}", cli.stock))?;
    let days = usize::try_from(cli.days)
        .ok()
        .filter(|d| *d >= 1)
        .with_context(|| format!("days must be at least 1, got {}", cli.days))?;

    println!("Running simulation for {} days with {} books/day...", days, stock);
    let result = sim.run(stock, days, seed)?;

    // 4. PRINT SUMMARY
    print_summary(&result);
    print_day_type_breakdown(&result);

    // 5. EXPORT RESULTS
    if let Some(path) = &cli.output {
        reporting::write_daily_log(path, result.records())
            .with_context(|| format!("writing daily records to {}", path.display()))?;
        println!("Daily results written to {}", path.display());
    }
    if let Some(path) = &cli.summary_output {
        reporting::write_day_type_summary(path, &result.day_type_breakdown())
            .with_context(|| format!("writing day type summary to {}", path.display()))?;
        println!("Day type summary written to {}", path.display());
    }

    println!("\nSimulation Complete.");
    Ok(())
}

fn print_distribution(sim: &NewsvendorSimulation) {
    let econ = sim.economics();
    println!("\n=== Financial Parameters ===");
    println!("Cost per book:     ${}", econ.book_cost);
    println!("Selling price:     ${}", econ.selling_price);
    println!("Return value:      ${}", econ.return_value);
    println!("Profit per sale:   ${}", econ.profit_per_sale());
    println!("Loss per unsold:   ${}", econ.loss_per_unsold());
    println!("Lost profit/book:  ${}", econ.stockout_penalty);

    let model = sim.demand_model();
    let day_types = model.day_type_table();
    println!("\n=== Day Type Probabilities ===");
    for (i, day_type) in day_types.outcomes().iter().enumerate() {
        let p = day_types.probability(i).unwrap_or(0.0);
        println!("{:<8} {:.2}", day_type.as_str(), p);
    }

    println!("\n=== Demand Distribution ===");
    for day_type in day_types.outcomes() {
        if let Some(table) = model.demand_table(*day_type) {
            let cells: Vec<String> = table
                .outcomes()
                .iter()
                .enumerate()
                .map(|(i, demand)| format!("{}:{:.2}", demand, table.probability(i).unwrap_or(0.0)))
                .collect();
            println!("{:<8} {}", day_type.as_str(), cells.join("  "));
        }
    }
}

fn print_summary(result: &SimulationResult) {
    let (worst, best) = result.profit_range();
    println!("\n=== Summary Statistics ===");
    println!("Total Days:         {}", result.num_days());
    println!("Books Stocked/Day:  {}", result.stock_quantity());
    println!("Total Profit:       ${:.2}", result.total_profit() as f64);
    println!("Avg Profit/Day:     ${:.2}", result.avg_profit_per_day());
    println!("Worst/Best Day:     ${:.2} / ${:.2}", worst as f64, best as f64);
    println!("Avg Demand:         {:.2}", result.avg_demand());
    println!("Avg Books Sold:     {:.2}", result.avg_sold());
    println!("Avg Unsold:         {:.2}", result.avg_unsold());
    println!("Avg Lost Sales:     {:.2}", result.avg_lost_sales());
}

fn print_day_type_breakdown(result: &SimulationResult) {
    println!("\n=== Analysis by Day Type ===");
    println!(
        "{:<8} {:>6} {:>10} {:>9} {:>10} {:>10} {:>12} {:>14}",
        "Type", "Count", "AvgDemand", "AvgSold", "AvgUnsold", "AvgLost", "AvgProfit", "TotalProfit"
    );
    for s in result.day_type_breakdown() {
        println!(
            "{:<8} {:>6} {:>10.2} {:>9.2} {:>10.2} {:>10.2} {:>12.2} {:>14.2}",
            s.day_type.as_str(),
            s.count,
            s.avg_demand,
            s.avg_sold,
            s.avg_unsold,
            s.avg_lost_sales,
            s.avg_profit,
            s.total_profit as f64
        );
    }
}
