//! Chemical Stock & Solution Planner
//!
//! 化學品庫存與配方溶液規劃命令列工具

use std::path::PathBuf;

use anyhow::{Context, Result};
use chemplan_calc::{PlanCalculator, PlanResult};
use chemplan_core::recipe::{SOLUTION_1, SOLUTION_2};
use chemplan_core::{PlanRequest, StockStatus};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::Level;

/// 配方 1 預設批次體積（L）
const DEFAULT_SOLUTION_1_LITERS: i64 = 100;

/// 配方 2 預設批次體積（L）
const DEFAULT_SOLUTION_2_LITERS: i64 = 50;

#[derive(Parser)]
#[command(name = "chemplan")]
#[command(about = "Chemical stock & solution planner")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare stock against two solution batches and print a purchasing list
    Plan {
        /// Full containers in stock, e.g. --stock "nitric acid=2"
        #[arg(short, long = "stock", value_name = "NAME=COUNT")]
        stock: Vec<String>,

        /// Batch volume in liters, e.g. --batch solution-2=80
        #[arg(short, long = "batch", value_name = "RECIPE=LITERS")]
        batch: Vec<String>,

        /// JSON file with container_counts and batch_volumes
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the chemical catalogue
    Chemicals,

    /// List the fixed recipes and their factors
    Recipes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let calculator = PlanCalculator::standard();

    match cli.command {
        Commands::Plan {
            stock,
            batch,
            input,
            json,
        } => {
            let request = build_request(&stock, &batch, input.as_ref())?;
            let result = calculator
                .calculate(&request)
                .context("Planning failed; no tables produced")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&result);
            }
        }

        Commands::Chemicals => {
            println!("{:<20} {:<8} {:>16} {:>14}", "Chemical", "Type", "KG per unit", "Density (KG/L)");
            println!("{}", "-".repeat(61));
            for chemical in calculator.registry().list_chemicals() {
                let density = chemical
                    .density()
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<20} {:<8} {:>16} {:>14}",
                    chemical.name,
                    chemical.category.label(),
                    format!("{} per {}", chemical.purchase_unit_mass, singular(chemical.purchase_unit().plural_label())),
                    density
                );
            }
        }

        Commands::Recipes => {
            for recipe in calculator.recipes() {
                println!("{} [{}]", recipe.name, recipe.id);
                for entry in &recipe.entries {
                    println!(
                        "  {:<20} {:>5}% of batch volume -> {}",
                        entry.chemical, entry.factor, entry.unit
                    );
                }
                println!();
            }
        }
    }

    Ok(())
}

/// 合併 JSON 輸入、預設值與命令列參數（命令列優先）
fn build_request(stock: &[String], batch: &[String], input: Option<&PathBuf>) -> Result<PlanRequest> {
    let mut request = match input {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            PlanRequest::from_json(&json).with_context(|| format!("Invalid input file {}", path.display()))?
        }
        None => PlanRequest::new()
            .with_batch_volume(SOLUTION_1, Decimal::from(DEFAULT_SOLUTION_1_LITERS))
            .with_batch_volume(SOLUTION_2, Decimal::from(DEFAULT_SOLUTION_2_LITERS)),
    };

    for assignment in stock {
        let (name, count) = PlanRequest::parse_count_assignment(assignment)?;
        request = request.with_count(name, count);
    }

    for assignment in batch {
        let (recipe, volume) = PlanRequest::parse_volume_assignment(assignment)?;
        request = request.with_batch_volume(recipe, volume);
    }

    Ok(request)
}

fn singular(plural: &str) -> &str {
    plural.strip_suffix('s').unwrap_or(plural)
}

fn fmt_qty(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

fn print_report(result: &PlanResult) {
    println!("1. Total Available Chemical Stock");
    println!("{:<20} {:>10} {:>16}", "Chemical Product", "Containers", "Available Stock");
    println!("{}", "-".repeat(48));
    for entry in &result.stock {
        println!(
            "{:<20} {:>10} {:>13} KG",
            entry.chemical_name,
            entry.container_count,
            fmt_qty(entry.available_mass_kg)
        );
    }

    println!("\n2. Required Solution Volumes");
    for contribution in &result.recipe_contributions {
        println!("{} ({} L)", contribution.recipe_name, fmt_qty(contribution.batch_volume));
        for quantity in &contribution.quantities {
            println!(
                "  {:<20} {:>10} {}",
                quantity.chemical_name,
                fmt_qty(quantity.required_quantity),
                quantity.unit
            );
        }
    }
    println!("\nTotal Required for All Solutions (Liters/Kilograms)");
    println!("{:<20} {:>14} {:>5}", "Chemical Product", "Total Required", "Unit");
    println!("{}", "-".repeat(41));
    for requirement in &result.requirements {
        println!(
            "{:<20} {:>14} {:>5}",
            requirement.chemical_name,
            fmt_qty(requirement.required_quantity),
            requirement.unit
        );
    }

    println!("\n3. Inventory Needs Assessment (all units in KG)");
    println!("{:<20} {:>14} {:>14}  {}", "Chemical", "Available Mass", "Required Mass", "Status");
    println!("{}", "-".repeat(74));
    for comparison in &result.comparisons {
        let status = match comparison.status() {
            StockStatus::Surplus(kg) => format!("Surplus of {} KG", fmt_qty(kg)),
            StockStatus::Deficit(kg) => format!("Deficit of {} KG", fmt_qty(kg)),
        };
        println!(
            "{:<20} {:>14} {:>14}  {}",
            comparison.chemical_name,
            fmt_qty(comparison.available_mass_kg),
            fmt_qty(comparison.required_mass_kg),
            status
        );
    }

    println!("\nPurchasing List");
    if result.is_fully_stocked() {
        println!("You have enough stock for all products! No purchases necessary.");
        return;
    }

    println!("The following products need to be purchased to meet all solution requirements.");
    let groups = [
        ("Liquid Products (Buckets)", result.purchase_plan.liquids().collect::<Vec<_>>()),
        ("Powder Products (Bags)", result.purchase_plan.powders().collect::<Vec<_>>()),
    ];
    for (title, lines) in groups {
        if lines.is_empty() {
            continue;
        }
        println!("\n{}", title);
        println!("{:<20} {:>14} {:>12}", "Chemical", "Deficit (KG)", "To Buy");
        println!("{}", "-".repeat(48));
        for line in lines {
            println!(
                "{:<20} {:>14} {:>4} {}",
                line.chemical_name,
                fmt_qty(line.deficit_kg),
                line.units_to_buy,
                line.unit_label()
            );
        }
    }
}
