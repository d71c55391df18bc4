//! # Barlist CLI
//!
//! Terminal front end for the reinforcement design engine. Prompts for
//! slab geometry, derives the bar pick and cut lists, and prints a shop
//! report plus the JSON form of the result.

use std::io::{self, BufRead, Write};

use rebar_core::calculations::slab::{calculate, SlabInput};
use rebar_core::cutlist::{CutListItem, DEFAULT_STOCK_FT};
use rebar_core::units::FeetInches;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Barlist CLI - Reinforcement Design Calculator");
    println!("=============================================");
    println!();

    let length_ft = prompt_f64("Enter slab length (ft) [24.0]: ", 24.0);
    let width_ft = prompt_f64("Enter slab width (ft) [20.0]: ", 20.0);
    let thickness_in = prompt_f64("Enter thickness (in) [6.0]: ", 6.0);
    let cover_in = prompt_f64("Enter cover (in) [3.0]: ", 3.0);
    let stock_ft = prompt_f64("Enter stock bar length (ft) [20.0]: ", DEFAULT_STOCK_FT);

    let input = SlabInput {
        label: "CLI-Demo".to_string(),
        length_ft,
        width_ft,
        thickness_in,
        cover_in,
        pick: None,
        stock_ft,
    };

    println!();
    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  SLAB REINFORCEMENT RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Plan:      {:.1} ft x {:.1} ft", input.length_ft, input.width_ft);
            println!("  Thickness: {:.1} in, cover {:.1} in", input.thickness_in, input.cover_in);
            println!("  Stock:     {:.0} ft bars", input.stock_ft);
            println!();
            println!("Bar Pick:");
            println!(
                "  {} @ {:.0}\" x {:.0}\" o.c.",
                result.pick.size, result.pick.spacing_x_in, result.pick.spacing_y_in
            );
            println!();
            print_cut_list("Cut List (X direction, across width):", &result.list_x);
            print_cut_list("Cut List (Y direction, across length):", &result.list_y);
            println!("Totals:");
            println!("  {} bars, {:.1} linear ft", result.total_bars, result.total_linear_ft);
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for persistence/export use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn print_cut_list(heading: &str, items: &[CutListItem]) {
    println!("{}", heading);
    if items.is_empty() {
        println!("  (no bars required)");
    }
    for item in items {
        println!(
            "  {:>3} x {} ({:.2} ft)",
            item.qty,
            FeetInches::from_decimal(item.length_ft),
            item.length_ft
        );
    }
    println!();
}
