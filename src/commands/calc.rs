use anyhow::Result;
use colored::Colorize;
use pizza_pricing::calculator::{self, PizzaPricing};

/// Execute the calc command
///
/// Prices a pizza locally and prints the breakdown
pub fn execute(size: f64, cost: f64, crust: Option<f64>) -> Result<()> {
    let pricing = calculator::compute(size, cost, crust)?;

    println!("{}", "Results".bold());
    for line in format_pricing(&pricing) {
        println!("  {}", line);
    }

    Ok(())
}

/// Render each figure with two decimals, the crust share as a percentage
fn format_pricing(pricing: &PizzaPricing) -> Vec<String> {
    let mut lines = vec![format!(
        "Price per square inch: ${:.2}",
        pricing.price_per_area()
    )];

    if let PizzaPricing::WithCrust {
        price_per_area_excluding_crust,
        crust_area_fraction,
        crust_cost,
        ..
    } = pricing
    {
        lines.push(format!(
            "Price per square inch (excluding crust): ${:.2}",
            price_per_area_excluding_crust
        ));
        lines.push(format!(
            "Percent of pizza that is crust: {:.2}%",
            crust_area_fraction * 100.0
        ));
        lines.push(format!("Amount paid for crust: ${:.2}", crust_cost));
    }

    lines
}
