// ===== castleforge/src/reports/mod.rs =====
use castleforge::strategy::Strategy;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

pub fn print_strategy_grid(name: &str, strategy: &Strategy) {
    println!("\nStrategy: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let mut header = vec![Cell::new("Front").add_attribute(Attribute::Bold)];
    let mut weights = vec![Cell::new("Weight")];
    let mut units = vec![Cell::new("Units").fg(Color::Cyan)];

    for (i, u) in strategy.units().iter().enumerate() {
        header.push(Cell::new(format!("#{}", i + 1)).set_alignment(CellAlignment::Center));
        weights.push(Cell::new(i + 1).set_alignment(CellAlignment::Right));
        units.push(Cell::new(u).set_alignment(CellAlignment::Right));
    }

    table.add_row(header);
    table.add_row(weights);
    table.add_row(units);
    println!("{}", table);
}

/// Fitness trajectory, thinned to at most 20 rows so long runs stay
/// readable. The final entry is always shown.
pub fn print_trajectory(scores: &[f64]) {
    if scores.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Generation").add_attribute(Attribute::Bold),
        Cell::new("Best fitness").fg(Color::Green),
    ]);

    let stride = scores.len().div_ceil(20).max(1);
    for (generation, score) in scores.iter().enumerate() {
        if generation % stride != 0 && generation + 1 != scores.len() {
            continue;
        }
        table.add_row(vec![
            Cell::new(generation + 1).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3}", score)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_rate_report(equal_or_better: u64, rarity: f64, panel_score: u32, panel_size: usize) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Equal-or-better strategies").add_attribute(Attribute::Bold),
        Cell::new(equal_or_better).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Rarity (worst / this)").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.3e}", rarity)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(format!("Score vs {} random opponents", panel_size))
            .add_attribute(Attribute::Bold),
        Cell::new(panel_score)
            .fg(Color::Green)
            .set_alignment(CellAlignment::Right),
    ]);
    println!("{}", table);
}
