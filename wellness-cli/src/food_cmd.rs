use anyhow::Result;
use clap::Subcommand;
use wellness_core::intake::{daily_intake, parse_quantity, prepare_entry};
use wellness_core::portion::scale;
use wellness_core::{FoodLog, MacroGroup, NutrientCatalog, Portion};

use crate::report::engine_failure;
use crate::state::Session;

#[derive(Subcommand, Debug)]
pub enum FoodCommand {
    /// List catalog foods with macros per 100 g/ml
    List {
        /// Only foods curated as a good source of this macro
        #[arg(long)]
        group: Option<MacroGroup>,
    },

    /// Show the macro-source groups
    Groups,

    /// Macros for a quantity of one food, without logging it
    Calc {
        food: String,
        /// e.g. 150, 150g, 250ml
        quantity: String,
    },

    /// Log a food eaten now
    Log { food: String, quantity: String },

    /// Today's logged foods, totals and macro distribution
    Today,
}

pub fn run(session: &Session, command: FoodCommand, json: bool) -> Result<()> {
    let catalog = NutrientCatalog::builtin();
    match command {
        FoodCommand::List { group } => list(&catalog, group),
        FoodCommand::Groups => {
            for group in MacroGroup::ALL {
                println!("{}: {}", group.label(), group.sources().join(", "));
            }
            Ok(())
        }
        FoodCommand::Calc { food, quantity } => {
            let name = catalog.resolve(&food)?;
            let unit = catalog.unit(name)?;
            let qty = parse_quantity(&quantity, unit)?;
            let portion = scale(catalog.get(name)?, qty);
            println!("{name} {qty}{unit}");
            print_portion(&portion);
            Ok(())
        }
        FoodCommand::Log { food, quantity } => {
            let name = catalog.resolve(&food)?;
            let qty = parse_quantity(&quantity, catalog.unit(name)?)?;
            let now = session.clock.now_local();
            let entry = prepare_entry(&catalog, &session.username, name, qty, now)?;
            let logged = session
                .food_log()?
                .append(entry)
                .map_err(|e| engine_failure("cannot log food", e))?;
            println!(
                "Logged #{}: {} {}{} ({} kcal)",
                logged.id, logged.food, logged.quantity, logged.unit, logged.portion.calories
            );
            Ok(())
        }
        FoodCommand::Today => today(session, json),
    }
}

fn list(catalog: &NutrientCatalog, group: Option<MacroGroup>) -> Result<()> {
    let names: Vec<&str> = match group {
        Some(g) => g.sources().to_vec(),
        None => catalog.names().collect(),
    };
    println!(
        "{:<20} {:>6} {:>8} {:>8} {:>6} {:>6}",
        "Food (per 100)", "kcal", "Protein", "Carbs", "Fat", "Fiber"
    );
    for name in names {
        let f = catalog.get(name)?;
        println!(
            "{:<20} {:>6.0} {:>8.1} {:>8.1} {:>6.1} {:>6.1}  {}",
            name,
            f.calories,
            f.protein,
            f.carbs,
            f.fat,
            f.fiber,
            catalog.unit(name)?
        );
    }
    Ok(())
}

fn today(session: &Session, json: bool) -> Result<()> {
    let entries = session
        .food_log()?
        .entries(&session.username)
        .map_err(|e| engine_failure("cannot read food log", e))?;
    let day = daily_intake(&entries, session.clock.today());

    if json {
        println!("{}", serde_json::to_string_pretty(&day)?);
        return Ok(());
    }

    println!("# Intake for {}\n", day.date);
    if day.entries.is_empty() {
        println!("Nothing logged yet. Try: wellness food log Oats 50g");
        return Ok(());
    }
    for e in &day.entries {
        println!(
            "  {} {:<20} {:>7}{:<2} {:>5} kcal",
            e.logged_at.format("%H:%M"),
            e.food,
            e.quantity,
            e.unit.suffix(),
            e.portion.calories
        );
    }
    println!();
    print_portion(&day.totals);
    if let Some(share) = day.distribution {
        println!(
            "Distribution: protein {:.1}% | carbs {:.1}% | fat {:.1}% | fiber {:.1}%",
            share.protein, share.carbs, share.fat, share.fiber
        );
    }
    Ok(())
}

fn print_portion(p: &Portion) {
    println!(
        "Calories {} kcal | protein {:.1} g | carbs {:.1} g | fat {:.1} g | fiber {:.1} g",
        p.calories, p.protein, p.carbs, p.fat, p.fiber
    );
}
