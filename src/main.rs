use clap::Parser;
use std::path::Path;

use cater_indent_rs::catalog::{
    Catalog, CatalogStore, ingest_inventory, ingest_recipes, load_catalog, save_catalog,
};
use cater_indent_rs::cli::{Cli, Command};
use cater_indent_rs::error::{CaterError, Result};
use cater_indent_rs::interface::{
    collect_event_details, display_batch_schedule, display_batches, display_events,
    display_indent, display_menu, prompt_yes_no, select_menu_items,
};
use cater_indent_rs::models::MenuItemId;
use cater_indent_rs::planner::{ConsumptionCoefficients, compute_indent, split_batches};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Events => cmd_events(&cli.file),
        Command::AddEvent => cmd_add_event(&cli.file),
        Command::Ingest { inventory, recipes } => {
            cmd_ingest(&cli.file, inventory.as_deref(), recipes.as_deref())
        }
        Command::Indent {
            event,
            items,
            batches,
        } => cmd_indent(&cli.file, event, &items, batches),
        Command::Batches { quantity } => cmd_batches(quantity),
    }
}

/// Load the catalog, or report how to create one if the file is missing.
fn load_store(file_path: &str) -> Result<Option<CatalogStore>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Catalog file not found: {}", file_path);
        eprintln!("Run 'ingest' to load inventory and recipe CSVs first.");
        return Ok(None);
    }

    load_catalog(path).map(Some)
}

/// List saved events.
fn cmd_events(file_path: &str) -> Result<()> {
    let Some(store) = load_store(file_path)? else {
        return Ok(());
    };

    display_events(&store.all_events());
    Ok(())
}

/// Create a new event interactively and save it.
fn cmd_add_event(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    // Events may be created before any CSVs are ingested.
    let mut store = if path.exists() {
        load_catalog(path)?
    } else {
        CatalogStore::new()
    };

    let event = collect_event_details(store.next_event_id())?;
    let id = event.id;
    store.upsert_event(event);

    save_catalog(path, &store)?;
    println!("Event #{} saved to {}", id, file_path);

    Ok(())
}

/// Ingest inventory and/or recipe CSVs into the catalog.
fn cmd_ingest(file_path: &str, inventory: Option<&str>, recipes: Option<&str>) -> Result<()> {
    if inventory.is_none() && recipes.is_none() {
        return Err(CaterError::InvalidInput(
            "pass --inventory and/or --recipes".to_string(),
        ));
    }

    let path = Path::new(file_path);
    let mut store = if path.exists() {
        load_catalog(path)?
    } else {
        CatalogStore::new()
    };

    if let Some(inventory_path) = inventory {
        let report = ingest_inventory(&mut store, inventory_path)?;
        println!(
            "Inventory: {} ingredients added, {} rows skipped",
            report.ingredients_added, report.rows_skipped
        );
    }

    if let Some(recipes_path) = recipes {
        let report = ingest_recipes(&mut store, recipes_path)?;
        println!(
            "Recipes: {} menu items, {} recipe lines added, {} rows skipped",
            report.menu_items_added, report.recipe_lines_added, report.rows_skipped
        );
    }

    save_catalog(path, &store)?;
    println!(
        "Catalog saved: {} ingredients, {} menu items, {} events",
        store.ingredient_count(),
        store.menu_item_count(),
        store.event_count()
    );

    Ok(())
}

/// Compute and display the indent for an event.
fn cmd_indent(file_path: &str, event_id: u32, items: &[u32], batches: bool) -> Result<()> {
    let Some(store) = load_store(file_path)? else {
        return Ok(());
    };

    let event = store
        .event(event_id)
        .ok_or(CaterError::EventNotFound(event_id))?;
    let coeffs = ConsumptionCoefficients::for_profile(event.profile);

    let selection: Vec<MenuItemId> = if items.is_empty() {
        let menu = store.all_menu_items();
        display_menu(&menu);
        if menu.is_empty() {
            return Ok(());
        }
        select_menu_items(&menu)?
    } else {
        // Ids given on the command line are validated up front; the
        // planner itself treats an unknown item as an empty recipe.
        for &id in items {
            if store.menu_item(id).is_none() {
                return Err(CaterError::MenuItemNotFound(id));
            }
        }
        items.to_vec()
    };

    let result = compute_indent(&store, event_id, &selection, &coeffs)?;
    display_indent(&result);

    if !result.requirements.is_empty() {
        let show = batches || prompt_yes_no("Show the 60/30/10 batch schedule?", true)?;
        if show {
            display_batch_schedule(&result);
        }
    }

    Ok(())
}

/// Split a single quantity into the standard batch schedule.
fn cmd_batches(quantity: f64) -> Result<()> {
    if quantity < 0.0 {
        return Err(CaterError::InvalidInput(
            "quantity must be non-negative".to_string(),
        ));
    }

    let split = split_batches(quantity);
    display_batches(quantity, &split);
    Ok(())
}
