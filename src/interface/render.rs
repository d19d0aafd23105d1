use crate::models::{BatchSplit, Event, IndentResult, MenuItem};
use crate::planner::{BATCH_RATIOS, split_batches};

/// Display an indent in a formatted table.
///
/// Requirements are shown sorted by category then name; quantities are
/// rounded to two decimals here and nowhere else.
pub fn display_indent(result: &IndentResult) {
    println!();
    println!("=== Ingredient Indent ===");
    println!();
    println!("Capacity: {:.2}", result.capacity);
    println!("Menu items: {}", result.total_items);
    println!("Portion per item: {:.2}", result.portion_per_item);
    println!();

    if result.requirements.is_empty() {
        println!("No ingredients required (empty menu selection or no recipes).");
        return;
    }

    let mut rows: Vec<_> = result.requirements.iter().collect();
    rows.sort_by(|a, b| (&a.category, &a.name).cmp(&(&b.category, &b.name)));

    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(10);
    let category_width = rows.iter().map(|r| r.category.len()).max().unwrap_or(8);

    for row in &rows {
        println!(
            "  {:<name_width$}  {:<category_width$}  {:>10.2} {}",
            row.name, row.category, row.quantity, row.unit,
        );
    }

    println!();
    println!("Total ingredients: {}", rows.len());
    println!();
}

/// Display the batch schedule for every ingredient of an indent.
pub fn display_batch_schedule(result: &IndentResult) {
    if result.requirements.is_empty() {
        return;
    }

    println!(
        "=== Batch Schedule ({:.0}% / {:.0}% / {:.0}%) ===",
        BATCH_RATIOS[0] * 100.0,
        BATCH_RATIOS[1] * 100.0,
        BATCH_RATIOS[2] * 100.0,
    );
    println!();

    let mut rows: Vec<_> = result.requirements.iter().collect();
    rows.sort_by(|a, b| (&a.category, &a.name).cmp(&(&b.category, &b.name)));

    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(10);

    for row in &rows {
        let split = split_batches(row.quantity);
        println!(
            "  {:<name_width$}  {:>9.2} | {:>9.2} | {:>9.2} {}",
            row.name, split.batch_1, split.batch_2, split.batch_3, row.unit,
        );
    }

    println!();
}

/// Display a standalone batch split.
pub fn display_batches(quantity: f64, split: &BatchSplit) {
    println!();
    println!("Total: {:.2}", quantity);
    println!("  Batch 1 ({:.0}%): {:.2}", BATCH_RATIOS[0] * 100.0, split.batch_1);
    println!("  Batch 2 ({:.0}%): {:.2}", BATCH_RATIOS[1] * 100.0, split.batch_2);
    println!("  Batch 3 ({:.0}%): {:.2}", BATCH_RATIOS[2] * 100.0, split.batch_3);
    println!();
}

/// Display the saved events.
pub fn display_events(events: &[&Event]) {
    if events.is_empty() {
        println!("No events yet. Use 'add-event' to create one.");
        return;
    }

    println!();
    println!("=== Events ({}) ===", events.len());
    println!();

    for event in events {
        println!(
            "  #{:<4} {} - {} at {} ({} guests, {})",
            event.id,
            event.date,
            event.name,
            event.venue,
            event.attendees.total(),
            event.profile,
        );
    }

    println!();
}

/// Display the menu items available for selection.
pub fn display_menu(items: &[&MenuItem]) {
    if items.is_empty() {
        println!("Menu is empty. Use 'ingest' to load recipes first.");
        return;
    }

    println!();
    println!("=== Menu ({} items) ===", items.len());
    println!();

    for item in items {
        println!(
            "  #{:<4} {} [{} / {}] ({})",
            item.id, item.name, item.category, item.sub_category, item.diet_type,
        );
    }

    println!();
}
