use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{CaterError, Result};
use crate::models::{AttendeeProfile, CrowdProfile, Event, EventId, MenuItem, MenuItemId};

/// Prompt for a non-negative head count.
fn prompt_count(label: &str) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(label)
        .default("0".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| CaterError::InvalidInput(format!("{label}: expected a non-negative count")))
}

/// Prompt for a free-text field.
fn prompt_text(label: &str) -> Result<String> {
    let input: String = Input::new().with_prompt(label).interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for the crowd profile of the venue.
fn prompt_profile() -> Result<CrowdProfile> {
    let selection = Select::new()
        .with_prompt("Crowd profile")
        .items(&["Urban", "Rural"])
        .default(0)
        .interact()?;

    Ok(if selection == 1 {
        CrowdProfile::Rural
    } else {
        CrowdProfile::Urban
    })
}

/// Collect the details of a new event interactively.
///
/// Head counts are parsed as unsigned integers, so negative attendance is
/// rejected at the prompt.
pub fn collect_event_details(id: EventId) -> Result<Event> {
    let name = prompt_text("Event name")?;
    let date = prompt_text("Date (YYYY-MM-DD)")?;
    let venue = prompt_text("Venue")?;

    let male = prompt_count("Adult male guests")?;
    let female = prompt_count("Adult female guests")?;
    let child = prompt_count("Child guests")?;

    let profile = prompt_profile()?;

    Ok(Event {
        id,
        name,
        date,
        venue,
        attendees: AttendeeProfile::new(male, female, child),
        profile,
    })
}

/// Select menu items by id or name, with fuzzy matching.
///
/// Accepts a numeric menu item id directly, otherwise tries an exact
/// case-insensitive name match and falls back to jaro-winkler candidates.
/// Entering the same item twice is allowed and means "prepare twice as
/// much". An empty entry finishes the selection.
pub fn select_menu_items(menu: &[&MenuItem]) -> Result<Vec<MenuItemId>> {
    let mut selected = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Add a menu item by id or name (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Numeric input is treated as an id.
        if let Ok(id) = input.parse::<MenuItemId>() {
            match menu.iter().find(|item| item.id == id) {
                Some(item) => {
                    selected.push(item.id);
                    println!("Added: {} (#{})", item.name, item.id);
                }
                None => println!("No menu item with id {}", id),
            }
            continue;
        }

        // Try exact match first (case-insensitive).
        let exact_match = menu
            .iter()
            .find(|item| item.name.to_lowercase() == input.to_lowercase());

        if let Some(item) = exact_match {
            selected.push(item.id);
            println!("Added: {} (#{})", item.name, item.id);
            continue;
        }

        // Fall back to fuzzy matching.
        let mut candidates: Vec<(&MenuItem, f64)> = menu
            .iter()
            .map(|item| {
                (
                    *item,
                    jaro_winkler(&item.name.to_lowercase(), &input.to_lowercase()),
                )
            })
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching menu item for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let item = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", item.name))
                .default(true)
                .interact()?;

            if confirm {
                selected.push(item.id);
                println!("Added: {} (#{})", item.name, item.id);
            }
        } else {
            // Multiple matches - let the user pick.
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(item, _)| format!("{} (#{})", item.name, item.id))
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                let item = candidates[selection].0;
                selected.push(item.id);
                println!("Added: {} (#{})", item.name, item.id);
            }
        }
    }

    Ok(selected)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
