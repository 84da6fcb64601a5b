use dialoguer::{Confirm, Input, Select};

use crate::catalog::{Catalog, CategoryFilter};
use crate::error::{NutriError, Result};
use crate::models::FoodItem;

/// Top-level actions offered by the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Search,
    Category,
    Adjust,
    Preset,
    Recent,
    Favorite,
    Totals,
    Clear,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 9] = [
        MenuAction::Search,
        MenuAction::Category,
        MenuAction::Adjust,
        MenuAction::Preset,
        MenuAction::Recent,
        MenuAction::Favorite,
        MenuAction::Totals,
        MenuAction::Clear,
        MenuAction::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::Search => "Search items",
            MenuAction::Category => "Filter by category",
            MenuAction::Adjust => "Add or remove an item",
            MenuAction::Preset => "Apply a meal preset",
            MenuAction::Recent => "Add a recent selection",
            MenuAction::Favorite => "Toggle a favorite",
            MenuAction::Totals => "Show selection and totals",
            MenuAction::Clear => "Clear selection",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Prompt for the next action.
pub fn prompt_menu() -> Result<MenuAction> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuAction::ALL[selection])
}

/// Prompt for a new search term (empty clears the search).
pub fn prompt_search_term(current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Search items (empty to clear)")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for a category from the catalog's selector options.
pub fn prompt_category(catalog: &Catalog, current: &CategoryFilter) -> Result<CategoryFilter> {
    let options = catalog.category_options();
    let default = options
        .iter()
        .position(|c| *c == current.label())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Category")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(CategoryFilter::parse(options[selection]))
}

/// Pick one name from `names`, or `None` if the user backs out.
pub fn prompt_choice(prompt: &str, names: &[&str]) -> Result<Option<String>> {
    if names.is_empty() {
        return Ok(None);
    }

    let mut options: Vec<&str> = names.to_vec();
    options.push("Cancel");

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(names.get(selection).map(|s| s.to_string()))
}

/// Pick one of the given items.
pub fn prompt_item(items: &[&FoodItem]) -> Result<Option<String>> {
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    prompt_choice("Which item?", &names)
}

/// Prompt for a signed quantity change.
pub fn prompt_delta() -> Result<i64> {
    let input: String = Input::new()
        .with_prompt("Change quantity by (e.g. 1 or -1)")
        .default("1".to_string())
        .interact_text()?;

    let input = input.trim();
    input
        .parse()
        .map_err(|_| NutriError::InvalidInput(format!("'{}' is not a whole number", input)))
}

/// Resolve free-form input to a catalog item name, asking the user to
/// confirm or pick when the match is fuzzy. Returns `None` without printing
/// when nothing matches or the user declines.
pub fn resolve_item(catalog: &Catalog, input: &str) -> Result<Option<String>> {
    let candidates = catalog.suggest(input);

    match candidates.as_slice() {
        [] => Ok(None),
        [only] if only.key() == input.trim().to_lowercase() => Ok(Some(only.name.clone())),
        [only] => {
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", only.name), true)?;
            Ok(confirm.then(|| only.name.clone()))
        }
        many => {
            let names: Vec<&str> = many.iter().map(|i| i.name.as_str()).collect();
            prompt_choice("Which did you mean?", &names)
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
