use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nutriknow::catalog::{Catalog, CategoryFilter};
use nutriknow::cli::{Cli, Command};
use nutriknow::error::{NutriError, Result};
use nutriknow::interface::{
    display_categories, display_favorites, display_items, display_presets, display_recent,
    display_selection, prompt_category, prompt_choice, prompt_delta, prompt_item, prompt_menu,
    prompt_search_term, prompt_yes_no, resolve_item, MenuAction,
};
use nutriknow::models::Nutrient;
use nutriknow::state::{FavoritesStore, JsonFileStore, Session};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so table output on stdout stays clean.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "nutriknow=warn",
        1 => "nutriknow=debug",
        _ => "nutriknow=trace",
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin(),
    };
    let store = JsonFileStore::new(&cli.favorites);
    let mut session = Session::new(&catalog, store);

    match cli.command.unwrap_or_default() {
        Command::Interactive => cmd_interactive(&mut session),
        Command::List { search, category } => {
            session.set_search_term(&search);
            session.set_category(CategoryFilter::parse(&category));
            display_items(&session);
            Ok(())
        }
        Command::Categories => {
            display_categories(&catalog);
            Ok(())
        }
        Command::Presets => {
            display_presets(&catalog);
            Ok(())
        }
        Command::Preset { name } => {
            session.apply_preset(&name)?;
            display_selection(&session);
            Ok(())
        }
        Command::Favorite { item } => cmd_favorite(&mut session, &item),
        Command::Favorites => {
            display_favorites(session.favorites().iter());
            Ok(())
        }
        Command::Percent { nutrient, value } => {
            let nutrient: Nutrient = nutrient.parse()?;
            println!(
                "{} {}{} = {}% Daily Value",
                nutrient.label(),
                value,
                nutrient.unit(),
                catalog.daily_value_percentage(nutrient, value)
            );
            Ok(())
        }
    }
}

/// Toggle a favorite by fuzzy-matched name.
fn cmd_favorite<S: FavoritesStore>(session: &mut Session<'_, S>, input: &str) -> Result<()> {
    let Some(name) = resolve_item(session.catalog(), input)? else {
        return Err(NutriError::ItemNotFound(input.to_string()));
    };

    match session.toggle_favorite(&name)? {
        Some(true) => println!("Added '{}' to favorites.", name),
        Some(false) => println!("Removed '{}' from favorites.", name),
        None => return Err(NutriError::ItemNotFound(name)),
    }
    Ok(())
}

/// Menu-driven session: filter, adjust quantities, apply presets, and watch totals.
fn cmd_interactive<S: FavoritesStore>(session: &mut Session<'_, S>) -> Result<()> {
    println!("Loaded {} menu items", session.catalog().len());
    if !session.favorites().is_empty() {
        println!("{} favorites restored", session.favorites().len());
    }

    loop {
        display_items(session);
        display_recent(session.recent());
        println!(
            "Total: {} cal ({}% Daily Value)",
            session.totals().calories,
            session.daily_value_percentage(Nutrient::Calories, session.totals().calories)
        );
        println!();

        match prompt_menu()? {
            MenuAction::Search => {
                let term = prompt_search_term(session.search_term())?;
                session.set_search_term(&term);
            }
            MenuAction::Category => {
                let category = prompt_category(session.catalog(), session.category())?;
                session.set_category(category);
            }
            MenuAction::Adjust => {
                let visible = session.visible_items();
                if visible.is_empty() {
                    println!("No items match the current filter.");
                    continue;
                }
                if let Some(name) = prompt_item(&visible)? {
                    match prompt_delta() {
                        Ok(delta) => {
                            session.set_quantity(&name, delta);
                        }
                        Err(NutriError::InvalidInput(msg)) => println!("{}", msg),
                        Err(e) => return Err(e),
                    }
                }
            }
            MenuAction::Preset => {
                let names: Vec<&str> = session
                    .catalog()
                    .presets()
                    .iter()
                    .map(|p| p.name.as_str())
                    .collect();
                if let Some(preset) = prompt_choice("Which preset?", &names)? {
                    session.apply_preset(&preset)?;
                    display_selection(session);
                }
            }
            MenuAction::Recent => {
                let recent: Vec<&str> = session.recent().iter().map(String::as_str).collect();
                if recent.is_empty() {
                    println!("No recent selections yet.");
                    continue;
                }
                if let Some(name) = prompt_choice("Add one more of", &recent)? {
                    session.set_quantity(&name, 1);
                }
            }
            MenuAction::Favorite => {
                let visible = session.visible_items();
                if let Some(name) = prompt_item(&visible)? {
                    if let Err(e) = session.toggle_favorite(&name) {
                        println!("Could not save favorites: {}", e);
                    }
                }
            }
            MenuAction::Totals => display_selection(session),
            MenuAction::Clear => {
                if prompt_yes_no("Clear all selected items?", false)? {
                    session.clear();
                }
            }
            MenuAction::Quit => break,
        }
    }

    display_selection(session);
    Ok(())
}
