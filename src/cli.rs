use clap::{Parser, Subcommand};

/// NutriKnow — a fast-food nutrition calculator with presets, favorites, and daily values.
#[derive(Parser, Debug)]
#[command(name = "nutriknow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the favorites JSON file.
    #[arg(short, long, default_value = "favorites.json")]
    pub favorites: String,

    /// Path to a custom catalog JSON file (defaults to the built-in menu).
    #[arg(short, long)]
    pub catalog: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Build a meal interactively.
    #[default]
    Interactive,

    /// List menu items.
    List {
        /// Case-insensitive name filter.
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category to show, or "All".
        #[arg(short = 'k', long, default_value = "All")]
        category: String,
    },

    /// List the menu categories.
    Categories,

    /// List the meal presets.
    Presets,

    /// Show the selection and totals for a meal preset.
    Preset {
        /// Preset name, e.g. "Classic Combo".
        name: String,
    },

    /// Toggle an item's favorite flag.
    Favorite {
        /// Item name (fuzzy matched).
        item: String,
    },

    /// List favorite items.
    Favorites,

    /// Express an amount of a nutrient as a percent of its daily value.
    Percent {
        /// Nutrient name: calories, protein, carbs, fat, sodium, sugar, fiber.
        nutrient: String,

        /// Amount in the nutrient's unit.
        value: f64,
    },
}
