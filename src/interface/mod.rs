pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_category, prompt_choice, prompt_delta, prompt_item, prompt_menu, prompt_search_term,
    prompt_yes_no, resolve_item, MenuAction,
};
pub use render::{
    display_categories, display_favorites, display_items, display_presets, display_recent,
    display_selection, display_totals,
};
