//! Pure formatting of dishes for the terminal. Printing happens in the
//! command loop.

use dishes::categories::category_display_name;
use dishes::{Dish, derive_two_tags, select_description};

pub const UNKNOWN_RESTAURANT: &str = "未知餐厅";
pub const UNKNOWN_DISH: &str = "未知菜品";
pub const NO_DESCRIPTION: &str = "暂无描述";

/// Formats one recommendation: restaurant, dish, a randomly selected
/// description line, and up to two tag chips.
pub fn format_recommendation(dish: &Dish) -> String {
    let restaurant = dish
        .restaurant_name
        .as_deref()
        .unwrap_or(UNKNOWN_RESTAURANT);
    let name = dish.dish_name.as_deref().unwrap_or(UNKNOWN_DISH);

    let selected = select_description(&dish.description);
    let description = if selected.is_empty() {
        NO_DESCRIPTION
    } else {
        selected.as_str()
    };

    let mut out = format!("{restaurant} · {name}\n  {description}");

    let (first, second) = derive_two_tags(dish);
    let chips: Vec<&str> = [first.as_str(), second.as_str()]
        .into_iter()
        .filter(|chip| !chip.is_empty())
        .collect();
    if !chips.is_empty() {
        out.push_str(&format!("\n  [{}]", chips.join("] [")));
    }

    out
}

/// One line of the `list` output.
pub fn format_food_line(dish: &Dish) -> String {
    let name = dish.dish_name.as_deref().unwrap_or(UNKNOWN_DISH);

    match dish.category_name.as_deref() {
        Some(code) => format!("{name} ({})", category_display_name(code)),
        None => name.to_string(),
    }
}
