use crate::model::Dish;

/// Derives exactly two display tags for a dish.
///
/// Sources are layered in priority order: explicit tags, the dish's own
/// name, sibling dishes from the same restaurant, then the category name.
/// A value never appears in both slots; slots that cannot be filled stay
/// empty.
pub fn derive_two_tags(dish: &Dish) -> (String, String) {
    let mut tags: Vec<String> = Vec::new();

    if let Some(raw) = dish.tag.as_deref() {
        for piece in raw.split(',').map(str::trim) {
            push_unique(&mut tags, piece);
        }
    }

    if tags.len() < 2 {
        if let Some(name) = dish.dish_name.as_deref() {
            push_unique(&mut tags, name);
        }

        for name in &dish.other_dishes {
            if tags.len() >= 2 {
                break;
            }
            push_unique(&mut tags, name);
        }
    }

    if tags.len() < 2 {
        if let Some(category) = dish.category_name.as_deref() {
            push_unique(&mut tags, category);
        }
    }

    let mut slots = tags.into_iter();
    (
        slots.next().unwrap_or_default(),
        slots.next().unwrap_or_default(),
    )
}

fn push_unique(tags: &mut Vec<String>, candidate: &str) {
    if !candidate.is_empty() && !tags.iter().any(|tag| tag == candidate) {
        tags.push(candidate.to_string());
    }
}
