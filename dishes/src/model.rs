use serde::Deserialize;

use crate::description::Description;

/// One recommendable dish record as delivered by the food service.
///
/// Every field is optional on the wire; absent values render as sentinel
/// labels downstream. Unknown fields in the payload are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dish {
    pub restaurant_name: Option<String>,
    pub dish_name: Option<String>,
    #[serde(default)]
    pub description: Description,
    pub tag: Option<String>,
    #[serde(default)]
    pub other_dishes: Vec<String>,
    pub category_name: Option<String>,
}
