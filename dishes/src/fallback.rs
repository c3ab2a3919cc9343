use crate::description::Description;
use crate::model::Dish;

/// Static backup dataset used when the remote food list cannot be loaded.
pub fn backup_dishes() -> Vec<Dish> {
    vec![
        backup("宫保鸡丁", "经典川菜，鸡肉丁配花生米，麻辣鲜香，下饭神器", "chinese"),
        backup("意式肉酱面", "经典意面配番茄肉酱，浓郁香醇，西餐入门首选", "western"),
        backup("寿司", "新鲜生鱼片配醋饭，日式料理精髓", "japanese"),
    ]
}

fn backup(name: &str, description: &str, category: &str) -> Dish {
    Dish {
        dish_name: Some(name.to_string()),
        description: Description::text(description),
        category_name: Some(category.to_string()),
        ..Dish::default()
    }
}

#[cfg(test)]
mod tests {
    use super::backup_dishes;
    use crate::description::select_description;

    #[test]
    fn test_three_usable_dishes() {
        let dishes = backup_dishes();
        assert_eq!(dishes.len(), 3);

        for dish in &dishes {
            assert!(dish.dish_name.is_some());
            assert!(dish.category_name.is_some());
            assert!(!select_description(&dish.description).is_empty());
        }
    }
}
