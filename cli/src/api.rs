//! Client for the remote food service.
//!
//! Two endpoints: `GET /api/foods` returns the full dataset, and
//! `GET /api/random-food` returns one dish picked by the service. Both wrap
//! their payload in a `{success, ..., message?}` envelope; a `success:
//! false` envelope carries the server's message.

use dishes::Dish;
use reqwest::Client;
use serde::Deserialize;

use crate::error::AppError;

#[derive(Deserialize)]
pub struct FoodsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub foods: Vec<Dish>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct RandomFoodEnvelope {
    pub success: bool,
    #[serde(default)]
    pub food: Option<Dish>,
    #[serde(default)]
    pub message: Option<String>,
}

pub async fn fetch_foods(client: &Client, api_url: &str) -> Result<Vec<Dish>, AppError> {
    let envelope: FoodsEnvelope = client
        .get(format!("{api_url}/api/foods"))
        .send()
        .await?
        .json()
        .await?;

    unwrap_foods(envelope)
}

pub async fn fetch_random_food(client: &Client, api_url: &str) -> Result<Dish, AppError> {
    let envelope: RandomFoodEnvelope = client
        .get(format!("{api_url}/api/random-food"))
        .send()
        .await?
        .json()
        .await?;

    unwrap_random_food(envelope)
}

pub fn unwrap_foods(envelope: FoodsEnvelope) -> Result<Vec<Dish>, AppError> {
    if !envelope.success {
        return Err(AppError::Api(message(envelope.message)));
    }

    Ok(envelope.foods)
}

pub fn unwrap_random_food(envelope: RandomFoodEnvelope) -> Result<Dish, AppError> {
    if !envelope.success {
        return Err(AppError::Api(message(envelope.message)));
    }

    envelope.food.ok_or(AppError::MalformedPayload)
}

fn message(message: Option<String>) -> String {
    message.unwrap_or_else(|| "no message".to_string())
}

#[cfg(test)]
mod tests {
    use super::{FoodsEnvelope, RandomFoodEnvelope, unwrap_foods, unwrap_random_food};
    use crate::error::AppError;

    #[test]
    fn test_foods_envelope() {
        let envelope: FoodsEnvelope = serde_json::from_str(
            r#"{"success": true, "foods": [{"dish_name": "寿司"}, {"dish_name": "宫保鸡丁"}]}"#,
        )
        .unwrap();

        let foods = unwrap_foods(envelope).unwrap();
        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0].dish_name.as_deref(), Some("寿司"));
    }

    #[test]
    fn test_failed_foods_envelope() {
        let envelope: FoodsEnvelope =
            serde_json::from_str(r#"{"success": false, "message": "没有找到菜品数据"}"#).unwrap();

        match unwrap_foods(envelope) {
            Err(AppError::Api(message)) => assert_eq!(message, "没有找到菜品数据"),
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn test_random_food_envelope() {
        let envelope: RandomFoodEnvelope = serde_json::from_str(
            r#"{
                "success": true,
                "food": {
                    "dish_name": "宫保鸡丁",
                    "restaurant_name": "川味小馆",
                    "description": "a, b",
                    "other_dishes": ["麻婆豆腐"]
                }
            }"#,
        )
        .unwrap();

        let dish = unwrap_random_food(envelope).unwrap();
        assert_eq!(dish.restaurant_name.as_deref(), Some("川味小馆"));
    }

    #[test]
    fn test_random_food_without_food_field() {
        let envelope: RandomFoodEnvelope =
            serde_json::from_str(r#"{"success": true}"#).unwrap();

        assert!(matches!(
            unwrap_random_food(envelope),
            Err(AppError::MalformedPayload)
        ));
    }

    #[test]
    fn test_failed_random_food_without_message() {
        let envelope: RandomFoodEnvelope =
            serde_json::from_str(r#"{"success": false}"#).unwrap();

        match unwrap_random_food(envelope) {
            Err(AppError::Api(message)) => assert_eq!(message, "no message"),
            other => panic!("expected api error, got {other:?}"),
        }
    }
}
