//! # Eatwhat
//!
//! Terminal client for the "what should I eat" service.
//!
//! The food list is fetched once at startup and cached; when that fails the
//! bundled backup dataset stands in. Afterwards every input line becomes a
//! [`Command`]: a blank line (or `r`, `again`) asks the service for a random
//! dish and renders it, `l` lists the cached dataset, `q` quits.

use std::time::Duration;

use reqwest::Client;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::sleep;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod api;
pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod state;

use api::{fetch_foods, fetch_random_food};
use command::Command;
use config::Config;
use dishes::Dish;
use dishes::fallback::backup_dishes;
use state::AppState;

/// Deliberate minimum latency before a result is shown.
const RESULT_DELAY: Duration = Duration::from_millis(100);

pub async fn run() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    let client = Client::new();

    let mut state = AppState {
        foods: load_foods(&client, &config.api_url).await,
        ..AppState::default()
    };

    println!("今天吃什么？ (enter = recommend, l = list, q = quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Some(Command::Recommend) => recommend(&client, &config.api_url, &mut state).await,
            Some(Command::List) => {
                for dish in &state.foods {
                    println!("{}", render::format_food_line(dish));
                }
            }
            Some(Command::Quit) => break,
            None => println!("?: enter = recommend, l = list, q = quit"),
        }
    }

    info!("Shutting down");
    Ok(())
}

async fn load_foods(client: &Client, api_url: &str) -> Vec<Dish> {
    match fetch_foods(client, api_url).await {
        Ok(foods) => {
            info!("Loaded {} foods from {api_url}", foods.len());
            foods
        }
        Err(e) => {
            warn!("Failed to load foods: {e}");
            let foods = backup_dishes();
            info!("Using backup data, {} foods", foods.len());
            foods
        }
    }
}

async fn recommend(client: &Client, api_url: &str, state: &mut AppState) {
    match fetch_random_food(client, api_url).await {
        Ok(dish) => {
            sleep(RESULT_DELAY).await;
            println!("{}\n", render::format_recommendation(&dish));
            state.current = Some(dish);
        }
        Err(e) => {
            error!("Failed to fetch a recommendation: {e}");
            println!("获取食物推荐失败，请稍后再试");
        }
    }
}
