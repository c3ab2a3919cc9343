use dishes::Dish;

/// Session state threaded explicitly through the command loop.
#[derive(Default)]
pub struct AppState {
    /// Dataset fetched once at startup, or the backup dataset.
    pub foods: Vec<Dish>,
    /// The last rendered recommendation; untouched when a fetch fails.
    pub current: Option<Dish>,
}
