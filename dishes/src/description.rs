use rand::seq::SliceRandom;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Normalized form of the heterogeneous `description` field.
///
/// The service delivers descriptions as a JSON array of strings, a
/// JSON-array-encoded string, a comma-separated string, `null`, or nothing
/// at all. A textual value is classified exactly once, when the payload is
/// deserialized: if it parses as a JSON array it is [`Description::Json`],
/// otherwise it is [`Description::Csv`]. Classification never fails.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Description {
    #[default]
    Empty,
    /// A textual value that parses as a JSON array.
    Json(String),
    /// Any other textual value; candidates are comma-separated.
    Csv(String),
    /// A native array of strings.
    List(Vec<String>),
}

impl Description {
    /// Classifies a raw textual description.
    pub fn text(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            return Self::Empty;
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(_)) => Self::Json(raw),
            // A non-array parse result (number, object, quoted string) is
            // treated the same as invalid JSON.
            _ => Self::Csv(raw),
        }
    }

    /// The normalized candidate lines, with blank entries dropped.
    pub fn lines(&self) -> Vec<String> {
        let raw: Vec<String> = match self {
            Self::Empty => Vec::new(),
            Self::Json(text) => serde_json::from_str::<Vec<Value>>(text)
                .map(string_items)
                .unwrap_or_default(),
            Self::Csv(text) => text.split(',').map(|piece| piece.trim().to_string()).collect(),
            Self::List(items) => items.clone(),
        };

        raw.into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    }
}

impl<'de> Deserialize<'de> for Description {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;

        Ok(match value {
            None | Some(Value::Null) => Self::Empty,
            Some(Value::String(text)) => Self::text(text),
            Some(Value::Array(items)) => Self::List(string_items(items)),
            // Numbers, objects and booleans carry no usable description.
            Some(_) => Self::Empty,
        })
    }
}

fn string_items(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(text),
            _ => None,
        })
        .collect()
}

/// Picks one description line uniformly at random.
///
/// Returns the empty string when no usable line exists. The random source
/// is sampled exactly once per call with candidates, zero times otherwise.
pub fn select_description(description: &Description) -> String {
    let lines = description.lines();

    lines
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_default()
}
