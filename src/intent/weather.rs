//! Weather intent extraction.

use crate::sources::WeatherTable;
use crate::types::{ToolArgs, ToolCall, ToolKind};

/// Trigger words, scanned in order; the first hit becomes the `keyword`
/// argument that distinguishes temperature intent from condition intent.
const TRIGGERS: &[&str] = &["temperature", "temp", "weather", "condition"];

/// Emits one weather call per city mentioned in the query, defaulting to
/// `default_city` when no known city is named. Returns nothing when no
/// trigger word appears.
pub fn extract(query: &str, default_city: &str) -> Vec<ToolCall> {
    let Some(keyword) = TRIGGERS.iter().find(|t| query.contains(*t)) else {
        return Vec::new();
    };

    let mut cities: Vec<&str> = WeatherTable::cities()
        .filter(|city| query.contains(city))
        .collect();
    if cities.is_empty() {
        cities.push(default_city);
    }

    cities
        .into_iter()
        .map(|city| {
            let mut args = ToolArgs::new();
            args.insert("city".to_string(), city.to_string());
            args.insert("keyword".to_string(), keyword.to_string());
            ToolCall::new(ToolKind::Weather, args)
        })
        .collect()
}
