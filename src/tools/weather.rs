//! Weather lookup tool.

use crate::context::{Context, Value};
use crate::sources::WeatherTable;
use crate::tools::Tool;
use crate::types::{Answer, Result, ToolArgs};
use async_trait::async_trait;

/// Answers temperature and sky-condition questions from the fixed tables.
///
/// The `keyword` argument picks the lookup: `temperature`/`temp` return a
/// number, `weather`/`condition` return text, and anything else falls back
/// to temperature. The result is written into the context under the city
/// name so later expressions can reference it.
#[derive(Debug, Default)]
pub struct WeatherTool {
    table: WeatherTable,
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "weather"
    }

    fn description(&self) -> &str {
        "Look up the temperature or sky condition for a city"
    }

    async fn execute(&self, args: &ToolArgs, context: &mut Context) -> Result<Answer> {
        let city = args
            .get("city")
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();
        let keyword = args
            .get("keyword")
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();

        let answer = match keyword.as_str() {
            "weather" | "condition" => {
                let condition = self.table.condition(&city);
                context.insert(city, Value::Text(condition.clone()));
                Answer::Text(condition)
            }
            // "temperature", "temp", and anything unrecognized
            _ => {
                let temperature = self.table.temperature(&city);
                context.insert(city, Value::Number(temperature));
                Answer::Number(temperature)
            }
        };
        Ok(answer)
    }
}
