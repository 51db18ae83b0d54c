//! Fixed in-memory weather tables.

/// Known city temperatures, in degrees Celsius.
const TEMPERATURES: &[(&str, f64)] = &[
    ("paris", 18.0),
    ("london", 17.0),
    ("dhaka", 31.0),
    ("amsterdam", 17.0),
];

/// Known city sky conditions.
const CONDITIONS: &[(&str, &str)] = &[
    ("paris", "mild cloudy"),
    ("london", "light rain"),
    ("dhaka", "hot & humid"),
    ("amsterdam", "cloudy"),
];

/// Temperature returned for cities outside the table.
pub const DEFAULT_TEMPERATURE: f64 = 20.0;

/// Condition returned for cities outside the table.
pub const DEFAULT_CONDITION: &str = "clear sky";

/// Lookup over the fixed temperature and condition tables.
///
/// Unknown cities resolve to defaults rather than errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherTable;

impl WeatherTable {
    /// Current temperature for `city` (lowercase), defaulting to
    /// [`DEFAULT_TEMPERATURE`] when unknown.
    pub fn temperature(&self, city: &str) -> f64 {
        TEMPERATURES
            .iter()
            .find(|(name, _)| *name == city)
            .map(|(_, t)| *t)
            .unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// Current sky condition for `city` (lowercase), defaulting to
    /// [`DEFAULT_CONDITION`] when unknown.
    pub fn condition(&self, city: &str) -> String {
        CONDITIONS
            .iter()
            .find(|(name, _)| *name == city)
            .map(|(_, c)| (*c).to_string())
            .unwrap_or_else(|| DEFAULT_CONDITION.to_string())
    }

    /// The fixed list of cities the weather extractor scans for.
    pub fn cities() -> impl Iterator<Item = &'static str> {
        TEMPERATURES.iter().map(|(name, _)| *name)
    }
}
