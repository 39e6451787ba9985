/// Column names used by the spreadsheet export
pub const BAND_COLUMN: &str = "Band";
pub const LOCATION_COLUMN: &str = "Wo";
pub const DATE_COLUMN: &str = "Wann";

pub const REQUIRED_COLUMNS: [&str; 3] = [BAND_COLUMN, LOCATION_COLUMN, DATE_COLUMN];

// Defaults for the generated statements
pub const DEFAULT_INPUT_PATH: &str = "Bands.csv";
pub const DEFAULT_CONFIG_PATH: &str = "bands_import.toml";
pub const DEFAULT_TABLE: &str = "band_events";
pub const DEFAULT_USERS_ID: i64 = 2;
pub const DEFAULT_RATING: i32 = 5;

// Festival names (consistent across the application)
pub const ROCK_IM_PARK: &str = "Rock im Park";
pub const SOUTHSIDE_FESTIVAL: &str = "Southside Festival";
pub const DAS_FEST: &str = "Das Fest";
pub const HAPPINESS_FESTIVAL: &str = "Happiness Festival";

/// Built-in mapping from the town a festival takes place in to the festival name
pub fn default_venue_table() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Nürnberg", ROCK_IM_PARK),
        ("Neuhausen ob Eck", SOUTHSIDE_FESTIVAL),
        ("Karlsruhe", DAS_FEST),
        ("Straubenhardt", HAPPINESS_FESTIVAL),
    ]
}
