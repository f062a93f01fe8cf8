use shared::{models::Design, store::{default_designs, DesignStore}};
use tracing::{info, warn};

pub const ALLOWED_ORIGIN_KEY: &str = "ALLOWED_ORIGIN";
pub const DESIGNS_KEY: &str = "DESIGNS";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub allowed_origin: Option<String>,
    pub designs: Vec<Design>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            allowed_origin: None,
            designs: default_designs(),
        }
    }
}

impl AppConfig {
    /// Reads settings through `get`, which in production is the secret store.
    pub fn load(get: impl Fn(&str) -> Option<String>) -> Self {
        let allowed_origin = get(ALLOWED_ORIGIN_KEY)
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty());

        if let Some(origin) = &allowed_origin {
            info!("{ALLOWED_ORIGIN_KEY} set, allowing CORS from {origin}");
        }

        let designs = match get(DESIGNS_KEY) {
            Some(raw) => parse_designs(&raw).unwrap_or_else(|| {
                warn!("{DESIGNS_KEY} is not a valid design list, using default seed");
                default_designs()
            }),
            None => {
                info!("{DESIGNS_KEY} not set, using default seed");
                default_designs()
            }
        };

        Self { allowed_origin, designs }
    }

    pub fn store(&self) -> DesignStore {
        DesignStore::new(self.designs.clone()).unwrap_or_else(|e| {
            warn!("Configured designs rejected ({}), using default seed", e);
            DesignStore::seeded()
        })
    }
}

fn parse_designs(raw: &str) -> Option<Vec<Design>> {
    let designs: Vec<Design> = serde_json::from_str(raw)
        .map_err(|e| warn!("Failed to parse {DESIGNS_KEY}: {e}"))
        .ok()?;

    DesignStore::new(designs.clone())
        .map_err(|e| warn!("Invalid {DESIGNS_KEY}: {e}"))
        .ok()
        .map(|_| designs)
}
