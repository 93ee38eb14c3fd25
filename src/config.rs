use serde_derive::Deserialize;

use crate::data_types::geo::GeoPoint;
use crate::data_types::route::Route;

// Reference survey route in Subang the prototype shipped with
pub const DEFAULT_START_LAT: f64 = -6.553863223990267;
pub const DEFAULT_START_LON: f64 = 107.75965109951137;
pub const DEFAULT_END_LAT: f64 = -6.55838447945851;
pub const DEFAULT_END_LON: f64 = 107.75965109951137;
pub const DEFAULT_SEGMENT_COUNT: u32 = 10;

const DEFAULT_CAMERA_URL: &str = "http://192.168.0.100:8080/shot.jpg";

const SETTINGS_FILE: &str = "settings.toml";
const GMAP_API_KEY_ENV: &str = "GMAP_API_KEY";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardConfig {
    pub gmap_api_key: String,
    pub camera_url: String,
    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,
    pub segment_count: u32,
    pub capture_from_camera: bool,
    pub verbose_logging: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            gmap_api_key: String::new(),
            camera_url: DEFAULT_CAMERA_URL.to_string(),
            start_lat: DEFAULT_START_LAT,
            start_lon: DEFAULT_START_LON,
            end_lat: DEFAULT_END_LAT,
            end_lon: DEFAULT_END_LON,
            segment_count: DEFAULT_SEGMENT_COUNT,
            capture_from_camera: false,
            verbose_logging: false,
        }
    }
}

impl DashboardConfig {
    // settings.toml from the working directory, every field optional. The
    // maps key can also arrive through the environment, which wins.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string(SETTINGS_FILE) {
            Ok(content) => match toml::from_str(&content) {
                Ok(parsed) => parsed,
                Err(err) => {
                    eprintln!("{} ignored: {}", SETTINGS_FILE, err);
                    DashboardConfig::default()
                }
            },
            Err(_) => DashboardConfig::default(),
        };

        if let Ok(key) = std::env::var(GMAP_API_KEY_ENV) {
            if !key.is_empty() {
                config.gmap_api_key = key;
            }
        }

        config
    }

    // A hand-edited settings file must not seed a route that declare_route
    // would reject.
    pub fn default_route(&self) -> Route {
        let start = GeoPoint::new(self.start_lat, self.start_lon);
        let end = GeoPoint::new(self.end_lat, self.end_lon);

        if start.is_valid() && end.is_valid() {
            Route::new(start, end, self.segment_count)
        } else {
            eprintln!(
                "{} route endpoints out of range, using the stock route",
                SETTINGS_FILE
            );
            Route::new(
                GeoPoint::new(DEFAULT_START_LAT, DEFAULT_START_LON),
                GeoPoint::new(DEFAULT_END_LAT, DEFAULT_END_LON),
                self.segment_count,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_reference_route() {
        let config = DashboardConfig::default();
        assert_eq!(config.start_lat, -6.553863223990267);
        assert_eq!(config.end_lon, 107.75965109951137);
        assert_eq!(config.segment_count, 10);
        assert!(config.gmap_api_key.is_empty());
        assert!(!config.capture_from_camera);
    }

    #[test]
    fn partial_settings_keep_the_remaining_defaults() {
        let config: DashboardConfig = toml::from_str(
            r#"
            gmap_api_key = "abc123"
            segment_count = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.gmap_api_key, "abc123");
        assert_eq!(config.segment_count, 25);
        assert_eq!(config.camera_url, "http://192.168.0.100:8080/shot.jpg");
        assert_eq!(config.start_lat, DEFAULT_START_LAT);
    }

    #[test]
    fn default_route_spans_the_configured_endpoints() {
        let config = DashboardConfig::default();
        let route = config.default_route();
        assert_eq!(route.start, GeoPoint::new(config.start_lat, config.start_lon));
        assert_eq!(route.end, GeoPoint::new(config.end_lat, config.end_lon));
        assert_eq!(route.segment_count, 10);
    }

    #[test]
    fn out_of_range_endpoints_fall_back_to_the_stock_route() {
        let config = DashboardConfig {
            start_lat: 999.0,
            segment_count: 25,
            ..DashboardConfig::default()
        };

        let route = config.default_route();
        assert_eq!(
            route.start,
            GeoPoint::new(DEFAULT_START_LAT, DEFAULT_START_LON)
        );
        assert_eq!(route.end, GeoPoint::new(DEFAULT_END_LAT, DEFAULT_END_LON));
        assert_eq!(route.segment_count, 25);
    }
}
