use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("step size menu must not contain 0")]
    ZeroStepSize
}

/// Plot window of the derivatives page: the sampled x range and the
/// fixed y axis bounds.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct DisplayWindow {
    x_min: f64,
    x_max: f64,
    step: f64,
    y_min: f64,
    y_max: f64
}

impl DisplayWindow {
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }
}

impl Default for DisplayWindow {
    fn default() -> DisplayWindow {
        DisplayWindow {
            x_min: -2.0,
            x_max: 2.0,
            step: 0.25,
            y_min: 0.0,
            y_max: 5.0
        }
    }
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    evaluation_points: Vec<f64>,
    step_sizes: Vec<f64>,
    window: DisplayWindow
}

/// The fixed selection menus offered to the user and the display
/// window. h = 0 never reaches the engine because the step menu is
/// validated on load.
pub struct Configuration {
    evaluation_points: Vec<f64>,
    step_sizes: Vec<f64>,
    window: DisplayWindow
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            evaluation_points: vec![-1.0, 0.0, 0.5, 1.0],
            step_sizes: vec![10.0, 5.0, 1.0, 0.5, 0.1, 0.05,
                             0.01, 0.001, 0.0001],
            window: DisplayWindow::default()
        }
    }

    pub fn from_reader(file_path: String) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Self::from_json_prop(json_prop)
    }

    pub fn from_json_str(text: &str) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(text)?;
        Self::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ConfigurationError> {
        if json_prop.step_sizes.iter().any(|&h| h == 0.0) {
            return Err(ConfigurationError::ZeroStepSize);
        }
        Ok(Configuration {
            evaluation_points: json_prop.evaluation_points,
            step_sizes: json_prop.step_sizes,
            window: json_prop.window
        })
    }

    pub fn evaluation_points(&self) -> &[f64] {
        &self.evaluation_points
    }

    pub fn step_sizes(&self) -> &[f64] {
        &self.step_sizes
    }

    pub fn window(&self) -> &DisplayWindow {
        &self.window
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page_menus() {
        let config = Configuration::new();
        assert_eq!(config.evaluation_points(), &[-1.0, 0.0, 0.5, 1.0]);
        assert_eq!(config.step_sizes().len(), 9);
        assert!(config.step_sizes().iter().all(|&h| h != 0.0));
        assert_eq!(config.window().x_min(), -2.0);
        assert_eq!(config.window().x_max(), 2.0);
        assert_eq!(config.window().step(), 0.25);
    }

    #[test]
    fn parses_a_json_menu() {
        let text = r#"{
            "evaluation_points": [0.0, 1.0],
            "step_sizes": [1.0, 0.5],
            "window": {
                "x_min": -1.0, "x_max": 1.0, "step": 0.5,
                "y_min": 0.0, "y_max": 3.0
            }
        }"#;
        let config = Configuration::from_json_str(text).unwrap();
        assert_eq!(config.evaluation_points(), &[0.0, 1.0]);
        assert_eq!(config.step_sizes(), &[1.0, 0.5]);
        assert_eq!(config.window().y_max(), 3.0);
    }

    #[test]
    fn zero_step_size_in_the_menu_is_rejected() {
        let text = r#"{
            "evaluation_points": [1.0],
            "step_sizes": [1.0, 0.0],
            "window": {
                "x_min": -2.0, "x_max": 2.0, "step": 0.25,
                "y_min": 0.0, "y_max": 5.0
            }
        }"#;
        assert!(matches!(Configuration::from_json_str(text),
                         Err(ConfigurationError::ZeroStepSize)));
    }

    #[test]
    fn malformed_json_reports_a_parse_error() {
        assert!(matches!(Configuration::from_json_str("{"),
                         Err(ConfigurationError::Json(_))));
    }
}
