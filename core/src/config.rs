use serde::Deserialize;

use crate::geometry::{Position, POSITION_MAX, POSITION_MIN};

pub const DEFAULT_CONTAINER_SELECTOR: &str = ".beforeAfterContainer";
pub const DEFAULT_DIVIDER_SELECTOR: &str = ".slider";
pub const DEFAULT_AFTER_SELECTOR: &str = ".after";
pub const DEFAULT_CURSOR: &str = "col-resize";
pub const DEFAULT_DRAGGING_CLASS: &str = "is-dragging";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} must not be empty")]
    EmptySelector(&'static str),
    #[error("initial position {0} is outside 0..=100")]
    InitialPosition(f64),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    pub container_selector: String,
    pub divider_selector: String,
    pub after_selector: String,
    pub cursor: String,
    pub dragging_class: String,
    pub initial_position: Option<f64>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            divider_selector: DEFAULT_DIVIDER_SELECTOR.to_string(),
            after_selector: DEFAULT_AFTER_SELECTOR.to_string(),
            cursor: DEFAULT_CURSOR.to_string(),
            dragging_class: DEFAULT_DRAGGING_CLASS.to_string(),
            initial_position: None,
        }
    }
}

impl SliderConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SliderConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let selectors = [
            ("containerSelector", &self.container_selector),
            ("dividerSelector", &self.divider_selector),
            ("afterSelector", &self.after_selector),
        ];
        for (name, value) in selectors {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptySelector(name));
            }
        }
        if let Some(value) = self.initial_position {
            if !value.is_finite() || !(POSITION_MIN..=POSITION_MAX).contains(&value) {
                return Err(ConfigError::InitialPosition(value));
            }
        }
        Ok(())
    }

    pub fn initial_position(&self) -> Option<Position> {
        self.initial_position.map(Position::new)
    }
}

/// Parses a per-container position override such as `"40"` or `"40%"`.
pub fn parse_position_attr(raw: &str) -> Option<Position> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let value: f64 = number.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(Position::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = SliderConfig::from_json("{}").unwrap();
        assert_eq!(config, SliderConfig::default());
        assert_eq!(config.container_selector, ".beforeAfterContainer");
    }

    #[test]
    fn camel_case_fields_override_defaults() {
        let config =
            SliderConfig::from_json(r#"{"dividerSelector":".handle","initialPosition":30}"#)
                .unwrap();
        assert_eq!(config.divider_selector, ".handle");
        assert_eq!(config.after_selector, ".after");
        assert_eq!(config.initial_position(), Some(Position::new(30.0)));
    }

    #[test]
    fn rejects_blank_selector() {
        let err = SliderConfig::from_json(r#"{"afterSelector":"  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySelector("afterSelector")));
    }

    #[test]
    fn rejects_out_of_range_initial_position() {
        let err = SliderConfig::from_json(r#"{"initialPosition":140}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InitialPosition(value) if value == 140.0));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SliderConfig::from_json("{containerSelector:").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn position_attr_accepts_percent_suffix() {
        assert_eq!(parse_position_attr("40%"), Some(Position::new(40.0)));
        assert_eq!(parse_position_attr(" 12.5 "), Some(Position::new(12.5)));
        assert_eq!(parse_position_attr("250"), Some(Position::END));
        assert_eq!(parse_position_attr("wide"), None);
        assert_eq!(parse_position_attr("NaN"), None);
    }
}
