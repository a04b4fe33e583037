//! The user preferences the settings panel edits
//!
//! Only the data lives here. The panel itself, like all UI, is out of this
//! crate's scope: it reads these values and writes them back through the
//! setters, and the provider persists them alongside the planner tree.

use serde::{Deserialize, Serialize};

use crate::state::ViewMode;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The calendar layout the application starts in
    #[serde(rename = "defaultView")]
    default_view: ViewMode,

    /// Whether calendar weeks start on Monday (rather than Sunday)
    #[serde(rename = "weekStartsMonday")]
    week_starts_monday: bool,

    /// Whether clock times display as 24-hour text
    #[serde(rename = "clock24h")]
    clock_24h: bool,

    /// The daily energy intake target of the nutrition widgets, in kcal
    #[serde(rename = "kcalTarget")]
    kcal_target: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_view: ViewMode::default(),
            week_starts_monday: true,
            clock_24h: false,
            kcal_target: None,
        }
    }
}

impl Settings {
    pub fn default_view(&self) -> ViewMode      { self.default_view }
    pub fn week_starts_monday(&self) -> bool    { self.week_starts_monday }
    pub fn clock_24h(&self) -> bool             { self.clock_24h }
    pub fn kcal_target(&self) -> Option<u32>    { self.kcal_target }

    pub fn set_default_view(&mut self, mode: ViewMode) {
        self.default_view = mode;
    }

    pub fn set_week_starts_monday(&mut self, on_monday: bool) {
        self.week_starts_monday = on_monday;
    }

    pub fn set_clock_24h(&mut self, twenty_four: bool) {
        self.clock_24h = twenty_four;
    }

    pub fn set_kcal_target(&mut self, target: Option<u32>) {
        self.kcal_target = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_settings() {
        let mut settings = Settings::default();
        assert_eq!(settings.default_view(), ViewMode::Week);
        assert_eq!(settings.week_starts_monday(), true);

        settings.set_kcal_target(Some(2200));
        settings.set_default_view(ViewMode::Month);

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["defaultView"], "month");
        assert_eq!(json["kcalTarget"], 2200);

        let retrieved: Settings = serde_json::from_value(json).unwrap();
        assert_eq!(settings, retrieved);

        // Older documents may lack fields entirely
        let retrieved: Settings = serde_json::from_str(r#"{"clock24h": true}"#).unwrap();
        assert_eq!(retrieved.clock_24h(), true);
        assert_eq!(retrieved.week_starts_monday(), true);
        assert_eq!(retrieved.kcal_target(), None);
    }
}
