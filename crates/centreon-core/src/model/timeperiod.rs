use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `centreon_timeperiod`: weekly schedule plus dated exceptions.
///
/// Weekday values use the Centreon range syntax (`08:00-12:00,14:00-18:00`);
/// an empty string means the day is not covered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeperiodResource {
    pub name: String,
    pub alias: String,
    pub sunday: String,
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    /// Day specification (e.g. `december 25`) to time range.
    #[serde(rename = "exception")]
    pub exceptions: BTreeMap<String, String>,
}

impl TimeperiodResource {
    /// Weekday schedules keyed by their parameter name, Sunday first.
    pub fn weekdays(&self) -> [(&'static str, &str); 7] {
        [
            ("sunday", self.sunday.as_str()),
            ("monday", self.monday.as_str()),
            ("tuesday", self.tuesday.as_str()),
            ("wednesday", self.wednesday.as_str()),
            ("thursday", self.thursday.as_str()),
            ("friday", self.friday.as_str()),
            ("saturday", self.saturday.as_str()),
        ]
    }
}
