use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// `centreon_timeperiod_exception`: one exception managed on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeperiodExceptionResource {
    /// Name of the owning timeperiod.
    pub timeperiod_id: String,
    pub days: String,
    pub timerange: String,
}

impl TimeperiodExceptionResource {
    pub fn id(&self) -> ExceptionId {
        ExceptionId {
            timeperiod: self.timeperiod_id.clone(),
            days: self.days.clone(),
        }
    }
}

/// Composite identity `<timeperiod>_<days>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionId {
    pub timeperiod: String,
    pub days: String,
}

impl ExceptionId {
    /// Split an id on `_`. Exactly two parts are required, so neither the
    /// timeperiod name nor the day specification may contain `_`.
    pub fn parse(id: &str) -> Result<Self, CoreError> {
        let parts: Vec<&str> = id.split('_').collect();
        match parts.as_slice() {
            [timeperiod, days] => Ok(Self {
                timeperiod: (*timeperiod).to_owned(),
                days: (*days).to_owned(),
            }),
            _ => Err(CoreError::InvalidId { id: id.to_owned() }),
        }
    }
}

impl fmt::Display for ExceptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.timeperiod, self.days)
    }
}
