// CLAPI timeperiod verbs (`TP`)
//
// Weekday schedules are plain parameters (`setparam name;monday;...`).
// Exceptions are keyed by their day specification.

use tracing::debug;

use crate::clapi::models::{Timeperiod, TimeperiodException};
use crate::clapi::{ClapiObject, require, values};
use crate::client::CentreonClient;
use crate::error::Error;

const OBJECT: ClapiObject = ClapiObject::Timeperiod;

/// Parameter names of the seven weekday schedules, Sunday first.
pub const WEEKDAYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Timeperiod endpoints. Obtained through [`CentreonClient::timeperiods`].
#[derive(Debug, Clone)]
pub struct Timeperiods<'a> {
    client: &'a CentreonClient,
}

impl<'a> Timeperiods<'a> {
    pub(crate) fn new(client: &'a CentreonClient) -> Self {
        Self { client }
    }

    pub async fn show(&self, filter: &str) -> Result<Vec<Timeperiod>, Error> {
        self.client.clapi_list("show", OBJECT, filter).await
    }

    /// Fetch the timeperiod named exactly `name`.
    pub async fn get(&self, name: &str) -> Result<Timeperiod, Error> {
        require("Get", &[("name", name)])?;

        self.show(name)
            .await?
            .into_iter()
            .rfind(|tp| tp.name == name)
            .filter(|tp| !tp.id.is_empty())
            .ok_or_else(|| Error::NotFound {
                object: OBJECT,
                name: name.to_owned(),
            })
    }

    pub async fn exists(&self, name: &str) -> Result<bool, Error> {
        require("Exists", &[("name", name)])?;
        Ok(self.show(name).await?.iter().any(|tp| tp.name == name))
    }

    /// Create a timeperiod from its name and alias. Weekdays are set
    /// afterwards with [`setparam`](Self::setparam).
    pub async fn add(&self, timeperiod: &Timeperiod) -> Result<(), Error> {
        let (name, alias) = (timeperiod.name.as_str(), timeperiod.alias.as_str());
        require("Add", &[("name", name), ("alias", alias)])?;
        debug!(name, "adding timeperiod");

        self.client
            .clapi("add", OBJECT, &values(&[name, alias]))
            .await?;
        Ok(())
    }

    pub async fn del(&self, name: &str) -> Result<(), Error> {
        require("Del", &[("name", name)])?;
        self.client.clapi("del", OBJECT, name).await?;
        Ok(())
    }

    /// Change one parameter. Unlike the other objects, timeperiods refuse
    /// an empty value.
    pub async fn setparam(&self, name: &str, param: &str, value: &str) -> Result<(), Error> {
        require(
            "Setparam",
            &[("name", name), ("param", param), ("value", value)],
        )?;
        self.client
            .clapi("setparam", OBJECT, &values(&[name, param, value]))
            .await?;
        Ok(())
    }

    // ── Exceptions ───────────────────────────────────────────────────

    /// Add or replace the exception for `days`.
    pub async fn setexception(&self, name: &str, days: &str, timerange: &str) -> Result<(), Error> {
        require(
            "Setexception",
            &[("name", name), ("days", days), ("timerange", timerange)],
        )?;
        debug!(name, days, "setting timeperiod exception");

        self.client
            .clapi("setexception", OBJECT, &values(&[name, days, timerange]))
            .await?;
        Ok(())
    }

    pub async fn getexception(&self, name: &str) -> Result<Vec<TimeperiodException>, Error> {
        require("Getexception", &[("name", name)])?;
        self.client.clapi_list("getexception", OBJECT, name).await
    }

    pub async fn delexception(&self, name: &str, days: &str) -> Result<(), Error> {
        require("Delexception", &[("name", name), ("days", days)])?;
        self.client
            .clapi("delexception", OBJECT, &values(&[name, days]))
            .await?;
        Ok(())
    }
}
