// `centreon_timeperiod` adapter
//
// Weekday schedules are plain parameters. Exceptions embedded in the
// timeperiod are reconciled as a set keyed by day specification.

use std::collections::BTreeMap;

use centreon_api::CentreonClient;
use centreon_api::models::Timeperiod;
use tracing::{debug, info};

use crate::error::CoreError;
use crate::model::TimeperiodResource;
use crate::resource::{Managed, Resource, absent_on_not_found, stale};
use crate::validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeperiodAdapter;

impl Resource for TimeperiodAdapter {
    type State = TimeperiodResource;

    const TYPE_NAME: &'static str = "centreon_timeperiod";

    async fn create(
        &self,
        client: &CentreonClient,
        desired: &TimeperiodResource,
    ) -> Result<Option<Managed<TimeperiodResource>>, CoreError> {
        validate::timeperiod(desired)?;
        let timeperiods = client.timeperiods();
        let name = desired.name.as_str();

        timeperiods
            .add(&Timeperiod {
                name: desired.name.clone(),
                alias: desired.alias.clone(),
                ..Timeperiod::default()
            })
            .await?;
        info!(name, "timeperiod created");

        for (day, range) in desired.weekdays() {
            if !range.is_empty() {
                timeperiods.setparam(name, day, range).await?;
            }
        }

        for (days, timerange) in &desired.exceptions {
            timeperiods.setexception(name, days, timerange).await?;
        }

        self.read(client, name).await
    }

    async fn read(
        &self,
        client: &CentreonClient,
        id: &str,
    ) -> Result<Option<Managed<TimeperiodResource>>, CoreError> {
        let timeperiods = client.timeperiods();
        let Some(tp) = absent_on_not_found(timeperiods.get(id).await)? else {
            debug!(id, "timeperiod is gone");
            return Ok(None);
        };

        let exceptions: BTreeMap<String, String> = timeperiods
            .getexception(&tp.name)
            .await?
            .into_iter()
            .map(|e| (e.days, e.timerange))
            .collect();

        Ok(Some(Managed::new(
            id,
            TimeperiodResource {
                name: tp.name,
                alias: tp.alias,
                sunday: tp.sunday,
                monday: tp.monday,
                tuesday: tp.tuesday,
                wednesday: tp.wednesday,
                thursday: tp.thursday,
                friday: tp.friday,
                saturday: tp.saturday,
                exceptions,
            },
        )))
    }

    async fn update(
        &self,
        client: &CentreonClient,
        id: &str,
        prior: &TimeperiodResource,
        desired: &TimeperiodResource,
    ) -> Result<Option<Managed<TimeperiodResource>>, CoreError> {
        validate::timeperiod(desired)?;
        let timeperiods = client.timeperiods();
        let mut id = id.to_owned();

        if prior.name != desired.name {
            timeperiods.setparam(&id, "name", &desired.name).await?;
            id.clone_from(&desired.name);
        }
        if prior.alias != desired.alias {
            timeperiods.setparam(&id, "alias", &desired.alias).await?;
        }

        for ((day, before), (_, after)) in prior.weekdays().into_iter().zip(desired.weekdays()) {
            if before != after {
                timeperiods.setparam(&id, day, after).await?;
            }
        }

        if prior.exceptions != desired.exceptions {
            for (days, timerange) in &desired.exceptions {
                timeperiods.setexception(&id, days, timerange).await?;
            }

            let current = timeperiods.getexception(&id).await?;
            let wanted: Vec<&str> = desired.exceptions.keys().map(String::as_str).collect();
            for days in stale(current.iter().map(|e| e.days.as_str()), &wanted) {
                timeperiods.delexception(&id, &days).await?;
            }
        }

        self.read(client, &id).await
    }

    async fn delete(&self, client: &CentreonClient, id: &str) -> Result<(), CoreError> {
        if !self.exists(client, id).await? {
            debug!(id, "timeperiod already absent");
            return Ok(());
        }
        client.timeperiods().del(id).await?;
        info!(id, "timeperiod deleted");
        Ok(())
    }

    async fn exists(&self, client: &CentreonClient, id: &str) -> Result<bool, CoreError> {
        Ok(client.timeperiods().exists(id).await?)
    }
}
