// `centreon_timeperiod_exception` adapter
//
// Manages a single exception of an existing timeperiod, addressed by the
// composite id `<timeperiod>_<days>`. Only `timerange` can change in place.

use centreon_api::CentreonClient;
use tracing::{debug, info};

use crate::error::CoreError;
use crate::model::{ExceptionId, TimeperiodExceptionResource};
use crate::resource::{Managed, Resource};
use crate::validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeperiodExceptionAdapter;

impl Resource for TimeperiodExceptionAdapter {
    type State = TimeperiodExceptionResource;

    const TYPE_NAME: &'static str = "centreon_timeperiod_exception";

    async fn create(
        &self,
        client: &CentreonClient,
        desired: &TimeperiodExceptionResource,
    ) -> Result<Option<Managed<TimeperiodExceptionResource>>, CoreError> {
        validate::timeperiod_exception(desired)?;
        let timeperiods = client.timeperiods();

        if timeperiods.get(&desired.timeperiod_id).await.is_err() {
            return Err(CoreError::NotFound {
                entity: "timeperiod",
                name: desired.timeperiod_id.clone(),
            });
        }

        timeperiods
            .setexception(&desired.timeperiod_id, &desired.days, &desired.timerange)
            .await?;

        let id = desired.id().to_string();
        info!(%id, "timeperiod exception created");
        self.read(client, &id).await
    }

    async fn read(
        &self,
        client: &CentreonClient,
        id: &str,
    ) -> Result<Option<Managed<TimeperiodExceptionResource>>, CoreError> {
        let ExceptionId { timeperiod, days } = ExceptionId::parse(id)?;

        let found = client
            .timeperiods()
            .getexception(&timeperiod)
            .await?
            .into_iter()
            .find(|e| e.days == days);

        let Some(exception) = found else {
            debug!(id, "timeperiod exception is gone");
            return Ok(None);
        };

        Ok(Some(Managed::new(
            id,
            TimeperiodExceptionResource {
                timeperiod_id: timeperiod,
                days,
                timerange: exception.timerange,
            },
        )))
    }

    async fn update(
        &self,
        client: &CentreonClient,
        id: &str,
        prior: &TimeperiodExceptionResource,
        desired: &TimeperiodExceptionResource,
    ) -> Result<Option<Managed<TimeperiodExceptionResource>>, CoreError> {
        validate::timeperiod_exception(desired)?;
        let ExceptionId { timeperiod, days } = ExceptionId::parse(id)?;

        if prior.timerange != desired.timerange {
            client
                .timeperiods()
                .setexception(&timeperiod, &days, &desired.timerange)
                .await?;
        }

        self.read(client, id).await
    }

    async fn delete(&self, client: &CentreonClient, id: &str) -> Result<(), CoreError> {
        if !self.exists(client, id).await? {
            debug!(id, "timeperiod exception already absent");
            return Ok(());
        }

        let ExceptionId { timeperiod, days } = ExceptionId::parse(id)?;
        client.timeperiods().delexception(&timeperiod, &days).await?;
        info!(id, "timeperiod exception deleted");
        Ok(())
    }

    async fn exists(&self, client: &CentreonClient, id: &str) -> Result<bool, CoreError> {
        let ExceptionId { timeperiod, days } = ExceptionId::parse(id)?;
        Ok(client
            .timeperiods()
            .getexception(&timeperiod)
            .await?
            .iter()
            .any(|e| e.days == days))
    }
}
