// `centreon_command` adapter

use centreon_api::CentreonClient;
use centreon_api::models::Command;
use tracing::{debug, info};

use crate::error::CoreError;
use crate::model::CommandResource;
use crate::resource::{Managed, Resource, absent_on_not_found};
use crate::validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct CommandAdapter;

impl Resource for CommandAdapter {
    type State = CommandResource;

    const TYPE_NAME: &'static str = "centreon_command";

    async fn create(
        &self,
        client: &CentreonClient,
        desired: &CommandResource,
    ) -> Result<Option<Managed<CommandResource>>, CoreError> {
        validate::command(desired)?;

        let command = Command {
            name: desired.name.clone(),
            command_type: desired.command_type.clone(),
            line: desired.line.clone(),
            ..Command::default()
        };
        client.commands().add(&command).await?;
        info!(name = %desired.name, "command created");

        self.read(client, &desired.name).await
    }

    async fn read(
        &self,
        client: &CentreonClient,
        id: &str,
    ) -> Result<Option<Managed<CommandResource>>, CoreError> {
        let Some(command) = absent_on_not_found(client.commands().get(id).await)? else {
            debug!(id, "command is gone");
            return Ok(None);
        };

        Ok(Some(Managed::new(
            id,
            CommandResource {
                name: command.name,
                command_type: command.command_type,
                line: command.line,
            },
        )))
    }

    async fn update(
        &self,
        client: &CentreonClient,
        id: &str,
        prior: &CommandResource,
        desired: &CommandResource,
    ) -> Result<Option<Managed<CommandResource>>, CoreError> {
        validate::command(desired)?;
        let commands = client.commands();
        let mut id = id.to_owned();

        if prior.name != desired.name {
            commands.setparam(&id, "name", &desired.name).await?;
            id.clone_from(&desired.name);
        }
        if prior.command_type != desired.command_type {
            commands.setparam(&id, "type", &desired.command_type).await?;
        }
        if prior.line != desired.line {
            commands.setparam(&id, "line", &desired.line).await?;
        }

        self.read(client, &id).await
    }

    async fn delete(&self, client: &CentreonClient, id: &str) -> Result<(), CoreError> {
        if !self.exists(client, id).await? {
            debug!(id, "command already absent");
            return Ok(());
        }
        client.commands().del(id).await?;
        info!(id, "command deleted");
        Ok(())
    }

    async fn exists(&self, client: &CentreonClient, id: &str) -> Result<bool, CoreError> {
        Ok(client.commands().exists(id).await?)
    }
}
