// CLAPI command verbs (`CMD`)

use tracing::debug;

use crate::clapi::models::Command;
use crate::clapi::{ClapiObject, require, values};
use crate::client::CentreonClient;
use crate::error::Error;

const OBJECT: ClapiObject = ClapiObject::Command;

/// Command endpoints. Obtained through [`CentreonClient::commands`].
#[derive(Debug, Clone)]
pub struct Commands<'a> {
    client: &'a CentreonClient,
}

impl<'a> Commands<'a> {
    pub(crate) fn new(client: &'a CentreonClient) -> Self {
        Self { client }
    }

    /// List commands, filtered server-side by `filter` (empty lists all).
    pub async fn show(&self, filter: &str) -> Result<Vec<Command>, Error> {
        self.client.clapi_list("show", OBJECT, filter).await
    }

    /// Fetch the command named exactly `name`.
    pub async fn get(&self, name: &str) -> Result<Command, Error> {
        require("Get", &[("name", name)])?;

        self.show(name)
            .await?
            .into_iter()
            .rfind(|c| c.name == name)
            .filter(|c| !c.id.is_empty())
            .ok_or_else(|| Error::NotFound {
                object: OBJECT,
                name: name.to_owned(),
            })
    }

    pub async fn exists(&self, name: &str) -> Result<bool, Error> {
        require("Exists", &[("name", name)])?;
        Ok(self.show(name).await?.iter().any(|c| c.name == name))
    }

    /// Create a command from its name, type and line.
    pub async fn add(&self, command: &Command) -> Result<(), Error> {
        require(
            "Add",
            &[
                ("name", command.name.as_str()),
                ("type", command.command_type.as_str()),
                ("line", command.line.as_str()),
            ],
        )?;
        debug!(name = %command.name, "adding command");

        let values = values(&[
            command.name.as_str(),
            command.command_type.as_str(),
            command.line.as_str(),
        ]);
        self.client.clapi("add", OBJECT, &values).await?;
        Ok(())
    }

    pub async fn del(&self, name: &str) -> Result<(), Error> {
        require("Del", &[("name", name)])?;
        self.client.clapi("del", OBJECT, name).await?;
        Ok(())
    }

    /// Change one parameter of a command. An empty `value` clears it.
    pub async fn setparam(&self, name: &str, param: &str, value: &str) -> Result<(), Error> {
        require("Setparam", &[("name", name), ("param", param)])?;
        self.client
            .clapi("setparam", OBJECT, &values(&[name, param, value]))
            .await?;
        Ok(())
    }
}
