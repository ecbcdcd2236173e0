// CLAPI host verbs (`HOST`)
//
// Besides the primary record, a host carries ~40 parameters read in one
// batched `getparam` call, and several relationships (templates, macros,
// parents, contacts, contact groups, host groups), each listed and changed
// one element at a time. All relationship listings share the `{id, name}`
// shape, except macros.

use tracing::debug;

use crate::clapi::models::{Host, HostMacro, HostParams, Instance, LinkedObject};
use crate::clapi::{ClapiObject, require, values};
use crate::client::CentreonClient;
use crate::error::Error;

const OBJECT: ClapiObject = ClapiObject::Host;

/// Host endpoints. Obtained through [`CentreonClient::hosts`].
#[derive(Debug, Clone)]
pub struct Hosts<'a> {
    client: &'a CentreonClient,
}

impl<'a> Hosts<'a> {
    pub(crate) fn new(client: &'a CentreonClient) -> Self {
        Self { client }
    }

    // ── Primary record ───────────────────────────────────────────────

    pub async fn show(&self, filter: &str) -> Result<Vec<Host>, Error> {
        self.client.clapi_list("show", OBJECT, filter).await
    }

    /// Fetch the host named exactly `name`.
    pub async fn get(&self, name: &str) -> Result<Host, Error> {
        require("Get", &[("name", name)])?;

        self.show(name)
            .await?
            .into_iter()
            .rfind(|h| h.name == name)
            .filter(|h| !h.id.is_empty())
            .ok_or_else(|| Error::NotFound {
                object: OBJECT,
                name: name.to_owned(),
            })
    }

    pub async fn exists(&self, name: &str) -> Result<bool, Error> {
        require("Exists", &[("name", name)])?;
        Ok(self.show(name).await?.iter().any(|h| h.name == name))
    }

    /// Create a host attached to the poller `instance`.
    ///
    /// Wire values: `name;alias;address;;instance;`. The template and host
    /// group columns stay empty; both are linked separately, and
    /// `activate` is applied with `setparam`.
    pub async fn add(&self, host: &Host, instance: &str) -> Result<(), Error> {
        require("Add", &[("name", host.name.as_str()), ("instance", instance)])?;
        debug!(name = %host.name, instance, "adding host");

        let values = values(&[
            host.name.as_str(),
            host.alias.as_str(),
            host.address.as_str(),
            "",
            instance,
            "",
        ]);
        self.client.clapi("add", OBJECT, &values).await?;
        Ok(())
    }

    pub async fn del(&self, name: &str) -> Result<(), Error> {
        require("Del", &[("name", name)])?;
        self.client.clapi("del", OBJECT, name).await?;
        Ok(())
    }

    /// Change one parameter. An empty `value` clears it.
    pub async fn setparam(&self, name: &str, param: &str, value: &str) -> Result<(), Error> {
        require("Setparam", &[("name", name), ("param", param)])?;
        self.client
            .clapi("setparam", OBJECT, &values(&[name, param, value]))
            .await?;
        Ok(())
    }

    /// Read several parameters in one call.
    ///
    /// `name` is always requested first so the API answers with a list of
    /// rows even when a single parameter is asked for.
    pub async fn getparam(&self, name: &str, params: &[&str]) -> Result<Vec<HostParams>, Error> {
        let joined = params.join("|");
        require("Getparam", &[("name", name), ("params", joined.as_str())])?;

        let values = format!("{name};name|{joined}");
        self.client.clapi_list("getparam", OBJECT, &values).await
    }

    // ── Poller ───────────────────────────────────────────────────────

    pub async fn setinstance(&self, name: &str, instance: &str) -> Result<(), Error> {
        require("Setinstance", &[("name", name), ("instance", instance)])?;
        self.client
            .clapi("setinstance", OBJECT, &values(&[name, instance]))
            .await?;
        Ok(())
    }

    /// Name of the poller the host is attached to.
    pub async fn getinstance(&self, name: &str) -> Result<String, Error> {
        require("Getinstance", &[("name", name)])?;

        let mut instances: Vec<Instance> =
            self.client.clapi_list("showinstance", OBJECT, name).await?;
        match instances.len() {
            1 => Ok(instances.remove(0).name),
            n => Err(Error::UnexpectedResponse(format!(
                "expected exactly one instance for host {name}, got {n}"
            ))),
        }
    }

    // ── Macros ───────────────────────────────────────────────────────

    /// Add or update a macro. `is_password` must be `"0"` or `"1"`;
    /// `source` is ignored.
    pub async fn setmacro(&self, name: &str, host_macro: &HostMacro) -> Result<(), Error> {
        require(
            "Setmacro",
            &[("name", name), ("macro", host_macro.name.as_str())],
        )?;
        if !matches!(host_macro.is_password.as_str(), "0" | "1") {
            return Err(Error::precondition(
                "Setmacro",
                "is_password should be equal to 0 or 1",
            ));
        }

        let values = values(&[
            name,
            host_macro.name.as_str(),
            host_macro.value.as_str(),
            host_macro.is_password.as_str(),
            host_macro.description.as_str(),
        ]);
        self.client.clapi("setmacro", OBJECT, &values).await?;
        Ok(())
    }

    /// Macros of the host, inherited ones included.
    pub async fn getmacro(&self, name: &str) -> Result<Vec<HostMacro>, Error> {
        require("Getmacro", &[("name", name)])?;
        self.client.clapi_list("getmacro", OBJECT, name).await
    }

    pub async fn delmacro(&self, name: &str, macro_name: &str) -> Result<(), Error> {
        require("Delmacro", &[("name", name), ("macro", macro_name)])?;
        self.client
            .clapi("delmacro", OBJECT, &values(&[name, macro_name]))
            .await?;
        Ok(())
    }

    // ── Templates ────────────────────────────────────────────────────

    pub async fn gettemplates(&self, name: &str) -> Result<Vec<LinkedObject>, Error> {
        self.list_linked("Gettemplates", "gettemplate", name).await
    }

    pub async fn addtemplate(&self, name: &str, template: &str) -> Result<(), Error> {
        self.link("Addtemplate", "addtemplate", name, ("template", template))
            .await
    }

    pub async fn deltemplate(&self, name: &str, template: &str) -> Result<(), Error> {
        self.link("Deltemplate", "deltemplate", name, ("template", template))
            .await
    }

    /// Materialize the configuration inherited from linked templates.
    pub async fn applytemplates(&self, name: &str) -> Result<(), Error> {
        require("Applytemplates", &[("name", name)])?;
        self.client.clapi("applytpl", OBJECT, name).await?;
        Ok(())
    }

    // ── Parents ──────────────────────────────────────────────────────

    pub async fn getparents(&self, name: &str) -> Result<Vec<LinkedObject>, Error> {
        self.list_linked("Getparents", "getparent", name).await
    }

    pub async fn addparent(&self, name: &str, parent: &str) -> Result<(), Error> {
        self.link("Addparent", "addparent", name, ("parent", parent))
            .await
    }

    /// Replace all parents. `parents` is `|`-separated.
    pub async fn setparent(&self, name: &str, parents: &str) -> Result<(), Error> {
        self.link("Setparent", "setparent", name, ("parents", parents))
            .await
    }

    pub async fn delparent(&self, name: &str, parent: &str) -> Result<(), Error> {
        self.link("Delparent", "delparent", name, ("parent", parent))
            .await
    }

    // ── Contact groups ───────────────────────────────────────────────

    pub async fn getcgs(&self, name: &str) -> Result<Vec<LinkedObject>, Error> {
        self.list_linked("Getcgs", "getcontactgroup", name).await
    }

    pub async fn addcg(&self, name: &str, cg: &str) -> Result<(), Error> {
        self.link("Addcg", "addcontactgroup", name, ("cg", cg)).await
    }

    /// Replace all contact groups. `cgs` is `|`-separated.
    pub async fn setcg(&self, name: &str, cgs: &str) -> Result<(), Error> {
        self.link("Setcg", "setcontactgroup", name, ("cgs", cgs)).await
    }

    pub async fn delcg(&self, name: &str, cg: &str) -> Result<(), Error> {
        self.link("Delcg", "delcontactgroup", name, ("cg", cg)).await
    }

    // ── Contacts ─────────────────────────────────────────────────────

    pub async fn getcontacts(&self, name: &str) -> Result<Vec<LinkedObject>, Error> {
        self.list_linked("Getcontacts", "getcontact", name).await
    }

    pub async fn addcontact(&self, name: &str, contact: &str) -> Result<(), Error> {
        self.link("Addcontact", "addcontact", name, ("contact", contact))
            .await
    }

    /// Replace all contacts. `contacts` is `|`-separated.
    pub async fn setcontact(&self, name: &str, contacts: &str) -> Result<(), Error> {
        self.link("Setcontact", "setcontact", name, ("contacts", contacts))
            .await
    }

    pub async fn delcontact(&self, name: &str, contact: &str) -> Result<(), Error> {
        self.link("Delcontact", "delcontact", name, ("contact", contact))
            .await
    }

    // ── Host groups ──────────────────────────────────────────────────

    pub async fn gethostgroups(&self, name: &str) -> Result<Vec<LinkedObject>, Error> {
        self.list_linked("Gethostgroups", "gethostgroup", name).await
    }

    pub async fn addhostgroup(&self, name: &str, hostgroup: &str) -> Result<(), Error> {
        self.link("Addhostgroup", "addhostgroup", name, ("hostgroup", hostgroup))
            .await
    }

    /// Replace all host groups. `hostgroups` is `|`-separated.
    pub async fn sethostgroup(&self, name: &str, hostgroups: &str) -> Result<(), Error> {
        self.link(
            "Sethostgroup",
            "sethostgroup",
            name,
            ("hostgroups", hostgroups),
        )
        .await
    }

    pub async fn delhostgroup(&self, name: &str, hostgroup: &str) -> Result<(), Error> {
        self.link("Delhostgroup", "delhostgroup", name, ("hostgroup", hostgroup))
            .await
    }

    // ── State ────────────────────────────────────────────────────────

    /// Attach a severity. An empty `severity` is passed through as-is.
    pub async fn setseverity(&self, name: &str, severity: &str) -> Result<(), Error> {
        require("Setseverity", &[("name", name)])?;
        self.client
            .clapi("setseverity", OBJECT, &values(&[name, severity]))
            .await?;
        Ok(())
    }

    pub async fn unsetseverity(&self, name: &str) -> Result<(), Error> {
        self.single("Unsetseverity", "unsetseverity", name).await
    }

    pub async fn enable(&self, name: &str) -> Result<(), Error> {
        self.single("Enable", "enable", name).await
    }

    pub async fn disable(&self, name: &str) -> Result<(), Error> {
        self.single("Disable", "disable", name).await
    }

    // ── Helpers ──────────────────────────────────────────────────────

    async fn list_linked(
        &self,
        operation: &'static str,
        action: &'static str,
        name: &str,
    ) -> Result<Vec<LinkedObject>, Error> {
        require(operation, &[("name", name)])?;
        self.client.clapi_list(action, OBJECT, name).await
    }

    async fn link(
        &self,
        operation: &'static str,
        action: &'static str,
        name: &str,
        (arg, target): (&str, &str),
    ) -> Result<(), Error> {
        require(operation, &[("name", name), (arg, target)])?;
        debug!(action, host = name, target, "updating host relationship");
        self.client
            .clapi(action, OBJECT, &values(&[name, target]))
            .await?;
        Ok(())
    }

    async fn single(
        &self,
        operation: &'static str,
        action: &'static str,
        name: &str,
    ) -> Result<(), Error> {
        require(operation, &[("name", name)])?;
        self.client.clapi(action, OBJECT, name).await?;
        Ok(())
    }
}
