// `centreon_host` adapter
//
// Create order: primary record, scalar parameters, templates (then
// apply), macros, contacts, contact groups, notification options, host
// groups, parents, stalking options, read back.
//
// Relationship updates add every desired element, then list the remote
// set and delete what is no longer desired. Adds of elements that are
// already linked are idempotent on the remote side.

use std::collections::BTreeSet;

use centreon_api::models::{Host, HostMacro};
use centreon_api::{CentreonClient, Hosts};
use tracing::{debug, info};

use crate::coerce::{NOTIFICATION_NONE, decode_bool, decode_options, encode_bool, encode_options};
use crate::error::CoreError;
use crate::model::{HostResource, MacroSpec};
use crate::params::{HOST_PARAMS, NOTIFICATION_OPTIONS, STALKING_OPTIONS, read_params};
use crate::resource::{Managed, Resource, absent_on_not_found, stale};
use crate::validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct HostAdapter;

/// Host relationships that are plain lists of linked object names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Template,
    Contact,
    ContactGroup,
    HostGroup,
    Parent,
}

impl Link {
    async fn add(self, hosts: &Hosts<'_>, host: &str, target: &str) -> Result<(), CoreError> {
        match self {
            Self::Template => hosts.addtemplate(host, target).await?,
            Self::Contact => hosts.addcontact(host, target).await?,
            Self::ContactGroup => hosts.addcg(host, target).await?,
            Self::HostGroup => hosts.addhostgroup(host, target).await?,
            Self::Parent => hosts.addparent(host, target).await?,
        }
        Ok(())
    }

    async fn del(self, hosts: &Hosts<'_>, host: &str, target: &str) -> Result<(), CoreError> {
        match self {
            Self::Template => hosts.deltemplate(host, target).await?,
            Self::Contact => hosts.delcontact(host, target).await?,
            Self::ContactGroup => hosts.delcg(host, target).await?,
            Self::HostGroup => hosts.delhostgroup(host, target).await?,
            Self::Parent => hosts.delparent(host, target).await?,
        }
        Ok(())
    }

    async fn list(self, hosts: &Hosts<'_>, host: &str) -> Result<Vec<String>, CoreError> {
        let linked = match self {
            Self::Template => hosts.gettemplates(host).await?,
            Self::Contact => hosts.getcontacts(host).await?,
            Self::ContactGroup => hosts.getcgs(host).await?,
            Self::HostGroup => hosts.gethostgroups(host).await?,
            Self::Parent => hosts.getparents(host).await?,
        };
        Ok(linked.into_iter().map(|l| l.name).collect())
    }

    /// Link every element of `desired`, in order.
    async fn add_all(
        self,
        hosts: &Hosts<'_>,
        host: &str,
        desired: &[&str],
    ) -> Result<(), CoreError> {
        for target in desired {
            self.add(hosts, host, target).await?;
        }
        Ok(())
    }

    /// Add-then-remove reconciliation against the remote list.
    async fn reconcile(
        self,
        hosts: &Hosts<'_>,
        host: &str,
        desired: &[&str],
    ) -> Result<(), CoreError> {
        self.add_all(hosts, host, desired).await?;

        let current = self.list(hosts, host).await?;
        for target in stale(current.iter().map(String::as_str), desired) {
            debug!(link = ?self, host, %target, "unlinking");
            self.del(hosts, host, &target).await?;
        }
        Ok(())
    }
}

fn names<'a>(items: impl IntoIterator<Item = &'a String>) -> Vec<&'a str> {
    items.into_iter().map(String::as_str).collect()
}

fn wire_macro(spec: &MacroSpec) -> HostMacro {
    HostMacro {
        name: spec.name.clone(),
        value: spec.value.clone(),
        is_password: encode_bool(spec.is_password).to_owned(),
        description: spec.description.clone(),
        source: String::new(),
    }
}

fn notification_value(host: &HostResource) -> String {
    if host.notification_none {
        NOTIFICATION_NONE.to_owned()
    } else {
        encode_options(&host.notification_options)
    }
}

impl Resource for HostAdapter {
    type State = HostResource;

    const TYPE_NAME: &'static str = "centreon_host";

    async fn create(
        &self,
        client: &CentreonClient,
        desired: &HostResource,
    ) -> Result<Option<Managed<HostResource>>, CoreError> {
        validate::host(desired)?;
        let hosts = client.hosts();
        let name = desired.name.as_str();

        let primary = Host {
            name: desired.name.clone(),
            alias: desired.alias.clone(),
            address: desired.address.clone(),
            ..Host::default()
        };
        hosts.add(&primary, &desired.instance).await?;
        info!(name, instance = %desired.instance, "host created");

        for param in HOST_PARAMS {
            hosts
                .setparam(name, param.wire, &param.encode(desired))
                .await?;
        }

        Link::Template
            .add_all(&hosts, name, &names(&desired.templates))
            .await?;
        hosts.applytemplates(name).await?;

        for spec in &desired.macros {
            hosts.setmacro(name, &wire_macro(spec)).await?;
        }

        Link::Contact
            .add_all(&hosts, name, &names(&desired.linked_contacts))
            .await?;
        Link::ContactGroup
            .add_all(&hosts, name, &names(&desired.linked_contact_groups))
            .await?;

        hosts
            .setparam(name, NOTIFICATION_OPTIONS, &notification_value(desired))
            .await?;

        Link::HostGroup
            .add_all(&hosts, name, &names(&desired.hostgroups))
            .await?;
        Link::Parent
            .add_all(&hosts, name, &names(&desired.parents))
            .await?;

        hosts
            .setparam(name, STALKING_OPTIONS, &encode_options(&desired.stalking_options))
            .await?;

        self.read(client, name).await
    }

    async fn read(
        &self,
        client: &CentreonClient,
        id: &str,
    ) -> Result<Option<Managed<HostResource>>, CoreError> {
        let hosts = client.hosts();
        let Some(primary) = absent_on_not_found(hosts.get(id).await)? else {
            debug!(id, "host is gone");
            return Ok(None);
        };
        let name = primary.name.as_str();

        let instance = hosts.getinstance(name).await?;

        let rows = hosts.getparam(name, &read_params()).await?;
        let Some(row) = rows.first() else {
            return Err(CoreError::MissingParameters {
                host: name.to_owned(),
            });
        };

        let templates = Link::Template.list(&hosts, name).await?;
        let macros: BTreeSet<MacroSpec> = hosts
            .getmacro(name)
            .await?
            .into_iter()
            .filter(HostMacro::is_direct)
            .map(|m| MacroSpec {
                name: m.name,
                value: m.value,
                is_password: decode_bool(&m.is_password),
                description: m.description,
            })
            .collect();
        let linked_contacts = Link::Contact.list(&hosts, name).await?;
        let linked_contact_groups = Link::ContactGroup.list(&hosts, name).await?;
        let hostgroups = Link::HostGroup.list(&hosts, name).await?;
        let parents = Link::Parent.list(&hosts, name).await?;

        let mut state = HostResource {
            name: primary.name.clone(),
            alias: primary.alias.clone(),
            address: primary.address.clone(),
            instance,
            activate: decode_bool(&primary.activate),
            templates,
            macros,
            linked_contacts: linked_contacts.into_iter().collect(),
            linked_contact_groups: linked_contact_groups.into_iter().collect(),
            hostgroups: hostgroups.into_iter().collect(),
            parents: parents.into_iter().collect(),
            ..HostResource::default()
        };

        for param in HOST_PARAMS.iter().filter(|p| !p.primary) {
            param.decode(&mut state, row.get(param.wire));
        }

        let notification = row.get(NOTIFICATION_OPTIONS);
        if notification == NOTIFICATION_NONE {
            state.notification_none = true;
        } else {
            state.notification_options = decode_options(notification);
        }
        state.stalking_options = decode_options(row.get(STALKING_OPTIONS));

        Ok(Some(Managed::new(id, state)))
    }

    async fn update(
        &self,
        client: &CentreonClient,
        id: &str,
        prior: &HostResource,
        desired: &HostResource,
    ) -> Result<Option<Managed<HostResource>>, CoreError> {
        validate::host(desired)?;
        let hosts = client.hosts();
        let mut id = id.to_owned();

        for param in HOST_PARAMS.iter().filter(|p| p.changed(prior, desired)) {
            hosts
                .setparam(&id, param.wire, &param.encode(desired))
                .await?;
            if param.field == "name" {
                id.clone_from(&desired.name);
            }
        }

        if prior.instance != desired.instance {
            hosts.setinstance(&id, &desired.instance).await?;
        }

        if prior.templates != desired.templates {
            Link::Template
                .reconcile(&hosts, &id, &names(&desired.templates))
                .await?;
            hosts.applytemplates(&id).await?;
        }

        if prior.macros != desired.macros {
            for spec in &desired.macros {
                hosts.setmacro(&id, &wire_macro(spec)).await?;
            }

            let current = hosts.getmacro(&id).await?;
            let wanted = names(desired.macros.iter().map(|m| &m.name));
            let direct = current.iter().filter(|m| m.is_direct()).map(|m| m.name.as_str());
            for macro_name in stale(direct, &wanted) {
                hosts.delmacro(&id, &macro_name).await?;
            }
        }

        if prior.linked_contacts != desired.linked_contacts {
            Link::Contact
                .reconcile(&hosts, &id, &names(&desired.linked_contacts))
                .await?;
        }

        if prior.linked_contact_groups != desired.linked_contact_groups {
            Link::ContactGroup
                .reconcile(&hosts, &id, &names(&desired.linked_contact_groups))
                .await?;
        }

        // Both fields share one wire parameter; resend it whole.
        if prior.notification_options != desired.notification_options
            || prior.notification_none != desired.notification_none
        {
            hosts
                .setparam(&id, NOTIFICATION_OPTIONS, &notification_value(desired))
                .await?;
        }

        if prior.hostgroups != desired.hostgroups {
            Link::HostGroup
                .reconcile(&hosts, &id, &names(&desired.hostgroups))
                .await?;
        }

        if prior.parents != desired.parents {
            Link::Parent
                .reconcile(&hosts, &id, &names(&desired.parents))
                .await?;
        }

        if prior.stalking_options != desired.stalking_options {
            hosts
                .setparam(
                    &id,
                    STALKING_OPTIONS,
                    &encode_options(&desired.stalking_options),
                )
                .await?;
        }

        self.read(client, &id).await
    }

    async fn delete(&self, client: &CentreonClient, id: &str) -> Result<(), CoreError> {
        if !self.exists(client, id).await? {
            debug!(id, "host already absent");
            return Ok(());
        }
        client.hosts().del(id).await?;
        info!(id, "host deleted");
        Ok(())
    }

    async fn exists(&self, client: &CentreonClient, id: &str) -> Result<bool, CoreError> {
        Ok(client.hosts().exists(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::NotificationOption;

    #[test]
    fn notification_sentinel_wins() {
        let host = HostResource {
            notification_none: true,
            ..HostResource::default()
        };
        assert_eq!(notification_value(&host), "n");

        let host = HostResource {
            notification_options: BTreeSet::from([
                NotificationOption::Recovery,
                NotificationOption::Down,
            ]),
            ..HostResource::default()
        };
        assert_eq!(notification_value(&host), "d,r");
    }

    #[test]
    fn macros_carry_password_flag() {
        let wire = wire_macro(&MacroSpec {
            name: "SNMPCOMMUNITY".into(),
            value: "secret".into(),
            is_password: true,
            description: String::new(),
        });
        assert_eq!(wire.is_password, "1");
    }
}
