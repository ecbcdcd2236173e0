//! Subcommand handlers. Each one decodes its arguments, runs exactly one
//! provider operation and prints the result as JSON on stdout.

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use centreon_core::{Provider, ResourceKind};

use crate::cli::{Command, CreateArgs, TargetArgs, UpdateArgs};
use crate::error::CliError;

pub fn types() {
    for name in Provider::resource_types() {
        println!("{name}");
    }
}

pub async fn dispatch(cmd: Command, provider: &Provider) -> Result<(), CliError> {
    match cmd {
        Command::Types => {
            types();
            Ok(())
        }
        Command::Create(args) => create(&args, provider).await,
        Command::Read(target) => {
            let kind = resource_kind(&target.resource_type)?;
            print_json(&provider.read(kind, &target.id).await?)
        }
        Command::Update(args) => update(&args, provider).await,
        Command::Delete(target) => {
            let kind = resource_kind(&target.resource_type)?;
            provider.delete(kind, &target.id).await?;
            info!(%kind, id = %target.id, "delete complete");
            Ok(())
        }
        Command::Exists(TargetArgs { resource_type, id }) => {
            let kind = resource_kind(&resource_type)?;
            print_json(&provider.exists(kind, &id).await?)
        }
    }
}

async fn create(args: &CreateArgs, provider: &Provider) -> Result<(), CliError> {
    let kind = resource_kind(&args.resource_type)?;
    let desired = read_document(&args.file)?;
    print_json(&provider.create(kind, desired).await?)
}

async fn update(args: &UpdateArgs, provider: &Provider) -> Result<(), CliError> {
    let kind = resource_kind(&args.target.resource_type)?;
    let prior = read_document(&args.prior)?;
    let desired = read_document(&args.desired)?;
    print_json(
        &provider
            .update(kind, &args.target.id, prior, desired)
            .await?,
    )
}

// ── Helpers ──────────────────────────────────────────────────────────

fn resource_kind(name: &str) -> Result<ResourceKind, CliError> {
    Ok(ResourceKind::from_type_name(name)?)
}

/// Read a JSON document from a file, or from stdin when the path is `-`.
fn read_document(path: &Path) -> Result<Value, CliError> {
    let io_err = |source| CliError::Io {
        path: path.display().to_string(),
        source,
    };

    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(io_err)?
    };

    Ok(serde_json::from_str(&text)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
