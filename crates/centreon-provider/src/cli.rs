//! Clap derive structures for the `centreon-provider` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// centreon-provider -- declarative lifecycle for Centreon configuration objects
#[derive(Debug, Parser)]
#[command(
    name = "centreon-provider",
    version,
    about = "Create, read, update and delete Centreon configuration objects from JSON state",
    long_about = "Drives the Centreon CLAPI web endpoint for commands, timeperiods,\n\
        timeperiod exceptions and hosts.\n\n\
        Connection settings come from the config file, CENTREON_* environment\n\
        variables and the flags below, in increasing priority.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Centreon base URL (e.g. https://centreon.example.com)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Centreon user
    #[arg(long, short = 'u', global = true)]
    pub user: Option<String>,

    /// Centreon password
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered resource types
    Types,

    /// Create a resource from a desired-state document
    Create(CreateArgs),

    /// Read the remote state of a resource
    Read(TargetArgs),

    /// Reconcile a resource from its prior state to a desired state
    Update(UpdateArgs),

    /// Delete a resource (no-op when already absent)
    Delete(TargetArgs),

    /// Check whether a resource exists
    Exists(TargetArgs),
}

#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Resource type (e.g. centreon_host)
    pub resource_type: String,

    /// Resource identity
    pub id: String,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Resource type (e.g. centreon_host)
    pub resource_type: String,

    /// Desired-state JSON document ("-" for stdin)
    #[arg(long, short = 'f', value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Previously recorded state document
    #[arg(long, value_name = "FILE")]
    pub prior: PathBuf,

    /// Desired-state document
    #[arg(long, value_name = "FILE")]
    pub desired: PathBuf,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::try_parse_from([
            "centreon-provider",
            "read",
            "centreon_host",
            "srv1",
            "--url",
            "https://centreon.example.com",
            "-k",
            "-vv",
        ])
        .expect("arguments parse");

        assert_eq!(cli.global.url.as_deref(), Some("https://centreon.example.com"));
        assert!(cli.global.insecure);
        assert_eq!(cli.global.verbose, 2);
        assert!(matches!(
            cli.command,
            Command::Read(TargetArgs { ref resource_type, ref id })
                if resource_type == "centreon_host" && id == "srv1"
        ));
    }

    #[test]
    fn update_requires_both_documents() {
        let err = Cli::try_parse_from([
            "centreon-provider",
            "update",
            "centreon_command",
            "check_ping",
            "--prior",
            "prior.json",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
