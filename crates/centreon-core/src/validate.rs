// Desired-state validation
//
// Runs before any remote call. Blank optional fields are always accepted;
// the constraints only apply to values that are set.

use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;

use crate::coerce::UNSET;
use crate::error::CoreError;
use crate::model::{CommandResource, HostResource, TimeperiodExceptionResource, TimeperiodResource};

static URL_OR_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(http://|https://|/)").expect("URL_OR_PATH should compile - this is a bug")
});

static COORDS_2D: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+,[0-9]+$").expect("COORDS_2D should compile - this is a bug")
});

static COORDS_3D: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+,[0-9]+\.[0-9]+,[0-9]+\.[0-9]+$")
        .expect("COORDS_3D should compile - this is a bug")
});

const SNMP_VERSIONS: [&str; 3] = ["1", "2c", "3"];

fn required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::validation(field, "is required"));
    }
    Ok(())
}

fn pattern(field: &str, value: &str, re: &Regex, expected: &str) -> Result<(), CoreError> {
    if value.is_empty() || re.is_match(value) {
        return Ok(());
    }
    Err(CoreError::validation(field, format!("must be like {expected}")))
}

fn non_negative(field: &str, value: i64) -> Result<(), CoreError> {
    if value == UNSET || value >= 0 {
        return Ok(());
    }
    Err(CoreError::validation(field, format!("expected -1 or at least 0, got {value}")))
}

pub fn command(cmd: &CommandResource) -> Result<(), CoreError> {
    required("name", &cmd.name)?;
    required("type", &cmd.command_type)?;
    required("line", &cmd.line)
}

pub fn timeperiod(tp: &TimeperiodResource) -> Result<(), CoreError> {
    required("name", &tp.name)?;
    required("alias", &tp.alias)?;
    for (days, timerange) in &tp.exceptions {
        required("exception.days", days)?;
        required("exception.timerange", timerange)?;
    }
    Ok(())
}

pub fn timeperiod_exception(ex: &TimeperiodExceptionResource) -> Result<(), CoreError> {
    required("timeperiod_id", &ex.timeperiod_id)?;
    required("days", &ex.days)?;
    required("timerange", &ex.timerange)?;
    if ex.timeperiod_id.contains('_') || ex.days.contains('_') {
        return Err(CoreError::validation(
            "timeperiod_id",
            "neither the timeperiod name nor days may contain '_'",
        ));
    }
    Ok(())
}

pub fn host(host: &HostResource) -> Result<(), CoreError> {
    required("name", &host.name)?;
    required("alias", &host.alias)?;
    required("instance", &host.instance)?;

    if host.address.parse::<IpAddr>().is_err() {
        return Err(CoreError::validation(
            "address",
            format!("expected an IP address, got {:?}", host.address),
        ));
    }

    pattern("action_url", &host.action_url, &URL_OR_PATH, "http://, https:// or /")?;
    pattern("notes_url", &host.notes_url, &URL_OR_PATH, "http://, https:// or /")?;
    pattern("coords2d", &host.coords2d, &COORDS_2D, "[0-9]+,[0-9]+")?;
    pattern(
        "coords3d",
        &host.coords3d,
        &COORDS_3D,
        "[0-9]+.[0-9]+,[0-9]+.[0-9]+,[0-9]+.[0-9]+",
    )?;

    if !host.snmp_version.is_empty() && !SNMP_VERSIONS.contains(&host.snmp_version.as_str()) {
        return Err(CoreError::validation(
            "snmp_version",
            format!("expected one of 1, 2c, 3, got {}", host.snmp_version),
        ));
    }

    for (field, value) in [
        ("acknowledgement_timeout", host.acknowledgement_timeout),
        ("check_interval", host.check_interval),
        ("first_notification_delay", host.first_notification_delay),
        ("freshness_threshold", host.freshness_threshold),
        ("high_flap_threshold", host.high_flap_threshold),
        ("low_flap_threshold", host.low_flap_threshold),
        ("max_check_attempts", host.max_check_attempts),
        ("notification_interval", host.notification_interval),
        ("recovery_notification_delay", host.recovery_notification_delay),
        ("retry_check_interval", host.retry_check_interval),
    ] {
        non_negative(field, value)?;
    }

    if host.notification_none && !host.notification_options.is_empty() {
        return Err(CoreError::validation(
            "notification_options",
            "conflicts with notification_none",
        ));
    }

    for m in &host.macros {
        required("macro.name", &m.name)?;
    }

    Ok(())
}
