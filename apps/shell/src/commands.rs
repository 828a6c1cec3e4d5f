//! Command handlers. Each returns the lines to print; `main` owns stdout.

use crate::args::Command;
use anyhow::{Context, Result};
use canon::catalog::{Catalog, CatalogError};
use std::fmt::Write as _;

pub(crate) fn run(catalog: &Catalog, command: Command) -> Result<String> {
    match command {
        Command::Sets {} => sets(catalog),
        Command::List { set } => list(catalog, &set),
        Command::Decode { set, input } => {
            let identity = catalog
                .view(&set)
                .and_then(|view| view.decode(&input))
                .map_err(|err| hint(err, &set))?;
            Ok(identity.to_owned())
        },
        Command::Encode { set, identity } => {
            let encoded = catalog
                .view(&set)
                .and_then(|view| view.encode(&identity))
                .map_err(|err| hint(err, &set))?;
            Ok(encoded.to_owned())
        },
        Command::Fare { transport, km } => {
            let cost = catalog
                .transport_types
                .cost_of(&transport, km)
                .with_context(|| format!("Cannot price a trip by `{transport}`"))?;
            Ok(format!("{transport} cost for {km} km = {cost}"))
        },
        Command::Notify { channel, message } => {
            let delivery = catalog.notification_channels.send_via(&channel, &message)?;
            Ok(delivery.rendered)
        },
        Command::Discount { rule, price } => {
            let discounted = catalog.discount_rules.apply_identity(&rule, price)?;
            Ok(format!("{rule}: {price} -> {discounted}"))
        },
        Command::Employee { json } => employee(catalog, &json),
    }
}

/// Points the user at the listing that holds the accepted values.
fn hint(err: CatalogError, set: &str) -> anyhow::Error {
    let hint = if matches!(err, CatalogError::UnknownSet { .. }) {
        "Run `canon sets` to see the declared sets".to_owned()
    } else if err.is_lookup_failure() {
        format!("Run `canon list {set}` to see the accepted values")
    } else {
        return err.into();
    };
    anyhow::Error::new(err).context(hint)
}

fn sets(catalog: &Catalog) -> Result<String> {
    let mut out = String::new();
    for view in catalog.views() {
        write!(out, "{} ({} variants)", view.name(), view.entries().len())?;
        let indexes = view.indexes();
        if !indexes.is_empty() {
            write!(out, " indexes: {}", indexes.join(", "))?;
        }
        writeln!(out)?;
    }
    Ok(out)
}

fn list(catalog: &Catalog, set: &str) -> Result<String> {
    let mut out = String::new();
    for entry in catalog.view(set)?.entries() {
        writeln!(out, "{:>2}. {:<18} {:<24} {}", entry.ordinal, entry.identity, entry.encoded, entry.detail)?;
    }
    Ok(out)
}

fn employee(catalog: &Catalog, json: &str) -> Result<String> {
    let dto = catalog.employee_from_json(json).context("Rejected employee document")?;
    let row = catalog.employee_row(&dto)?;
    let mut out = String::new();
    writeln!(out, "name:            {}", dto.name)?;
    writeln!(out, "role:            {:?}", dto.role)?;
    writeln!(out, "employment type: {:?}", dto.employment_type)?;
    writeln!(out, "wire:            {}", catalog.employee_to_json(&dto)?)?;
    writeln!(out, "row:             {} | {} | {}", row.name, row.role, row.employment_type)?;
    Ok(out)
}
