//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "canon")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect and exercise the closed variant sets of the catalog")]
pub(crate) struct Cli {
    /// Configuration file; `canon.toml` in the working directory is used when present
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List every declared variant set
    Sets {},
    /// List the variants of a set in declaration order
    List {
        /// Set name (e.g. 'EmploymentType')
        set: String,
    },
    /// Decode an external value through the set's codec
    Decode { set: String, input: String },
    /// Encode a variant, given by identity, through the set's codec
    Encode { set: String, identity: String },
    /// Price a trip
    Fare {
        /// Transport identity (e.g. 'TAXI')
        transport: String,
        /// Distance in km
        km: f64,
    },
    /// Send a message through one notification channel
    Notify { channel: String, message: String },
    /// Apply a discount rule to a price
    Discount { rule: String, price: f64 },
    /// Decode an employee JSON document and show its wire and row forms
    Employee {
        /// e.g. '{"name":"Ann","role":"ADMIN","employmentType":"Full time"}'
        json: String,
    },
}
