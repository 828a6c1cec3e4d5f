//! # Canon Catalog
//!
//! The concrete closed sets of the workspace, declared once at start-up and shared as an
//! `Arc` slice:
//!
//! * **Data only**: [`role`] (with capabilities), [`employment`], [`task`], [`zone`].
//! * **Per-variant behavior**: [`transport`] fares, [`notification`] senders and
//!   [`discount`] rules, each bound through a `Dispatcher`.
//! * **Mapping**: [`employee`] JSON through the configured codecs and identity-keyed rows.
//!
//! Callers that only know a set by name go through [`Catalog::view`].

pub mod discount;
pub mod employee;
pub mod employment;
mod error;
mod forms;
pub mod notification;
pub mod role;
pub mod task;
pub mod transport;
pub mod view;
pub mod zone;

pub use crate::error::{CatalogError, CatalogErrorExt};
use crate::discount::DiscountRules;
use crate::employment::EmploymentTypes;
use crate::notification::NotificationChannels;
use crate::role::Roles;
use crate::task::TaskStatuses;
use crate::transport::TransportTypes;
use crate::view::SetView;
use crate::zone::TimeZones;
use canon_domain::config::CatalogConfig;
use canon_domain::constants::{
    DISCOUNT_RULE, EMPLOYMENT_TYPE, NOTIFICATION_CHANNEL, ROLE, TASK_STATUS, TIME_ZONE, TRANSPORT_TYPE,
};
use tracing::info;

/// Every set name the catalog declares, in listing order.
pub const SET_NAMES: [&str; 7] =
    [ROLE, EMPLOYMENT_TYPE, TASK_STATUS, TIME_ZONE, TRANSPORT_TYPE, NOTIFICATION_CHANNEL, DISCOUNT_RULE];

/// All declared sets of the catalog.
#[canon_derive::canon_slice]
pub struct Catalog {
    pub roles: Roles,
    pub employment_types: EmploymentTypes,
    pub task_statuses: TaskStatuses,
    pub time_zones: TimeZones,
    pub transport_types: TransportTypes,
    pub notification_channels: NotificationChannels,
    pub discount_rules: DiscountRules,
}

impl Catalog {
    /// Resolves a set by name for generic listing, decoding and encoding.
    ///
    /// # Errors
    ///
    /// `UnknownSet` when the catalog declares no set with this name.
    pub fn view(&self, name: &str) -> Result<&dyn SetView, CatalogError> {
        let view: &dyn SetView = match name {
            ROLE => self.roles.codec(),
            EMPLOYMENT_TYPE => self.employment_types.codec(),
            TASK_STATUS => self.task_statuses.codec(),
            TIME_ZONE => self.time_zones.codec(),
            TRANSPORT_TYPE => self.transport_types.codec(),
            NOTIFICATION_CHANNEL => self.notification_channels.codec(),
            DISCOUNT_RULE => self.discount_rules.codec(),
            _ => return Err(CatalogError::UnknownSet { name: name.to_owned(), context: None }),
        };
        Ok(view)
    }

    /// Every set as a [`SetView`], in [`SET_NAMES`] order.
    pub fn views(&self) -> impl Iterator<Item = &dyn SetView> + '_ {
        SET_NAMES.into_iter().filter_map(|name| self.view(name).ok())
    }
}

/// Declares every catalog set and validates their codecs against `config`.
///
/// # Errors
///
/// `Config` for unusable codec settings, `Registry` when a set or codec fails to build.
pub fn init(config: &CatalogConfig) -> Result<Catalog, CatalogError> {
    let catalog = Catalog::new(CatalogInner {
        roles: Roles::declare()?,
        employment_types: EmploymentTypes::declare(config)?,
        task_statuses: TaskStatuses::declare(config)?,
        time_zones: TimeZones::declare()?,
        transport_types: TransportTypes::declare()?,
        notification_channels: NotificationChannels::declare()?,
        discount_rules: DiscountRules::declare()?,
    });

    info!(
        sets = SET_NAMES.len(),
        encode_as = ?config.codec.encode_as,
        decode_forms = ?config.codec.decode_forms,
        "Catalog initialized"
    );
    Ok(catalog)
}
