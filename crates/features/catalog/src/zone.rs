//! Time zones keyed by IANA region, e.g. as received from JSON or a database column.

use crate::view::Detail;
use canon_domain::constants::REGION_INDEX;
use canon_registry::{Codec, KeyPolicy, RegistryError, VariantSet, closed_set};

#[closed_set(name = "TimeZoneInfo")]
pub enum TimeZone {
    EuropeKyiv,
    AmericaNewYork,
    AsiaTokyo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneInfo {
    pub zone: TimeZone,
    pub region: &'static str,
    pub offset_hours: i8,
    pub description: &'static str,
}

impl ZoneInfo {
    const fn of(zone: TimeZone) -> Self {
        let (region, offset_hours, description) = match zone {
            TimeZone::EuropeKyiv => ("Europe/Kyiv", 2, "Kyiv Time (UTC+2)"),
            TimeZone::AmericaNewYork => ("America/New_York", -5, "New York Time (UTC-5)"),
            TimeZone::AsiaTokyo => ("Asia/Tokyo", 9, "Tokyo Time (UTC+9)"),
        };
        Self { zone, region, offset_hours, description }
    }

    /// `true` when `hours` is this zone's offset from UTC.
    #[must_use]
    pub const fn validate_offset(&self, hours: i8) -> bool {
        self.offset_hours == hours
    }
}

impl Detail for ZoneInfo {
    fn detail(&self) -> String {
        format!("{} | offset={} | {}", self.region, self.offset_hours, self.description)
    }
}

#[derive(Debug)]
pub struct TimeZones {
    codec: Codec<ZoneInfo>,
}

impl TimeZones {
    pub(crate) fn declare() -> Result<Self, RegistryError> {
        let set = VariantSet::from_closed(ZoneInfo::of)
            .alternate_key(REGION_INDEX, KeyPolicy::ignore_case(), |info| Some(info.region))
            .build()?;
        Ok(Self { codec: Codec::canonical(set)? })
    }

    #[must_use]
    pub fn set(&self) -> &VariantSet<ZoneInfo> {
        self.codec.set()
    }

    #[must_use]
    pub const fn codec(&self) -> &Codec<ZoneInfo> {
        &self.codec
    }

    /// # Errors
    ///
    /// Never fails for the declared catalog.
    pub fn info(&self, zone: TimeZone) -> Result<&ZoneInfo, RegistryError> {
        Ok(self.set().record_of(zone)?.data())
    }

    /// Looks a zone up by region, ignoring case. Absence is not an error here.
    #[must_use]
    pub fn find_by_region(&self, region: &str) -> Option<&ZoneInfo> {
        self.set().index(REGION_INDEX).ok()?.find(region).and_then(|position| {
            self.set().records().get(position).map(|record| record.data())
        })
    }

    /// Strict variant of [`Self::find_by_region`].
    ///
    /// # Errors
    ///
    /// `UnknownAlternateKey` naming the set, the `region` index and the input.
    pub fn by_region(&self, region: &str) -> Result<&ZoneInfo, RegistryError> {
        Ok(self.set().by_alternate(REGION_INDEX, region)?.data())
    }
}
