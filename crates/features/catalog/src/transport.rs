//! Transport tariffs: the trip cost is computed by the behavior bound to each variant.

use crate::view::Detail;
use canon_registry::{Codec, Dispatcher, Handler, RegistryError, VariantSet, closed_set, handler};
use std::collections::BTreeMap;

#[closed_set(name = "TransportType")]
#[derive(PartialOrd, Ord)]
pub enum TransportType {
    Bus,
    Train,
    Taxi,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tariff {
    pub kind: TransportType,
    /// Price per km before the multiplier.
    pub base_rate: f64,
    /// Peak hours, comfort and speed surcharge.
    pub multiplier: f64,
}

impl Tariff {
    const fn of(kind: TransportType) -> Self {
        let (base_rate, multiplier) = match kind {
            TransportType::Bus => (2.5, 1.0),
            TransportType::Train => (1.8, 0.9),
            TransportType::Taxi => (10.0, 1.5),
        };
        Self { kind, base_rate, multiplier }
    }

    #[must_use]
    pub fn per_km(&self) -> f64 {
        self.base_rate * self.multiplier
    }
}

impl Detail for Tariff {
    fn detail(&self) -> String {
        format!("base={} x{} = {} per km", self.base_rate, self.multiplier, self.per_km())
    }
}

type FareHandler = Handler<Tariff, f64, f64>;

fn metered(tariff: &Tariff, distance_km: &f64) -> f64 {
    tariff.per_km() * distance_km
}

#[derive(Debug)]
pub struct TransportTypes {
    fares: Dispatcher<Tariff, f64, f64>,
    codec: Codec<Tariff, FareHandler>,
}

impl TransportTypes {
    pub(crate) fn declare() -> Result<Self, RegistryError> {
        let set = VariantSet::from_closed(Tariff::of)
            .bind_with(|_| Some(handler(metered)))
            .require_behavior()
            .build()?;
        let fares = Dispatcher::new(set)?;
        let codec = Codec::canonical(fares.shared_set())?;
        Ok(Self { fares, codec })
    }

    #[must_use]
    pub fn set(&self) -> &VariantSet<Tariff, FareHandler> {
        self.fares.set()
    }

    #[must_use]
    pub const fn codec(&self) -> &Codec<Tariff, FareHandler> {
        &self.codec
    }

    /// Price of a trip of `distance_km` with `kind`.
    ///
    /// # Errors
    ///
    /// Never fails for the declared catalog.
    pub fn cost(&self, kind: TransportType, distance_km: f64) -> Result<f64, RegistryError> {
        let variant = self.set().record_of(kind)?;
        self.fares.dispatch(variant, &distance_km)
    }

    /// Same as [`Self::cost`] for a transport given by identity.
    ///
    /// # Errors
    ///
    /// `UnknownIdentity` when no transport has this identity.
    pub fn cost_of(&self, identity: &str, distance_km: f64) -> Result<f64, RegistryError> {
        self.fares.dispatch_identity(identity, &distance_km)
    }

    /// Per-km tariff of every transport, ordered as declared.
    #[must_use]
    pub fn tariff_map(&self) -> BTreeMap<TransportType, f64> {
        self.set().iter().map(|record| (record.data().kind, record.data().per_km())).collect()
    }
}
