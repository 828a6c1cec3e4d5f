use crate::view::Detail;
use canon_registry::{Codec, Dispatcher, Handler, RegistryError, VariantSet, closed_set, handler};

#[closed_set(name = "DiscountRule")]
pub enum DiscountRule {
    Seasonal,
    Loyalty,
    #[identity("NONE")]
    NoDiscount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountInfo {
    pub rule: DiscountRule,
    pub percent: u8,
}

impl DiscountInfo {
    const fn of(rule: DiscountRule) -> Self {
        let percent = match rule {
            DiscountRule::Seasonal => 10,
            DiscountRule::Loyalty => 5,
            DiscountRule::NoDiscount => 0,
        };
        Self { rule, percent }
    }
}

impl Detail for DiscountInfo {
    fn detail(&self) -> String {
        format!("{}% off", self.percent)
    }
}

type PriceHandler = Handler<DiscountInfo, f64, f64>;

fn reduce(info: &DiscountInfo, price: &f64) -> f64 {
    price * (1.0 - f64::from(info.percent) / 100.0)
}

#[derive(Debug)]
pub struct DiscountRules {
    pricing: Dispatcher<DiscountInfo, f64, f64>,
    codec: Codec<DiscountInfo, PriceHandler>,
}

impl DiscountRules {
    pub(crate) fn declare() -> Result<Self, RegistryError> {
        let set = VariantSet::from_closed(DiscountInfo::of)
            .bind_with(|info| {
                Some(match info.rule {
                    DiscountRule::Seasonal | DiscountRule::Loyalty => handler(reduce),
                    DiscountRule::NoDiscount => handler(|_: &DiscountInfo, price: &f64| *price),
                })
            })
            .require_behavior()
            .build()?;
        let pricing = Dispatcher::new(set)?;
        let codec = Codec::canonical(pricing.shared_set())?;
        Ok(Self { pricing, codec })
    }

    #[must_use]
    pub fn set(&self) -> &VariantSet<DiscountInfo, PriceHandler> {
        self.pricing.set()
    }

    #[must_use]
    pub const fn codec(&self) -> &Codec<DiscountInfo, PriceHandler> {
        &self.codec
    }

    /// Price after applying `rule`.
    ///
    /// # Errors
    ///
    /// Never fails for the declared catalog.
    pub fn apply(&self, rule: DiscountRule, price: f64) -> Result<f64, RegistryError> {
        let variant = self.set().record_of(rule)?;
        self.pricing.dispatch(variant, &price)
    }

    /// # Errors
    ///
    /// `UnknownIdentity` when no rule has this identity.
    pub fn apply_identity(&self, identity: &str, price: f64) -> Result<f64, RegistryError> {
        self.pricing.dispatch_identity(identity, &price)
    }
}
