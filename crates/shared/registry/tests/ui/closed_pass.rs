use canon_registry::{Closed, VariantSet, closed_set};

#[closed_set(name = "Shift", rename_all = "kebab-case")]
pub enum Shift {
    EarlyMorning,
    Night,
    #[identity("on-call")]
    Standby,
}

#[closed_set]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    Low,
    High,
}

fn main() {
    assert_eq!(Shift::SET_NAME, "Shift");
    assert_eq!(Shift::EarlyMorning.identity(), "early-morning");
    assert_eq!(Shift::Standby.identity(), "on-call");
    assert_eq!(Shift::Night.ordinal().get(), 1);
    assert_eq!(Priority::VARIANTS, &[Priority::Low, Priority::High]);
    assert!(Priority::Low < Priority::High);

    let shifts = VariantSet::<Shift>::closed().build().unwrap();
    assert_eq!(shifts.record_of(Shift::Standby).unwrap().ordinal().get(), 2);
}
