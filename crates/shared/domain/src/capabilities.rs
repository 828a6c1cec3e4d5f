use crate::constants::{EDIT_PROFILE, MANAGE_USERS, VIEW_TASKS};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// What a role is allowed to do.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Capabilities: u32 {
        const MANAGE_USERS = 1 << 0;
        const EDIT_PROFILE = 1 << 1;
        const VIEW_TASKS = 1 << 2;

        const ALL = Self::MANAGE_USERS.bits() | Self::EDIT_PROFILE.bits() | Self::VIEW_TASKS.bits();
    }
}

impl Capabilities {
    /// Names of the individual capabilities set, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        [(Self::MANAGE_USERS, MANAGE_USERS), (Self::EDIT_PROFILE, EDIT_PROFILE), (Self::VIEW_TASKS, VIEW_TASKS)]
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

impl From<&str> for Capabilities {
    fn from(s: &str) -> Self {
        match s {
            MANAGE_USERS => Self::MANAGE_USERS,
            EDIT_PROFILE => Self::EDIT_PROFILE,
            VIEW_TASKS => Self::VIEW_TASKS,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for Capabilities {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names().collect();
        if names.is_empty() { f.write_str("none") } else { f.write_str(&names.join(", ")) }
    }
}

impl Serialize for Capabilities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for Capabilities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
