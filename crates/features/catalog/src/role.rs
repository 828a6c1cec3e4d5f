//! Roles carry no representation besides their identity; stored and sent as `ADMIN`,
//! `USER`, `DRIVER`.

use crate::view::Detail;
use canon_domain::capabilities::Capabilities;
use canon_registry::{Codec, RegistryError, VariantSet, closed_set};

#[closed_set(name = "Role")]
pub enum Role {
    Admin,
    User,
    Driver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleInfo {
    pub role: Role,
    pub capabilities: Capabilities,
    pub summary: &'static str,
}

impl RoleInfo {
    const fn of(role: Role) -> Self {
        match role {
            Role::Admin => Self {
                role,
                capabilities: Capabilities::MANAGE_USERS,
                summary: "Admin can manage users",
            },
            Role::User => Self {
                role,
                capabilities: Capabilities::EDIT_PROFILE.union(Capabilities::VIEW_TASKS),
                summary: "User can view and edit profile",
            },
            Role::Driver => Self {
                role,
                capabilities: Capabilities::VIEW_TASKS,
                summary: "Driver can view tasks",
            },
        }
    }
}

impl Detail for RoleInfo {
    fn detail(&self) -> String {
        format!("{} [{}]", self.summary, self.capabilities)
    }
}

#[derive(Debug)]
pub struct Roles {
    codec: Codec<RoleInfo>,
}

impl Roles {
    pub(crate) fn declare() -> Result<Self, RegistryError> {
        let set = VariantSet::from_closed(RoleInfo::of).build()?;
        Ok(Self { codec: Codec::canonical(set)? })
    }

    #[must_use]
    pub fn set(&self) -> &VariantSet<RoleInfo> {
        self.codec.set()
    }

    #[must_use]
    pub const fn codec(&self) -> &Codec<RoleInfo> {
        &self.codec
    }

    /// # Errors
    ///
    /// Never fails for the declared catalog.
    pub fn info(&self, role: Role) -> Result<&RoleInfo, RegistryError> {
        Ok(self.set().record_of(role)?.data())
    }

    /// `true` when `role` holds every capability in `required`.
    #[must_use]
    pub fn allows(&self, role: Role, required: Capabilities) -> bool {
        self.info(role).is_ok_and(|info| info.capabilities.contains(required))
    }
}
