//! Names shared between the catalog, its configuration and the shell.

// Variant set names
pub const ROLE: &str = "Role";
pub const EMPLOYMENT_TYPE: &str = "EmploymentType";
pub const TASK_STATUS: &str = "TaskStatus";
pub const TIME_ZONE: &str = "TimeZoneInfo";
pub const TRANSPORT_TYPE: &str = "TransportType";
pub const NOTIFICATION_CHANNEL: &str = "NotificationChannel";
pub const DISCOUNT_RULE: &str = "DiscountRule";

// Alternate index names
pub const DISPLAY_INDEX: &str = "display";
pub const REGION_INDEX: &str = "region";

// Capability names
pub const MANAGE_USERS: &str = "manage_users";
pub const EDIT_PROFILE: &str = "edit_profile";
pub const VIEW_TASKS: &str = "view_tasks";

// Configuration sources
pub const CONFIG_FILE: &str = "canon.toml";
pub const ENV_PREFIX: &str = "CANON";
