#![allow(dead_code)]

use canon_registry::prelude::*;

#[closed_set(name = "TaskStatus")]
pub enum TaskStatus {
    New,
    InProgress,
    #[identity("DONE")]
    Completed,
}

impl TaskStatus {
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::New => "New Task",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }
}

#[closed_set]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contractor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employment {
    pub display: &'static str,
}

#[closed_set(name = "NotificationChannel")]
pub enum Channel {
    Email,
    Sms,
    Push,
}

/// Task statuses with a case-insensitive display-name index.
pub fn task_statuses() -> VariantSet<TaskStatus> {
    VariantSet::closed()
        .alternate_key("display", KeyPolicy::ignore_case(), |status: &TaskStatus| {
            Some(status.display_name())
        })
        .build()
        .expect("task statuses are well formed")
}

pub fn employment_types() -> VariantSet<Employment> {
    VariantSet::builder("EmploymentType")
        .variant("FULL_TIME", Employment { display: "Full time" })
        .variant("PART_TIME", Employment { display: "Part time" })
        .variant("CONTRACTOR", Employment { display: "Contractor" })
        .alternate_key("display", KeyPolicy::exact(), |e| Some(e.display))
        .build()
        .expect("employment types are well formed")
}

/// Channel dispatcher whose handlers record the channel they ran for.
pub fn channels() -> Dispatcher<Channel, str, String> {
    let set = VariantSet::closed()
        .bind_with(|channel: &Channel| {
            Some(match channel {
                Channel::Email => handler(|_: &Channel, message: &str| format!("email:{message}")),
                Channel::Sms => handler(|_: &Channel, message: &str| format!("sms:{message}")),
                Channel::Push => handler(|_: &Channel, message: &str| format!("push:{message}")),
            })
        })
        .require_behavior()
        .build()
        .expect("every channel binds a handler");
    Dispatcher::new(set).expect("dispatcher over a total set")
}
