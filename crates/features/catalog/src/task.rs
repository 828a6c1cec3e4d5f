use crate::error::CatalogError;
use crate::forms::{display_codec, display_policy};
use crate::view::Detail;
use canon_domain::config::{CatalogConfig, EncodeForm};
use canon_domain::constants::DISPLAY_INDEX;
use canon_registry::{Closed, Codec, VariantSet, closed_set};
use std::fmt;

#[closed_set(name = "TaskStatus")]
pub enum TaskStatus {
    New,
    InProgress,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub status: TaskStatus,
    pub display_name: &'static str,
}

impl StatusInfo {
    const fn of(status: TaskStatus) -> Self {
        let display_name = match status {
            TaskStatus::New => "New Task",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Done => "Completed",
        };
        Self { status, display_name }
    }
}

impl Detail for StatusInfo {
    fn detail(&self) -> String {
        self.display_name.to_owned()
    }
}

#[derive(Debug)]
pub struct TaskStatuses {
    codec: Codec<StatusInfo>,
}

impl TaskStatuses {
    pub(crate) fn declare(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let set = VariantSet::from_closed(StatusInfo::of)
            .alternate_key(DISPLAY_INDEX, display_policy(config.lookup.display_case), |info| {
                Some(info.display_name)
            })
            .build()?;
        Ok(Self { codec: display_codec(set, &config.codec)? })
    }

    #[must_use]
    pub fn set(&self) -> &VariantSet<StatusInfo> {
        self.codec.set()
    }

    #[must_use]
    pub const fn codec(&self) -> &Codec<StatusInfo> {
        &self.codec
    }

    /// Resolves a display name under the configured case policy.
    ///
    /// # Errors
    ///
    /// `Registry` wrapping `UnknownAlternateKey` with the input.
    pub fn by_display(&self, display_name: &str) -> Result<TaskStatus, CatalogError> {
        Ok(self.set().by_alternate(DISPLAY_INDEX, display_name)?.data().status)
    }

    /// Renders `status` as its identity or its display name.
    #[must_use]
    pub fn render(status: TaskStatus, form: EncodeForm) -> &'static str {
        match form {
            EncodeForm::Identity => status.identity(),
            EncodeForm::Display => StatusInfo::of(status).display_name,
        }
    }
}

impl fmt::Display for TaskStatus {
    /// `{}` prints the identity, `{:#}` the display name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = if f.alternate() { EncodeForm::Display } else { EncodeForm::Identity };
        f.write_str(TaskStatuses::render(*self, form))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canon_domain::config::DisplayCase;

    #[test]
    fn display_lookup_follows_case_policy() {
        let statuses = TaskStatuses::declare(&CatalogConfig::default()).unwrap();
        assert_eq!(statuses.by_display("in progress").unwrap(), TaskStatus::InProgress);

        let mut config = CatalogConfig::default();
        config.lookup.display_case = DisplayCase::Sensitive;
        let strict = TaskStatuses::declare(&config).unwrap();
        assert_eq!(strict.by_display("Completed").unwrap(), TaskStatus::Done);
        assert!(matches!(strict.by_display("completed"), Err(CatalogError::Registry { .. })));
    }

    #[test]
    fn rendering_matches_identity_and_display_name() {
        for status in TaskStatus::VARIANTS {
            assert_eq!(TaskStatuses::render(*status, EncodeForm::Identity), status.identity());
        }
        assert_eq!(TaskStatuses::render(TaskStatus::New, EncodeForm::Display), "New Task");
        assert_eq!(format!("{}", TaskStatus::InProgress), "IN_PROGRESS");
        assert_eq!(format!("{:#}", TaskStatus::InProgress), "In progress");
    }
}
