use ivy_config::Config;
use ivy_core::{CalendarZone, CoreError, DuplicatePolicy, EmptyState, ExpandState, ListOptions};
use ivy_domain::DueKind;
use tracing::warn;

/// Everything the list front end needs, resolved from stored configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSettings {
    pub options: ListOptions,
    pub expand: ExpandState,
    pub empty: EmptyState,
    pub color: bool,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            options: ListOptions::default(),
            expand: ExpandState::default(),
            empty: EmptyState::default(),
            color: true,
        }
    }
}

impl ListSettings {
    pub fn from_config(config: &Config) -> Result<Self, CoreError> {
        let calendar = CalendarZone::parse(&config.timezone)?;
        let duplicate_policy = config
            .duplicate_policy
            .parse::<DuplicatePolicy>()
            .unwrap_or_else(|err| {
                let fallback = DuplicatePolicy::default();
                warn!(%err, using = %fallback, "ignoring configured duplicate policy");
                fallback
            });
        let builtin = EmptyState::default();

        Ok(Self {
            options: ListOptions::new(calendar).with_duplicate_policy(duplicate_policy),
            expand: ExpandState {
                upcoming: config.sections.upcoming_expanded,
                overdue: config.sections.overdue_expanded,
            },
            empty: EmptyState {
                title: config.empty_state.title.clone().unwrap_or(builtin.title),
                description: config
                    .empty_state
                    .description
                    .clone()
                    .unwrap_or(builtin.description),
            },
            color: config.ui_color_enabled,
        })
    }

    pub fn with_calendar(mut self, calendar: CalendarZone) -> Self {
        self.options.calendar = calendar;
        self
    }

    pub fn set_expanded(&mut self, kind: DueKind, expanded: bool) {
        self.expand = self.expand.with(kind, expanded);
    }
}
