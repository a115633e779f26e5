use std::time::{Duration, Instant};

use ratatui::style::{Modifier, Style};

use crate::ui::theme::{COLOR_GOOD, COLOR_WARN};

const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Footer message. Notices time out; a collection failure stays until the
/// next successful pass clears it.
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
    expires_at: Option<Instant>,
}

impl StatusMessage {
    pub fn notice(text: String) -> Self {
        Self {
            level: StatusLevel::Notice,
            text,
            expires_at: Some(Instant::now() + NOTICE_TTL),
        }
    }

    pub fn collection_failed(text: String) -> Self {
        Self {
            level: StatusLevel::CollectionFailed,
            text,
            expires_at: None,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Notice,
    CollectionFailed,
}

impl StatusLevel {
    pub fn style(self) -> Style {
        match self {
            StatusLevel::Notice => Style::default().fg(COLOR_GOOD),
            StatusLevel::CollectionFailed => Style::default()
                .fg(COLOR_WARN)
                .add_modifier(Modifier::BOLD),
        }
    }
}
