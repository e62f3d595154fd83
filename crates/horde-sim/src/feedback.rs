//! Outbound events collected during a frame and drained into the snapshot.

use horde_core::enums::NoticeLevel;
use horde_core::events::{Notice, SceneEvent};

#[derive(Debug, Clone, Default)]
pub struct Feedback {
    pub scene_events: Vec<SceneEvent>,
    pub notices: Vec<Notice>,
}

impl Feedback {
    pub fn scene(&mut self, event: SceneEvent) {
        self.scene_events.push(event);
    }

    /// Raise a notice and mirror it to the log.
    pub fn notice(
        &mut self,
        level: NoticeLevel,
        title: Option<&str>,
        message: impl Into<String>,
        time_secs: f64,
    ) {
        let message = message.into();
        // Gameplay messages, not faults: everything goes out at info.
        log::info!("[{:?}] {}{}", level, title_prefix(title), message);
        self.notices.push(Notice {
            level,
            title: title.map(str::to_string),
            message,
            time_secs,
        });
    }

    pub fn take(&mut self) -> (Vec<SceneEvent>, Vec<Notice>) {
        (
            std::mem::take(&mut self.scene_events),
            std::mem::take(&mut self.notices),
        )
    }
}

fn title_prefix(title: Option<&str>) -> String {
    title.map(|t| format!("{t}: ")).unwrap_or_default()
}
