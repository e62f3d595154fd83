//! Timer system: resolves scheduled tasks that have come due.

use horde_core::enums::NoticeLevel;

use crate::feedback::Feedback;
use crate::session::SessionState;
use crate::tasks::{ScheduledTasks, TaskKind};

/// Apply every task due at or before `now`, earliest first.
pub fn run(
    session: &mut SessionState,
    tasks: &mut ScheduledTasks,
    now: f64,
    feedback: &mut Feedback,
) {
    for kind in tasks.take_due(now) {
        match kind {
            TaskKind::ReloadComplete => {
                if session.reloading {
                    session.complete_reload();
                    feedback.notice(NoticeLevel::Info, None, "Reloaded", now);
                }
            }
            TaskKind::DamageCooldownEnd => session.damage_cooldown = false,
            TaskKind::RecoilReset => session.recoil = false,
        }
    }
}

/// Cancel an in-flight reload without refilling. Other tasks stay pending
/// and resume counting once simulation time moves again.
pub fn cancel_reload(session: &mut SessionState, tasks: &mut ScheduledTasks) {
    if tasks.cancel(TaskKind::ReloadComplete) || session.reloading {
        log::debug!("Reload cancelled ({} rounds left)", session.ammo);
    }
    session.reloading = false;
}

/// Drop every pending task when the session ends. The damage flag is left
/// set so the killing hit still flashes.
pub fn cancel_on_game_over(session: &mut SessionState, tasks: &mut ScheduledTasks) {
    tasks.clear();
    session.reloading = false;
    session.recoil = false;
}
