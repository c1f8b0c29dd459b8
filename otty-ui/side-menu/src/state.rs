use iced::Animation;
use iced::animation::Easing;
use iced::task;
use iced::time::Instant;

use crate::event::CloseToken;
use crate::model::TabItem;
use crate::settings::ANIMATION_DURATION;

/// Runtime presentation state owned by a [`SideMenu`](crate::SideMenu).
pub(crate) struct SideMenuState {
    now: Instant,
    open: Animation<bool>,
    selection: Animation<bool>,
    previous_selection: Option<TabItem>,
    pending_close: Option<PendingClose>,
    next_close_token: u64,
}

/// Delayed close in flight. Dropping it aborts the timer task.
struct PendingClose {
    token: CloseToken,
    _abort: task::Handle,
}

impl SideMenuState {
    pub(crate) fn new(now: Instant) -> Self {
        Self {
            now,
            open: transition(false),
            selection: transition(true),
            previous_selection: None,
            pending_close: None,
            next_close_token: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn now(&self) -> Instant {
        self.now
    }

    /// Advance the presentation clock. Time never runs backwards.
    pub(crate) fn advance(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    pub(crate) fn open_progress(&self) -> f32 {
        self.open.interpolate(0.0, 1.0, self.now)
    }

    pub(crate) fn selection_progress(&self) -> f32 {
        self.selection.interpolate(0.0, 1.0, self.now)
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.open.is_animating(self.now)
            || self.selection.is_animating(self.now)
    }

    /// Start animating towards `is_open`. No-op when already heading there.
    pub(crate) fn sync_open(&mut self, is_open: bool) {
        self.open.go_mut(is_open, self.now);
    }

    /// Restart the highlight transition away from `previous`.
    pub(crate) fn begin_selection_change(&mut self, previous: TabItem) {
        self.previous_selection = Some(previous);
        self.selection = transition(false).go(true, self.now);
    }

    pub(crate) fn previous_selection(&self) -> Option<&TabItem> {
        self.previous_selection.as_ref()
    }

    pub(crate) fn next_close_token(&mut self) -> CloseToken {
        self.next_close_token = self.next_close_token.wrapping_add(1);
        CloseToken(self.next_close_token)
    }

    /// Track a scheduled close, aborting any close it replaces.
    pub(crate) fn set_pending_close(
        &mut self,
        token: CloseToken,
        handle: task::Handle,
    ) {
        self.pending_close = Some(PendingClose {
            token,
            _abort: handle.abort_on_drop(),
        });
    }

    pub(crate) fn pending_close(&self) -> Option<CloseToken> {
        self.pending_close.as_ref().map(|pending| pending.token)
    }

    /// Consume the pending close if `token` identifies it.
    pub(crate) fn take_pending_close(&mut self, token: CloseToken) -> bool {
        if self.pending_close() == Some(token) {
            self.pending_close = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn cancel_pending_close(&mut self) {
        if let Some(pending) = self.pending_close.take() {
            log::debug!(
                "side menu: cancelled pending close {:?}",
                pending.token
            );
        }
    }
}

fn transition(initial: bool) -> Animation<bool> {
    Animation::new(initial)
        .duration(ANIMATION_DURATION)
        .easing(Easing::Linear)
}
