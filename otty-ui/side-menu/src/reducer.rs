use iced::Task;
use iced::time::Instant;

use crate::bindings::MenuBindings;
use crate::event::{CloseToken, SideMenuEvent};
use crate::model::{SelectionKey, TabItem};
use crate::settings::CLOSE_DELAY;
use crate::state::SideMenuState;

/// Read-only context for side menu reduction.
#[derive(Debug, Clone, Copy)]
pub struct SideMenuCtx {
    pub now: Instant,
    selection_key: SelectionKey,
}

impl SideMenuCtx {
    pub fn at(now: Instant) -> Self {
        Self {
            now,
            selection_key: SelectionKey::default(),
        }
    }

    pub(crate) fn with_selection_key(mut self, key: SelectionKey) -> Self {
        self.selection_key = key;
        self
    }
}

impl Default for SideMenuCtx {
    fn default() -> Self {
        Self::at(Instant::now())
    }
}

/// Reduce a side menu event into binding updates and follow-up tasks.
pub(crate) fn reduce(
    state: &mut SideMenuState,
    bindings: &mut MenuBindings,
    event: SideMenuEvent,
    ctx: &SideMenuCtx,
) -> Task<SideMenuEvent> {
    state.advance(ctx.now);

    let task = match event {
        SideMenuEvent::ContentTapped => {
            if bindings.is_menu_open() {
                close(state, bindings);
            }
            Task::none()
        },
        SideMenuEvent::TabTapped(tab) => {
            select(state, bindings, tab, ctx.selection_key);
            if bindings.is_menu_open() {
                schedule_close(state)
            } else {
                Task::none()
            }
        },
        SideMenuEvent::DeferredClose(token) => {
            if state.take_pending_close(token) {
                if bindings.is_menu_open() {
                    bindings.set_menu_open(false);
                    log::debug!("side menu: closed after selection");
                }
            } else {
                log::debug!("side menu: ignored stale close {token:?}");
            }
            Task::none()
        },
        SideMenuEvent::Frame(at) => {
            state.advance(at);
            Task::none()
        },
        SideMenuEvent::Window(_) => Task::none(),
        SideMenuEvent::SetMenuOpen(is_open) => {
            set_open(state, bindings, is_open);
            Task::none()
        },
        SideMenuEvent::ToggleMenu => {
            let is_open = !bindings.is_menu_open();
            set_open(state, bindings, is_open);
            Task::none()
        },
        SideMenuEvent::Select(tab) => {
            select(state, bindings, tab, ctx.selection_key);
            Task::none()
        },
    };

    state.sync_open(bindings.is_menu_open());
    task
}

fn select(
    state: &mut SideMenuState,
    bindings: &mut MenuBindings,
    tab: TabItem,
    key: SelectionKey,
) {
    if bindings.selected_tab() == &tab {
        return;
    }

    log::debug!("side menu: selected `{}`", tab.title());
    // Same highlighted entry under `key`: keep the highlight steady.
    if key.matches(&tab, bindings.selected_tab()) {
        bindings.set_selected_tab(tab);
        return;
    }

    let previous = bindings.selected_tab().clone();
    bindings.set_selected_tab(tab);
    state.begin_selection_change(previous);
}

fn set_open(
    state: &mut SideMenuState,
    bindings: &mut MenuBindings,
    is_open: bool,
) {
    if is_open {
        if !bindings.is_menu_open() {
            bindings.set_menu_open(true);
            log::debug!("side menu: opened");
        }
    } else {
        close(state, bindings);
    }
}

fn close(state: &mut SideMenuState, bindings: &mut MenuBindings) {
    state.cancel_pending_close();
    if bindings.is_menu_open() {
        bindings.set_menu_open(false);
        log::debug!("side menu: closed");
    }
}

fn schedule_close(state: &mut SideMenuState) -> Task<SideMenuEvent> {
    let token = state.next_close_token();
    let (task, handle) = Task::future(deferred_close(token)).abortable();

    state.set_pending_close(token, handle);
    task
}

async fn deferred_close(token: CloseToken) -> SideMenuEvent {
    tokio::time::sleep(CLOSE_DELAY).await;
    SideMenuEvent::DeferredClose(token)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::settings::ANIMATION_DURATION;

    fn tabs() -> (TabItem, TabItem) {
        (TabItem::new("Home", "house"), TabItem::new("Settings", "gear"))
    }

    fn setup(is_open: bool) -> (SideMenuState, MenuBindings, TabItem, TabItem) {
        let (home, settings) = tabs();
        let state = SideMenuState::new(Instant::now());
        let bindings = MenuBindings::new(home.clone()).with_menu_open(is_open);
        (state, bindings, home, settings)
    }

    fn ctx(state: &SideMenuState) -> SideMenuCtx {
        SideMenuCtx::at(state.now())
    }

    #[test]
    fn given_closed_menu_when_content_tapped_then_nothing_changes() {
        let (mut state, mut bindings, home, _) = setup(false);
        let ctx = ctx(&state);

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::ContentTapped,
            &ctx,
        );

        assert!(!bindings.is_menu_open());
        assert_eq!(bindings.selected_tab(), &home);
        assert!(!state.is_animating());
    }

    #[test]
    fn given_open_menu_when_content_tapped_then_menu_closes_immediately() {
        let (mut state, mut bindings, _, _) = setup(true);
        let ctx = ctx(&state);

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::ContentTapped,
            &ctx,
        );

        assert!(!bindings.is_menu_open());
        assert!(state.pending_close().is_none());
    }

    #[test]
    fn given_open_menu_when_tab_tapped_then_selects_now_and_closes_later() {
        let (mut state, mut bindings, _, settings) = setup(true);
        let ctx = ctx(&state);

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::TabTapped(settings.clone()),
            &ctx,
        );

        assert_eq!(bindings.selected_tab(), &settings);
        assert!(bindings.is_menu_open());
        let token = state.pending_close().expect("close should be scheduled");

        let later = SideMenuCtx::at(ctx.now + CLOSE_DELAY);
        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::DeferredClose(token),
            &later,
        );

        assert!(!bindings.is_menu_open());
        assert!(state.pending_close().is_none());
    }

    #[test]
    fn given_two_quick_tab_taps_when_first_timer_fires_then_it_is_ignored() {
        let (mut state, mut bindings, home, settings) = setup(true);
        let ctx = ctx(&state);

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::TabTapped(settings),
            &ctx,
        );
        let first = state.pending_close().expect("first close");
        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::TabTapped(home.clone()),
            &ctx,
        );
        let second = state.pending_close().expect("second close");
        assert_ne!(first, second);

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::DeferredClose(first),
            &ctx,
        );
        assert!(bindings.is_menu_open());
        assert_eq!(bindings.selected_tab(), &home);

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::DeferredClose(second),
            &ctx,
        );
        assert!(!bindings.is_menu_open());
    }

    #[test]
    fn given_pending_close_when_content_tapped_then_timer_no_longer_applies() {
        let (mut state, mut bindings, _, settings) = setup(true);
        let ctx = ctx(&state);

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::TabTapped(settings),
            &ctx,
        );
        let token = state.pending_close().expect("close scheduled");
        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::ContentTapped,
            &ctx,
        );
        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::SetMenuOpen(true),
            &ctx,
        );

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::DeferredClose(token),
            &ctx,
        );
        assert!(bindings.is_menu_open());
    }

    #[test]
    fn given_closed_menu_when_host_selects_tab_then_no_close_is_scheduled() {
        let (mut state, mut bindings, _, settings) = setup(false);
        let ctx = ctx(&state);

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::Select(settings.clone()),
            &ctx,
        );
        assert_eq!(bindings.selected_tab(), &settings);
        assert!(state.pending_close().is_none());

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::TabTapped(settings),
            &ctx,
        );
        assert!(state.pending_close().is_none());
        assert!(!bindings.is_menu_open());
    }

    #[test]
    fn given_open_requests_when_reduced_then_flag_follows_host() {
        let (mut state, mut bindings, _, _) = setup(false);
        let ctx = ctx(&state);

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::SetMenuOpen(true),
            &ctx,
        );
        assert!(bindings.is_menu_open());

        let _task =
            reduce(&mut state, &mut bindings, SideMenuEvent::ToggleMenu, &ctx);
        assert!(!bindings.is_menu_open());

        let _task =
            reduce(&mut state, &mut bindings, SideMenuEvent::ToggleMenu, &ctx);
        assert!(bindings.is_menu_open());
    }

    #[test]
    fn given_open_request_when_frames_advance_then_transition_completes() {
        let (mut state, mut bindings, _, _) = setup(false);
        let ctx = ctx(&state);
        let start = ctx.now;

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::SetMenuOpen(true),
            &ctx,
        );
        assert!(state.is_animating());
        assert!(state.open_progress() < 0.01);

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::Frame(start + ANIMATION_DURATION / 2),
            &ctx,
        );
        let halfway = state.open_progress();
        assert!((halfway - 0.5).abs() < 0.05, "progress {halfway}");

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::Frame(
                start + ANIMATION_DURATION + Duration::from_millis(1),
            ),
            &ctx,
        );
        assert!(!state.is_animating());
        assert_eq!(state.open_progress(), 1.0);
    }

    #[test]
    fn given_same_tab_when_selected_again_then_highlight_does_not_restart() {
        let (mut state, mut bindings, home, _) = setup(true);
        let ctx = ctx(&state);

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::Select(home),
            &ctx,
        );
        assert!(state.previous_selection().is_none());
        assert_eq!(state.selection_progress(), 1.0);
    }

    #[test]
    fn given_stale_frame_when_reduced_then_clock_does_not_run_backwards() {
        let (mut state, mut bindings, _, _) = setup(false);
        let start = state.now();
        let later = SideMenuCtx::at(start + Duration::from_millis(50));

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::Frame(start),
            &later,
        );
        assert_eq!(state.now(), later.now);
    }

    #[test]
    fn given_title_key_when_same_title_is_selected_then_highlight_stays_steady()
    {
        let first = TabItem::new("Inbox", "bell");
        let second = TabItem::new("Inbox", "star");
        let mut state = SideMenuState::new(Instant::now());
        let mut bindings = MenuBindings::new(first);
        let ctx = ctx(&state).with_selection_key(SelectionKey::Title);

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::Select(second.clone()),
            &ctx,
        );

        assert_eq!(bindings.selected_tab(), &second);
        assert!(state.previous_selection().is_none());
        assert_eq!(state.selection_progress(), 1.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn given_id_key_when_same_title_is_selected_then_highlight_moves() {
        let first = TabItem::new("Inbox", "bell");
        let second = TabItem::new("Inbox", "star");
        let mut state = SideMenuState::new(Instant::now());
        let mut bindings = MenuBindings::new(first.clone());
        let ctx = ctx(&state).with_selection_key(SelectionKey::Id);

        let _task = reduce(
            &mut state,
            &mut bindings,
            SideMenuEvent::Select(second),
            &ctx,
        );

        assert_eq!(state.previous_selection(), Some(&first));
        assert!(state.is_animating());
    }

    #[tokio::test(start_paused = true)]
    async fn given_scheduled_close_when_awaited_then_it_fires_after_the_delay()
    {
        let token = CloseToken(7);
        let started = tokio::time::Instant::now();

        let event = deferred_close(token).await;

        assert!(started.elapsed() >= CLOSE_DELAY);
        assert!(matches!(
            event,
            SideMenuEvent::DeferredClose(fired) if fired == token
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn given_scheduled_close_when_polled_early_then_it_is_pending() {
        let close = deferred_close(CloseToken(1));
        let early = tokio::time::timeout(
            CLOSE_DELAY - Duration::from_millis(1),
            close,
        )
        .await;

        assert!(early.is_err());
    }
}
