use iced::time::Instant;
use iced::{Subscription, Task, window};

use crate::background::BackgroundArt;
use crate::bindings::MenuBindings;
use crate::event::{CloseToken, SideMenuEvent};
use crate::geometry::PanelGeometry;
use crate::model::{TabItem, highlighted_index};
use crate::reducer::{self, SideMenuCtx};
use crate::settings::SideMenuSettings;
use crate::state::SideMenuState;
use crate::viewport::{self, Viewport, ViewportMetrics, WindowTracker};

/// Side (drawer) menu component.
///
/// Owns the tab list, the styling and the presentation runtime (animations
/// and the pending close). Selection, open flag and panel color live in the
/// host's [`MenuBindings`].
pub struct SideMenu {
    tabs: Vec<TabItem>,
    settings: SideMenuSettings,
    background: BackgroundArt,
    viewport: Box<dyn ViewportMetrics>,
    state: SideMenuState,
}

impl SideMenu {
    /// Create a menu and prepare its background art.
    ///
    /// Art that cannot be loaded is replaced by the solid base color.
    pub fn new(tabs: Vec<TabItem>, settings: SideMenuSettings) -> Self {
        let background = BackgroundArt::load_or_solid(
            settings.background_image(),
            settings.blur_radius(),
        );

        Self {
            tabs,
            settings,
            background,
            viewport: Box::new(WindowTracker::new()),
            state: SideMenuState::new(Instant::now()),
        }
    }

    /// Replace the window metrics provider.
    pub fn with_viewport(
        mut self,
        metrics: impl ViewportMetrics + 'static,
    ) -> Self {
        self.viewport = Box::new(metrics);
        self
    }

    /// Replace the prepared background art.
    pub fn with_background(mut self, background: BackgroundArt) -> Self {
        self.background = background;
        self
    }

    pub fn tabs(&self) -> &[TabItem] {
        &self.tabs
    }

    pub fn set_tabs(&mut self, tabs: Vec<TabItem>) {
        self.tabs = tabs;
    }

    pub fn settings(&self) -> &SideMenuSettings {
        &self.settings
    }

    pub fn background(&self) -> &BackgroundArt {
        &self.background
    }

    /// Resolved window width and safe area.
    pub fn viewport(&self) -> Viewport {
        viewport::resolve(self.viewport.as_ref())
    }

    /// Reduce `event` against the host bindings using the current time.
    pub fn reduce(
        &mut self,
        bindings: &mut MenuBindings,
        event: SideMenuEvent,
    ) -> Task<SideMenuEvent> {
        self.reduce_with(bindings, event, &SideMenuCtx::default())
    }

    /// Reduce `event` with an explicit context.
    pub fn reduce_with(
        &mut self,
        bindings: &mut MenuBindings,
        event: SideMenuEvent,
        ctx: &SideMenuCtx,
    ) -> Task<SideMenuEvent> {
        if let SideMenuEvent::Window(window_event) = &event {
            self.viewport.observe(window_event);
        }

        let ctx = ctx.with_selection_key(self.settings.selection_key());
        reducer::reduce(&mut self.state, bindings, event, &ctx)
    }

    /// Window events, plus frame ticks while a transition is running.
    pub fn subscription(&self) -> Subscription<SideMenuEvent> {
        let windows = window::events().map(window_event);

        if self.state.is_animating() {
            Subscription::batch([
                windows,
                window::frames().map(SideMenuEvent::Frame),
            ])
        } else {
            windows
        }
    }

    /// Open transition progress, `0.0` closed to `1.0` open.
    pub fn open_progress(&self) -> f32 {
        self.state.open_progress()
    }

    /// Panel geometry at the current point of the transition.
    pub fn geometry(&self) -> PanelGeometry {
        PanelGeometry::at(
            self.state.open_progress(),
            self.viewport(),
            self.settings.enable_3d(),
        )
    }

    /// Index of the entry that matches the selected tab.
    pub fn highlighted_index(&self, bindings: &MenuBindings) -> Option<usize> {
        highlighted_index(
            &self.tabs,
            bindings.selected_tab(),
            self.settings.selection_key(),
        )
    }

    /// Highlight opacity of every entry, in list order.
    ///
    /// The selected entry fades in while the previously selected one fades
    /// out; all other entries are `0.0`.
    pub fn highlight_levels(&self, bindings: &MenuBindings) -> Vec<f32> {
        let key = self.settings.selection_key();
        let progress = self.state.selection_progress();
        let current = self.highlighted_index(bindings);
        let previous = self
            .state
            .previous_selection()
            .and_then(|tab| highlighted_index(&self.tabs, tab, key))
            .filter(|index| Some(*index) != current);

        (0..self.tabs.len())
            .map(|index| {
                if Some(index) == current {
                    progress
                } else if Some(index) == previous {
                    1.0 - progress
                } else {
                    0.0
                }
            })
            .collect()
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Token of the close scheduled by the last tab tap, if still pending.
    pub fn pending_close(&self) -> Option<CloseToken> {
        self.state.pending_close()
    }
}

fn window_event((_, event): (window::Id, window::Event)) -> SideMenuEvent {
    SideMenuEvent::Window(event)
}
