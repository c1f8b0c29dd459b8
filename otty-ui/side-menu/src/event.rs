use iced::time::Instant;
use iced::window;

use crate::model::TabItem;

/// Identifier of a scheduled close. Stale tokens are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CloseToken(pub(crate) u64);

/// Events reduced by [`SideMenu::reduce`](crate::SideMenu::reduce).
///
/// Taps and timer events are produced by the widget itself; the `Set*`,
/// `Toggle*` and `Select` variants are the host's write handle on the
/// shared [`MenuBindings`](crate::MenuBindings).
#[derive(Debug, Clone)]
pub enum SideMenuEvent {
    /// The content panel was tapped.
    ContentTapped,
    /// A list entry was tapped.
    TabTapped(TabItem),
    /// The delayed close scheduled by a tab tap fired.
    DeferredClose(CloseToken),
    /// Animation frame tick.
    Frame(Instant),
    /// Host window lifecycle event.
    Window(window::Event),
    /// Host request to open or close the menu.
    SetMenuOpen(bool),
    /// Host request to flip the open flag.
    ToggleMenu,
    /// Host request to change the selection without closing the menu.
    Select(TabItem),
}
