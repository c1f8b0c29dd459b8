//! Side (drawer) menu widget for [`iced`].
//!
//! The menu renders a list of [`TabItem`]s on a blurred background and the
//! host content on a panel in front of it. Opening the menu shrinks the panel
//! and slides it to the right (optionally turned away about the vertical
//! axis); tapping the panel closes the menu, tapping an entry selects it and
//! closes the menu shortly after.
//!
//! The crate is split into two layers:
//! - [`SideMenu`] owns the tab list, styling and animation runtime and reduces
//!   [`SideMenuEvent`]s against the host's [`MenuBindings`];
//! - [`SideMenuView`] renders both layers for the current state.
//!
//! See `examples/side_menu.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::widget::text;
//! use iced::{Element, Subscription, Task};
//! use otty_ui_side_menu::{
//!     MenuBindings, SideMenu, SideMenuEvent, SideMenuSettings, SideMenuView,
//!     TabItem,
//! };
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Menu(SideMenuEvent),
//! }
//!
//! struct State {
//!     menu: SideMenu,
//!     bindings: MenuBindings,
//! }
//!
//! impl State {
//!     fn new() -> Self {
//!         let tabs = vec![
//!             TabItem::new("Home", "house"),
//!             TabItem::new("Settings", "gear"),
//!         ];
//!         let bindings = MenuBindings::new(tabs[0].clone());
//!         let menu = SideMenu::new(tabs, SideMenuSettings::default());
//!         Self { menu, bindings }
//!     }
//!
//!     fn update(&mut self, message: Message) -> Task<Message> {
//!         match message {
//!             Message::Menu(event) => self
//!                 .menu
//!                 .reduce(&mut self.bindings, event)
//!                 .map(Message::Menu),
//!         }
//!     }
//!
//!     fn subscription(&self) -> Subscription<Message> {
//!         self.menu.subscription().map(Message::Menu)
//!     }
//!
//!     fn view(&self) -> Element<'_, Message> {
//!         let content = text(self.bindings.selected_tab().title());
//!         let menu = &self.menu;
//!         SideMenuView::new(menu, &self.bindings, content, Message::Menu)
//!             .view()
//!     }
//! }
//! ```

mod background;
mod bindings;
mod error;
mod event;
mod geometry;
mod icons;
mod model;
mod panel;
mod reducer;
mod settings;
mod state;
mod view;
pub mod viewport;
mod widget;

pub use background::BackgroundArt;
pub use bindings::MenuBindings;
pub use error::SideMenuError;
pub use event::{CloseToken, SideMenuEvent};
pub use geometry::{
    OPEN_CORNER_RADIUS, OPEN_OFFSET_RATIO, OPEN_SCALE, OPEN_SHADOW_BLUR,
    OPEN_YAW, PanelGeometry, SHADOW_ALPHA,
};
pub use icons::builtin_icon;
pub use model::{SelectionKey, TabItem, highlighted_index};
pub use reducer::SideMenuCtx;
pub use settings::{
    ANIMATION_DURATION, CLOSE_DELAY, DEFAULT_BACKGROUND_IMAGE,
    DEFAULT_BLUR_RADIUS, DEFAULT_SELECTION_COLOR, MENU_BASE_COLOR,
    SideMenuConfig, SideMenuSettings, parse_hex_color,
};
pub use view::SideMenuView;
pub use viewport::{
    SafeArea, Viewport, ViewportMetrics, WindowMetrics, WindowTracker,
};
pub use widget::SideMenu;
