use iced::Color;

use crate::model::TabItem;

/// Host-owned state shared with the side menu.
///
/// The host keeps this value in its own state and lends it to the menu on
/// every `view` and `reduce`. Reads are free; the menu writes the selection
/// and the open flag only while reducing a
/// [`SideMenuEvent`](crate::SideMenuEvent), which is also how the host
/// requests changes to them.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuBindings {
    selected_tab: TabItem,
    is_menu_open: bool,
    back_color: Color,
}

impl MenuBindings {
    /// Closed menu with `selected_tab` selected and a white content panel.
    pub fn new(selected_tab: TabItem) -> Self {
        Self {
            selected_tab,
            is_menu_open: false,
            back_color: Color::WHITE,
        }
    }

    pub fn with_menu_open(mut self, is_open: bool) -> Self {
        self.is_menu_open = is_open;
        self
    }

    pub fn with_back_color(mut self, color: Color) -> Self {
        self.back_color = color;
        self
    }

    pub fn selected_tab(&self) -> &TabItem {
        &self.selected_tab
    }

    pub fn is_menu_open(&self) -> bool {
        self.is_menu_open
    }

    pub fn back_color(&self) -> Color {
        self.back_color
    }

    /// The menu only reads the background color, so the host sets it
    /// directly.
    pub fn set_back_color(&mut self, color: Color) {
        self.back_color = color;
    }

    pub(crate) fn set_selected_tab(&mut self, tab: TabItem) {
        self.selected_tab = tab;
    }

    pub(crate) fn set_menu_open(&mut self, is_open: bool) {
        self.is_menu_open = is_open;
    }
}
