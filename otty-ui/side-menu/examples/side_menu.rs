use std::path::PathBuf;

use env_logger::Env;
use iced::widget::{button, column, container, text};
use iced::{Color, Element, Length, Size, Subscription, Task, alignment};
use otty_ui_side_menu::{
    MenuBindings, SideMenu, SideMenuEvent, SideMenuSettings, SideMenuView,
    TabItem, WindowTracker,
};

const WINDOW_SIZE: Size = Size::new(420.0, 780.0);

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .window_size(WINDOW_SIZE)
        .subscription(App::subscription)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Menu(SideMenuEvent),
}

struct App {
    menu: SideMenu,
    bindings: MenuBindings,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        // Optional JSON settings file as the first argument.
        let settings = std::env::args()
            .nth(1)
            .map(PathBuf::from)
            .map(|path| SideMenuSettings::load_or_default(&path))
            .unwrap_or_default();

        let tabs = vec![
            TabItem::new("Home", "house"),
            TabItem::new("Settings", "gear"),
            TabItem::new("Profile", "person"),
        ];
        let bindings = MenuBindings::new(tabs[0].clone());

        (
            App {
                menu: SideMenu::new(tabs, settings).with_viewport(
                    WindowTracker::new().with_window_size(WINDOW_SIZE),
                ),
                bindings,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        String::from("OTTY side menu example")
    }

    fn subscription(&self) -> Subscription<Message> {
        self.menu.subscription().map(Message::Menu)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Menu(event) => {
                let task = self.menu.reduce(&mut self.bindings, event);
                let color = back_color(self.bindings.selected_tab().title());
                self.bindings.set_back_color(color);
                task.map(Message::Menu)
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let selected = self.bindings.selected_tab();
        let content = container(
            column![
                text(selected.title().to_string()).size(28),
                button(text("Menu"))
                    .on_press(Message::Menu(SideMenuEvent::ToggleMenu)),
            ]
            .spacing(16)
            .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

        SideMenuView::new(&self.menu, &self.bindings, content, Message::Menu)
            .view()
    }
}

fn back_color(title: &str) -> Color {
    match title {
        "Settings" => Color::from_rgb8(0xf2, 0xf2, 0xf7),
        "Profile" => Color::from_rgb8(0xff, 0xf8, 0xe7),
        _ => Color::WHITE,
    }
}
