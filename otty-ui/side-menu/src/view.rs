use iced::font::Weight;
use iced::widget::{
    Column, Row, Space, container, image, mouse_area, stack, svg, text,
};
use iced::{
    Background, Border, Color, ContentFit, Element, Font, Length, Padding,
    alignment, mouse,
};

use crate::bindings::MenuBindings;
use crate::event::SideMenuEvent;
use crate::geometry::OPEN_OFFSET_RATIO;
use crate::icons::builtin_icon;
use crate::panel::Panel;
use crate::settings::MENU_BASE_COLOR;
use crate::widget::SideMenu;

const ROW_HEIGHT: f32 = 44.0;
const ROW_SPACING: f32 = 8.0;
const ROW_PADDING: f32 = 16.0;
const ICON_SIZE: f32 = 22.0;
const ICON_SPACING: f32 = 12.0;
const HEADLINE_SIZE: f32 = 17.0;
const LIST_PADDING: f32 = 24.0;

type EventMapper<'a, Message> = dyn Fn(SideMenuEvent) -> Message + 'a;
type IconResolver<'a> = dyn Fn(&str) -> Option<svg::Handle> + 'a;

/// View builder that composes the menu list and the content panel.
pub struct SideMenuView<'a, Message> {
    menu: &'a SideMenu,
    bindings: &'a MenuBindings,
    content: Element<'a, Message>,
    on_event: Box<EventMapper<'a, Message>>,
    icon_resolver: Box<IconResolver<'a>>,
}

impl<'a, Message> SideMenuView<'a, Message>
where
    Message: Clone + 'a,
{
    /// Wrap `content` in the side menu. Menu events are mapped into the host
    /// message type with `on_event`.
    pub fn new(
        menu: &'a SideMenu,
        bindings: &'a MenuBindings,
        content: impl Into<Element<'a, Message>>,
        on_event: impl Fn(SideMenuEvent) -> Message + 'a,
    ) -> Self {
        Self {
            menu,
            bindings,
            content: content.into(),
            on_event: Box::new(on_event),
            icon_resolver: Box::new(builtin_icon),
        }
    }

    /// Resolve icon names with `resolver` instead of the built-in set.
    ///
    /// Entries whose icon does not resolve show the label only.
    pub fn icon_resolver(
        mut self,
        resolver: impl Fn(&str) -> Option<svg::Handle> + 'a,
    ) -> Self {
        self.icon_resolver = Box::new(resolver);
        self
    }

    /// Build the element tree.
    pub fn view(self) -> Element<'a, Message> {
        let background = self.background();
        let list = self.list();
        let panel = Panel::new(
            self.content,
            self.menu.geometry(),
            self.bindings.back_color(),
            self.bindings.is_menu_open(),
            (self.on_event)(SideMenuEvent::ContentTapped),
        );

        stack![background, list, panel]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn background(&self) -> Element<'a, Message> {
        let art: Element<'a, Message> = match self.menu.background().handle() {
            Some(handle) => image::Image::<image::Handle>::new(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => Space::new().into(),
        };

        container(art)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(MENU_BASE_COLOR.into()),
                ..Default::default()
            })
            .into()
    }

    fn list(&self) -> Element<'a, Message> {
        let viewport = self.menu.viewport();
        let levels = self.menu.highlight_levels(self.bindings);
        let selection_color = self.menu.settings().selection_color();

        let entries =
            self.menu.tabs().iter().zip(levels).map(|(tab, level)| {
                let icon = (self.icon_resolver)(tab.icon_name());
                let on_press =
                    (self.on_event)(SideMenuEvent::TabTapped(tab.clone()));
                entry(tab.title(), icon, level, selection_color, on_press)
            });

        let safe_area = viewport.safe_area;
        container(Column::with_children(entries).spacing(ROW_SPACING))
            .width(Length::Fixed(viewport.width * OPEN_OFFSET_RATIO))
            .height(Length::Fill)
            .padding(Padding {
                top: safe_area.top + LIST_PADDING,
                right: 0.0,
                bottom: safe_area.bottom + LIST_PADDING,
                left: safe_area.left + LIST_PADDING,
            })
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

fn entry<'a, Message: Clone + 'a>(
    title: &str,
    icon: Option<svg::Handle>,
    level: f32,
    selection_color: Color,
    on_press: Message,
) -> Element<'a, Message> {
    let mut content = Row::new()
        .spacing(ICON_SPACING)
        .align_y(alignment::Vertical::Center);

    if let Some(handle) = icon {
        content = content.push(
            svg::Svg::new(handle)
                .width(Length::Fixed(ICON_SIZE))
                .height(Length::Fixed(ICON_SIZE))
                .style(|_, _| svg::Style {
                    color: Some(Color::WHITE),
                }),
        );
    }

    content = content.push(
        text(title.to_string())
            .size(HEADLINE_SIZE)
            .font(Font {
                weight: Weight::Semibold,
                ..Font::DEFAULT
            })
            .color(Color::WHITE),
    );

    let highlight = selection_color.scale_alpha(level);
    let capsule = container(content)
        .height(Length::Fixed(ROW_HEIGHT))
        .padding([0.0, ROW_PADDING])
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: (level > 0.0).then_some(Background::Color(highlight)),
            border: Border {
                radius: (ROW_HEIGHT / 2.0).into(),
                ..Border::default()
            },
            ..Default::default()
        });

    mouse_area(capsule)
        .on_press(on_press)
        .interaction(mouse::Interaction::Pointer)
        .into()
}
