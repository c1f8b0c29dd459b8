use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Quad};
use iced::advanced::widget::{Operation, Tree, tree};
use iced::advanced::{Clipboard, Renderer as _, Shell, Widget, overlay};
use iced::{
    Border, Color, Element, Event, Length, Point, Rectangle, Shadow, Size,
    Theme, Vector, mouse, touch,
};

use crate::geometry::{PanelGeometry, SHADOW_ALPHA};

/// Foreground panel that carries the host content.
///
/// While closed the content receives input through the inverse of the
/// panel transformation. While open the content is disabled and a press on
/// the projected panel publishes `on_tap`; everything outside the panel is
/// left to the layers below.
pub(crate) struct Panel<'a, Message> {
    content: Element<'a, Message>,
    geometry: PanelGeometry,
    back_color: Color,
    is_open: bool,
    on_tap: Message,
}

/// Destination of a press that lands on the panel layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressRoute {
    /// Delivered to the content; the layers below never see it.
    Content,
    /// Publishes the panel tap message.
    Tap,
    /// Left to the layers below.
    PassThrough,
}

impl<'a, Message> Panel<'a, Message> {
    pub(crate) fn new(
        content: impl Into<Element<'a, Message>>,
        geometry: PanelGeometry,
        back_color: Color,
        is_open: bool,
        on_tap: Message,
    ) -> Self {
        Self {
            content: content.into(),
            geometry,
            back_color,
            is_open,
            on_tap,
        }
    }

    fn frame(&self, layout: Layout<'_>) -> Rectangle {
        self.geometry.frame(layout.bounds())
    }

    /// Whether the panel claims pointer input at `position`.
    ///
    /// A closed panel owns its whole layout even while the close transition
    /// is still shrinking the drawn frame. An open panel only owns its
    /// projected rectangle.
    fn covers(&self, bounds: Rectangle, position: Point) -> bool {
        if self.is_open {
            self.geometry
                .project(self.geometry.frame(bounds))
                .contains(position)
        } else {
            bounds.contains(position)
        }
    }

    fn press_route(&self, bounds: Rectangle, position: Point) -> PressRoute {
        if !self.covers(bounds, position) {
            PressRoute::PassThrough
        } else if self.is_open {
            PressRoute::Tap
        } else {
            PressRoute::Content
        }
    }

    fn content_cursor(
        &self,
        cursor: mouse::Cursor,
        frame: Rectangle,
    ) -> mouse::Cursor {
        if self.is_open {
            return mouse::Cursor::Unavailable;
        }

        match cursor {
            mouse::Cursor::Available(position) => mouse::Cursor::Available(
                self.geometry.unproject(frame, position),
            ),
            other => other,
        }
    }
}

impl<Message: Clone> Widget<Message, Theme, iced::Renderer>
    for Panel<'_, Message>
{
    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    fn tag(&self) -> tree::Tag {
        tree::Tag::stateless()
    }

    fn state(&self) -> tree::State {
        tree::State::None
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.max();
        let frame = self.geometry.frame(Rectangle::new(Point::ORIGIN, size));
        let padding = self.geometry.content_padding;
        let content_limits = layout::Limits::new(Size::ZERO, frame.size())
            .shrink(padding);

        let content = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &content_limits)
            .move_to(Point::new(
                frame.x + padding.left,
                frame.y + padding.top,
            ));

        layout::Node::with_children(size, vec![content])
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut iced::Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let Some(content_layout) = layout.children().next() else {
            return;
        };
        let frame = self.frame(layout);
        let content_cursor = self.content_cursor(cursor, frame);

        renderer.with_transformation(
            self.geometry.transformation(frame),
            |renderer| {
                renderer.fill_quad(
                    Quad {
                        bounds: frame,
                        border: Border {
                            radius: self.geometry.corner_radius.into(),
                            ..Border::default()
                        },
                        shadow: Shadow {
                            color: Color::BLACK.scale_alpha(SHADOW_ALPHA),
                            offset: Vector::ZERO,
                            blur_radius: self.geometry.shadow_blur,
                        },
                        ..Quad::default()
                    },
                    self.back_color,
                );

                renderer.with_layer(frame, |renderer| {
                    self.content.as_widget().draw(
                        &tree.children[0],
                        renderer,
                        theme,
                        style,
                        content_layout,
                        content_cursor,
                        &frame,
                    );
                });
            },
        );
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &iced::Renderer,
        operation: &mut dyn Operation,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget_mut().operate(
                &mut tree.children[0],
                content_layout,
                renderer,
                operation,
            );
        }
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &iced::Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let Some(content_layout) = layout.children().next() else {
            return;
        };
        let bounds = layout.bounds();
        let frame = self.frame(layout);
        let pressed_at = press_position(event, cursor);

        if self.is_open {
            if let Event::Window(_) = event {
                self.content.as_widget_mut().update(
                    &mut tree.children[0],
                    event,
                    content_layout,
                    mouse::Cursor::Unavailable,
                    renderer,
                    clipboard,
                    shell,
                    viewport,
                );
            }

            if pressed_at.is_some_and(|position| {
                self.press_route(bounds, position) == PressRoute::Tap
            }) {
                shell.publish(self.on_tap.clone());
                shell.capture_event();
            }
            return;
        }

        let content_cursor = self.content_cursor(cursor, frame);
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            content_layout,
            content_cursor,
            renderer,
            clipboard,
            shell,
            &frame,
        );

        if shell.is_event_captured() {
            return;
        }

        // Presses the content ignored must not fall through to the list.
        if pressed_at.is_some_and(|position| {
            self.press_route(bounds, position) == PressRoute::Content
        }) {
            shell.capture_event();
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        let bounds = layout.bounds();
        let is_covered = cursor
            .position()
            .is_some_and(|position| self.covers(bounds, position));

        if self.is_open {
            return if is_covered {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::None
            };
        }

        let frame = self.frame(layout);
        let interaction = layout
            .children()
            .next()
            .map(|content_layout| {
                self.content.as_widget().mouse_interaction(
                    &tree.children[0],
                    content_layout,
                    self.content_cursor(cursor, frame),
                    &frame,
                    renderer,
                )
            })
            .unwrap_or_default();

        if interaction == mouse::Interaction::None && is_covered {
            mouse::Interaction::Idle
        } else {
            interaction
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        renderer: &iced::Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, iced::Renderer>> {
        if self.is_open {
            return None;
        }

        let content_layout = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            viewport,
            translation,
        )
    }
}

fn press_position(event: &Event, cursor: mouse::Cursor) -> Option<Point> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            cursor.position()
        },
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(*position)
        },
        _ => None,
    }
}

impl<'a, Message> From<Panel<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'a,
{
    fn from(panel: Panel<'a, Message>) -> Self {
        Element::new(panel)
    }
}
