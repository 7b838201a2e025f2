// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a severity-colored accent, a title, optional
//! content and a close button. The remaining countdown can be drawn as a bar
//! under the body, as a ring around the close button, or both.

use super::manager::{Manager, Message};
use super::notification::{Content, Notification, Severity};
use crate::config::{Direction, Position};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::{
    button, container, mouse_area, progress_bar, text, Column, Container, Row, Stack, Text,
};
use iced::{alignment, mouse, Background, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast with its current remaining fraction.
    pub fn view<'a>(
        notification: &'a Notification,
        remaining: f32,
        direction: Direction,
    ) -> Element<'a, Message> {
        let id = notification.id();
        let accent = accent_color(notification.severity());
        let display_mode = notification.display_mode();
        let text_align = match direction {
            Direction::Rtl => alignment::Horizontal::Right,
            Direction::Ltr => alignment::Horizontal::Left,
        };

        let title = Text::new(notification.title())
            .size(typography::BODY_LG)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let close = Self::close_button(notification, remaining, accent);

        let body: Vec<Element<'a, Message>> = vec![
            Container::new(title)
                .width(Length::Fill)
                .align_x(text_align)
                .into(),
            close,
        ];
        let header = Row::with_children(in_reading_order(body, direction))
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        let mut card = Column::new().spacing(spacing::XS).push(header);

        if let Some(content) = notification.content() {
            card = card.push(
                Container::new(content_view(content))
                    .width(Length::Fill)
                    .align_x(text_align),
            );
        }

        if display_mode.shows_linear() {
            let bar = progress_bar(0.0..=1.0, remaining)
                .girth(sizing::PROGRESS_BAR_HEIGHT)
                .style(move |_theme: &Theme| linear_bar_style(accent));
            card = card.push(bar);
        }

        let surface = Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent));

        mouse_area(surface)
            .on_enter(Message::PointerEntered(id))
            .on_exit(Message::PointerExited(id))
            .into()
    }

    /// Renders every toast in the manager, anchored per the configured position.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let settings = manager.settings();
        let toasts: Vec<Element<'_, Message>> = manager
            .values()
            .map(|notification| {
                let remaining = manager
                    .remaining_fraction(notification.id())
                    .unwrap_or(1.0);
                Self::view(notification, remaining, settings.direction)
            })
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (align_x, align_y) = anchor(settings.position);
        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(align_x);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(align_y)
            .padding(spacing::MD)
            .into()
    }

    fn close_button<'a>(
        notification: &Notification,
        remaining: f32,
        accent: Color,
    ) -> Element<'a, Message> {
        let glyph = Text::new("\u{2715}").size(typography::CAPTION);
        let close = button(glyph)
            .on_press(Message::Close(notification.id()))
            .padding(spacing::XXS)
            .style(close_button_style);

        if !notification.display_mode().shows_ring() {
            return close.into();
        }

        let ring = Canvas::new(ProgressRing::new(remaining, accent))
            .width(Length::Fixed(sizing::CLOSE_BUTTON))
            .height(Length::Fixed(sizing::CLOSE_BUTTON));

        Stack::new()
            .push(ring)
            .push(container(close).center(Length::Fixed(sizing::CLOSE_BUTTON)))
            .into()
    }
}

fn content_view<'a>(content: &'a Content) -> Element<'a, Message> {
    match content {
        Content::Text(body) => Text::new(body.as_str()).size(typography::BODY).into(),
        Content::Lines(lines) => Column::with_children(
            lines
                .iter()
                .map(|line| Text::new(line.as_str()).size(typography::BODY).into()),
        )
        .spacing(spacing::XXS)
        .into(),
    }
}

/// Orders row children written left-to-right for the given direction.
pub fn in_reading_order<T>(mut children: Vec<T>, direction: Direction) -> Vec<T> {
    if direction == Direction::Rtl {
        children.reverse();
    }
    children
}

/// Accent color for a severity level.
#[must_use]
pub fn accent_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::SUCCESS_500,
        Severity::Info => palette::INFO_500,
        Severity::Warning => palette::WARNING_500,
        Severity::Error => palette::ERROR_500,
    }
}

/// Maps a screen position to the column's alignment inside the window.
#[must_use]
pub fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    use alignment::{Horizontal as H, Vertical as V};
    match position {
        Position::Top => (H::Center, V::Top),
        Position::Bottom => (H::Center, V::Bottom),
        Position::Left => (H::Left, V::Center),
        Position::Right => (H::Right, V::Center),
        Position::TopLeft => (H::Left, V::Top),
        Position::TopRight => (H::Right, V::Top),
        Position::BottomLeft => (H::Left, V::Bottom),
        Position::BottomRight => (H::Right, V::Bottom),
    }
}

/// Circular countdown drawn behind the close button.
#[derive(Debug, Clone, Copy)]
pub struct ProgressRing {
    remaining: f32,
    color: Color,
}

impl ProgressRing {
    #[must_use]
    pub fn new(remaining: f32, color: Color) -> Self {
        Self {
            remaining: remaining.clamp(0.0, 1.0),
            color,
        }
    }

    /// Sweep of the remaining arc, in radians.
    #[must_use]
    pub fn sweep(&self) -> f32 {
        self.remaining * 2.0 * PI
    }
}

impl<Msg> canvas::Program<Msg> for ProgressRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - sizing::RING_STROKE;

        let track = Path::circle(center, radius);
        frame.stroke(
            &track,
            Stroke::default()
                .with_width(sizing::RING_STROKE)
                .with_color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..self.color
                }),
        );

        if self.remaining > 0.0 {
            // Starts at twelve o'clock and shrinks clockwise.
            let start_angle = -PI / 2.0;
            let end_angle = start_angle + self.sweep();

            let mut arc = canvas::path::Builder::new();
            arc.move_to(Point::new(
                center.x + radius * start_angle.cos(),
                center.y + radius * start_angle.sin(),
            ));
            let segments = 48;
            #[allow(clippy::cast_precision_loss)]
            for i in 1..=segments {
                let t = i as f32 / segments as f32;
                let angle = start_angle + (end_angle - start_angle) * t;
                arc.line_to(Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                ));
            }

            frame.stroke(
                &arc.build(),
                Stroke::default()
                    .with_width(sizing::RING_STROKE)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        }

        vec![frame.into_geometry()]
    }
}

fn linear_bar_style(accent: Color) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        }),
        bar: Background::Color(accent),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = Color {
        a: opacity::SURFACE,
        ..theme.extended_palette().background.base.color
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_fill = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => hover_fill(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_fill(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
