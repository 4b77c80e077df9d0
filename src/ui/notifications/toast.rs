// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the toaster.
//!
//! One full-size layer per occupied position, stacked over the application.
//! Each toast is a pill holding the badge and title, with the body below it
//! (above it for bottom positions) while expanded.

use super::notification::{Align, Position, ToastId};
use super::options::{Description, TextStyle, ToastView};
use super::toaster::{Group, Message, Offset, Toaster};
use super::widget::{self, Phase, ToastWidget};
use crate::config::{HEIGHT, WIDTH};
use crate::ui::design_tokens::{opacity, palette, shadow, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{
    button, container, mouse_area, rich_text, span, text, Column, Container, Row, Stack, Text,
};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Point, Theme};

/// Renders every viewport of `toaster`.
pub fn view(toaster: &Toaster) -> Element<'_, Message> {
    let groups = toaster.groups();
    if groups.is_empty() {
        // Return an empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let offset = toaster.offset();
    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);
    for group in groups {
        stack = stack.push(viewport(group, offset));
    }
    stack.into()
}

fn viewport(group: Group<'_>, offset: Offset) -> Element<'_, Message> {
    let position = group.position;
    let mut toasts = group.toasts;
    // Newest toast sits closest to the edge.
    if position.is_top() {
        toasts.reverse();
    }

    let column = Column::with_children(toasts.into_iter().map(toast_card))
        .spacing(spacing::XS)
        .align_x(horizontal(position.align()));
    let hover_area = mouse_area(column)
        .on_enter(Message::ViewportHovered(true))
        .on_exit(Message::ViewportHovered(false));

    Container::new(hover_area)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(offset.padding())
        .align_x(horizontal(position.align()))
        .align_y(vertical(position))
        .into()
}

fn toast_card(toast: &ToastWidget) -> Element<'_, Message> {
    let id = toast.id();
    let layout = toast.layout();
    let view = toast.view();
    let (fill, roundness) = (view.fill, view.roundness);
    let alpha = if toast.is_exiting() {
        opacity::MUTED
    } else {
        opacity::OPAQUE
    };

    let header = toast.header();
    let pill = Container::new(header_row(&header.current.icon, &header.current.title, view))
        .width(Length::Fixed(layout.pill_width))
        .height(Length::Fixed(HEIGHT))
        .padding([0.0, spacing::XS])
        .align_y(Vertical::Center)
        .style(move |_theme: &Theme| surface_style(fill, roundness, alpha));
    let pill = Container::new(pill).width(Length::Fixed(WIDTH)).padding(Padding {
        left: layout.pill_offset_x,
        ..Padding::ZERO
    });

    let mut content = Column::new().spacing(spacing::XXS);
    let expanded = layout.phase == Phase::Expanded && view.has_body();
    let body = expanded.then(|| {
        Container::new(body_column(view, id))
            .width(Length::Fixed(WIDTH))
            .height(Length::Fixed((layout.expanded_height - HEIGHT).max(0.0)))
            .padding([spacing::SM, spacing::MD])
            .style(move |_theme: &Theme| surface_style(fill, roundness, alpha))
    });
    if toast.position().is_top() {
        content = content.push(pill);
        if let Some(body) = body {
            content = content.push(body);
        }
    } else {
        if let Some(body) = body {
            content = content.push(body);
        }
        content = content.push(pill);
    }

    let dragged = Container::new(content).padding(Padding {
        top: layout.drag_offset.max(0.0),
        bottom: (-layout.drag_offset).max(0.0),
        ..Padding::ZERO
    });

    mouse_area(dragged)
        .on_enter(Message::Toast(id, widget::Message::HoverIn))
        .on_exit(Message::Toast(id, widget::Message::HoverOut))
        .on_move(move |point: Point| Message::Toast(id, widget::Message::PointerMoved(point.y)))
        .on_press(Message::Toast(id, widget::Message::PointerPressed))
        .on_release(Message::Toast(id, widget::Message::PointerReleased))
        .into()
}

fn header_row<'a>(icon: &'a str, title: &'a str, view: &'a ToastView) -> Row<'a, Message> {
    let accent = view.state.color();
    let badge_style = view.styles.badge.unwrap_or_default();
    let title_style = view.styles.title.unwrap_or_default();

    let badge = Container::new(
        Text::new(icon)
            .size(badge_style.size.unwrap_or(typography::BADGE))
            .color(badge_style.color.unwrap_or(accent)),
    )
    .width(Length::Fixed(typography::BADGE * 2.0))
    .height(Length::Fixed(typography::BADGE * 2.0))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(move |_theme: &Theme| badge_container_style(accent));

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(badge)
        .push(
            Text::new(title)
                .size(title_style.size.unwrap_or(typography::TITLE))
                .color(title_style.color.unwrap_or(accent)),
        )
}

fn body_column(view: &ToastView, id: ToastId) -> Column<'_, Message> {
    let mut column = Column::new().spacing(spacing::SM);

    if let Some(description) = &view.description {
        column = column.push(description_text(
            description,
            view.styles.description.unwrap_or_default(),
        ));
    }

    if let Some(action) = &view.button {
        let style = view.styles.button.unwrap_or_default();
        let accent = view.state.color();
        column = column.push(
            button(
                Text::new(action.title.as_str())
                    .size(style.size.unwrap_or(typography::BODY))
                    .color(style.color.unwrap_or(accent)),
            )
            .on_press(Message::Toast(id, widget::Message::ButtonPressed))
            .padding([spacing::XXS, spacing::SM])
            .style(move |_theme: &Theme, status| action_button_style(accent, status)),
        );
    }

    column
}

fn description_text(description: &Description, style: TextStyle) -> Element<'_, Message> {
    let size = style.size.unwrap_or(typography::BODY);
    let color = style.color.unwrap_or(Color {
        a: opacity::MUTED,
        ..palette::WHITE
    });

    match description {
        Description::Plain(plain) => Text::new(plain.as_str()).size(size).color(color).into(),
        Description::Rich(spans) => {
            let spans: Vec<_> = spans
                .iter()
                .map(|part| {
                    let mut segment = span::<(), _>(part.text.clone())
                        .size(size)
                        .color(part.color.unwrap_or(color));
                    if part.strong {
                        segment = segment.font(Font {
                            weight: Weight::Bold,
                            ..Font::DEFAULT
                        });
                    }
                    segment
                })
                .collect();
            rich_text(spans).into()
        }
    }
}

fn horizontal(align: Align) -> Horizontal {
    match align {
        Align::Left => Horizontal::Left,
        Align::Center => Horizontal::Center,
        Align::Right => Horizontal::Right,
    }
}

fn vertical(position: Position) -> Vertical {
    if position.is_top() {
        Vertical::Top
    } else {
        Vertical::Bottom
    }
}

/// Style function for the pill and the body.
fn surface_style(fill: Color, roundness: f32, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: fill.a * alpha,
            ..fill
        })),
        border: Border {
            radius: roundness.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Style function for the state badge.
fn badge_container_style(accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BADGE,
            ..accent
        })),
        border: Border {
            radius: typography::BADGE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style function for the call-to-action button.
fn action_button_style(accent: Color, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Active => opacity::BADGE,
        button::Status::Hovered | button::Status::Pressed => opacity::BADGE * 2.0,
        button::Status::Disabled => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..accent })),
        text_color: accent,
        border: Border {
            radius: spacing::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::notifications::{Span, Store, ToastOptions, ToastState};

    #[test]
    fn surface_style_uses_fill_and_roundness() {
        let style = surface_style(palette::FILL, 16.0, opacity::OPAQUE);
        assert_eq!(style.background, Some(Background::Color(palette::FILL)));
        assert_abs_diff_eq!(style.border.radius.top_left, 16.0);
    }

    #[test]
    fn exiting_surface_is_faded() {
        let style = surface_style(palette::FILL, 16.0, opacity::MUTED);
        match style.background {
            Some(Background::Color(color)) => assert_abs_diff_eq!(color.a, opacity::MUTED),
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn badge_uses_the_state_accent() {
        let accent = ToastState::Error.color();
        let style = badge_container_style(accent);
        match style.background {
            Some(Background::Color(color)) => {
                assert_abs_diff_eq!(color.r, accent.r);
                assert_abs_diff_eq!(color.a, opacity::BADGE);
            }
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn alignment_follows_position() {
        assert_eq!(horizontal(Position::BottomLeft.align()), Horizontal::Left);
        assert_eq!(horizontal(Position::TopCenter.align()), Horizontal::Center);
        assert_eq!(vertical(Position::TopRight), Vertical::Top);
        assert_eq!(vertical(Position::BottomRight), Vertical::Bottom);
    }

    #[test]
    fn view_builds_for_empty_and_populated_toasters() {
        let mut toaster = Toaster::new(Store::new());
        let _ = view(&toaster);

        toaster.store().show(
            ToastOptions::new()
                .title("Saved")
                .description(vec![Span::new("photo.png").strong()])
                .button("Open", || {}),
        );
        toaster
            .store()
            .warning(ToastOptions::new().position(Position::BottomCenter));
        toaster.sync();
        let _ = view(&toaster);
    }
}
