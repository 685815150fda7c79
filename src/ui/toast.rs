// SPDX-License-Identifier: MPL-2.0
//! Card widget for a single toast.
//!
//! Toasts are small cards with a type-colored accent border, an optional
//! icon glyph, the resolved message and a dismiss button. Custom toasts skip
//! the card and render their content alone.

use super::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use super::Message;
use crate::toast::{Rgba, Toast, ToastStyle, ToastType};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

/// Renders one toast. The message is resolved against the record now.
pub fn view(toast: &Toast) -> Element<'static, Message> {
    let alpha = if toast.visible() {
        opacity::OPAQUE
    } else {
        opacity::DISMISSED
    };
    let style = toast.style().clone();
    let text_override = style.text.map(Color::from);
    let message = toast.resolved_message();

    let message_widget = Text::new(message)
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(fade(text_override.unwrap_or(theme.palette().text), alpha)),
        });

    if toast.kind() == ToastType::Custom {
        return Container::new(message_widget).into();
    }

    let accent = style
        .accent
        .map(Color::from)
        .unwrap_or_else(|| accent_color(toast.kind()));

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    if let Some(glyph) = toast.icon().or(type_icon(toast.kind())) {
        let icon = Text::new(glyph.to_owned())
            .size(sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(fade(accent, alpha)),
            });
        content = content.push(Container::new(icon).padding(spacing::XXS));
    }

    let dismiss_button = button(text("✕").size(typography::BODY))
        .on_press(Message::Dismiss(toast.id().clone()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    content = content
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    let width = style.width.unwrap_or(sizing::TOAST_WIDTH);
    let padding = style.padding.unwrap_or(spacing::SM);

    Container::new(content)
        .width(Length::Fixed(width))
        .padding(padding)
        .style(move |theme: &Theme| toast_container_style(theme, accent, &style, alpha))
        .into()
}

/// Glyph shown for a type when no icon is configured.
fn type_icon(kind: ToastType) -> Option<&'static str> {
    match kind {
        ToastType::Success => Some("✓"),
        ToastType::Error => Some("!"),
        ToastType::Loading => Some("…"),
        ToastType::Blank | ToastType::Custom => None,
    }
}

fn accent_color(kind: ToastType) -> Color {
    match kind {
        ToastType::Success => palette::SUCCESS_500,
        ToastType::Error => palette::ERROR_500,
        ToastType::Loading => palette::INFO_500,
        ToastType::Blank | ToastType::Custom => palette::GRAY_400,
    }
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(
    theme: &Theme,
    accent: Color,
    style: &ToastStyle,
    alpha: f32,
) -> container::Style {
    let bg_color = style
        .background
        .map(Color::from)
        .unwrap_or(theme.extended_palette().background.base.color);
    let text_color = style
        .text
        .map(Color::from)
        .unwrap_or(theme.palette().text);

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, alpha))),
        border: iced::Border {
            color: fade(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if alpha < opacity::OPAQUE {
            shadow::NONE
        } else {
            shadow::MD
        },
        text_color: Some(fade(text_color, alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |a: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
