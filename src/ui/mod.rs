// SPDX-License-Identifier: MPL-2.0
//! Toast overlay for iced applications.
//!
//! The overlay is a pure function of a store snapshot. Hosts stack it over
//! their content and route [`Message`]s back through [`update`]:
//!
//! ```ignore
//! fn view(&self) -> Element<'_, AppMessage> {
//!     let toasts = ui::overlay(&self.store.snapshot(), &self.store.config())
//!         .map(AppMessage::Toast);
//!     Stack::new().push(self.content()).push(toasts).into()
//! }
//! ```
//!
//! # Components
//!
//! - [`toast`] - Card widget for a single toast
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod toast;

use crate::config::defaults::TICK_INTERVAL_MS;
use crate::config::ToasterConfig;
use crate::store::{Action, State, ToastStore};
use crate::toast::{Position, ToastId};
use iced::widget::{mouse_area, Column, Container, Stack};
use iced::{alignment, time, Element, Length, Subscription};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer entered a toast group: pause every countdown.
    PointerEntered,
    /// Pointer left a toast group: resume.
    PointerLeft,
    Dismiss(ToastId),
    /// Periodic tick driving due timers.
    Tick(Instant),
}

/// Applies an overlay message to the store.
///
/// A hover area disappears with its last card without reporting an exit, so
/// a pause left behind by an emptied overlay is ended here.
pub fn update(store: &ToastStore, message: Message) {
    let may_empty = !matches!(message, Message::PointerEntered);
    match message {
        Message::PointerEntered => store.pointer_entered(),
        Message::PointerLeft => store.pointer_left(),
        Message::Dismiss(id) => store.dispatch(Action::Dismiss(Some(id))),
        Message::Tick(_) => {
            store.fire_due();
        }
    }
    if may_empty && store.is_paused() && store.is_empty() {
        store.pointer_left();
    }
}

/// Ticks while toasts are on screen, so due timers fire without a separate
/// driver task.
pub fn subscription(store: &ToastStore) -> Subscription<Message> {
    if store.is_empty() {
        Subscription::none()
    } else {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    }
}

/// Renders every toast of `state`, grouped by screen anchor.
///
/// Newest toasts sit nearest their edge. Dismissed toasts stay in place,
/// faded, until they are removed.
pub fn overlay(state: &State, config: &ToasterConfig) -> Element<'static, Message> {
    let gutter = config.gutter();
    let padding = config.container_padding();

    Position::ALL
        .into_iter()
        .filter_map(|position| group(state, position, gutter, padding))
        .fold(
            Stack::new().width(Length::Fill).height(Length::Fill),
            |stack, layer| stack.push(layer),
        )
        .into()
}

fn group(
    state: &State,
    position: Position,
    gutter: f32,
    padding: f32,
) -> Option<Element<'static, Message>> {
    let mut cards: Vec<Element<'static, Message>> = state.at(position).map(toast::view).collect();
    if cards.is_empty() {
        return None;
    }
    // Bottom anchors grow upwards, so the newest card goes last.
    if !position.is_top() {
        cards.reverse();
    }

    let (align_x, align_y) = anchor(position);
    let column = Column::with_children(cards).spacing(gutter).align_x(align_x);
    let hover_area = mouse_area(column)
        .on_enter(Message::PointerEntered)
        .on_exit(Message::PointerLeft);

    Some(
        Container::new(hover_area)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(align_y)
            .padding(padding)
            .into(),
    )
}

fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}
