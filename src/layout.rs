// SPDX-License-Identifier: MPL-2.0
//! Stacking offsets for toasts sharing a screen position.
//!
//! For hosts that place toasts themselves, e.g. with absolute positioning
//! and animated transitions. Heights come from
//! [`ToastStore::report_height`](crate::ToastStore::report_height). The
//! built-in [`overlay`](crate::ui::overlay) stacks cards in a column and
//! does not need them.

use crate::toast::{Position, Toast, ToastId};

/// Distance in pixels from the anchor edge to the toast `id`.
///
/// Only toasts in the same position group with a measured height take part.
/// The result is the sum of `height + gutter` over the entries that come
/// before `id` in the collection (newest first). Dismissed toasts keep their
/// slot until they are removed, so a neighbour never jumps while an exit
/// plays. An unknown or unmeasured `id` sits at the edge.
#[must_use]
pub fn offset(toasts: &[Toast], id: &ToastId, gutter: f32) -> f32 {
    let Some(position) = toasts.iter().find(|t| t.id() == id).map(Toast::position) else {
        return 0.0;
    };

    let measured: Vec<&Toast> = toasts
        .iter()
        .filter(|t| t.position() == position && t.height().is_some())
        .collect();
    let Some(index) = measured.iter().position(|t| t.id() == id) else {
        return 0.0;
    };

    measured[..index]
        .iter()
        .map(|t| t.height().unwrap_or_default() + gutter)
        .sum()
}

/// Direction in which a group grows: down from top anchors, up from bottom
/// anchors.
#[must_use]
pub fn y_direction(position: Position) -> f32 {
    if position.is_top() {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastType;
    use std::time::Instant;

    fn toast(id: &str, position: Position, height: Option<f32>) -> Toast {
        let mut t = Toast::new(id.into(), ToastType::Blank, "m".into(), Instant::now())
            .with_position(position);
        t.height = height;
        t
    }

    #[test]
    fn first_toast_sits_at_the_edge() {
        let toasts = vec![toast("a", Position::TopRight, Some(40.0))];
        assert_eq!(offset(&toasts, &"a".into(), 8.0), 0.0);
    }

    #[test]
    fn offset_sums_preceding_heights_and_gutters() {
        let toasts = vec![
            toast("c", Position::TopRight, Some(30.0)),
            toast("b", Position::TopRight, Some(50.0)),
            toast("a", Position::TopRight, Some(40.0)),
        ];
        assert_eq!(offset(&toasts, &"b".into(), 8.0), 38.0);
        assert_eq!(offset(&toasts, &"a".into(), 8.0), 96.0);
    }

    #[test]
    fn other_groups_and_unmeasured_toasts_are_ignored() {
        let toasts = vec![
            toast("x", Position::BottomLeft, Some(100.0)),
            toast("pending", Position::TopRight, None),
            toast("a", Position::TopRight, Some(40.0)),
            toast("b", Position::TopRight, Some(40.0)),
        ];
        assert_eq!(offset(&toasts, &"b".into(), 10.0), 50.0);
        assert_eq!(offset(&toasts, &"pending".into(), 10.0), 0.0);
    }

    #[test]
    fn unknown_id_is_zero() {
        let toasts = vec![toast("a", Position::TopRight, Some(40.0))];
        assert_eq!(offset(&toasts, &"missing".into(), 8.0), 0.0);
    }

    #[test]
    fn dismissed_neighbour_keeps_its_slot() {
        let mut toasts = vec![
            toast("first", Position::TopRight, Some(40.0)),
            toast("second", Position::TopRight, Some(40.0)),
        ];
        let before = offset(&toasts, &"second".into(), 8.0);
        toasts[0].visible = false;
        assert_eq!(offset(&toasts, &"second".into(), 8.0), before);

        toasts.remove(0);
        assert_eq!(offset(&toasts, &"second".into(), 8.0), 0.0);
    }

    #[test]
    fn direction_follows_anchor() {
        assert_eq!(y_direction(Position::TopCenter), 1.0);
        assert_eq!(y_direction(Position::BottomRight), -1.0);
    }
}
