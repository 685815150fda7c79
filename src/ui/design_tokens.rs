// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants of the toast overlay.

## Organization

- **Palette**: Base and per-type accent colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_toaster::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let faded = Color {
    a: opacity::DISMISSED,
    ..palette::SUCCESS_500
};

let padding = spacing::SM; // 12px
```
"#]

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Accent per toast type
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Dismissed toasts fade to this level until they are removed.
    pub const DISMISSED: f32 = 0.35;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const SM: f32 = 12.0; // 1.5 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 20.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Message text.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border
// ============================================================================

pub mod border {
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::SM > spacing::XXS);

    assert!(opacity::DISMISSED > 0.0 && opacity::DISMISSED < opacity::OPAQUE);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);

    assert!(radius::MD > radius::SM);
    assert!(sizing::TOAST_WIDTH > sizing::ICON_MD);
};
