// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by the toast renderer, following the W3C Design
Tokens standard. Geometry that drives the state machine (pill height,
canvas width, swipe thresholds) lives in [`crate::config::defaults`]
instead, because it is behaviour rather than decoration.

## Organization

- **Palette**: Base and per-state accent colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Typography**: Font size scale
- **Shadow**: Shadow definitions

## Examples

```
use iced_toaster::ui::design_tokens::{palette, opacity};
use iced::Color;

let muted = Color {
    a: opacity::MUTED,
    ..palette::WHITE
};
assert!(muted.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    /// Default pill and body fill.
    pub const FILL: Color = GRAY_900;

    // State accents
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
    pub const ACTION_500: Color = Color::from_rgb(0.659, 0.435, 0.965);
    pub const LOADING_500: Color = GRAY_200;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const BADGE: f32 = 0.2;
    pub const MUTED: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Pill title.
    pub const TITLE: f32 = 14.0;

    /// Body description.
    pub const BODY: f32 = 13.0;

    /// State badge glyph.
    pub const BADGE: f32 = 12.0;

    /// Average advance of a glyph relative to the font size, used when no
    /// measurement of the header is available yet.
    pub const AVERAGE_GLYPH_RATIO: f32 = 0.58;

    /// Line height relative to the font size.
    pub const LINE_HEIGHT_RATIO: f32 = 1.4;
}

// ============================================================================
// Shadow Definitions
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
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::MUTED > opacity::BADGE);

    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::BADGE);
};
