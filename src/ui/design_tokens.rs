// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the toast column and the demo window.

## Organization

- **Palette**: Base and severity colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px steps)
- **Sizing**: Toast and progress indicator sizes
- **Typography**: Font size scale
- **Border / Radius / Shadow**: Card chrome

## Examples

```
use iced_toast::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let track = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::GRAY_400
};
let padding = spacing::SM;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Severity accents
    pub const ERROR_500: Color = Color::from_rgb(0.957, 0.345, 0.455);
    pub const WARNING_500: Color = Color::from_rgb(0.98, 0.8, 0.082);
    pub const SUCCESS_500: Color = Color::from_rgb(0.204, 0.827, 0.6);
    pub const INFO_500: Color = Color::from_rgb(0.376, 0.647, 0.98);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Toast card background.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Close button hit area; the progress ring is drawn around it.
    pub const CLOSE_BUTTON: f32 = 28.0;

    /// Stroke width of the circular countdown.
    pub const RING_STROKE: f32 = 2.5;

    /// Thickness of the linear countdown bar.
    pub const PROGRESS_BAR_HEIGHT: f32 = 3.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast title.
    pub const BODY_LG: f32 = 16.0;

    /// Toast content lines.
    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Card Chrome
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Severity accent border.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

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
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::RING_STROKE * 2.0 < sizing::CLOSE_BUTTON);
};
