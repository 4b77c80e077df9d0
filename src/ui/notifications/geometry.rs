// SPDX-License-Identifier: MPL-2.0
//! Derived toast geometry.
//!
//! Pure functions from measurements to layout targets. The renderer (or an
//! animation engine in front of it) interpolates towards these values.

use super::notification::Align;
use super::options::ToastView;
use crate::config::{BLUR_RATIO, HEIGHT, MIN_EXPAND_RATIO, PILL_PADDING, WIDTH};
use crate::ui::design_tokens::{spacing, typography};

/// Height of an expanded toast holding `content_height` of body content.
#[must_use]
pub fn expanded_height(content_height: f32) -> f32 {
    (HEIGHT * MIN_EXPAND_RATIO).max(HEIGHT + content_height.max(0.0))
}

/// Pill width fitted around the measured header content.
#[must_use]
pub fn pill_width(header_width: f32) -> f32 {
    (header_width.max(0.0) + PILL_PADDING).clamp(HEIGHT, WIDTH)
}

/// Horizontal offset of the pill inside the canvas.
#[must_use]
pub fn pill_offset_x(align: Align, pill_width: f32) -> f32 {
    let free = (WIDTH - pill_width).max(0.0);
    match align {
        Align::Left => 0.0,
        Align::Center => free / 2.0,
        Align::Right => free,
    }
}

/// Blur radius of the pill/body merge filter.
#[must_use]
pub fn blur_radius(roundness: f32) -> f32 {
    roundness.max(0.0) * BLUR_RATIO
}

/// Header width guessed from the title when no measurement arrived yet.
#[must_use]
pub fn estimate_header_width(view: &ToastView) -> f32 {
    let title_size = view
        .styles
        .title
        .and_then(|style| style.size)
        .unwrap_or(typography::TITLE);
    let title = text_width(&view.title, title_size);
    // badge + gap
    title + typography::BADGE * 2.0 + spacing::XS
}

/// Body height guessed from the description when no measurement arrived yet.
#[must_use]
pub fn estimate_content_height(view: &ToastView) -> f32 {
    if !view.has_body() {
        return 0.0;
    }

    let size = view
        .styles
        .description
        .and_then(|style| style.size)
        .unwrap_or(typography::BODY);
    let line_height = size * typography::LINE_HEIGHT_RATIO;
    let inner_width = WIDTH - 2.0 * spacing::MD;

    let lines: f32 = view
        .description
        .as_ref()
        .map(|description| {
            description
                .plain_text()
                .lines()
                .map(|line| (text_width(line, size) / inner_width).ceil().max(1.0))
                .sum::<f32>()
        })
        .unwrap_or(0.0);
    let button = if view.button.is_some() {
        typography::BODY * typography::LINE_HEIGHT_RATIO + spacing::SM
    } else {
        0.0
    };

    lines * line_height + button + 2.0 * spacing::SM
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * typography::AVERAGE_GLYPH_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::notifications::ToastOptions;

    #[test]
    fn expanded_height_has_a_floor() {
        assert_abs_diff_eq!(expanded_height(0.0), HEIGHT * MIN_EXPAND_RATIO);
        assert_abs_diff_eq!(expanded_height(10.0), HEIGHT * MIN_EXPAND_RATIO);
        assert_abs_diff_eq!(expanded_height(200.0), HEIGHT + 200.0);
        assert_abs_diff_eq!(expanded_height(-5.0), HEIGHT * MIN_EXPAND_RATIO);
    }

    #[test]
    fn pill_width_is_at_least_the_pill_height() {
        assert_abs_diff_eq!(pill_width(0.0), HEIGHT);
        assert_abs_diff_eq!(pill_width(100.0), 100.0 + PILL_PADDING);
        assert_abs_diff_eq!(pill_width(10_000.0), WIDTH);
    }

    #[test]
    fn pill_offset_follows_alignment() {
        let pill = 150.0;
        assert_abs_diff_eq!(pill_offset_x(Align::Left, pill), 0.0);
        assert_abs_diff_eq!(pill_offset_x(Align::Center, pill), (WIDTH - pill) / 2.0);
        assert_abs_diff_eq!(pill_offset_x(Align::Right, pill), WIDTH - pill);
    }

    #[test]
    fn blur_scales_with_roundness() {
        assert_abs_diff_eq!(blur_radius(16.0), 8.0);
        assert_abs_diff_eq!(blur_radius(-1.0), 0.0);
    }

    #[test]
    fn estimates_grow_with_content() {
        let short = ToastOptions::new().title("Hi").description("ok").to_view();
        let long = ToastOptions::new()
            .title("A much longer title")
            .description("line one\nline two\nline three")
            .to_view();

        assert!(estimate_header_width(&long) > estimate_header_width(&short));
        assert!(estimate_content_height(&long) > estimate_content_height(&short));
        assert_abs_diff_eq!(
            estimate_content_height(&ToastOptions::new().to_view()),
            0.0
        );
    }
}
