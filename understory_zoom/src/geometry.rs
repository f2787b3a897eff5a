// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content fitting and offset bounds.

use kurbo::{Size, Vec2};

fn has_area(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0 && size.is_finite()
}

/// Scales `content` uniformly so it fits inside `viewport` (contain-fit).
///
/// - A viewport without area yields [`Size::ZERO`].
/// - A zero `content` size means "same as the viewport".
/// - Content with only one zero (or negative) dimension has no usable aspect
///   ratio and also yields [`Size::ZERO`].
///
/// Otherwise the result has the aspect ratio of `content` and matches the
/// viewport exactly in the constraining dimension.
#[must_use]
pub fn fit_content_size(viewport: Size, content: Size) -> Size {
    if !has_area(viewport) {
        return Size::ZERO;
    }
    if content == Size::ZERO {
        return viewport;
    }
    if !has_area(content) {
        return Size::ZERO;
    }
    let content_aspect = content.width / content.height;
    let viewport_aspect = viewport.width / viewport.height;
    if content_aspect > viewport_aspect {
        let factor = viewport.width / content.width;
        Size::new(viewport.width, content.height * factor)
    } else {
        let factor = viewport.height / content.height;
        Size::new(content.width * factor, viewport.height)
    }
}

/// Symmetric offset bound per axis for content of `fitted` size shown at
/// `scale` inside `viewport`.
///
/// Offsets may range over `[-bound, bound]`; an axis whose scaled content
/// fits inside the viewport gets a bound of `0`, as does everything when
/// `fitted` has no area.
#[must_use]
pub fn offset_bound(fitted: Size, scale: f64, viewport: Size) -> Vec2 {
    if !has_area(fitted) {
        return Vec2::ZERO;
    }
    let scaled = fitted * scale;
    Vec2::new(
        (scaled.width - viewport.width).max(0.0) * 0.5,
        (scaled.height - viewport.height).max(0.0) * 0.5,
    )
}
