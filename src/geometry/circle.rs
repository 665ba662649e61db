//! Midpoint circle rasterization.
//!
//! One octant (`0 <= y <= x`) is walked with an integer decision variable
//! and mirrored into the other seven. Outlines plot the mirrored points;
//! fills draw the horizontal spans between mirrored x extents.
//!
//! The clipped variants produce the same pixels row by row from a closed
//! form of the walk, so off-view arcs of huge circles cost nothing.

use crate::matrix::MatrixMut;

/// Walks the first octant of a circle of `radius` centred on the origin.
fn for_each_octant_point(radius: isize, mut visit: impl FnMut(isize, isize)) {
    if radius < 0 {
        return;
    }
    let (mut x, mut y) = (radius, 0isize);
    let mut d = 1 - radius;
    let mut ddy = 3;
    let mut ddx = 2 - 2 * radius;
    while y <= x {
        visit(x, y);
        if d >= 0 {
            d += ddx;
            ddx += 2;
            x -= 1;
        }
        d += ddy;
        ddy += 2;
        y += 1;
    }
}

fn mirrored(cx: isize, cy: isize, x: isize, y: isize) -> [(isize, isize); 8] {
    [
        (cx + x, cy + y),
        (cx - x, cy + y),
        (cx + x, cy - y),
        (cx - x, cy - y),
        (cx + y, cy + x),
        (cx - y, cy + x),
        (cx + y, cy - x),
        (cx - y, cy - x),
    ]
}

/// Closed form of the octant walk, so clipped drawing only visits rows
/// inside the view.
///
/// For `radius >= 1` the walk holds `x = x_at(y)` at every `y <= last_y`.
/// Arithmetic is in `i128` so any `isize` centre and radius fit.
struct Octant {
    r2: i128,
    last_y: i128,
}

impl Octant {
    fn new(radius: i128) -> Self {
        let r2 = radius * radius;
        let visited = |y: i128| 2 * y * y - y + 1 <= r2;
        let mut last_y = (r2 / 2).isqrt();
        while visited(last_y + 1) {
            last_y += 1;
        }
        while last_y > 0 && !visited(last_y) {
            last_y -= 1;
        }
        Self { r2, last_y }
    }

    /// Largest `x` with `x * (x - 1) <= r2 - y * y - 1`.
    fn x_at(&self, y: i128) -> i128 {
        let k = (self.r2 - y * y - 1) as u128;
        ((4 * k + 1).isqrt() as i128 + 1) / 2
    }

    /// Largest `y` whose walked `x` is at least `x`, or -1.
    fn y_reach(&self, x: i128) -> i128 {
        let k = self.r2 - 1 - x * (x - 1);
        if k < 0 { -1 } else { k.isqrt() }
    }

    /// Column offsets plotted on the rows `dy` away from the centre: one
    /// octant point (if any) and the run of mirrored points.
    fn row(&self, dy: i128) -> (Option<i128>, Option<(i128, i128)>) {
        let own = (dy <= self.last_y).then(|| self.x_at(dy));
        let lo = self.y_reach(dy + 1) + 1;
        let hi = self.y_reach(dy).min(self.last_y);
        (own, (lo <= hi).then_some((lo, hi)))
    }
}

/// Rows of the view the circle touches, or `None` if its box misses.
fn clip_rows(
    width: usize,
    height: usize,
    (cx, cy): (isize, isize),
    radius: isize,
) -> Option<(i128, i128)> {
    let (w, h) = (width as i128, height as i128);
    let (cx, cy, r) = (cx as i128, cy as i128, radius as i128);
    if radius < 0 || cx + r < 0 || cx - r >= w || cy + r < 0 || cy - r >= h {
        return None;
    }
    Some(((cy - r).max(0), (cy + r).min(h - 1)))
}

/// Draws a one-pixel circle outline, skipping points outside `dst`.
///
/// Work is bounded by the view, whatever the radius.
pub fn circle_outline<M: MatrixMut + ?Sized>(
    dst: &mut M,
    center: (isize, isize),
    radius: isize,
    value: M::Elem,
) {
    let w = dst.width() as i128;
    let Some((top, bottom)) = clip_rows(dst.width(), dst.height(), center, radius) else {
        return;
    };
    let (cx, cy) = (center.0 as i128, center.1 as i128);
    if radius == 0 {
        *dst.pixel_mut(cx as usize, cy as usize) = value;
        return;
    }
    let octant = Octant::new(radius as i128);
    for row in top..=bottom {
        let (own, run) = octant.row((row - cy).abs());
        let line = dst.row_mut(row as usize);
        let mut plot = |col: i128| {
            if (0..w).contains(&col) {
                line[col as usize] = value;
            }
        };
        if let Some(x) = own {
            plot(cx - x);
            plot(cx + x);
        }
        if let Some((lo, hi)) = run {
            for y in lo.max(-cx)..=hi.min(w - 1 - cx) {
                plot(cx + y);
            }
            for y in lo.max(cx - (w - 1))..=hi.min(cx) {
                plot(cx - y);
            }
        }
    }
}

/// Draws a circle outline that must lie entirely inside `dst`.
pub fn circle_outline_unclipped<M: MatrixMut + ?Sized>(
    dst: &mut M,
    center: (isize, isize),
    radius: isize,
    value: M::Elem,
) {
    debug_assert!(fits(dst.width(), dst.height(), center, radius), "circle leaves the view");
    let (cx, cy) = center;
    for_each_octant_point(radius, |x, y| {
        for (px, py) in mirrored(cx, cy, x, y) {
            *dst.pixel_mut(px as usize, py as usize) = value;
        }
    });
}

/// Fills a disc, clipping each span to `dst`.
///
/// Work is bounded by the view, whatever the radius.
pub fn circle_fill<M: MatrixMut + ?Sized>(
    dst: &mut M,
    center: (isize, isize),
    radius: isize,
    value: M::Elem,
) {
    let w = dst.width() as i128;
    let Some((top, bottom)) = clip_rows(dst.width(), dst.height(), center, radius) else {
        return;
    };
    let (cx, cy) = (center.0 as i128, center.1 as i128);
    if radius == 0 {
        *dst.pixel_mut(cx as usize, cy as usize) = value;
        return;
    }
    let octant = Octant::new(radius as i128);
    for row in top..=bottom {
        let (own, run) = octant.row((row - cy).abs());
        let Some(half) = own.max(run.map(|(_, hi)| hi)) else {
            continue;
        };
        let (x0, x1) = ((cx - half).max(0), (cx + half).min(w - 1));
        if x0 <= x1 {
            crate::span::fill(
                &mut dst.row_mut(row as usize)[x0 as usize..=x1 as usize],
                value,
            );
        }
    }
}

/// Fills a disc that must lie entirely inside `dst`.
pub fn circle_fill_unclipped<M: MatrixMut + ?Sized>(
    dst: &mut M,
    center: (isize, isize),
    radius: isize,
    value: M::Elem,
) {
    debug_assert!(fits(dst.width(), dst.height(), center, radius), "circle leaves the view");
    let (cx, cy) = center;
    let mut span = |row: isize, x0: isize, x1: isize| {
        crate::span::fill(
            &mut dst.row_mut(row as usize)[x0 as usize..=x1 as usize],
            value,
        );
    };
    for_each_octant_point(radius, |x, y| {
        span(cy + y, cx - x, cx + x);
        span(cy - y, cx - x, cx + x);
        span(cy + x, cx - y, cx + y);
        span(cy - x, cx - y, cx + y);
    });
}

fn fits(width: usize, height: usize, (cx, cy): (isize, isize), radius: isize) -> bool {
    let (cx, cy, r) = (cx as i128, cy as i128, radius as i128);
    r >= 0 && cx - r >= 0 && cy - r >= 0 && cx + r < width as i128 && cy + r < height as i128
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/circle.rs"]
mod tests;
