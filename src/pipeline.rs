//! JSON-described op lists applied to an RGBA image.
//!
//! ```json
//! { "ops": [ { "op": "rotate90" }, { "op": "scale_up", "factor": 2 } ] }
//! ```

use crate::{
    foundation::{
        core::{PixelRgba8, Point2},
        error::{PixError, PixResult},
        math::Turn,
    },
    geometry::{
        circle::{circle_fill, circle_outline},
        flip::{flip_h, flip_v},
        rotate::{rotate, rotate90, rotate180, rotate270},
        scale::{scale_down, scale_up},
    },
    matrix::{Image, Matrix},
    ops::fill_blend,
};

/// One step of an [`OpList`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Quarter turn clockwise.
    Rotate90,
    /// Half turn.
    Rotate180,
    /// Quarter turn counter-clockwise.
    Rotate270,
    /// Mirror columns.
    FlipH,
    /// Mirror rows.
    FlipV,
    /// Block magnification.
    ScaleUp {
        /// Integer factor, at least 1.
        factor: usize,
    },
    /// Box-mean reduction; both sides must divide by `factor`.
    ScaleDown {
        /// Integer factor, at least 1.
        factor: usize,
    },
    /// Rotation about the image centre, same output size.
    Rotate {
        /// Clockwise on screen.
        degrees: f64,
        /// Written wherever the rotated source does not reach.
        #[serde(default)]
        background: PixelRgba8,
    },
    /// Blend one color over every pixel.
    FillBlend {
        /// Overlay color; its alpha drives the blend.
        color: PixelRgba8,
    },
    /// Opaque filled disc, clipped to the image.
    CircleFill {
        /// Centre column.
        cx: isize,
        /// Centre row.
        cy: isize,
        /// Radius in pixels.
        radius: isize,
        /// Written as-is, no blending.
        color: PixelRgba8,
    },
    /// One-pixel circle outline, clipped to the image.
    CircleOutline {
        /// Centre column.
        cx: isize,
        /// Centre row.
        cy: isize,
        /// Radius in pixels.
        radius: isize,
        /// Written as-is, no blending.
        color: PixelRgba8,
    },
}

impl Op {
    /// Short name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rotate90 => "rotate90",
            Self::Rotate180 => "rotate180",
            Self::Rotate270 => "rotate270",
            Self::FlipH => "flip_h",
            Self::FlipV => "flip_v",
            Self::ScaleUp { .. } => "scale_up",
            Self::ScaleDown { .. } => "scale_down",
            Self::Rotate { .. } => "rotate",
            Self::FillBlend { .. } => "fill_blend",
            Self::CircleFill { .. } => "circle_fill",
            Self::CircleOutline { .. } => "circle_outline",
        }
    }

    /// Checks parameters that do not depend on the image.
    pub fn validate(&self) -> PixResult<()> {
        match *self {
            Self::ScaleUp { factor } | Self::ScaleDown { factor } if factor == 0 => Err(
                PixError::validation(format!("{}: factor must be >= 1", self.name())),
            ),
            Self::Rotate { degrees, .. } if !degrees.is_finite() => Err(PixError::validation(
                format!("rotate: degrees must be finite, got {degrees}"),
            )),
            Self::CircleFill { radius, .. } | Self::CircleOutline { radius, .. } if radius < 0 => {
                Err(PixError::validation(format!(
                    "{}: radius must be >= 0, got {radius}",
                    self.name()
                )))
            }
            _ => Ok(()),
        }
    }

    /// Runs this op, consuming the input and returning the result.
    pub fn apply(&self, mut img: Image<PixelRgba8>) -> PixResult<Image<PixelRgba8>> {
        let (w, h) = img.dims();
        match *self {
            Self::Rotate90 | Self::Rotate270 => {
                let mut out = Image::new(h, w, PixelRgba8::TRANSPARENT)?;
                if matches!(self, Self::Rotate90) {
                    rotate90(&img, &mut out)?;
                } else {
                    rotate270(&img, &mut out)?;
                }
                Ok(out)
            }
            Self::Rotate180 => {
                let mut out = Image::new(w, h, PixelRgba8::TRANSPARENT)?;
                rotate180(&img, &mut out)?;
                Ok(out)
            }
            Self::FlipH => {
                let mut out = Image::new(w, h, PixelRgba8::TRANSPARENT)?;
                flip_h(&img, &mut out)?;
                Ok(out)
            }
            Self::FlipV => {
                let mut out = Image::new(w, h, PixelRgba8::TRANSPARENT)?;
                flip_v(&img, &mut out)?;
                Ok(out)
            }
            Self::ScaleUp { factor } => {
                let (ow, oh) = match (w.checked_mul(factor), h.checked_mul(factor)) {
                    (Some(ow), Some(oh)) => (ow, oh),
                    _ => {
                        return Err(PixError::validation(format!(
                            "scale_up: {w}x{h} by {factor} overflows"
                        )));
                    }
                };
                let mut out = Image::new(ow, oh, PixelRgba8::TRANSPARENT)?;
                scale_up(&img, &mut out, factor)?;
                Ok(out)
            }
            Self::ScaleDown { factor } => {
                if factor == 0 || w % factor != 0 || h % factor != 0 {
                    return Err(PixError::validation(format!(
                        "scale_down: {w}x{h} is not divisible by {factor}"
                    )));
                }
                let mut out = Image::new(w / factor, h / factor, PixelRgba8::TRANSPARENT)?;
                scale_down(&img, &mut out, factor)?;
                Ok(out)
            }
            Self::Rotate {
                degrees,
                background,
            } => {
                let mut out = Image::new(w, h, background)?;
                let center = Point2::new((w as f32 - 1.0) / 2.0, (h as f32 - 1.0) / 2.0);
                rotate(&img, &mut out, Turn::from_degrees(degrees), center, center);
                Ok(out)
            }
            Self::FillBlend { color } => {
                fill_blend(&mut img, color);
                Ok(img)
            }
            Self::CircleFill {
                cx,
                cy,
                radius,
                color,
            } => {
                circle_fill(&mut img, (cx, cy), radius, color);
                Ok(img)
            }
            Self::CircleOutline {
                cx,
                cy,
                radius,
                color,
            } => {
                circle_outline(&mut img, (cx, cy), radius, color);
                Ok(img)
            }
        }
    }
}

/// Ordered list of [`Op`]s, the document read by `pixmatrix apply`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OpList {
    /// Steps, applied first to last.
    pub ops: Vec<Op>,
}

impl OpList {
    /// Parses and validates a JSON op list.
    pub fn from_json_str(json: &str) -> PixResult<Self> {
        let list: Self = serde_json::from_str(json)
            .map_err(|err| PixError::validation(format!("parse op list: {err}")))?;
        list.validate()?;
        Ok(list)
    }

    /// Validates every op, naming the first bad index.
    pub fn validate(&self) -> PixResult<()> {
        for (i, op) in self.ops.iter().enumerate() {
            op.validate().map_err(|err| match err {
                PixError::Validation(msg) => PixError::validation(format!("ops[{i}]: {msg}")),
                other => other,
            })?;
        }
        Ok(())
    }

    /// Runs every op in order.
    #[tracing::instrument(skip(self, img), fields(ops = self.ops.len(), width = img.width(), height = img.height()))]
    pub fn apply(&self, img: Image<PixelRgba8>) -> PixResult<Image<PixelRgba8>> {
        self.validate()?;
        self.ops.iter().enumerate().try_fold(img, |img, (i, op)| {
            tracing::debug!(index = i, op = op.name(), "apply op");
            op.apply(img)
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
