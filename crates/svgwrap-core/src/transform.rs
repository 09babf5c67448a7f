//! The `transform` attribute: typed transform functions and list parsing.

use crate::error::{SvgError, SvgResult};
use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single SVG transform function. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    Translate { x: f64, y: f64 },
    Rotate { angle: f64 },
    RotateAbout { angle: f64, cx: f64, cy: f64 },
    Scale { x: f64, y: f64 },
    SkewX { angle: f64 },
    SkewY { angle: f64 },
    Matrix([f64; 6]),
}

impl Transform {
    pub fn to_affine(&self) -> Affine {
        match *self {
            Transform::Translate { x, y } => Affine::translate((x, y)),
            Transform::Rotate { angle } => Affine::rotate(angle.to_radians()),
            Transform::RotateAbout { angle, cx, cy } => {
                Affine::rotate_about(angle.to_radians(), Point::new(cx, cy))
            }
            Transform::Scale { x, y } => Affine::scale_non_uniform(x, y),
            Transform::SkewX { angle } => Affine::skew(angle.to_radians().tan(), 0.0),
            Transform::SkewY { angle } => Affine::skew(0.0, angle.to_radians().tan()),
            Transform::Matrix(coeffs) => Affine::new(coeffs),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Translate { x, y } => write!(f, "translate({x}, {y})"),
            Transform::Rotate { angle } => write!(f, "rotate({angle})"),
            Transform::RotateAbout { angle, cx, cy } => write!(f, "rotate({angle}, {cx}, {cy})"),
            Transform::Scale { x, y } => write!(f, "scale({x}, {y})"),
            Transform::SkewX { angle } => write!(f, "skewX({angle})"),
            Transform::SkewY { angle } => write!(f, "skewY({angle})"),
            Transform::Matrix([a, b, c, d, e, g]) => {
                write!(f, "matrix({a}, {b}, {c}, {d}, {e}, {g})")
            }
        }
    }
}

/// Format a list of transforms as a `transform` attribute value.
pub fn format_transform_list(transforms: &[Transform]) -> String {
    transforms
        .iter()
        .map(Transform::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compose a transform list into one matrix, applying the last entry first.
pub fn compose(transforms: &[Transform]) -> Affine {
    transforms
        .iter()
        .fold(Affine::IDENTITY, |acc, transform| acc * transform.to_affine())
}

/// Parse a `transform` attribute value such as `translate(10, 5) rotate(45)`.
pub fn parse_transform_list(input: &str) -> SvgResult<Vec<Transform>> {
    let mut transforms = Vec::new();
    let mut rest = input.trim_start_matches(is_separator);

    while !rest.is_empty() {
        let open = rest
            .find('(')
            .ok_or_else(|| SvgError::InvalidTransform(input.to_string()))?;
        let close = rest[open..]
            .find(')')
            .map(|offset| open + offset)
            .ok_or_else(|| SvgError::InvalidTransform(input.to_string()))?;

        let name = rest[..open].trim();
        let args = parse_numbers(&rest[open + 1..close])
            .ok_or_else(|| SvgError::InvalidTransform(input.to_string()))?;
        transforms.push(build(name, &args).ok_or_else(|| {
            SvgError::InvalidTransform(format!("{name}({})", &rest[open + 1..close]))
        })?);

        rest = rest[close + 1..].trim_start_matches(is_separator);
    }

    Ok(transforms)
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

fn parse_numbers(args: &str) -> Option<Vec<f64>> {
    args.split(is_separator)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().ok())
        .collect()
}

fn build(name: &str, args: &[f64]) -> Option<Transform> {
    Some(match (name, args) {
        ("translate", [x]) => Transform::Translate { x: *x, y: 0.0 },
        ("translate", [x, y]) => Transform::Translate { x: *x, y: *y },
        ("rotate", [angle]) => Transform::Rotate { angle: *angle },
        ("rotate", [angle, cx, cy]) => Transform::RotateAbout {
            angle: *angle,
            cx: *cx,
            cy: *cy,
        },
        ("scale", [s]) => Transform::Scale { x: *s, y: *s },
        ("scale", [x, y]) => Transform::Scale { x: *x, y: *y },
        ("skewX", [angle]) => Transform::SkewX { angle: *angle },
        ("skewY", [angle]) => Transform::SkewY { angle: *angle },
        ("matrix", [a, b, c, d, e, f]) => Transform::Matrix([*a, *b, *c, *d, *e, *f]),
        _ => return None,
    })
}
