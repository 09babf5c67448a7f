//! Linear and radial gradients with their color stops.
//!
//! A gradient is used as paint through [`Gradient::paint`], which yields the
//! `url(#id)` reference to put in a fill or stroke.

use crate::element::{Element, number};
use crate::error::SvgResult;
use crate::math::Percent;
use crate::node::Node;
use crate::styles::{Paint, keyword_enum};
use crate::transform::{Transform, format_transform_list, parse_transform_list};

keyword_enum!(
    /// Coordinate system of the gradient's geometry attributes.
    GradientUnits, default ObjectBoundingBox {
        UserSpaceOnUse => "userSpaceOnUse",
        ObjectBoundingBox => "objectBoundingBox",
    }
);

keyword_enum!(
    /// How the gradient continues past its ends.
    SpreadMethod, default Pad {
        Pad => "pad",
        Reflect => "reflect",
        Repeat => "repeat",
    }
);

/// Attributes shared by `<linearGradient>` and `<radialGradient>`.
pub trait Gradient: Element {
    /// ID of another gradient this one inherits stops and attributes from.
    fn href(&self) -> String {
        self.node().attribute("href").unwrap_or_default()
    }

    fn set_href(&self, href: &str) -> &Self {
        self.node().set_attribute("href", href);
        self
    }

    fn gradient_units(&self) -> GradientUnits {
        self.node()
            .attribute("gradientUnits")
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    fn set_gradient_units(&self, units: GradientUnits) -> &Self {
        self.node().set_attribute("gradientUnits", units);
        self
    }

    fn gradient_transform(&self) -> SvgResult<Vec<Transform>> {
        match self.node().attribute("gradientTransform") {
            Some(value) => parse_transform_list(&value),
            None => Ok(Vec::new()),
        }
    }

    fn set_gradient_transform(&self, transforms: &[Transform]) -> &Self {
        self.node()
            .set_attribute("gradientTransform", format_transform_list(transforms));
        self
    }

    fn spread_method(&self) -> SpreadMethod {
        self.node()
            .attribute("spreadMethod")
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    fn set_spread_method(&self, method: SpreadMethod) -> &Self {
        self.node().set_attribute("spreadMethod", method);
        self
    }

    fn add_stop(&self, stop: &Stop) -> &Self {
        self.nest(stop)
    }

    fn add_stops(&self, stops: &[Stop]) -> &Self {
        for stop in stops {
            self.add_stop(stop);
        }
        self
    }

    fn stops(&self) -> Vec<Stop> {
        self.node()
            .children()
            .into_iter()
            .filter(|child| child.tag() == Stop::TAG)
            .map(Stop::from_node_unchecked)
            .collect()
    }

    /// Paint referencing this gradient by ID.
    fn paint(&self) -> Paint {
        Paint::url(self.id())
    }
}

/// A `<linearGradient>` along the vector `(x1, y1)` to `(x2, y2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    node: Node,
}

impl LinearGradient {
    /// Gradient along the diagonal of the bounding box.
    pub fn new() -> Self {
        Self::with_vector(0.0, 0.0, 1.0, 1.0)
    }

    pub fn with_vector(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let gradient = Self {
            node: Node::create(Self::TAG),
        };
        gradient.set_x1(x1).set_y1(y1).set_x2(x2).set_y2(y2);
        gradient
    }

    pub fn x1(&self) -> f64 {
        number(&self.node, "x1")
    }

    pub fn set_x1(&self, x1: f64) -> &Self {
        self.node.set_attribute("x1", x1);
        self
    }

    pub fn y1(&self) -> f64 {
        number(&self.node, "y1")
    }

    pub fn set_y1(&self, y1: f64) -> &Self {
        self.node.set_attribute("y1", y1);
        self
    }

    pub fn x2(&self) -> f64 {
        number(&self.node, "x2")
    }

    pub fn set_x2(&self, x2: f64) -> &Self {
        self.node.set_attribute("x2", x2);
        self
    }

    pub fn y2(&self) -> f64 {
        number(&self.node, "y2")
    }

    pub fn set_y2(&self, y2: f64) -> &Self {
        self.node.set_attribute("y2", y2);
        self
    }
}

impl Default for LinearGradient {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for LinearGradient {
    const TAG: &'static str = "linearGradient";

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self { node }
    }
}

impl Gradient for LinearGradient {}

/// A `<radialGradient>` from a focal circle to an end circle.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    node: Node,
}

impl RadialGradient {
    /// Centred gradient with the focus on the centre.
    pub fn new() -> Self {
        Self::with_circle(0.5, 0.5, 0.5)
    }

    /// End circle at `(cx, cy)` with radius `r`; the focus coincides with it.
    pub fn with_circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::with_focus(cx, cy, r, cx, cy, r)
    }

    pub fn with_focus(cx: f64, cy: f64, r: f64, fx: f64, fy: f64, fr: f64) -> Self {
        let gradient = Self {
            node: Node::create(Self::TAG),
        };
        gradient
            .set_cx(cx)
            .set_cy(cy)
            .set_radius(r)
            .set_focus_x(fx)
            .set_focus_y(fy)
            .set_focus_radius(fr);
        gradient
    }

    pub fn cx(&self) -> f64 {
        number(&self.node, "cx")
    }

    pub fn set_cx(&self, cx: f64) -> &Self {
        self.node.set_attribute("cx", cx);
        self
    }

    pub fn cy(&self) -> f64 {
        number(&self.node, "cy")
    }

    pub fn set_cy(&self, cy: f64) -> &Self {
        self.node.set_attribute("cy", cy);
        self
    }

    pub fn radius(&self) -> f64 {
        number(&self.node, "r")
    }

    pub fn set_radius(&self, r: f64) -> &Self {
        self.node.set_attribute("r", r);
        self
    }

    pub fn focus_x(&self) -> f64 {
        number(&self.node, "fx")
    }

    pub fn set_focus_x(&self, fx: f64) -> &Self {
        self.node.set_attribute("fx", fx);
        self
    }

    pub fn focus_y(&self) -> f64 {
        number(&self.node, "fy")
    }

    pub fn set_focus_y(&self, fy: f64) -> &Self {
        self.node.set_attribute("fy", fy);
        self
    }

    pub fn focus_radius(&self) -> f64 {
        number(&self.node, "fr")
    }

    pub fn set_focus_radius(&self, fr: f64) -> &Self {
        self.node.set_attribute("fr", fr);
        self
    }
}

impl Default for RadialGradient {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for RadialGradient {
    const TAG: &'static str = "radialGradient";

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self { node }
    }
}

impl Gradient for RadialGradient {}

/// A color `<stop>` of a gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    node: Node,
}

impl Stop {
    /// Stop at `offset` in `[0, 1]`.
    pub fn new(offset: f64, color: impl Into<Paint>, opacity: f64) -> Self {
        let stop = Self {
            node: Node::create(Self::TAG),
        };
        stop.set_offset(offset).set_color(color).set_opacity(opacity);
        stop
    }

    pub fn from_percent(offset: Percent, color: impl Into<Paint>, opacity: f64) -> Self {
        Self::new(offset.value(), color, opacity)
    }

    pub fn offset(&self) -> f64 {
        number(&self.node, "offset")
    }

    pub fn set_offset(&self, offset: f64) -> &Self {
        self.node.set_attribute("offset", offset);
        self
    }

    /// Missing colors read as black.
    pub fn color(&self) -> Paint {
        self.node
            .attribute("stop-color")
            .map(Paint::from)
            .unwrap_or_default()
    }

    pub fn set_color(&self, color: impl Into<Paint>) -> &Self {
        self.node.set_attribute("stop-color", color.into());
        self
    }

    /// Missing opacity reads as 1.
    pub fn opacity(&self) -> f64 {
        self.node.attribute_f64("stop-opacity").unwrap_or(1.0)
    }

    pub fn set_opacity(&self, opacity: f64) -> &Self {
        self.node.set_attribute("stop-opacity", opacity);
        self
    }
}

impl Default for Stop {
    fn default() -> Self {
        Self::new(0.0, Paint::black(), 1.0)
    }
}

impl Element for Stop {
    const TAG: &'static str = "stop";

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self { node }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::Rgba;

    #[test]
    fn test_linear_defaults() {
        let gradient = LinearGradient::new();
        assert_eq!(
            (gradient.x1(), gradient.y1(), gradient.x2(), gradient.y2()),
            (0.0, 0.0, 1.0, 1.0)
        );
        assert_eq!(gradient.gradient_units(), GradientUnits::ObjectBoundingBox);
        assert_eq!(gradient.spread_method(), SpreadMethod::Pad);
        assert!(gradient.gradient_transform().unwrap().is_empty());
    }

    #[test]
    fn test_radial_focus_follows_circle() {
        let gradient = RadialGradient::with_circle(0.3, 0.4, 0.2);
        assert_eq!(gradient.focus_x(), 0.3);
        assert_eq!(gradient.focus_y(), 0.4);
        assert_eq!(gradient.focus_radius(), 0.2);

        let centred = RadialGradient::new();
        assert_eq!((centred.cx(), centred.cy(), centred.radius()), (0.5, 0.5, 0.5));
    }

    #[test]
    fn test_stops() {
        let gradient = LinearGradient::new();
        gradient.add_stops(&[
            Stop::new(0.0, Rgba::rgb(255, 0, 0), 1.0),
            Stop::from_percent(Percent::new(100.0), "blue", 0.5),
        ]);
        let stops = gradient.stops();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].node().attribute("stop-color").unwrap(), "#ff0000");
        assert_eq!(stops[1].offset(), 1.0);
        assert_eq!(stops[1].color(), Paint::Keyword("blue".to_string()));
        assert_eq!(stops[1].opacity(), 0.5);
    }

    #[test]
    fn test_stop_defaults() {
        let stop = Stop::default();
        assert_eq!(stop.offset(), 0.0);
        assert_eq!(stop.color(), Paint::black());
        assert_eq!(stop.opacity(), 1.0);
    }

    #[test]
    fn test_attributes_and_paint() {
        let gradient = RadialGradient::new();
        gradient.set_id("glow");
        gradient
            .set_spread_method(SpreadMethod::Reflect)
            .set_gradient_units(GradientUnits::UserSpaceOnUse)
            .set_gradient_transform(&[Transform::Rotate { angle: 45.0 }])
            .set_href("base");
        assert_eq!(gradient.node().attribute("spreadMethod").unwrap(), "reflect");
        assert_eq!(gradient.gradient_units(), GradientUnits::UserSpaceOnUse);
        assert_eq!(gradient.gradient_transform().unwrap().len(), 1);
        assert_eq!(gradient.href(), "base");
        assert_eq!(gradient.paint().to_string(), "url(#glow)");
    }
}
