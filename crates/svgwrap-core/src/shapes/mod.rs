//! Wrappers for the basic shapes, and the [`Shape`] enum over every graphic wrapper.

mod circle;
mod ellipse;
mod image;
mod line;
mod path;
mod poly;
mod rectangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use image::{CrossOrigin, Decoding, ForeignObject, Image};
pub use line::Line;
pub use path::Path;
pub use poly::{Poly, Polygon, Polyline};
pub use rectangle::Rectangle;

use crate::element::{Element, Geometry, number};
use crate::error::{SvgError, SvgResult};
use crate::geometry;
use crate::group::Group;
use crate::node::Node;
use crate::text::{Text, TextSpan};
use kurbo::{Rect, Vec2};

/// Shapes positioned by `x`, `y`, `width` and `height`.
pub trait Quadrilateral: Geometry {
    fn x(&self) -> f64 {
        number(self.node(), "x")
    }

    fn set_x(&self, x: f64) -> &Self {
        self.node().set_attribute("x", x);
        self
    }

    fn y(&self) -> f64 {
        number(self.node(), "y")
    }

    fn set_y(&self, y: f64) -> &Self {
        self.node().set_attribute("y", y);
        self
    }

    fn width(&self) -> f64 {
        number(self.node(), "width")
    }

    fn set_width(&self, width: f64) -> &Self {
        self.node().set_attribute("width", width);
        self
    }

    fn height(&self) -> f64 {
        number(self.node(), "height")
    }

    fn set_height(&self, height: f64) -> &Self {
        self.node().set_attribute("height", height);
        self
    }
}

/// Shapes positioned by their centre, `cx` and `cy`.
pub trait Conic: Geometry {
    fn cx(&self) -> f64 {
        number(self.node(), "cx")
    }

    fn set_cx(&self, cx: f64) -> &Self {
        self.node().set_attribute("cx", cx);
        self
    }

    fn cy(&self) -> f64 {
        number(self.node(), "cy")
    }

    fn set_cy(&self, cy: f64) -> &Self {
        self.node().set_attribute("cy", cy);
        self
    }
}

/// Enum wrapper for every graphic element wrapper.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Ellipse(Ellipse),
    Line(Line),
    Path(Path),
    Polygon(Polygon),
    Polyline(Polyline),
    Image(Image),
    ForeignObject(ForeignObject),
    Text(Text),
    TextSpan(TextSpan),
    Group(Group),
}

impl Shape {
    /// Wrap a node in the matching variant.
    pub fn from_node(node: Node) -> SvgResult<Self> {
        let tag = node.tag();
        Ok(match tag.as_str() {
            "rect" => Shape::Rectangle(Rectangle::from_node_unchecked(node)),
            "circle" => Shape::Circle(Circle::from_node_unchecked(node)),
            "ellipse" => Shape::Ellipse(Ellipse::from_node_unchecked(node)),
            "line" => Shape::Line(Line::from_node_unchecked(node)),
            "path" => Shape::Path(Path::from_node_unchecked(node)),
            "polygon" => Shape::Polygon(Polygon::from_node_unchecked(node)),
            "polyline" => Shape::Polyline(Polyline::from_node_unchecked(node)),
            "image" => Shape::Image(Image::from_node_unchecked(node)),
            "foreignObject" => Shape::ForeignObject(ForeignObject::from_node_unchecked(node)),
            "text" => Shape::Text(Text::from_node_unchecked(node)),
            "tspan" => Shape::TextSpan(TextSpan::from_node_unchecked(node)),
            "g" => Shape::Group(Group::from_node_unchecked(node)),
            _ => {
                return Err(SvgError::UnexpectedTag {
                    expected: "graphic element",
                    found: tag,
                });
            }
        })
    }

    pub fn node(&self) -> &Node {
        match self {
            Shape::Rectangle(s) => s.node(),
            Shape::Circle(s) => s.node(),
            Shape::Ellipse(s) => s.node(),
            Shape::Line(s) => s.node(),
            Shape::Path(s) => s.node(),
            Shape::Polygon(s) => s.node(),
            Shape::Polyline(s) => s.node(),
            Shape::Image(s) => s.node(),
            Shape::ForeignObject(s) => s.node(),
            Shape::Text(s) => s.node(),
            Shape::TextSpan(s) => s.node(),
            Shape::Group(s) => s.node(),
        }
    }

    pub fn id(&self) -> String {
        self.node().attribute("id").unwrap_or_default()
    }

    pub fn tag(&self) -> String {
        self.node().tag()
    }

    /// Bounding box in the parent's coordinate system, including the shape's own transform.
    pub fn bounding_box(&self) -> Rect {
        let node = self.node();
        geometry::local_transform(node).transform_rect_bbox(geometry::bounding_box(node))
    }

    /// Move the shape by rewriting its positional attributes.
    pub fn translate(&self, dx: f64, dy: f64) {
        geometry::translate(self.node(), dx, dy);
    }

    /// Move the shape so its bounding box starts at `(x, y)`.
    pub fn move_to(&self, x: f64, y: f64) {
        let bounds = self.bounding_box();
        let delta = geometry::parent_to_local_delta(
            self.node(),
            Vec2::new(x - bounds.x0, y - bounds.y0),
        );
        self.translate(delta.x, delta.y);
    }

    /// Deep copy with fresh IDs.
    pub fn duplicate(&self) -> Self {
        match self {
            Shape::Rectangle(s) => Shape::Rectangle(s.duplicate()),
            Shape::Circle(s) => Shape::Circle(s.duplicate()),
            Shape::Ellipse(s) => Shape::Ellipse(s.duplicate()),
            Shape::Line(s) => Shape::Line(s.duplicate()),
            Shape::Path(s) => Shape::Path(s.duplicate()),
            Shape::Polygon(s) => Shape::Polygon(s.duplicate()),
            Shape::Polyline(s) => Shape::Polyline(s.duplicate()),
            Shape::Image(s) => Shape::Image(s.duplicate()),
            Shape::ForeignObject(s) => Shape::ForeignObject(s.duplicate()),
            Shape::Text(s) => Shape::Text(s.duplicate()),
            Shape::TextSpan(s) => Shape::TextSpan(s.duplicate()),
            Shape::Group(s) => Shape::Group(s.duplicate()),
        }
    }
}

macro_rules! shape_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::$variant(shape)
                }
            }
        )+
    };
}

shape_from!(
    Rectangle,
    Circle,
    Ellipse,
    Line,
    Path,
    Polygon,
    Polyline,
    Image,
    ForeignObject,
    Text,
    TextSpan,
    Group,
);
