//! SvgWrap Core Library
//!
//! Typed wrappers over an in-memory SVG element tree: shapes, text, gradients,
//! animation, styles, transforms, layout and the math helpers used to build scenes.

pub mod animate;
pub mod canvas;
pub mod defs;
pub mod element;
pub mod error;
pub mod events;
pub mod geometry;
pub mod gradient;
pub mod group;
pub mod ids;
pub mod layout;
pub mod math;
pub mod node;
pub mod shapes;
pub mod styles;
pub mod text;
pub mod transform;

pub use animate::{Animate, Repeat};
pub use canvas::Canvas;
pub use defs::Define;
pub use element::{Element, Geometry, Graphic};
pub use error::{SvgError, SvgResult};
pub use events::{Event, EventType, ListenerId, ListenerOptions};
pub use gradient::{Gradient, GradientUnits, LinearGradient, RadialGradient, SpreadMethod, Stop};
pub use group::Group;
pub use ids::{IdGenerator, TagCounter, UuidIds, set_id_generator, toggle_auto_tab_indexing};
pub use layout::{Align, Alignment, Direction, Flex, FlexOptions, Grid, GridOptions};
pub use math::{Noise, Percent, Vector2, Vector3};
pub use node::{Node, NodeSnapshot, SVG_NAMESPACE};
pub use shapes::{
    Circle, Conic, CrossOrigin, Decoding, Ellipse, ForeignObject, Image, Line, Path, Poly,
    Polygon, Polyline, Quadrilateral, Rectangle, Shape,
};
pub use styles::{
    FillRule, FillStyle, FontStyle, LineCap, LineJoin, Paint, PointerEvents, Rgba, StrokeStyle,
    Style,
};
pub use text::{Text, TextPositioning, TextSpan, Title};
pub use transform::Transform;
