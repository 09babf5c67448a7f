//! Text content elements.

use crate::element::{Element, Geometry, Graphic, number};
use crate::node::Node;
use crate::styles::{FontStyle, Style};

/// Positioning and content shared by `<text>` and `<tspan>`.
pub trait TextPositioning: Geometry {
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

    /// Horizontal shift of the glyphs.
    fn dx(&self) -> f64 {
        number(self.node(), "dx")
    }

    fn set_dx(&self, dx: f64) -> &Self {
        self.node().set_attribute("dx", dx);
        self
    }

    fn dy(&self) -> f64 {
        number(self.node(), "dy")
    }

    fn set_dy(&self, dy: f64) -> &Self {
        self.node().set_attribute("dy", dy);
        self
    }

    /// Rotation applied to each glyph, in degrees.
    fn rotation(&self) -> f64 {
        number(self.node(), "rotate")
    }

    fn set_rotation(&self, rotate: f64) -> &Self {
        self.node().set_attribute("rotate", rotate);
        self
    }

    /// All text below this element, spans included.
    fn content(&self) -> String {
        self.node().text_content()
    }

    /// Replace the children with plain text.
    fn set_content(&self, content: &str) -> &Self {
        self.node().set_text_content(content);
        self
    }

    fn font_style(&self) -> FontStyle {
        FontStyle::read_from(self.node())
    }

    fn set_font_style(&self, style: &FontStyle) -> &Self {
        style.write_to(self.node());
        self
    }

    fn text_length(&self) -> f64 {
        number(self.node(), "textLength")
    }

    fn set_text_length(&self, length: f64) -> &Self {
        self.node().set_attribute("textLength", length);
        self
    }

    fn number_of_chars(&self) -> usize {
        self.content().chars().count()
    }
}

macro_rules! text_element {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            node: Node,
        }

        impl $name {
            pub fn new(content: &str, x: f64, y: f64) -> Self {
                let text = Self {
                    node: Node::create(Self::TAG),
                };
                text.set_content(content).set_x(x).set_y(y);
                text
            }

            /// Like [`Self::new`], also writing every property of `style`.
            pub fn with_font_style(content: &str, x: f64, y: f64, style: &FontStyle) -> Self {
                let text = Self::new(content, x, y);
                text.set_font_style(style);
                text
            }
        }

        impl Element for $name {
            const TAG: &'static str = $tag;

            fn node(&self) -> &Node {
                &self.node
            }

            fn from_node_unchecked(node: Node) -> Self {
                Self { node }
            }
        }

        impl Graphic for $name {}
        impl Geometry for $name {}
        impl TextPositioning for $name {}
    };
}

text_element!(
    /// A `<text>` element.
    Text,
    "text"
);
text_element!(
    /// A `<tspan>` inside a text element.
    TextSpan,
    "tspan"
);

impl Text {
    /// Replace the content with `spans`.
    pub fn set_spans(&self, spans: &[TextSpan]) -> &Self {
        self.node.set_text_content("");
        for span in spans {
            self.node.append_child(span.node());
        }
        self
    }

    pub fn spans(&self) -> Vec<TextSpan> {
        self.node
            .children()
            .into_iter()
            .filter(|child| child.tag() == TextSpan::TAG)
            .map(TextSpan::from_node_unchecked)
            .collect()
    }
}

/// A `<title>`, the accessible name of its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    node: Node,
}

impl Title {
    pub fn new(content: &str) -> Self {
        let title = Self {
            node: Node::create(Self::TAG),
        };
        title.set_content(content);
        title
    }

    pub fn content(&self) -> String {
        self.node.text_content()
    }

    pub fn set_content(&self, content: &str) -> &Self {
        self.node.set_text_content(content);
        self
    }
}

impl Element for Title {
    const TAG: &'static str = "title";

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self { node }
    }
}
