//! Paint, fill, stroke, font and pointer-event styles.
//!
//! Styles are stored in an element's inline style map under their CSS names,
//! so `FillStyle { fill_rule: EvenOdd, .. }` ends up as `fill-rule: evenodd`.

use crate::node::Node;
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Value of a `fill` or `stroke` property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Paint {
    None,
    Color(Rgba),
    /// Reference to a paint server such as a gradient.
    Url(String),
    /// Named color or any other value kept verbatim.
    Keyword(String),
}

impl Paint {
    pub fn black() -> Self {
        Paint::Keyword("black".to_string())
    }

    pub fn url(id: impl Into<String>) -> Self {
        Paint::Url(id.into())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Paint::None)
    }

    /// The paint as a peniko color, when it is one.
    pub fn to_color(&self) -> Option<Color> {
        match self {
            Paint::Color(rgba) => Some((*rgba).into()),
            _ => None,
        }
    }

    fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("none") {
            return Paint::None;
        }
        if let Some(inner) = value.strip_prefix("url(").and_then(|v| v.strip_suffix(')')) {
            let id = inner.trim().trim_matches(|c| c == '"' || c == '\'');
            return Paint::Url(id.trim_start_matches('#').to_string());
        }
        if let Some(color) = parse_hex(value).or_else(|| parse_rgb_function(value)) {
            return Paint::Color(color);
        }
        Paint::Keyword(value.to_string())
    }
}

impl Default for Paint {
    fn default() -> Self {
        Paint::black()
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Color(color.into())
    }
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Paint::Color(color)
    }
}

impl From<&str> for Paint {
    fn from(value: &str) -> Self {
        Paint::parse(value)
    }
}

impl From<String> for Paint {
    fn from(value: String) -> Self {
        Paint::parse(&value)
    }
}

impl From<Paint> for String {
    fn from(paint: Paint) -> Self {
        paint.to_string()
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::None => f.write_str("none"),
            Paint::Color(c) if c.a == 255 => write!(f, "#{:02x}{:02x}{:02x}", c.r, c.g, c.b),
            Paint::Color(c) => {
                let alpha = (c.a as f64 / 255.0 * 1000.0).round() / 1000.0;
                write!(f, "rgba({}, {}, {}, {})", c.r, c.g, c.b, alpha)
            }
            Paint::Url(id) => write!(f, "url(#{id})"),
            Paint::Keyword(keyword) => f.write_str(keyword),
        }
    }
}

fn parse_hex(value: &str) -> Option<Rgba> {
    let hex = value.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Rgba::rgb(digits.next()??, digits.next()??, digits.next()??))
        }
        6 => Some(Rgba::rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Some(Rgba::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => None,
    }
}

fn parse_rgb_function(value: &str) -> Option<Rgba> {
    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let channel = |s: &str| s.parse::<f64>().ok().map(|v| v.clamp(0.0, 255.0).round() as u8);
    match parts.as_slice() {
        [r, g, b] => Some(Rgba::rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => {
            let alpha = a.parse::<f64>().ok()?.clamp(0.0, 1.0);
            Some(Rgba::new(
                channel(r)?,
                channel(g)?,
                channel(b)?,
                (alpha * 255.0).round() as u8,
            ))
        }
        _ => None,
    }
}

/// Declares a keyword enum with `as_str`, `Display` and `FromStr`.
macro_rules! keyword_enum {
    ($(#[$doc:meta])* $name:ident, default $default:ident { $($variant:ident => $css:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $css)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $css,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($css => Ok($name::$variant),)+
                    other => Err(format!("Unknown {} value: {other}", stringify!($name))),
                }
            }
        }
    };
}

pub(crate) use keyword_enum;

keyword_enum!(
    /// Rule deciding which points are inside a self-intersecting shape.
    FillRule, default NonZero {
        NonZero => "nonzero",
        EvenOdd => "evenodd",
    }
);

keyword_enum!(
    LineCap, default Butt {
        Butt => "butt",
        Round => "round",
        Square => "square",
    }
);

keyword_enum!(
    LineJoin, default Miter {
        Miter => "miter",
        MiterClip => "miter-clip",
        Round => "round",
        Bevel => "bevel",
        Arcs => "arcs",
    }
);

keyword_enum!(
    /// Values of the `pointer-events` property.
    PointerEvents, default Auto {
        Auto => "auto",
        None => "none",
        VisiblePainted => "visiblePainted",
        VisibleFill => "visibleFill",
        VisibleStroke => "visibleStroke",
        Visible => "visible",
        Painted => "painted",
        Fill => "fill",
        Stroke => "stroke",
        All => "all",
        Inherit => "inherit",
        Initial => "initial",
        Revert => "revert",
        RevertLayer => "revert-layer",
        Unset => "unset",
    }
);

/// A group of CSS properties written to and read from an element's inline style.
pub trait Style: Default {
    fn write_to(&self, node: &Node);

    /// Read the style back; missing or malformed properties take their default.
    fn read_from(node: &Node) -> Self;
}

fn read_or<T: FromStr>(node: &Node, property: &str, default: T) -> T {
    node.style_property(property)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Fill properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillStyle {
    pub fill: Paint,
    pub fill_opacity: f64,
    pub fill_rule: FillRule,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            fill: Paint::black(),
            fill_opacity: 1.0,
            fill_rule: FillRule::NonZero,
        }
    }
}

impl Style for FillStyle {
    fn write_to(&self, node: &Node) {
        node.set_style_property("fill", &self.fill);
        node.set_style_property("fill-opacity", self.fill_opacity);
        node.set_style_property("fill-rule", self.fill_rule);
    }

    fn read_from(node: &Node) -> Self {
        let default = Self::default();
        Self {
            fill: node
                .style_property("fill")
                .map(Paint::from)
                .unwrap_or(default.fill),
            fill_opacity: read_or(node, "fill-opacity", default.fill_opacity),
            fill_rule: read_or(node, "fill-rule", default.fill_rule),
        }
    }
}

/// Stroke properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub stroke: Paint,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub stroke_linecap: LineCap,
    pub stroke_linejoin: LineJoin,
    /// Dash lengths; empty means a solid line.
    pub stroke_dasharray: Vec<f64>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            stroke: Paint::black(),
            stroke_width: 1.0,
            stroke_opacity: 1.0,
            stroke_linecap: LineCap::Butt,
            stroke_linejoin: LineJoin::Miter,
            stroke_dasharray: Vec::new(),
        }
    }
}

impl Style for StrokeStyle {
    fn write_to(&self, node: &Node) {
        node.set_style_property("stroke", &self.stroke);
        node.set_style_property("stroke-width", self.stroke_width);
        node.set_style_property("stroke-opacity", self.stroke_opacity);
        node.set_style_property("stroke-linecap", self.stroke_linecap);
        node.set_style_property("stroke-linejoin", self.stroke_linejoin);
        if self.stroke_dasharray.is_empty() {
            node.remove_style_property("stroke-dasharray");
        } else {
            let dashes: Vec<String> = self.stroke_dasharray.iter().map(f64::to_string).collect();
            node.set_style_property("stroke-dasharray", dashes.join(" "));
        }
    }

    fn read_from(node: &Node) -> Self {
        let default = Self::default();
        let stroke_dasharray = node
            .style_property("stroke-dasharray")
            .map(|value| {
                value
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .filter_map(|dash| dash.parse().ok())
                    .collect()
            })
            .unwrap_or_default();
        Self {
            stroke: node
                .style_property("stroke")
                .map(Paint::from)
                .unwrap_or(default.stroke),
            stroke_width: read_or(node, "stroke-width", default.stroke_width),
            stroke_opacity: read_or(node, "stroke-opacity", default.stroke_opacity),
            stroke_linecap: read_or(node, "stroke-linecap", default.stroke_linecap),
            stroke_linejoin: read_or(node, "stroke-linejoin", default.stroke_linejoin),
            stroke_dasharray,
        }
    }
}

/// Font properties for text elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStyle {
    pub font_family: String,
    pub font_style: String,
    pub font_weight: String,
    pub font_variant: String,
    pub font_stretch: String,
    pub font_size: String,
    pub font_size_adjust: String,
    pub kerning: String,
    pub letter_spacing: String,
    pub word_spacing: String,
    pub text_decoration: String,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_style: "normal".to_string(),
            font_weight: "normal".to_string(),
            font_variant: "normal".to_string(),
            font_stretch: "normal".to_string(),
            font_size: "12px".to_string(),
            font_size_adjust: "none".to_string(),
            kerning: "auto".to_string(),
            letter_spacing: "normal".to_string(),
            word_spacing: "normal".to_string(),
            text_decoration: "none".to_string(),
        }
    }
}

impl FontStyle {
    fn properties(&self) -> [(&'static str, &String); 11] {
        [
            ("font-family", &self.font_family),
            ("font-style", &self.font_style),
            ("font-weight", &self.font_weight),
            ("font-variant", &self.font_variant),
            ("font-stretch", &self.font_stretch),
            ("font-size", &self.font_size),
            ("font-size-adjust", &self.font_size_adjust),
            ("kerning", &self.kerning),
            ("letter-spacing", &self.letter_spacing),
            ("word-spacing", &self.word_spacing),
            ("text-decoration", &self.text_decoration),
        ]
    }

    /// Font size in user units. Percentages and relative units fall back to 12.
    pub fn size_in_pixels(&self) -> f64 {
        let size = self.font_size.trim();
        let number = size.strip_suffix("px").unwrap_or(size);
        number.trim().parse().unwrap_or(12.0)
    }
}

impl Style for FontStyle {
    fn write_to(&self, node: &Node) {
        for (property, value) in self.properties() {
            node.set_style_property(property, value);
        }
    }

    fn read_from(node: &Node) -> Self {
        let read = |property: &str, default: String| node.style_property(property).unwrap_or(default);
        let default = Self::default();
        Self {
            font_family: read("font-family", default.font_family),
            font_style: read("font-style", default.font_style),
            font_weight: read("font-weight", default.font_weight),
            font_variant: read("font-variant", default.font_variant),
            font_stretch: read("font-stretch", default.font_stretch),
            font_size: read("font-size", default.font_size),
            font_size_adjust: read("font-size-adjust", default.font_size_adjust),
            kerning: read("kerning", default.kerning),
            letter_spacing: read("letter-spacing", default.letter_spacing),
            word_spacing: read("word-spacing", default.word_spacing),
            text_decoration: read("text-decoration", default.text_decoration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_parse() {
        assert_eq!(Paint::from("none"), Paint::None);
        assert_eq!(Paint::from("url(#grad-0)"), Paint::url("grad-0"));
        assert_eq!(Paint::from("#f00"), Paint::Color(Rgba::rgb(255, 0, 0)));
        assert_eq!(Paint::from("#00ff80"), Paint::Color(Rgba::rgb(0, 255, 128)));
        assert_eq!(
            Paint::from("rgba(10, 20, 30, 0.5)"),
            Paint::Color(Rgba::new(10, 20, 30, 128))
        );
        assert_eq!(Paint::from("tomato"), Paint::Keyword("tomato".to_string()));
        assert_eq!(Paint::from("#zzz"), Paint::Keyword("#zzz".to_string()));
    }

    #[test]
    fn test_paint_display() {
        assert_eq!(Paint::Color(Rgba::rgb(255, 0, 16)).to_string(), "#ff0010");
        assert_eq!(
            Paint::Color(Rgba::new(0, 0, 0, 0)).to_string(),
            "rgba(0, 0, 0, 0)"
        );
        assert_eq!(Paint::url("g").to_string(), "url(#g)");
        assert_eq!(Paint::from(Color::from_rgba8(1, 2, 3, 255)).to_string(), "#010203");
    }

    #[test]
    fn test_paint_color_converts_through_peniko() {
        let color = Color::from_rgba8(12, 34, 56, 78);
        let paint = Paint::from(color);
        assert_eq!(paint, Paint::Color(Rgba::new(12, 34, 56, 78)));
        assert_eq!(paint.to_color().map(|c| c.to_rgba8()), Some(color.to_rgba8()));
        assert_eq!(Paint::from("tomato").to_color(), None);
    }

    #[test]
    fn test_paint_serde_as_string() {
        let json = serde_json::to_string(&Paint::url("a")).unwrap();
        assert_eq!(json, "\"url(#a)\"");
        let paint: Paint = serde_json::from_str("\"#ffffff\"").unwrap();
        assert_eq!(paint, Paint::Color(Rgba::rgb(255, 255, 255)));
    }

    #[test]
    fn test_keyword_enums() {
        assert_eq!("evenodd".parse::<FillRule>(), Ok(FillRule::EvenOdd));
        assert_eq!(PointerEvents::RevertLayer.as_str(), "revert-layer");
        assert_eq!("visiblePainted".parse::<PointerEvents>(), Ok(PointerEvents::VisiblePainted));
        assert!("sideways".parse::<LineCap>().is_err());
        assert_eq!(LineJoin::default(), LineJoin::Miter);
    }

    #[test]
    fn test_missing_properties_read_as_defaults() {
        let node = Node::detached("rect");
        assert_eq!(FillStyle::read_from(&node), FillStyle::default());
        assert_eq!(StrokeStyle::read_from(&node), StrokeStyle::default());
        assert_eq!(FontStyle::read_from(&node), FontStyle::default());
    }

    #[test]
    fn test_stroke_style_round_trip() {
        let node = Node::detached("line");
        let style = StrokeStyle {
            stroke: Paint::from("#123456"),
            stroke_width: 3.0,
            stroke_linecap: LineCap::Round,
            stroke_dasharray: vec![5.0, 2.5],
            ..StrokeStyle::default()
        };
        style.write_to(&node);
        assert_eq!(node.style_property("stroke-dasharray").as_deref(), Some("5 2.5"));
        assert_eq!(node.style_property("stroke-linecap").as_deref(), Some("round"));
        assert_eq!(StrokeStyle::read_from(&node), style);
    }

    #[test]
    fn test_font_style_from_json_uses_defaults() {
        let style: FontStyle = serde_json::from_str(r#"{"font_size": "20px"}"#).unwrap();
        assert_eq!(style.font_family, "Arial");
        assert!((style.size_in_pixels() - 20.0).abs() < 1e-9);
    }
}
