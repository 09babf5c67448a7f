//! Demo scenes, each built on its own canvas.

use crate::config::GalleryConfig;
use clap::ValueEnum;
use kurbo::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use svgwrap_core::math::{lerp, remap};
use svgwrap_core::{
    Canvas, Circle, Define, Direction, Element, Ellipse, FillRule, FillStyle, Flex, FontStyle,
    Geometry, Gradient, Graphic, Grid, Group, Line, LineCap, LinearGradient, Noise, Paint, Path,
    Percent, Poly, Polygon, Polyline, RadialGradient, Rectangle, Rgba, Shape, SpreadMethod, Stop,
    StrokeStyle, SvgResult, Text, TextPositioning, TextSpan, Title,
};

/// The scenes the gallery can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    Shapes,
    Gradients,
    Noise,
    Flex,
    Grid,
    Text,
    Lerp,
}

impl SceneKind {
    pub const ALL: [SceneKind; 7] = [
        SceneKind::Shapes,
        SceneKind::Gradients,
        SceneKind::Noise,
        SceneKind::Flex,
        SceneKind::Grid,
        SceneKind::Text,
        SceneKind::Lerp,
    ];

    /// File stem of the scene's output.
    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Shapes => "shapes",
            SceneKind::Gradients => "gradients",
            SceneKind::Noise => "noise",
            SceneKind::Flex => "flex",
            SceneKind::Grid => "grid",
            SceneKind::Text => "text",
            SceneKind::Lerp => "lerp",
        }
    }

    /// Build the scene's canvas.
    pub fn build(self, config: &GalleryConfig) -> SvgResult<Canvas> {
        let canvas = match self {
            SceneKind::Shapes => shapes()?,
            SceneKind::Gradients => gradients()?,
            SceneKind::Noise => noise(config)?,
            SceneKind::Flex => flex(config)?,
            SceneKind::Grid => grid(config)?,
            SceneKind::Text => text()?,
            SceneKind::Lerp => shards(config)?,
        };
        canvas.nest(&Title::new(self.name()));
        Ok(canvas)
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn fill(paint: impl Into<Paint>, opacity: f64) -> FillStyle {
    FillStyle {
        fill: paint.into(),
        fill_opacity: opacity,
        ..FillStyle::default()
    }
}

fn stroke(paint: impl Into<Paint>, width: f64) -> StrokeStyle {
    StrokeStyle {
        stroke: paint.into(),
        stroke_width: width,
        ..StrokeStyle::default()
    }
}

fn shapes() -> SvgResult<Canvas> {
    let canvas = Canvas::new(0.0, 0.0, 400.0, 200.0)?;
    canvas.set_size(400.0, 200.0);

    let rect = Rectangle::new(10.0, 10.0, 80.0, 50.0);
    rect.set_fill_style(&fill("steelblue", 1.0));
    let rounded = Rectangle::rounded(110.0, 10.0, 80.0, 50.0, 10.0, 10.0);
    rounded.set_fill_style(&fill(Rgba::rgb(255, 165, 0), 0.8));
    let circle = Circle::new(240.0, 35.0, 25.0);
    circle.set_stroke_style(&stroke("black", 2.0));
    let ellipse = Ellipse::new(340.0, 35.0, 40.0, 20.0);
    ellipse.set_fill_style(&fill("seagreen", 1.0));

    let line = Line::new(10.0, 100.0, 90.0, 180.0);
    line.set_stroke_style(&StrokeStyle {
        stroke_linecap: LineCap::Round,
        stroke_dasharray: vec![6.0, 4.0],
        ..stroke("crimson", 4.0)
    });
    let star = Polygon::from_points(&[
        Point::new(150.0, 100.0),
        Point::new(170.0, 180.0),
        Point::new(110.0, 130.0),
        Point::new(190.0, 130.0),
        Point::new(130.0, 180.0),
    ]);
    star.set_fill_style(&FillStyle {
        fill_rule: FillRule::EvenOdd,
        ..fill("gold", 1.0)
    });
    let zigzag = Polyline::new();
    for i in 0..6 {
        zigzag.set_point(210.0 + 15.0 * i as f64, if i % 2 == 0 { 180.0 } else { 110.0 });
    }
    zigzag
        .set_fill_style(&fill(Paint::None, 1.0))
        .set_stroke_style(&stroke("purple", 2.0));

    let path = Path::new(false);
    path.move_to(310.0, 180.0)
        .quadratic_bezier_curve(330.0, 90.0, 350.0, 150.0)
        .elliptical_arc_curve(20.0, 20.0, 0.0, 390.0, 150.0, false, true)
        .vertical_line_to(180.0)
        .close();
    path.set_fill_style(&fill("skyblue", 0.6))
        .set_stroke_style(&stroke("navy", 1.5));

    canvas
        .nest(&rect)
        .nest(&rounded)
        .nest(&circle)
        .nest(&ellipse)
        .nest(&line)
        .nest(&star)
        .nest(&zigzag)
        .nest(&path);
    Ok(canvas)
}

fn gradients() -> SvgResult<Canvas> {
    let canvas = Canvas::new(0.0, 0.0, 320.0, 160.0)?;

    let sunset = LinearGradient::with_vector(0.0, 0.0, 1.0, 0.0);
    sunset.set_id("sunset");
    sunset.add_stops(&[
        Stop::new(0.0, Rgba::rgb(255, 94, 58), 1.0),
        Stop::from_percent(Percent::new(50.0), Rgba::rgb(255, 149, 0), 1.0),
        Stop::new(1.0, Rgba::rgb(88, 86, 214), 1.0),
    ]);

    let glow = RadialGradient::with_focus(0.5, 0.5, 0.5, 0.35, 0.35, 0.0);
    glow.set_id("glow");
    glow.set_spread_method(SpreadMethod::Reflect);
    glow.add_stops(&[
        Stop::new(0.0, "white", 1.0),
        Stop::new(1.0, "royalblue", 1.0),
    ]);

    let defs = Define::from_elements([sunset.node(), glow.node()]);

    let bar = Rectangle::new(10.0, 10.0, 300.0, 60.0);
    bar.set_fill_style(&fill(sunset.paint(), 1.0));
    let orb = Circle::new(80.0, 115.0, 40.0);
    orb.set_fill_style(&fill(glow.paint(), 1.0));
    let tile = Rectangle::new(160.0, 80.0, 150.0, 70.0);
    tile.set_fill_style(&fill(glow.paint(), 1.0)).rotate(5.0);

    canvas.nest(&defs).nest(&bar).nest(&orb).nest(&tile);
    Ok(canvas)
}

fn noise(config: &GalleryConfig) -> SvgResult<Canvas> {
    let cells = config.noise_cells;
    let side = 10.0 * cells as f64 + 20.0;
    let canvas = Canvas::new(0.0, 0.0, side, side)?;
    let noise = Noise::new(config.seed as f64);

    for x in 0..cells {
        for y in 0..cells {
            let value = noise.simplex2(x as f64 / 10.0, y as f64 / 10.0);
            let cell = Rectangle::new(10.0 + 10.0 * x as f64, 10.0 + 10.0 * y as f64, 8.0, 8.0);
            cell.set_fill_style(&fill("black", remap(value, -1.0, 1.0, 0.0, 1.0)));
            canvas.nest(&cell);
        }
    }
    log::debug!("Noise scene with {} cells (seed {})", cells * cells, config.seed);
    Ok(canvas)
}

fn flex(config: &GalleryConfig) -> SvgResult<Canvas> {
    let options = config.flex;
    let canvas = Canvas::new(
        0.0,
        0.0,
        options.size.x + 2.0 * options.origin.x,
        options.size.y + 2.0 * options.origin.y,
    )?;
    let widths = [40.0, 20.0, 60.0, 30.0, 50.0, 20.0, 70.0];
    let members = widths.iter().enumerate().map(|(i, &width)| {
        let rect = Rectangle::new(0.0, 0.0, width, 20.0 + 10.0 * (i % 3) as f64);
        rect.set_fill_style(&fill(Rgba::rgb(60, (80 + 25 * i) as u8, 200), 1.0));
        Shape::from(rect)
    });
    let layout = Flex::new(Direction::Row, members, options);
    layout.layout();
    canvas.nest(&layout);
    Ok(canvas)
}

fn grid(config: &GalleryConfig) -> SvgResult<Canvas> {
    let options = config.grid;
    let columns = config.grid_columns.max(1);
    let count: usize = 8;
    let rows = count.div_ceil(columns);
    let canvas = Canvas::new(
        0.0,
        0.0,
        2.0 * options.origin.x + columns as f64 * (options.cell.x + options.spacing.x),
        2.0 * options.origin.y + rows as f64 * (options.cell.y + options.spacing.y),
    )?;
    let members = (0..count).map(|i| -> Shape {
        if i % 2 == 0 {
            let circle = Circle::new(0.0, 0.0, 10.0 + 2.0 * i as f64);
            circle.set_fill_style(&fill("tomato", 1.0));
            circle.into()
        } else {
            let rect = Rectangle::square(0.0, 0.0, 15.0 + 3.0 * i as f64);
            rect.set_fill_style(&fill("teal", 1.0));
            rect.into()
        }
    });
    let layout = Grid::new(columns, members, options);
    layout.layout();
    canvas.nest(&layout);
    Ok(canvas)
}

fn text() -> SvgResult<Canvas> {
    let canvas = Canvas::new(0.0, 0.0, 300.0, 120.0)?;
    let heading = Text::with_font_style(
        "svgwrap",
        10.0,
        40.0,
        &FontStyle {
            font_family: "Georgia".to_string(),
            font_size: "32px".to_string(),
            font_weight: "bold".to_string(),
            ..FontStyle::default()
        },
    );
    heading.set_fill_style(&fill("darkslateblue", 1.0));

    let caption = Text::new("", 10.0, 80.0);
    let emphasis = TextSpan::new("typed ", 10.0, 80.0);
    emphasis.set_font_style(&FontStyle {
        font_style: "italic".to_string(),
        ..FontStyle::default()
    });
    let rest = TextSpan::new("SVG wrappers", 10.0, 80.0);
    rest.set_dx(45.0);
    caption.set_spans(&[emphasis, rest]);

    let tilted = Text::new("rotated", 200.0, 100.0);
    tilted.set_rotation(10.0);

    canvas.nest(&heading).nest(&caption).nest(&tilted);
    Ok(canvas)
}

const SHARD_HEIGHT: f64 = 500.0;

fn shard(rng: &mut StdRng, min_x: f64, max_x: f64) -> Polygon {
    let polygon = Polygon::new();
    for _ in 0..4 {
        polygon.set_point(
            rng.random_range(min_x..max_x).floor(),
            rng.random_range(0.0..SHARD_HEIGHT + 25.0).floor(),
        );
    }
    polygon
}

/// Three bands of translucent shards whose colors are interpolated from red to violet.
fn shards(config: &GalleryConfig) -> SvgResult<Canvas> {
    let canvas = Canvas::new(0.0, 0.0, 350.0, SHARD_HEIGHT)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let from = Rgba::rgb(255, 0, 0);
    let to = Rgba::rgb(84, 0, 171);
    let bands = [(-25.0, 150.0), (125.0, 275.0), (250.0, 375.0)];

    for (index, &(min_x, max_x)) in bands.iter().enumerate() {
        let t = index as f64 / (bands.len() - 1) as f64;
        let channel = |a: u8, b: u8| lerp(t, a as f64, b as f64).round() as u8;
        let color = Rgba::rgb(
            channel(from.r, to.r),
            channel(from.g, to.g),
            channel(from.b, to.b),
        );
        let band = Group::group((0..5).map(|_| Shape::from(shard(&mut rng, min_x, max_x))));
        band.set_fill_style(&fill(color, 0.4))
            .set_stroke_style(&stroke(Paint::None, 0.0));
        canvas.nest(&band);
    }
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use svgwrap_render::{RenderConfig, render_to_string};

    #[test]
    fn test_every_scene_builds() {
        let config = GalleryConfig::default();
        for kind in SceneKind::ALL {
            let canvas = kind.build(&config).unwrap();
            let markup = render_to_string(canvas.node(), &RenderConfig::compact()).unwrap();
            assert!(markup.starts_with("<svg"), "{kind} did not render");
            assert!(markup.contains("<title>"), "{kind} lacks a title");
        }
    }

    #[test]
    fn test_noise_grid_size_and_opacity() {
        let config = GalleryConfig {
            noise_cells: 4,
            ..GalleryConfig::default()
        };
        let canvas = SceneKind::Noise.build(&config).unwrap();
        let cells: Vec<_> = canvas
            .node()
            .children()
            .into_iter()
            .filter(|child| child.tag() == "rect")
            .collect();
        assert_eq!(cells.len(), 16);
        for cell in cells {
            let opacity: f64 = cell.style_property("fill-opacity").unwrap().parse().unwrap();
            assert!((0.0..=1.0).contains(&opacity));
        }
    }

    #[test]
    fn test_lerp_scene_is_deterministic() {
        let config = GalleryConfig {
            seed: 42,
            ..GalleryConfig::default()
        };
        let render = |config: &GalleryConfig| {
            let canvas = SceneKind::Lerp.build(config).unwrap();
            canvas
                .node()
                .children()
                .iter()
                .filter(|child| child.tag() == "g")
                .flat_map(|group| group.children())
                .filter_map(|shard| shard.attribute("points"))
                .collect::<Vec<String>>()
        };
        assert_eq!(render(&config), render(&config));
        assert_eq!(render(&config).len(), 15);
    }

    #[test]
    fn test_flex_scene_stays_inside_canvas() {
        let config = GalleryConfig::default();
        let canvas = SceneKind::Flex.build(&config).unwrap();
        let view_box = canvas.view_box();
        let layout = canvas
            .node()
            .children()
            .into_iter()
            .find(|child| child.tag() == "g")
            .unwrap();
        for member in Group::from_node(layout).unwrap().members() {
            let bounds = member.bounding_box();
            assert!(bounds.x1 <= view_box.x1 + 1e-9, "{bounds:?} overflows");
        }
    }
}
