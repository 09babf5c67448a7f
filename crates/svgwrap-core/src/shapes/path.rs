//! Path shape with a command builder.

use crate::element::{Element, Geometry, Graphic};
use crate::error::{SvgError, SvgResult};
use crate::node::Node;
use kurbo::BezPath;
use std::cell::Cell;

/// A `<path>` whose `d` attribute is built one command at a time.
///
/// In relative mode every builder call emits the lower-case command, so
/// coordinates are taken relative to the current point.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    node: Node,
    relative: Cell<bool>,
}

impl Path {
    pub fn new(relative: bool) -> Self {
        Self::from_commands(relative, "")
    }

    /// Create a path starting from existing path data.
    pub fn from_commands(relative: bool, commands: &str) -> Self {
        let path = Self {
            node: Node::create(Self::TAG),
            relative: Cell::new(relative),
        };
        path.set_commands(commands);
        path
    }

    pub fn commands(&self) -> String {
        self.node.attribute("d").unwrap_or_default()
    }

    pub fn set_commands(&self, commands: &str) -> &Self {
        self.node.set_attribute("d", commands);
        self
    }

    pub fn is_relative(&self) -> bool {
        self.relative.get()
    }

    pub fn set_relativity(&self, relative: bool) -> &Self {
        self.relative.set(relative);
        self
    }

    /// Remove all commands.
    pub fn clear(&self) -> &Self {
        self.set_commands("")
    }

    fn append(&self, absolute: char, arguments: &str) -> &Self {
        let command = if self.is_relative() {
            absolute.to_ascii_lowercase()
        } else {
            absolute
        };
        let mut d = self.commands();
        d.push(command);
        if !arguments.is_empty() {
            d.push(' ');
            d.push_str(arguments);
        }
        d.push(' ');
        self.node.set_attribute("d", d);
        self
    }

    fn pairs(coordinates: &[(f64, f64)]) -> String {
        coordinates
            .iter()
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn move_to(&self, x: f64, y: f64) -> &Self {
        self.append('M', &Self::pairs(&[(x, y)]))
    }

    pub fn line_to(&self, x: f64, y: f64) -> &Self {
        self.append('L', &Self::pairs(&[(x, y)]))
    }

    pub fn horizontal_line_to(&self, x: f64) -> &Self {
        self.append('H', &x.to_string())
    }

    pub fn vertical_line_to(&self, y: f64) -> &Self {
        self.append('V', &y.to_string())
    }

    pub fn cubic_bezier_curve(&self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> &Self {
        self.append('C', &Self::pairs(&[(x1, y1), (x2, y2), (x, y)]))
    }

    pub fn smooth_cubic_bezier_curve(&self, x2: f64, y2: f64, x: f64, y: f64) -> &Self {
        self.append('S', &Self::pairs(&[(x2, y2), (x, y)]))
    }

    pub fn quadratic_bezier_curve(&self, x1: f64, y1: f64, x: f64, y: f64) -> &Self {
        self.append('Q', &Self::pairs(&[(x1, y1), (x, y)]))
    }

    pub fn smooth_quadratic_bezier_curve(&self, x: f64, y: f64) -> &Self {
        self.append('T', &Self::pairs(&[(x, y)]))
    }

    /// Elliptical arc to `(x, y)`. `angle` is the x-axis rotation in degrees.
    #[allow(clippy::too_many_arguments)]
    pub fn elliptical_arc_curve(
        &self,
        rx: f64,
        ry: f64,
        angle: f64,
        x: f64,
        y: f64,
        large_arc: bool,
        sweep: bool,
    ) -> &Self {
        let arguments = format!(
            "{rx},{ry} {angle} {} {} {x},{y}",
            u8::from(large_arc),
            u8::from(sweep)
        );
        self.append('A', &arguments)
    }

    pub fn close(&self) -> &Self {
        self.append('Z', "")
    }

    /// Parse the path data into a kurbo path.
    pub fn to_bez_path(&self) -> SvgResult<BezPath> {
        BezPath::from_svg(&self.commands()).map_err(|e| SvgError::InvalidPathData(e.to_string()))
    }
}

impl Element for Path {
    const TAG: &'static str = "path";

    fn node(&self) -> &Node {
        &self.node
    }

    /// The mode follows the case of the last command in `d`; empty data is absolute.
    fn from_node_unchecked(node: Node) -> Self {
        let relative = node
            .attribute("d")
            .and_then(|d| last_command(&d))
            .is_some_and(|command| command.is_ascii_lowercase());
        Self {
            node,
            relative: Cell::new(relative),
        }
    }

    fn duplicate(&self) -> Self {
        Self {
            node: self.node.deep_clone(),
            relative: self.relative.clone(),
        }
    }
}

fn last_command(d: &str) -> Option<char> {
    d.chars()
        .rev()
        .find(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
}

impl Graphic for Path {}
impl Geometry for Path {}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    #[test]
    fn test_absolute_commands() {
        let path = Path::new(false);
        path.move_to(10.0, 20.0)
            .line_to(30.0, 40.0)
            .horizontal_line_to(50.0)
            .vertical_line_to(60.0)
            .close();
        assert_eq!(path.commands(), "M 10,20 L 30,40 H 50 V 60 Z ");
    }

    #[test]
    fn test_relative_commands() {
        let path = Path::new(true);
        path.move_to(1.0, 2.0)
            .cubic_bezier_curve(1.0, 0.0, 2.0, 1.0, 3.0, 3.0)
            .smooth_quadratic_bezier_curve(4.0, 4.0)
            .close();
        assert_eq!(path.commands(), "m 1,2 c 1,0 2,1 3,3 t 4,4 z ");
        path.set_relativity(false).line_to(0.0, 0.0);
        assert!(path.commands().ends_with("L 0,0 "));
    }

    #[test]
    fn test_rewrapped_path_keeps_mode() {
        let relative = Path::new(true);
        relative.move_to(1.0, 2.0).line_to(1e-5, 3.0);
        let rewrapped = Path::from_node(relative.node().clone()).unwrap();
        assert!(rewrapped.is_relative());
        rewrapped.line_to(4.0, 5.0);
        assert!(rewrapped.commands().ends_with("l 4,5 "));

        let absolute = Path::from_commands(false, "M 0,0 L 1,1 ");
        assert!(!Path::from_node(absolute.node().clone()).unwrap().is_relative());
        assert!(!Path::from_node(Path::new(true).node().clone()).unwrap().is_relative());
    }

    #[test]
    fn test_arc_flags() {
        let path = Path::new(false);
        path.move_to(0.0, 0.0)
            .elliptical_arc_curve(5.0, 5.0, 0.0, 10.0, 0.0, false, true);
        assert_eq!(path.commands(), "M 0,0 A 5,5 0 0 1 10,0 ");
        assert!(path.to_bez_path().is_ok());
    }

    #[test]
    fn test_to_bez_path() {
        let path = Path::new(false);
        path.move_to(0.0, 0.0)
            .quadratic_bezier_curve(5.0, 10.0, 10.0, 0.0)
            .smooth_cubic_bezier_curve(15.0, -5.0, 20.0, 0.0);
        let bez = path.to_bez_path().unwrap();
        assert_eq!(bez.elements().len(), 3);

        path.set_commands("M 0,0 X 1");
        assert!(matches!(path.to_bez_path(), Err(SvgError::InvalidPathData(_))));
    }

    #[test]
    fn test_clear_and_bounds() {
        let path = Path::from_commands(false, "M0,0 L10,5");
        assert_eq!(path.bounding_box(), Rect::new(0.0, 0.0, 10.0, 5.0));
        path.clear();
        assert_eq!(path.commands(), "");
    }

    #[test]
    fn test_duplicate_keeps_relativity() {
        let path = Path::new(true);
        path.move_to(1.0, 1.0);
        let copy = path.duplicate();
        assert!(copy.is_relative());
        assert_eq!(copy.commands(), path.commands());
        assert_ne!(copy.id(), path.id());
    }
}
