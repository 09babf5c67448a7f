use super::{Align, Alignment};
use crate::element::{Element, Geometry, Graphic};
use crate::group::Group;
use crate::math::Vector2;
use crate::node::Node;
use crate::shapes::Shape;
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Options of a [`Grid`] layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Size of every cell.
    pub cell: Vector2,
    pub origin: Vector2,
    pub spacing: Vector2,
    /// `main` aligns horizontally inside the cell, `cross` vertically.
    pub alignment: Alignment,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            cell: Vector2::new(100.0, 100.0),
            origin: Vector2::ZERO,
            spacing: Vector2::ZERO,
            alignment: Alignment::default(),
        }
    }
}

/// A group whose members fill uniform cells row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    group: Group,
    columns: usize,
    options: GridOptions,
}

impl Grid {
    pub fn new(columns: usize, members: impl IntoIterator<Item = Shape>, options: GridOptions) -> Self {
        Self {
            group: Group::from_shapes(members),
            columns,
            options,
        }
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn members(&self) -> Vec<Shape> {
        self.group.members()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn set_columns(&mut self, columns: usize) -> &mut Self {
        self.columns = columns;
        self
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn cell_size(&self) -> Vector2 {
        self.options.cell
    }

    pub fn set_cell_size(&mut self, cell: Vector2) -> &mut Self {
        self.options.cell = cell;
        self
    }

    pub fn origin(&self) -> Vector2 {
        self.options.origin
    }

    pub fn set_origin(&mut self, origin: Vector2) -> &mut Self {
        self.options.origin = origin;
        self
    }

    pub fn spacing(&self) -> Vector2 {
        self.options.spacing
    }

    pub fn set_spacing(&mut self, spacing: Vector2) -> &mut Self {
        self.options.spacing = spacing;
        self
    }

    pub fn main_alignment(&self) -> Align {
        self.options.alignment.main
    }

    pub fn set_main_alignment(&mut self, align: Align) -> &mut Self {
        self.options.alignment.main = align;
        self
    }

    pub fn cross_alignment(&self) -> Align {
        self.options.alignment.cross
    }

    pub fn set_cross_alignment(&mut self, align: Align) -> &mut Self {
        self.options.alignment.cross = align;
        self
    }

    /// Top-left corner of the cell at `(column, row)`.
    pub fn cell_origin(&self, column: usize, row: usize) -> Vector2 {
        let GridOptions {
            cell,
            origin,
            spacing,
            ..
        } = self.options;
        Vector2::new(
            origin.x + column as f64 * (cell.x + spacing.x),
            origin.y + row as f64 * (cell.y + spacing.y),
        )
    }

    /// Place member `i` in cell `(i % columns, i / columns)` and return the boxes.
    /// Zero columns lays out a single column.
    pub fn layout(&self) -> Vec<Rect> {
        let columns = self.columns.max(1);
        let members = self.members();
        let placed: Vec<Rect> = members
            .iter()
            .enumerate()
            .map(|(index, member)| {
                let bounds = member.bounding_box();
                let corner = self.cell_origin(index % columns, index / columns);
                let x = corner.x
                    + self
                        .options
                        .alignment
                        .main
                        .offset(self.options.cell.x - bounds.width());
                let y = corner.y
                    + self
                        .options
                        .alignment
                        .cross
                        .offset(self.options.cell.y - bounds.height());
                member.move_to(x, y);
                Rect::new(x, y, x + bounds.width(), y + bounds.height())
            })
            .collect();
        log::debug!(
            "Grid layout placed {} members in {} columns",
            placed.len(),
            columns
        );
        placed
    }
}

impl Element for Grid {
    const TAG: &'static str = "g";

    fn node(&self) -> &Node {
        self.group.node()
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self {
            group: Group::from_node_unchecked(node),
            columns: 1,
            options: GridOptions::default(),
        }
    }

    fn duplicate(&self) -> Self {
        Self {
            group: self.group.duplicate(),
            columns: self.columns,
            options: self.options,
        }
    }
}

impl Graphic for Grid {}
impl Geometry for Grid {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle};

    #[test]
    fn test_cells_row_by_row() {
        let members: Vec<Shape> = (0..5)
            .map(|_| Rectangle::new(7.0, 7.0, 10.0, 10.0).into())
            .collect();
        let grid = Grid::new(
            2,
            members,
            GridOptions {
                cell: Vector2::new(20.0, 30.0),
                spacing: Vector2::new(5.0, 5.0),
                ..GridOptions::default()
            },
        );
        let boxes = grid.layout();
        assert_eq!(boxes[0], Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(boxes[1], Rect::new(25.0, 0.0, 35.0, 10.0));
        assert_eq!(boxes[2], Rect::new(0.0, 35.0, 10.0, 45.0));
        assert_eq!(boxes[4], Rect::new(0.0, 70.0, 10.0, 80.0));
    }

    #[test]
    fn test_alignment_within_cell() {
        let mut grid = Grid::new(
            3,
            vec![Rectangle::new(0.0, 0.0, 40.0, 20.0).into()],
            GridOptions::default(),
        );
        grid.set_main_alignment(Align::Center)
            .set_cross_alignment(Align::End)
            .set_origin(Vector2::new(10.0, 10.0));
        let boxes = grid.layout();
        assert_eq!(boxes[0], Rect::new(40.0, 90.0, 80.0, 110.0));
    }

    #[test]
    fn test_transformed_members_fill_their_cells() {
        let scaled = Rectangle::new(10.0, 10.0, 5.0, 5.0);
        scaled.scale(2.0, 2.0);
        let rotated = Rectangle::new(0.0, 0.0, 20.0, 10.0);
        rotated.rotate(90.0);
        let grid = Grid::new(
            2,
            vec![scaled.into(), rotated.into()],
            GridOptions {
                cell: Vector2::new(20.0, 20.0),
                alignment: Alignment {
                    main: Align::Center,
                    cross: Align::Center,
                },
                ..GridOptions::default()
            },
        );
        let expected = [
            Rect::new(5.0, 5.0, 15.0, 15.0),
            Rect::new(25.0, 0.0, 35.0, 20.0),
        ];
        grid.layout();
        for (member, expected) in grid.members().iter().zip(expected) {
            let bounds = member.bounding_box();
            assert!(
                (bounds.x0 - expected.x0).abs() < 1e-6
                    && (bounds.y0 - expected.y0).abs() < 1e-6
                    && (bounds.x1 - expected.x1).abs() < 1e-6
                    && (bounds.y1 - expected.y1).abs() < 1e-6,
                "{bounds:?} != {expected:?}"
            );
        }
    }

    #[test]
    fn test_zero_columns_is_single_column() {
        let grid = Grid::new(
            0,
            vec![
                Circle::new(0.0, 0.0, 5.0).into(),
                Circle::new(0.0, 0.0, 5.0).into(),
            ],
            GridOptions::default(),
        );
        let boxes = grid.layout();
        assert!(boxes[0].x0.abs() < 1e-9);
        assert!((boxes[1].y0 - 100.0).abs() < 1e-9);
    }
}
