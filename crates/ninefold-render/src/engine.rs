use ninefold_core::{DigitGrid, Position, Selection, layout};

use crate::{BoardPalette, DrawCommand, Point, Rect};

/// Stroke width for block boundaries, including the outer border.
const THICK_LINE: f32 = 4.0;
/// Stroke width for cell boundaries inside a block.
const THIN_LINE: f32 = 1.0;
/// Font size for cell digits.
const DIGIT_SIZE: f32 = 36.0;

/// Produces the ordered draw-command list for a board and selection.
#[derive(Debug, Clone, Default)]
pub struct RenderEngine {
    palette: BoardPalette,
}

impl RenderEngine {
    /// Creates an engine with a custom palette.
    #[must_use]
    pub const fn new(palette: BoardPalette) -> Self {
        Self { palette }
    }

    /// Renders the board into a list of draw commands.
    ///
    /// The list always starts with clear, grid lines, and digits. When the
    /// selection addresses an in-range cell, three highlight passes follow:
    /// the same-value tints, the unit tint (row, column, and box as one
    /// filled path), and finally the stronger selected-cell tint.
    /// Out-of-range selections render exactly like no selection at all.
    #[must_use]
    pub fn render(&self, board: &DigitGrid, selection: Option<Selection>) -> Vec<DrawCommand> {
        let mut commands = Vec::new();

        commands.push(DrawCommand::Clear {
            area: Rect::new(0.0, 0.0, layout::BOARD_SIZE, layout::BOARD_SIZE),
            color: self.palette.background,
        });
        self.push_grid_lines(&mut commands);
        self.push_digits(board, &mut commands);

        let Some(selected) = selection.and_then(Selection::position) else {
            return commands;
        };
        self.push_same_value_tints(board, selected, &mut commands);
        self.push_unit_tint(selected, &mut commands);
        commands.push(DrawCommand::FillRect {
            rect: cell_rect(selected),
            color: self.palette.selected_tint,
        });

        commands
    }

    fn push_grid_lines(&self, commands: &mut Vec<DrawCommand>) {
        for i in 0..=layout::GRID_CELLS {
            let width = if i % 3 == 0 { THICK_LINE } else { THIN_LINE };
            let offset = f32::from(i) * layout::CELL_SIZE;
            commands.push(DrawCommand::Line {
                from: Point::new(offset, 0.0),
                to: Point::new(offset, layout::BOARD_SIZE),
                width,
                color: self.palette.grid_line,
            });
            commands.push(DrawCommand::Line {
                from: Point::new(0.0, offset),
                to: Point::new(layout::BOARD_SIZE, offset),
                width,
                color: self.palette.grid_line,
            });
        }
    }

    fn push_digits(&self, board: &DigitGrid, commands: &mut Vec<DrawCommand>) {
        for pos in Position::ALL {
            if let Some(digit) = board.get(pos) {
                commands.push(DrawCommand::Text {
                    center: cell_rect(pos).center(),
                    text: digit.to_string(),
                    size: DIGIT_SIZE,
                    color: self.palette.digit,
                });
            }
        }
    }

    /// Tints every other cell holding the selected cell's value. Selecting an
    /// empty cell draws nothing here.
    fn push_same_value_tints(
        &self,
        board: &DigitGrid,
        selected: Position,
        commands: &mut Vec<DrawCommand>,
    ) {
        let Some(value) = board.get(selected) else {
            return;
        };
        for pos in Position::ALL {
            if pos != selected && board.get(pos) == Some(value) {
                commands.push(DrawCommand::FillRect {
                    rect: cell_rect(pos),
                    color: self.palette.same_value_tint,
                });
            }
        }
    }

    /// Tints the union of the selected cell's row, column, and box as a
    /// single path of disjoint cell rects, so the translucent color lands
    /// exactly once where the three regions overlap.
    fn push_unit_tint(&self, selected: Position, commands: &mut Vec<DrawCommand>) {
        let rects = Position::ALL
            .iter()
            .filter(|pos| pos.shares_unit(selected))
            .map(|pos| cell_rect(*pos))
            .collect();
        commands.push(DrawCommand::FillPath {
            rects,
            color: self.palette.unit_tint,
        });
    }
}

fn cell_rect(pos: Position) -> Rect {
    Rect::new(
        f32::from(pos.x()) * layout::CELL_SIZE,
        f32::from(pos.y()) * layout::CELL_SIZE,
        layout::CELL_SIZE,
        layout::CELL_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use ninefold_core::Digit;

    use super::*;

    fn engine() -> RenderEngine {
        RenderEngine::default()
    }

    fn select(col: u8, row: u8) -> Option<Selection> {
        Some(Selection::new(i32::from(row), i32::from(col)))
    }

    /// A board with a 4 at each of the given positions.
    fn board_with_fours(cells: &[(u8, u8)]) -> DigitGrid {
        let mut board = DigitGrid::new();
        for (x, y) in cells {
            board.set(Position::new(*x, *y), Some(Digit::D4));
        }
        board
    }

    fn same_value_rects(commands: &[DrawCommand]) -> Vec<Rect> {
        let tint = BoardPalette::default().same_value_tint;
        commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillRect { rect, color } if *color == tint => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn render_does_not_mutate_its_inputs() {
        let board = board_with_fours(&[(0, 0), (5, 5)]);
        let before = board.clone();
        let selection = select(5, 5);

        let first = engine().render(&board, selection);
        let second = engine().render(&board, selection);

        assert_eq!(board, before);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_board_without_selection_is_clear_plus_grid() {
        let commands = engine().render(&DigitGrid::new(), None);

        // One clear, then 10 vertical + 10 horizontal lines, nothing else.
        assert_eq!(commands.len(), 21);
        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
        assert!(
            commands[1..]
                .iter()
                .all(|cmd| matches!(cmd, DrawCommand::Line { .. }))
        );
    }

    #[test]
    fn every_third_grid_line_is_thick() {
        let commands = engine().render(&DigitGrid::new(), None);
        for (i, pair) in commands[1..21].chunks(2).enumerate() {
            let expected = if i % 3 == 0 { THICK_LINE } else { THIN_LINE };
            for cmd in pair {
                let DrawCommand::Line { width, .. } = cmd else {
                    panic!("expected a grid line, got {cmd:?}");
                };
                assert!((width - expected).abs() < f32::EPSILON, "line {i}");
            }
        }
    }

    #[test]
    fn grid_lines_span_the_whole_board() {
        let commands = engine().render(&DigitGrid::new(), None);
        let DrawCommand::Line { from, to, .. } = &commands[1] else {
            panic!("expected the first vertical line");
        };
        assert_eq!((from.x, from.y), (0.0, 0.0));
        assert_eq!((to.x, to.y), (0.0, layout::BOARD_SIZE));
    }

    #[test]
    fn digits_are_centered_in_their_cells() {
        let mut board = DigitGrid::new();
        board.set(Position::new(2, 1), Some(Digit::D8));

        let commands = engine().render(&board, None);
        let texts: Vec<_> = commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { center, text, .. } => Some((center, text.as_str())),
                _ => None,
            })
            .collect();

        assert_eq!(texts.len(), 1);
        let (center, text) = texts[0];
        assert_eq!(text, "8");
        assert_eq!((center.x, center.y), (125.0, 75.0));
    }

    #[test]
    fn highlight_passes_come_after_digits_and_end_with_the_selected_cell() {
        let board = board_with_fours(&[(0, 0), (8, 8)]);
        let commands = engine().render(&board, select(0, 0));

        let selected_tint = BoardPalette::default().selected_tint;
        let last = commands.last().expect("non-empty command list");
        let DrawCommand::FillRect { rect, color } = last else {
            panic!("expected the selected-cell fill last, got {last:?}");
        };
        assert_eq!(*color, selected_tint);
        assert_eq!(*rect, Rect::new(0.0, 0.0, 50.0, 50.0));

        // The unit path sits immediately before the selected fill.
        assert!(matches!(
            commands[commands.len() - 2],
            DrawCommand::FillPath { .. }
        ));
    }

    #[test]
    fn same_value_pass_covers_peers_but_not_the_selected_cell() {
        // Three other cells hold a 4 besides the selected one.
        let board = board_with_fours(&[(2, 2), (6, 1), (0, 8), (4, 4)]);
        let commands = engine().render(&board, select(2, 2));

        let rects = same_value_rects(&commands);
        assert_eq!(rects.len(), 3);

        let selected_rect = Rect::new(100.0, 100.0, 50.0, 50.0);
        assert!(rects.iter().all(|rect| *rect != selected_rect));
        for (x, y) in [(6u8, 1u8), (0, 8), (4, 4)] {
            let expected = Rect::new(
                f32::from(x) * layout::CELL_SIZE,
                f32::from(y) * layout::CELL_SIZE,
                50.0,
                50.0,
            );
            assert!(rects.contains(&expected), "missing tint for ({x}, {y})");
        }
    }

    #[test]
    fn selecting_an_empty_cell_skips_the_same_value_pass() {
        let board = board_with_fours(&[(0, 0)]);
        let commands = engine().render(&board, select(4, 4));

        assert!(same_value_rects(&commands).is_empty());
        // Unit tint and selected tint still present.
        assert!(
            commands
                .iter()
                .any(|cmd| matches!(cmd, DrawCommand::FillPath { .. }))
        );
        assert!(matches!(
            commands.last(),
            Some(DrawCommand::FillRect { .. })
        ));
    }

    #[test]
    fn unit_path_holds_21_disjoint_cells() {
        let commands = engine().render(&DigitGrid::new(), select(4, 4));
        let path = commands
            .iter()
            .find_map(|cmd| match cmd {
                DrawCommand::FillPath { rects, .. } => Some(rects),
                _ => None,
            })
            .expect("unit tint path");

        assert_eq!(path.len(), 21);
        for (i, a) in path.iter().enumerate() {
            for b in &path[i + 1..] {
                assert_ne!(a, b, "duplicate rect in unit path");
            }
        }
        // Row, column, and box of (4, 4) are all covered.
        let covers = |x: u8, y: u8| {
            path.iter()
                .any(|rect| rect.contains(cell_rect(Position::new(x, y)).center()))
        };
        assert!(covers(0, 4));
        assert!(covers(4, 0));
        assert!(covers(3, 3));
        assert!(covers(4, 4));
        assert!(!covers(0, 0));
    }

    #[test]
    fn out_of_range_selection_renders_like_no_selection() {
        let board = board_with_fours(&[(0, 0)]);
        let unselected = engine().render(&board, None);
        let out_of_range = engine().render(&board, Some(Selection::new(9, 0)));
        let negative = engine().render(&board, Some(Selection::new(-1, 3)));

        assert_eq!(unselected, out_of_range);
        assert_eq!(unselected, negative);
    }

    #[test]
    fn hit_testing_and_cell_rects_agree() {
        for pos in Position::ALL {
            let center = cell_rect(pos).center();
            let selection = Selection::from_pointer(center.x, center.y);
            assert_eq!(selection.position(), Some(pos));
        }
    }
}
