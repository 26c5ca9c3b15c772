//! Grid model
//!
//! Coordinates name dots. Lines are stored once per orientation:
//!
//! ```text
//!        col 0    col 1    col 2
//! row 0    + -H(0,0)- + -H(0,1)- +
//!          |          |          |
//!       V(0,0) B(0,0) V(0,1) ... V(0,2)
//!          |          |          |
//! row 1    + -H(1,0)- + -H(1,1)- +
//! ```
//!
//! Horizontal line `(r, c)` joins dot `(r, c)` to `(r, c + 1)`. Vertical
//! line `(r, c)` joins dot `(r, c)` to `(r + 1, c)`. Box `(r, c)` is
//! bounded by horizontals `(r, c)` and `(r + 1, c)` and verticals `(r, c)`
//! and `(r, c + 1)`, so neighbouring boxes share the same stored line.

use heapless::Vec;

use super::moves::{Direction, Move};
use super::score::Player;
use crate::config::{BoardSize, MAX_BOXES, MAX_DOTS};

/// Line orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A line between two adjacent dots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segment {
    pub orientation: Orientation,
    pub row: u8,
    pub col: u8,
}

impl Segment {
    pub const fn horizontal(row: u8, col: u8) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            row,
            col,
        }
    }

    pub const fn vertical(row: u8, col: u8) -> Self {
        Self {
            orientation: Orientation::Vertical,
            row,
            col,
        }
    }

    fn bit(&self) -> usize {
        self.row as usize * MAX_DOTS + self.col as usize
    }
}

/// A unit square, named by its top-left dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoxId {
    pub row: u8,
    pub col: u8,
}

impl BoxId {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The four sides: top, bottom, left, right
    pub fn sides(&self) -> [Segment; 4] {
        [
            Segment::horizontal(self.row, self.col),
            Segment::horizontal(self.row + 1, self.col),
            Segment::vertical(self.row, self.col),
            Segment::vertical(self.row, self.col + 1),
        ]
    }

    fn slot(&self) -> usize {
        self.row as usize * (MAX_DOTS - 1) + self.col as usize
    }
}

/// Result of trying to draw a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawResult {
    /// Line was blank and is now drawn
    Drawn,
    /// Line was already drawn; nothing changed
    AlreadyDrawn,
    /// No such line on this board; nothing changed
    OutOfBounds,
}

/// Bitset of drawn lines for one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct LineSet(u32);

impl LineSet {
    fn contains(&self, bit: usize) -> bool {
        self.0 & (1 << bit) != 0
    }

    fn insert(&mut self, bit: usize) {
        self.0 |= 1 << bit;
    }

    fn len(&self) -> u32 {
        self.0.count_ones()
    }
}

/// Drawn lines and box owners for one board
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Grid {
    size: BoardSize,
    horizontal: LineSet,
    vertical: LineSet,
    owners: [Option<Player>; MAX_BOXES],
}

impl Grid {
    /// Create an empty grid
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            horizontal: LineSet::default(),
            vertical: LineSet::default(),
            owners: [None; MAX_BOXES],
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Check that a segment lies on this board
    pub fn contains(&self, segment: Segment) -> bool {
        let (rows, cols) = (self.size.rows(), self.size.cols());
        let (row, col) = (segment.row as usize, segment.col as usize);
        match segment.orientation {
            Orientation::Horizontal => row < rows && col + 1 < cols,
            Orientation::Vertical => row + 1 < rows && col < cols,
        }
    }

    /// Check that a box lies on this board
    pub fn contains_box(&self, id: BoxId) -> bool {
        (id.row as usize) + 1 < self.size.rows() && (id.col as usize) + 1 < self.size.cols()
    }

    /// Segment a move would draw, if it exists on this board
    pub fn segment_for(&self, mv: &Move) -> Option<Segment> {
        let (row, col) = (mv.row, mv.col);
        if row as usize >= self.size.rows() || col as usize >= self.size.cols() {
            return None;
        }

        let segment = match mv.direction {
            Direction::Up => Segment::vertical(row.checked_sub(1)?, col),
            Direction::Down => Segment::vertical(row, col),
            Direction::Left => Segment::horizontal(row, col.checked_sub(1)?),
            Direction::Right => Segment::horizontal(row, col),
        };

        self.contains(segment).then_some(segment)
    }

    /// Draw the line leaving dot `(row, col)` in `direction`
    pub fn draw_line(&mut self, row: u8, col: u8, direction: Direction) -> DrawResult {
        match self.segment_for(&Move::new(row, col, direction)) {
            Some(segment) => self.draw(segment),
            None => DrawResult::OutOfBounds,
        }
    }

    /// Draw a segment
    pub fn draw(&mut self, segment: Segment) -> DrawResult {
        if !self.contains(segment) {
            return DrawResult::OutOfBounds;
        }
        if self.is_drawn(segment) {
            return DrawResult::AlreadyDrawn;
        }
        self.lines_mut(segment.orientation).insert(segment.bit());
        DrawResult::Drawn
    }

    /// Check whether a segment is drawn. Off-board segments never are.
    pub fn is_drawn(&self, segment: Segment) -> bool {
        self.contains(segment) && self.lines(segment.orientation).contains(segment.bit())
    }

    /// Boxes bordered by a segment (one on the edge, two inside)
    pub fn adjacent_boxes(&self, segment: Segment) -> Vec<BoxId, 2> {
        let mut boxes = Vec::new();
        if !self.contains(segment) {
            return boxes;
        }

        let (row, col) = (segment.row, segment.col);
        let candidates = match segment.orientation {
            // Box above and box below
            Orientation::Horizontal => [
                row.checked_sub(1).map(|r| BoxId::new(r, col)),
                Some(BoxId::new(row, col)),
            ],
            // Box to the left and box to the right
            Orientation::Vertical => [
                col.checked_sub(1).map(|c| BoxId::new(row, c)),
                Some(BoxId::new(row, col)),
            ],
        };

        for id in candidates.into_iter().flatten() {
            if self.contains_box(id) {
                let _ = boxes.push(id);
            }
        }
        boxes
    }

    /// Check whether all four sides of a box are drawn
    pub fn is_box_closed(&self, id: BoxId) -> bool {
        self.contains_box(id) && id.sides().iter().all(|&side| self.is_drawn(side))
    }

    /// Player that completed a box
    pub fn owner(&self, id: BoxId) -> Option<Player> {
        if !self.contains_box(id) {
            return None;
        }
        self.owners[id.slot()]
    }

    /// Assign an unowned box. Returns false if it was already owned or
    /// does not exist.
    pub fn claim(&mut self, id: BoxId, player: Player) -> bool {
        if !self.contains_box(id) {
            return false;
        }
        let slot = &mut self.owners[id.slot()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(player);
        true
    }

    /// Number of owned boxes
    pub fn completed_boxes(&self) -> u8 {
        self.owners.iter().filter(|owner| owner.is_some()).count() as u8
    }

    /// Number of boxes on the board
    pub fn total_boxes(&self) -> u8 {
        self.size.boxes() as u8
    }

    /// Number of drawn lines
    pub fn drawn_lines(&self) -> u8 {
        (self.horizontal.len() + self.vertical.len()) as u8
    }

    /// Every segment on the board, horizontals first
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let (rows, cols) = (self.size.rows() as u8, self.size.cols() as u8);
        let horizontal = (0..rows)
            .flat_map(move |r| (0..cols - 1).map(move |c| Segment::horizontal(r, c)));
        let vertical =
            (0..rows - 1).flat_map(move |r| (0..cols).map(move |c| Segment::vertical(r, c)));
        horizontal.chain(vertical)
    }

    fn lines(&self, orientation: Orientation) -> &LineSet {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn lines_mut(&mut self, orientation: Orientation) -> &mut LineSet {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: u8) -> Grid {
        Grid::new(BoardSize::square(n).unwrap())
    }

    #[test]
    fn test_direction_mapping() {
        let g = grid(3);
        let seg = |row, col, dir| g.segment_for(&Move::new(row, col, dir));

        assert_eq!(seg(1, 1, Direction::Up), Some(Segment::vertical(0, 1)));
        assert_eq!(seg(1, 1, Direction::Down), Some(Segment::vertical(1, 1)));
        assert_eq!(seg(1, 1, Direction::Left), Some(Segment::horizontal(1, 0)));
        assert_eq!(seg(1, 1, Direction::Right), Some(Segment::horizontal(1, 1)));
    }

    #[test]
    fn test_out_of_bounds_moves() {
        let mut g = grid(3);
        assert_eq!(g.draw_line(0, 0, Direction::Up), DrawResult::OutOfBounds);
        assert_eq!(g.draw_line(0, 0, Direction::Left), DrawResult::OutOfBounds);
        assert_eq!(g.draw_line(2, 0, Direction::Down), DrawResult::OutOfBounds);
        assert_eq!(g.draw_line(0, 2, Direction::Right), DrawResult::OutOfBounds);
        assert_eq!(g.draw_line(3, 0, Direction::Right), DrawResult::OutOfBounds);
        assert_eq!(g.draw_line(9, 9, Direction::Up), DrawResult::OutOfBounds);
        assert_eq!(g.drawn_lines(), 0);
    }

    #[test]
    fn test_draw_twice() {
        let mut g = grid(3);
        assert_eq!(g.draw_line(0, 0, Direction::Right), DrawResult::Drawn);
        let snapshot = g.clone();
        assert_eq!(g.draw_line(0, 0, Direction::Right), DrawResult::AlreadyDrawn);
        assert_eq!(g, snapshot);
    }

    #[test]
    fn test_same_line_from_both_ends() {
        let mut g = grid(3);
        assert_eq!(g.draw_line(1, 0, Direction::Right), DrawResult::Drawn);
        assert_eq!(g.draw_line(1, 1, Direction::Left), DrawResult::AlreadyDrawn);
        assert_eq!(g.draw_line(0, 2, Direction::Down), DrawResult::Drawn);
        assert_eq!(g.draw_line(1, 2, Direction::Up), DrawResult::AlreadyDrawn);
        assert_eq!(g.drawn_lines(), 2);
    }

    #[test]
    fn test_adjacent_boxes() {
        let g = grid(3);
        // Top edge borders one box
        assert_eq!(
            g.adjacent_boxes(Segment::horizontal(0, 1)).as_slice(),
            &[BoxId::new(0, 1)]
        );
        // Middle horizontal borders the box above and below
        assert_eq!(
            g.adjacent_boxes(Segment::horizontal(1, 0)).as_slice(),
            &[BoxId::new(0, 0), BoxId::new(1, 0)]
        );
        // Middle vertical borders the box left and right
        assert_eq!(
            g.adjacent_boxes(Segment::vertical(1, 1)).as_slice(),
            &[BoxId::new(1, 0), BoxId::new(1, 1)]
        );
        // Right edge
        assert_eq!(
            g.adjacent_boxes(Segment::vertical(0, 2)).as_slice(),
            &[BoxId::new(0, 1)]
        );
    }

    #[test]
    fn test_box_closes_with_four_sides() {
        let mut g = grid(2);
        let id = BoxId::new(0, 0);
        for side in &id.sides()[..3] {
            assert_eq!(g.draw(*side), DrawResult::Drawn);
            assert!(!g.is_box_closed(id));
        }
        g.draw(id.sides()[3]);
        assert!(g.is_box_closed(id));
    }

    #[test]
    fn test_claim_once() {
        let mut g = grid(2);
        let id = BoxId::new(0, 0);
        assert!(g.claim(id, Player::Two));
        assert!(!g.claim(id, Player::One));
        assert_eq!(g.owner(id), Some(Player::Two));
        assert_eq!(g.completed_boxes(), 1);
        assert!(!g.claim(BoxId::new(1, 0), Player::One));
    }

    #[test]
    fn test_rectangular_board() {
        let mut g = Grid::new(BoardSize::new(4, 2).unwrap());
        assert_eq!(g.total_boxes(), 3);
        assert_eq!(g.draw_line(0, 2, Direction::Right), DrawResult::Drawn);
        assert_eq!(g.draw_line(1, 3, Direction::Up), DrawResult::Drawn);
        assert_eq!(g.draw_line(1, 3, Direction::Down), DrawResult::OutOfBounds);
        assert_eq!(g.segments().count(), BoardSize::new(4, 2).unwrap().lines());
    }

    #[test]
    fn test_largest_board_fits() {
        let mut g = grid(5);
        let segments: heapless::Vec<Segment, 40> = g.segments().collect();
        for seg in &segments {
            assert_eq!(g.draw(*seg), DrawResult::Drawn);
        }
        assert_eq!(g.drawn_lines() as usize, segments.len());
        assert!(g.is_box_closed(BoxId::new(3, 3)));
    }
}
