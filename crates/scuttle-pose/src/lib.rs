#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for the discrete pose model of a grid-cell cleaning robot."]
#![doc = ""]
#![doc = "This crate provides the cardinal heading type, signed cell positions, and the"]
#![doc = "pose type combining the two, with total rotation and translation tables."]

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four cardinal compass directions the robot can face.
///
/// Rotation is a fixed permutation over this set: turning right cycles
/// `North → East → South → West → North`, turning left cycles the reverse.
/// Both tables are exhaustive matches, so adding a variant is a compile
/// error until every table is extended.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Facing up the y-axis (`+y`).
    North,
    /// Facing down the y-axis (`-y`).
    South,
    /// Facing up the x-axis (`+x`).
    East,
    /// Facing down the x-axis (`-x`).
    West,
}

impl Heading {
    /// Returns the heading after a 90° left (counter-clockwise) turn.
    ///
    /// `rotated_left` and [`Heading::rotated_right`] are mutual inverses, and
    /// four applications of either return the original heading.
    pub const fn rotated_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Returns the heading after a 90° right (clockwise) turn.
    pub const fn rotated_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Returns the unit translation vector `(dx, dy)` for one forward step
    /// at this heading.
    pub const fn unit_vector(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::South => (0, -1),
            Heading::East => (1, 0),
            Heading::West => (-1, 0),
        }
    }

    /// Returns the single-letter form (`N`, `S`, `E`, `W`) used in status
    /// strings.
    pub const fn letter(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::South => 'S',
            Heading::East => 'E',
            Heading::West => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A cell position `(x, y)` on the floor grid, in whole cells.
///
/// Positions are unbounded signed integers; the room extent is only used as
/// the coverage denominator, never to clamp movement.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Cell x coordinate.
    pub x: i32,
    /// Cell y coordinate.
    pub y: i32,
}

impl Position {
    /// Construct a new position.
    ///
    /// # Arguments
    ///
    /// * `x`: Cell x coordinate.
    /// * `y`: Cell y coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Returns the position one cell ahead when facing `heading`.
    ///
    /// # Arguments
    ///
    /// * `heading`: The direction of travel.
    pub const fn translated(self, heading: Heading) -> Self {
        let (dx, dy) = heading.unit_vector();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Combined position and heading.
///
/// The `Display` form is exactly `(x,y,h)` with `h` the single heading
/// letter; callers assert on this string, so it is part of the public
/// contract.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pose {
    /// Current cell position.
    pub position: Position,
    /// Current heading.
    pub heading: Heading,
}

impl Pose {
    /// Construct a new pose.
    ///
    /// # Arguments
    ///
    /// * `position`: Starting cell.
    /// * `heading`: Starting heading.
    pub const fn new(position: Position, heading: Heading) -> Self {
        Pose { position, heading }
    }

    /// The initialization pose `(0,0,N)`.
    pub const fn origin() -> Self {
        Pose::new(Position::new(0, 0), Heading::North)
    }

    /// Returns the pose one cell ahead, heading unchanged.
    pub const fn advanced(self) -> Self {
        Pose {
            position: self.position.translated(self.heading),
            heading: self.heading,
        }
    }

    /// Returns the pose after a left turn, position unchanged.
    pub const fn turned_left(self) -> Self {
        Pose {
            position: self.position,
            heading: self.heading.rotated_left(),
        }
    }

    /// Returns the pose after a right turn, position unchanged.
    pub const fn turned_right(self) -> Self {
        Pose {
            position: self.position,
            heading: self.heading.rotated_right(),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::origin()
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{})",
            self.position.x,
            self.position.y,
            self.heading.letter()
        )
    }
}
