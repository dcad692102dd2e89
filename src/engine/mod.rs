pub mod animation;
pub mod board;
pub mod grid;
pub mod ids;
pub mod shift;
pub mod spawn;
pub mod status;

use crate::error::Error;

/// Direction represents the direction indicated by the player.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Direction {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(&self) -> Direction {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        write!(f, "{}", s)
    }
}

impl TryFrom<char> for Direction {
    type Error = Error;

    /// Accepts vi keys, wasd and the initials of each direction.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'h' | 'a' | 'L' => Ok(Direction::Left),
            'l' | 'd' | 'R' => Ok(Direction::Right),
            'k' | 'w' | 'U' => Ok(Direction::Up),
            'j' | 's' | 'D' => Ok(Direction::Down),
            c => Err(Error::InvalidMove(c)),
        }
    }
}
