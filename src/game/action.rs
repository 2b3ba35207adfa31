use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A raw input symbol as delivered by the front end, before any mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Char(char),
}

/// Which letters steer the snake besides the arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyLayout {
    /// w/a/s/d (QWERTY)
    #[default]
    Wasd,
    /// z/q/s/d (AZERTY)
    Zqsd,
}

impl KeyLayout {
    /// Map a raw symbol to a direction, ignoring letter case
    pub fn map(&self, input: RawInput) -> Option<Direction> {
        let c = match input {
            RawInput::ArrowUp => return Some(Direction::Up),
            RawInput::ArrowDown => return Some(Direction::Down),
            RawInput::ArrowLeft => return Some(Direction::Left),
            RawInput::ArrowRight => return Some(Direction::Right),
            RawInput::Char(c) => c.to_ascii_lowercase(),
        };

        match (self, c) {
            (KeyLayout::Wasd, 'w') | (KeyLayout::Zqsd, 'z') => Some(Direction::Up),
            (KeyLayout::Wasd, 'a') | (KeyLayout::Zqsd, 'q') => Some(Direction::Left),
            (_, 's') => Some(Direction::Down),
            (_, 'd') => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Turns raw input into the next pending direction.
///
/// A proposal that maps to the reverse of the direction the last tick actually
/// used is rejected, as is anything the layout does not recognize; in both
/// cases the current pending direction comes back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionController {
    layout: KeyLayout,
}

impl DirectionController {
    pub fn new(layout: KeyLayout) -> Self {
        Self { layout }
    }

    pub fn propose_direction(
        &self,
        input: RawInput,
        pending: Direction,
        last_applied: Direction,
    ) -> Direction {
        match self.layout.map(input) {
            Some(direction) if !direction.is_opposite(last_applied) => direction,
            _ => pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_wasd_mapping_ignores_case() {
        let layout = KeyLayout::Wasd;
        assert_eq!(layout.map(RawInput::Char('w')), Some(Direction::Up));
        assert_eq!(layout.map(RawInput::Char('W')), Some(Direction::Up));
        assert_eq!(layout.map(RawInput::Char('a')), Some(Direction::Left));
        assert_eq!(layout.map(RawInput::Char('S')), Some(Direction::Down));
        assert_eq!(layout.map(RawInput::Char('d')), Some(Direction::Right));
        assert_eq!(layout.map(RawInput::Char('z')), None);
        assert_eq!(layout.map(RawInput::Char('q')), None);
    }

    #[test]
    fn test_zqsd_mapping() {
        let layout = KeyLayout::Zqsd;
        assert_eq!(layout.map(RawInput::Char('Z')), Some(Direction::Up));
        assert_eq!(layout.map(RawInput::Char('q')), Some(Direction::Left));
        assert_eq!(layout.map(RawInput::Char('s')), Some(Direction::Down));
        assert_eq!(layout.map(RawInput::Char('D')), Some(Direction::Right));
        assert_eq!(layout.map(RawInput::Char('w')), None);
        assert_eq!(layout.map(RawInput::ArrowLeft), Some(Direction::Left));
    }

    #[test]
    fn test_reversal_is_rejected() {
        let controller = DirectionController::default();
        let next =
            controller.propose_direction(RawInput::ArrowLeft, Direction::Right, Direction::Right);
        assert_eq!(next, Direction::Right);
    }

    #[test]
    fn test_reversal_checks_last_applied_not_pending() {
        let controller = DirectionController::default();
        // Up is pending but the snake is still travelling right, so Left stays illegal
        let next = controller.propose_direction(RawInput::ArrowLeft, Direction::Up, Direction::Right);
        assert_eq!(next, Direction::Up);

        // and Down is legal even though Up is pending
        let next = controller.propose_direction(RawInput::ArrowDown, Direction::Up, Direction::Right);
        assert_eq!(next, Direction::Down);
    }

    #[test]
    fn test_unknown_input_keeps_pending() {
        let controller = DirectionController::new(KeyLayout::Wasd);
        let next = controller.propose_direction(RawInput::Char('x'), Direction::Up, Direction::Up);
        assert_eq!(next, Direction::Up);
    }

    #[test]
    fn test_never_returns_reverse_of_last_applied() {
        let controller = DirectionController::default();
        let all = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        let inputs = [
            RawInput::ArrowUp,
            RawInput::ArrowDown,
            RawInput::ArrowLeft,
            RawInput::ArrowRight,
            RawInput::Char('w'),
            RawInput::Char('a'),
            RawInput::Char('s'),
            RawInput::Char('d'),
        ];

        for last in all {
            // pending is always something the controller produced earlier, so never the reverse
            for pending in all.into_iter().filter(|d| !d.is_opposite(last)) {
                for input in inputs {
                    let next = controller.propose_direction(input, pending, last);
                    assert!(!next.is_opposite(last), "{input:?} from {last:?}");
                }
            }
        }
    }
}
