use super::state::{CollisionType, Position};

/// Classify where a freshly moved head ended up.
///
/// `body` is the whole snake after movement, head included; index 0 is skipped.
pub fn detect_collision(
    head: Position,
    body: &[Position],
    board_size: usize,
) -> Option<CollisionType> {
    if !head.is_on_board(board_size) {
        return Some(CollisionType::Wall);
    }

    if body.iter().skip(1).any(|segment| *segment == head) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_collisions() {
        let body = [Position::new(-1, 5)];
        assert_eq!(
            detect_collision(Position::new(-1, 5), &body, 30),
            Some(CollisionType::Wall)
        );
        assert_eq!(
            detect_collision(Position::new(5, 30), &body, 30),
            Some(CollisionType::Wall)
        );
        assert_eq!(
            detect_collision(Position::new(30, 5), &body, 30),
            Some(CollisionType::Wall)
        );
    }

    #[test]
    fn test_self_collision() {
        let body = [
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(6, 6),
            Position::new(6, 5),
            Position::new(5, 5),
        ];
        assert_eq!(
            detect_collision(Position::new(5, 5), &body, 30),
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_head_alone_is_not_a_collision() {
        let body = [Position::new(5, 5), Position::new(4, 5)];
        assert_eq!(detect_collision(Position::new(5, 5), &body, 30), None);
        assert_eq!(detect_collision(Position::new(0, 0), &[Position::new(0, 0)], 30), None);
    }

    #[test]
    fn test_wall_takes_precedence() {
        let body = [Position::new(-1, 0), Position::new(-1, 0)];
        assert_eq!(
            detect_collision(Position::new(-1, 0), &body, 30),
            Some(CollisionType::Wall)
        );
    }
}
