use crate::core::Direction::*;
use crate::core::*;
use crate::test::test_util::MazeTestState;

const ONE_PUSH_FROM_WIN: &str = r#"
#########
#-------#
#-2-345-#
#0------#
#########
"#;

#[test]
fn when_last_object_joins_chain_game_is_won() {
    let mut game = MazeTestState::new(ONE_PUSH_FROM_WIN);
    let result = game.assert_move(Up);
    assert_eq!(result, MoveResult::Moved { change: GameChangeType::PlayerMove, won: false });
    assert_eq!(game.maze.state(), GameState::InProgress);

    let result = game.assert_move(Right);

    assert_eq!(
        result,
        MoveResult::Moved { change: GameChangeType::PlayerAndObjectMove(Pushable::Shovel), won: true }
    );
    assert!(result.moved());
    assert!(result.won());
    assert!(game.maze.is_won());
    assert_eq!(game.maze.state(), GameState::Won);
    game.assert_matches(r#"
#########
#-------#
#-02345-#
#-------#
#########
"#);
}

#[test]
fn when_game_is_won_every_move_is_refused() {
    let mut game = MazeTestState::new(ONE_PUSH_FROM_WIN);
    game.assert_moves(&[Up, Right]);
    let won = game.maze.clone();

    for direction in Direction::ALL {
        let result = game.try_move(direction);
        assert_eq!(result, MoveResult::GameOver);
        assert!(!result.moved());
        assert!(result.won());
        assert_eq!(won, game.maze);
    }
}

#[test]
fn when_push_joins_chain_game_is_won() {
    let mut game = MazeTestState::new(r#"
234-
---5
---0
"#);
    let result = game.assert_move(Up);

    assert_eq!(
        result,
        MoveResult::Moved { change: GameChangeType::PlayerAndObjectMove(Pushable::Water), won: true }
    );
    game.assert_matches(r#"
2345
---0
----
"#);
}

#[test]
fn when_level_starts_chained_first_move_wins() {
    let mut game = MazeTestState::new(r#"
2345
0---
"#);
    assert!(game.maze.check_win());
    assert!(!game.maze.is_won());

    let result = game.assert_move(Right);
    assert!(result.won());
    assert!(game.maze.is_won());
}

#[test]
fn when_push_breaks_chain_game_is_not_won() {
    let mut game = MazeTestState::new(r#"
------
-2345-
----0-
"#);
    assert!(game.maze.check_win());

    let result = game.assert_move(Up);

    assert!(!result.won());
    assert!(!game.maze.check_win());
    assert_eq!(game.maze.state(), GameState::InProgress);
}

#[test]
fn when_blocked_move_game_is_not_won() {
    let mut game = MazeTestState::new(ONE_PUSH_FROM_WIN);
    game.assert_blocked(Down, BlockReason::Wall);
    assert!(!game.maze.is_won());
    assert_eq!(game.maze.state(), GameState::InProgress);
}
