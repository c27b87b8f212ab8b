//! End-to-end play through the public API.

use damas::{
    Board, CaptureScope, Game, GameOutcome, MoveError, Piece, Player, Rules, RulesConfig, Square,
    SquareSet, coordinates_to_square, create_initial_board, has_legal_move, is_game_over,
    is_legal_move, square_to_coordinates,
};

fn sq(n: u8) -> Square {
    Square::new(n).unwrap()
}

#[test]
fn square_numbering_round_trips() {
    for number in 1..=32 {
        let (row, col) = square_to_coordinates(number).unwrap();
        assert_eq!((row + col) % 2, 1);
        assert_eq!(coordinates_to_square(row, col).unwrap(), number);
    }
    assert_eq!(square_to_coordinates(0), Err(MoveError::InvalidSquare(0)));
}

#[test]
fn opening_exchange_creates_a_mandatory_capture() {
    let mut board = create_initial_board();

    assert!(is_legal_move(&board, 9, 13, Player::Light));
    let first = board.apply_move(sq(9), sq(13)).unwrap();
    assert!(!first.is_capture());
    assert!(board.capture_moves(sq(13)).is_empty());

    assert!(is_legal_move(&board, 22, 17, Player::Dark));
    board.apply_move(sq(22), sq(17)).unwrap();

    let captures = board.capture_moves(sq(13));
    assert_eq!(captures, [sq(22)].into_iter().collect::<SquareSet>());
    assert!(is_legal_move(&board, 13, 22, Player::Light));
    for destination in 1..=32 {
        if destination != 22 {
            assert!(!is_legal_move(&board, 13, destination, Player::Light));
        }
    }

    let capture = board.apply_move(sq(13), sq(22)).unwrap();
    assert_eq!(capture.captured, Some(sq(17)));
    assert_eq!(board.count(Player::Dark), 11);
}

#[test]
fn same_opening_through_the_session() {
    let mut game = Game::default();

    game.play(9, 13).unwrap();
    game.play(22, 17).unwrap();

    assert_eq!(game.current_player(), Player::Light);
    assert_eq!(
        game.play(13, 17),
        Err(MoveError::CaptureRequired { origin: sq(13) })
    );

    // Mandatory capture binds only the piece that can capture.
    let record = game.play(10, 15).unwrap();
    assert_eq!(record.to_string(), "10-15");
    assert_eq!(game.current_player(), Player::Dark);
}

#[test]
fn board_scope_forbids_simple_moves_while_any_capture_exists() {
    let config = RulesConfig {
        capture_scope: CaptureScope::Board,
        ..RulesConfig::default()
    };
    let mut game = Game::new(config).unwrap();

    game.play(9, 13).unwrap();
    game.play(22, 17).unwrap();

    assert_eq!(
        game.play(10, 15),
        Err(MoveError::CaptureRequired { origin: sq(13) })
    );
    let record = game.play(13, 22).unwrap();
    assert_eq!(record.captured, Some(sq(17)));
}

#[test]
fn light_man_crowned_then_captures_backward() {
    let board = Board::from_pieces(&[
        (sq(27), Piece::man(Player::Light)),
        (sq(26), Piece::man(Player::Dark)),
        (sq(5), Piece::man(Player::Dark)),
    ]);
    let mut game = Game::with_board(board, Player::Light, RulesConfig::default()).unwrap();

    let crown = game.play(27, 31).unwrap();
    assert!(crown.promoted);
    assert!(game.board().piece_at(sq(31)).unwrap().is_king());

    game.play(5, 1).unwrap();

    // 31 is (7,4); the dark man on 26 (6,3) is now behind the new king.
    let jump = game.play(31, 22).unwrap();
    assert_eq!(jump.captured, Some(sq(26)));
    assert!(!jump.continues);
    assert_eq!(game.current_player(), Player::Dark);
    assert!(!game.is_game_over());
}

#[test]
fn full_game_ends_when_a_side_runs_out_of_pieces() {
    let board = Board::from_pieces(&[
        (sq(9), Piece::man(Player::Light)),
        (sq(14), Piece::man(Player::Dark)),
        (sq(23), Piece::man(Player::Dark)),
    ]);
    let mut game = Game::with_board(board, Player::Light, RulesConfig::default()).unwrap();

    assert!(game.play(9, 18).unwrap().continues);
    assert!(!game.play(18, 27).unwrap().continues);

    assert_eq!(game.outcome(), Some(GameOutcome::Winner(Player::Light)));
    assert!(is_game_over(game.board(), Player::Dark));
    assert!(!has_legal_move(game.board(), Player::Dark));
    assert_eq!(game.play(27, 31), Err(MoveError::GameOver));
}

#[test]
fn legal_moves_match_validator_for_every_pair() {
    let mut game = Game::default();
    game.play(9, 13).unwrap();
    game.play(22, 17).unwrap();
    game.play(10, 15).unwrap();

    let rules = Rules::default();
    let board = *game.board();
    let listed = rules.legal_moves(&board, Player::Dark);
    for origin in 1..=32 {
        for destination in 1..=32 {
            let legal = rules.is_legal_move(&board, origin, destination, Player::Dark);
            let in_list = listed
                .iter()
                .any(|m| m.origin.number() == origin && m.destination.number() == destination);
            assert_eq!(legal, in_list, "{origin}-{destination}");
        }
    }
}
