#![no_main]
use chess_console::chess::core::Coordinate;
use chess_console::chess::game::Game;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

// Every 4 bytes are a move: source row/col and destination row/col. Signed
// bytes cover off-board cells in both directions.
fuzz_target!(|data: &[u8]| {
    let mut game = Game::new();
    for chunk in data.chunks_exact(4) {
        let [from_row, from_col, to_row, to_col] =
            [chunk[0], chunk[1], chunk[2], chunk[3]].map(|byte| i32::from(byte as i8));
        let from = Coordinate::new(from_row, from_col);
        let to = Coordinate::new(to_row, to_col);
        let mover = game.turn();
        let before = game.clone();
        match game.make_move(from, to, mover) {
            Ok(_) => {
                assert_eq!(game.board().at(from), None);
                assert_eq!(game.board().at(to), before.board().at(from));
                if game.is_game_over() {
                    return;
                }
                game.switch_turn();
            },
            Err(_) => assert_eq!(game, before),
        }
        assert!(game.board().pieces().count() <= before.board().pieces().count());
    }
});
