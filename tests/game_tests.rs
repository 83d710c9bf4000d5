use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{
    Board, EngineError, GameEngine, Marker, MoveError, NoRender, Outcome, Player, Renderer,
    ScriptedSource, BOARD_SLOTS,
};

/// Renderer that records what the engine showed.
#[derive(Default)]
struct Recorder {
    renders: usize,
    turns: Vec<String>,
    moves: Vec<(Marker, usize)>,
    outcomes: Vec<Outcome>,
}

impl Renderer for Recorder {
    fn render(&mut self, _board: &Board) {
        self.renders += 1;
    }

    fn announce_turn(&mut self, player: &Player) {
        self.turns.push(player.name().to_string());
    }

    fn announce_move(&mut self, player: &Player, slot: usize) {
        self.moves.push((player.marker(), slot));
    }

    fn announce_outcome(&mut self, outcome: &Outcome, _players: &[Player; 2]) {
        self.outcomes.push(*outcome);
    }
}

fn scripted_game(first: &[i64], second: &[i64]) -> GameEngine {
    let mut p1 = Player::human(Marker::X, ScriptedSource::new(first.to_vec()));
    let mut p2 = Player::human(Marker::O, ScriptedSource::new(second.to_vec()));
    p1.set_name("alice");
    p2.set_name("bob");
    GameEngine::new(p1, p2).unwrap()
}

#[test]
fn test_new_game_is_awaiting_first_player() {
    let engine = scripted_game(&[], &[]);
    assert_eq!(engine.outcome(), Outcome::InProgress);
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.current_player().name(), "alice");
    assert_eq!(engine.move_count(), 0);
    assert_eq!(*engine.board(), Board::new());
}

#[test]
fn test_duplicate_markers_rejected() {
    let p1 = Player::human(Marker::X, ScriptedSource::new([1]));
    let p2 = Player::ai(Marker::X, SmallRng::seed_from_u64(1));
    assert_eq!(GameEngine::new(p1, p2).err(), Some(EngineError::DuplicateMarker));
}

#[test]
fn test_top_row_win_stops_the_game() {
    // X: 1, 2, 3   O: 4, 5
    let mut engine = scripted_game(&[1, 2, 3, 7], &[4, 5, 6]);
    let mut recorder = Recorder::default();
    assert_eq!(engine.step(&mut recorder), Ok(Outcome::InProgress));
    assert_eq!(engine.current_index(), 1);
    assert_eq!(engine.step(&mut recorder), Ok(Outcome::InProgress));
    assert_eq!(engine.step(&mut recorder), Ok(Outcome::InProgress));
    assert_eq!(engine.step(&mut recorder), Ok(Outcome::InProgress));
    assert_eq!(engine.step(&mut recorder), Ok(Outcome::Won(0)));
    assert_eq!(engine.move_count(), 5);

    let board = *engine.board();
    assert_eq!(engine.step(&mut recorder), Err(EngineError::GameOver));
    assert_eq!(*engine.board(), board);
    assert_eq!(engine.move_count(), 5);
    assert_eq!(engine.outcome(), Outcome::Won(0));
    assert_eq!(recorder.outcomes, vec![Outcome::Won(0)]);
    assert_eq!(recorder.renders, 5);
    assert_eq!(
        recorder.turns,
        vec!["alice", "bob", "alice", "bob", "alice"]
    );
}

#[test]
fn test_diagonal_win() {
    // X: 1, 5, 9   O: 2, 3
    let mut engine = scripted_game(&[1, 5, 9], &[2, 3]);
    assert_eq!(engine.play(&mut NoRender), Ok(Outcome::Won(0)));
    assert_eq!(engine.board().evaluate_lines(), Some(Marker::X));
    assert_eq!(engine.move_count(), 5);
}

#[test]
fn test_second_player_can_win() {
    // X: 1, 2, 9   O: 4, 5, 6
    let mut engine = scripted_game(&[1, 2, 9], &[4, 5, 6]);
    assert_eq!(engine.play(&mut NoRender), Ok(Outcome::Won(1)));
    assert_eq!(engine.move_count(), 6);
    assert_eq!(engine.state().players[1].name, "bob");
}

#[test]
fn test_fixed_sequence_ends_in_draw() {
    // slots 1,2,3,5,4,7,6,9,8 alternately
    let mut engine = scripted_game(&[1, 3, 4, 6, 8], &[2, 5, 7, 9]);
    let mut recorder = Recorder::default();
    assert_eq!(engine.play(&mut recorder), Ok(Outcome::Draw));
    assert_eq!(engine.move_count(), BOARD_SLOTS);
    assert!(engine.board().is_full());
    // initial board plus one render per placement
    assert_eq!(recorder.renders, BOARD_SLOTS + 1);
    assert_eq!(
        recorder.moves.iter().map(|(_, s)| *s).collect::<Vec<_>>(),
        vec![1, 2, 3, 5, 4, 7, 6, 9, 8]
    );
    assert_eq!(recorder.outcomes, vec![Outcome::Draw]);
}

#[test]
fn test_win_on_ninth_placement_is_not_a_draw() {
    // X completes 3-6-9 with the last free cell
    let mut engine = scripted_game(&[2, 4, 9, 3, 6], &[1, 5, 7, 8]);
    let mut recorder = Recorder::default();
    assert_eq!(engine.play(&mut recorder), Ok(Outcome::Won(0)));
    assert_eq!(engine.move_count(), BOARD_SLOTS);
    assert!(engine.board().is_full());
    assert_eq!(engine.board().evaluate_lines(), Some(Marker::X));
    assert_eq!(recorder.outcomes, vec![Outcome::Won(0)]);
}

#[test]
fn test_invalid_entries_do_not_reach_the_engine() {
    // bob first tries X's cell and two out-of-range values
    let mut engine = scripted_game(&[1, 5, 9], &[1, 0, 10, 2, 3]);
    assert_eq!(engine.play(&mut NoRender), Ok(Outcome::Won(0)));
    assert_eq!(engine.move_count(), 5);
}

#[test]
fn test_closed_input_leaves_game_in_progress() {
    let mut engine = scripted_game(&[1], &[]);
    assert_eq!(engine.step(&mut NoRender), Ok(Outcome::InProgress));
    assert_eq!(
        engine.step(&mut NoRender),
        Err(EngineError::Move(MoveError::InputClosed))
    );
    assert_eq!(engine.outcome(), Outcome::InProgress);
    assert_eq!(engine.current_index(), 1);
    assert_eq!(engine.move_count(), 1);
}

#[test]
fn test_human_vs_ai_game_terminates() {
    let p1 = Player::human(Marker::X, ScriptedSource::new(1..=9));
    let p2 = Player::ai(Marker::O, SmallRng::seed_from_u64(5));
    let mut engine = GameEngine::new(p1, p2).unwrap();
    let outcome = engine.play(&mut NoRender).unwrap();
    assert!(matches!(outcome, Outcome::Won(_) | Outcome::Draw));
    assert!(engine.move_count() <= BOARD_SLOTS);
    assert_eq!(engine.players()[1].name(), tictactoe::AI_DISPLAY_NAME);
    assert!(engine.players()[1].is_automated());
    assert!(!engine.players()[0].is_automated());
}

#[test]
fn test_state_snapshot() {
    let mut engine = scripted_game(&[5], &[1]);
    engine.step(&mut NoRender).unwrap();
    let state = engine.state();
    assert_eq!(state.move_count, 1);
    assert_eq!(state.current, 1);
    assert_eq!(state.outcome, Outcome::InProgress);
    assert_eq!(state.board.count(Marker::X), 1);
    assert_eq!(state.players[0].marker, Marker::X);
    assert!(!state.players[0].is_automated);

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["move_count"], 1);
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["players"][1]["name"], "bob");
    assert_eq!(json["board"]["cells"][4]["Marked"], "X");
    assert_eq!(json["board"]["cells"][0], "Empty");
}
