//! End-to-end game scenarios across engine, driver and file store.

use std::fs;
use std::time::Duration;

use blockfall::core::{
    Board, FixedPieces, GameConfig, GameEngine, MemoryScoreStore, MoveOutcome, ScoreStore,
};
use blockfall::driver::{Session, TickDriver};
use blockfall::store::{load_config, JsonScoreFile};
use blockfall::term::{GameView, PanelInfo, Viewport};
use blockfall::types::{GameAction, Phase, PieceKind};

fn fixed(kind: PieceKind) -> Box<FixedPieces> {
    Box::new(FixedPieces::repeat(kind))
}

/// Tick until the active piece stops moving; returns the last origin row
/// before the lock together with the lock outcome.
fn drop_to_floor<S: ScoreStore>(engine: &mut GameEngine<S>) -> (i32, MoveOutcome) {
    let mut last_y = engine.active().map_or(-1, |p| p.y);
    loop {
        match engine.tick() {
            MoveOutcome::Moved => last_y = engine.active().map_or(-1, |p| p.y),
            outcome => return (last_y, outcome),
        }
    }
}

#[test]
fn test_o_piece_lands_on_empty_board() {
    let mut engine = GameEngine::in_memory(FixedPieces::repeat(PieceKind::O));
    engine.start();
    assert_eq!(engine.active().map(|p| (p.x, p.y)), Some((4, 0)));

    let (origin_row, outcome) = drop_to_floor(&mut engine);

    assert_eq!(origin_row, 18);
    assert_eq!(outcome, MoveOutcome::Locked { rows_cleared: 0 });
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert!(engine.board().is_occupied(x, y), "({x}, {y})");
    }
    assert_eq!(engine.board().occupied_count(), 4);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_i_piece_completes_row() {
    let mut rows = vec![vec![false; 10]; 20];
    rows[19] = (0..10).map(|x| !(4..8).contains(&x)).collect();
    let board = Board::from_rows(&rows).unwrap();
    let mut engine = GameEngine::from_board(
        GameConfig::default(),
        board,
        MemoryScoreStore::new(),
        fixed(PieceKind::I),
    )
    .unwrap();
    engine.start();

    let (_, outcome) = drop_to_floor(&mut engine);

    assert_eq!(outcome, MoveOutcome::Locked { rows_cleared: 1 });
    assert_eq!(engine.score(), 100);
    assert_eq!(engine.board().occupied_count(), 0);
    assert!(engine.board().row(0).unwrap().iter().all(|&c| !c));
    let event = engine.take_last_event().unwrap();
    assert_eq!(event.points, 100);
    assert!(!event.game_over);
}

#[test]
fn test_full_game_is_recorded_in_score_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    // 5x3 board with one cell of the bottom row filled: the first I clears a
    // row, the next three stack up and the fifth cannot spawn.
    let config = GameConfig {
        width: 5,
        height: 3,
        ..GameConfig::default()
    };
    let mut rows = vec![vec![false; 5]; 3];
    rows[2][0] = true;
    let board = Board::from_rows(&rows).unwrap();
    let store = JsonScoreFile::open(&path).unwrap();
    let mut engine = GameEngine::from_board(config, board, store, fixed(PieceKind::I)).unwrap();
    engine.start();

    let mut ticks = 0;
    while engine.phase() == Phase::Running {
        engine.tick();
        ticks += 1;
        assert!(ticks < 100, "game never ended");
    }

    assert_eq!(engine.phase(), Phase::Over);
    assert_eq!(engine.score(), 100);
    assert!(engine.active().is_none());

    // Further input after the game ends does not record again.
    engine.tick();
    engine.apply_action(GameAction::SoftDrop);
    engine.pause();

    assert_eq!(JsonScoreFile::open(&path).unwrap().scores(), &[100]);
    assert_eq!(engine.top_scores(), vec![100]);
}

#[test]
fn test_scores_accumulate_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    let mut rows = vec![vec![false; 10]; 20];
    rows[0][4] = true;

    for _ in 0..3 {
        let store = JsonScoreFile::open(&path).unwrap();
        let board = Board::from_rows(&rows).unwrap();
        let mut engine =
            GameEngine::from_board(GameConfig::default(), board, store, fixed(PieceKind::O))
                .unwrap();
        engine.start();
        assert_eq!(engine.phase(), Phase::Over);
    }

    let store = JsonScoreFile::open(&path).unwrap();
    assert_eq!(store.scores(), &[0, 0, 0]);
    assert_eq!(store.top_n(10).unwrap().len(), 3);
}

#[test]
fn test_config_file_shapes_the_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[board]\nwidth = 6\nheight = 8\n\n[timing]\ninitial_interval_ms = 500\n",
    )
    .unwrap();

    let settings = load_config(&path).unwrap();
    let engine = GameEngine::with_seed(
        settings.game_config().unwrap(),
        MemoryScoreStore::new(),
        7,
    )
    .unwrap();

    assert_eq!((engine.board().width(), engine.board().height()), (6, 8));
    assert_eq!(engine.tick_interval_ms(), 500);
}

#[test]
fn test_view_renders_live_engine() {
    let mut engine = GameEngine::in_memory(FixedPieces::repeat(PieceKind::T));
    engine.start();
    let fb = GameView::default().render(
        &engine.snapshot(),
        &PanelInfo::default(),
        Viewport::new(60, 24),
    );
    assert!(fb.contains_text("PLAYING"));
    assert!(fb.contains_text("1000ms"));
}

#[tokio::test(start_paused = true)]
async fn test_session_plays_until_lock() {
    let engine = GameEngine::in_memory(FixedPieces::repeat(PieceKind::O));
    let mut session = Session::new(engine, TickDriver::new(tokio::runtime::Handle::current()));
    session.apply_action(GameAction::Start);

    let start = tokio::time::Instant::now();
    let mut outcome = MoveOutcome::Moved;
    while outcome == MoveOutcome::Moved {
        outcome = session.next_tick().await;
    }

    // 18 moves then the blocked 19th tick, one second apart.
    assert_eq!(outcome, MoveOutcome::Locked { rows_cleared: 0 });
    assert_eq!(start.elapsed(), Duration::from_secs(19));
    assert_eq!(session.engine().board().occupied_count(), 4);
    assert!(session.driver().is_running());
}
