//! End-to-end scenarios through the host-facing session

use std::io::Write;

use lilac_runner::renderer::{HeadlessRenderer, Palette};
use lilac_runner::sim::{GameEvent, Obstacle, RunStatus, Tuning};
use lilac_runner::sinks::{GAME_OVER_HINT, HELP_TEXT, ScoreLabel, final_score_text};
use lilac_runner::{Session, Settings, SettingsError};

use glam::Vec2;

fn frames(
    session: &mut Session,
    renderer: &mut HeadlessRenderer,
    label: &mut ScoreLabel,
    n: u32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..n {
        events.extend(session.frame(renderer, label));
    }
    events
}

#[test]
fn idle_player_is_hit_by_first_obstacle() {
    let mut session = Session::new(Tuning::default(), 11);
    let mut renderer = HeadlessRenderer::default();
    let mut label = ScoreLabel::default();

    let events = frames(&mut session, &mut renderer, &mut label, 400);

    let spawned = events
        .iter()
        .filter(|e| matches!(e, GameEvent::ObstacleSpawned { .. }))
        .count();
    // Frames 70 and 140; the first one hits before frame 210
    assert_eq!(spawned, 2);
    assert!(events.contains(&GameEvent::Collision { score: 0 }));
    assert_eq!(session.world().run.status, RunStatus::Ended);
    assert_eq!(renderer.frames(), 400);
    assert!(renderer.ended_frames() > 0);
    assert_eq!(label.text, "Score: 0");
}

#[test]
fn clearing_an_obstacle_updates_label() {
    let mut session = Session::new(Tuning::default(), 2);
    let mut renderer = HeadlessRenderer::default();
    let mut label = ScoreLabel::default();
    let ground_y = session.world().tuning().ground_y;

    // Leaves the field on the next tick without touching the player
    session.world_mut().obstacles.push(Obstacle::on_ground(
        -15.0,
        Vec2::new(16.0, 20.0),
        4.0,
        ground_y,
    ));

    let events = session.frame(&mut renderer, &mut label);

    assert!(events.contains(&GameEvent::ObstacleCleared {
        score: 1,
        high_score: 1
    }));
    assert_eq!(label.text, "Score: 1 · Best: 1");
    assert!(session.world().obstacles.is_empty());
}

#[test]
fn jump_after_game_over_starts_fresh_run_with_best_kept() {
    let mut session = Session::new(Tuning::default(), 8);
    let mut renderer = HeadlessRenderer::default();
    let mut label = ScoreLabel::default();

    session.world_mut().run.score = 3;
    session.world_mut().run.high_score = 5;
    session.world_mut().run.end();
    frames(&mut session, &mut renderer, &mut label, 3);

    session.request_jump();
    let events = session.frame(&mut renderer, &mut label);

    assert!(events.contains(&GameEvent::Reset { high_score: 5 }));
    assert!(!events.contains(&GameEvent::Jumped));
    let world = session.world();
    assert!(world.run.is_running());
    assert_eq!(world.run.score, 0);
    assert_eq!(world.run.frame, 1);
    assert_eq!(world.run.high_score, 5);
    assert!(world.player.on_ground);
    assert_eq!(label.text, "Score: 0 · Best: 5");
}

#[test]
fn autopilot_session_scores() {
    let mut session = Session::new(Tuning::default(), 21);
    session.set_autopilot(true);
    let mut renderer = HeadlessRenderer::new(Palette::HIGH_CONTRAST);
    let mut label = ScoreLabel::default();

    frames(&mut session, &mut renderer, &mut label, 300);

    assert!(session.world().run.is_running());
    assert!(session.world().run.score >= 2);
}

#[test]
fn settings_file_drives_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "seed": 99, "autopilot": true, "tuning": {{ "spawn_interval": 40 }} }}"#
    )
    .unwrap();

    let settings = Settings::load_from(file.path()).unwrap();
    assert_eq!(settings.seed, Some(99));
    assert!(settings.autopilot);

    let mut session = Session::new(settings.tuning.clone(), 99);
    let mut renderer = HeadlessRenderer::default();
    let mut label = ScoreLabel::default();
    let events = frames(&mut session, &mut renderer, &mut label, 40);

    assert!(matches!(
        events.last(),
        Some(GameEvent::ObstacleSpawned { .. })
    ));
}

#[test]
fn bad_settings_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "tuning": {{ "jump_force": 3.0 }} }}"#).unwrap();

    let err = Settings::load_from(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Tuning(_)));
}

#[test]
fn game_over_screen_follows_the_run() {
    let mut session = Session::new(Tuning::default(), 11);
    let mut renderer = HeadlessRenderer::default();
    let mut label = ScoreLabel::default();

    frames(&mut session, &mut renderer, &mut label, 60);
    assert!(!renderer.overlay().is_visible());

    // Standing still, the first obstacle ends the run well before frame 400
    frames(&mut session, &mut renderer, &mut label, 340);
    assert!(renderer.overlay().is_visible());
    assert_eq!(renderer.overlay().final_score(), 0);
    assert_eq!(final_score_text(renderer.overlay().final_score()), "Final score: 0");

    session.request_jump();
    session.frame(&mut renderer, &mut label);
    assert!(!renderer.overlay().is_visible());
}

#[test]
fn game_over_texts_point_to_restart() {
    assert!(GAME_OVER_HINT.contains("Restart game"));
    assert!(GAME_OVER_HINT.contains("spacebar"));
    assert!(HELP_TEXT.contains("1 point"));
}
