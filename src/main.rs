//! Headless demo runner
//!
//! Plays one single-player match: a scripted left player against the
//! built-in AI, at a nominal 60 Hz, logging goals and persisting the high
//! score the way a real host would. Pass `RUST_LOG=debug` to also see the
//! sound events.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ping_pong::audio::{AudioSink, SoundEffect, route_events};
    use ping_pong::consts::*;
    use ping_pong::highscores::HighScore;
    use ping_pong::persistence::FileStore;
    use ping_pong::sim::{
        ControlDir, GameEvent, GamePhase, GameState, InputSampler, Mode, Side, tick,
    };

    env_logger::init();

    struct LogAudio;
    impl AudioSink for LogAudio {
        fn play(&mut self, effect: SoundEffect) {
            log::debug!("audio: {effect:?}");
        }
    }

    let store = FileStore::new("ping-pong-highscore.json");
    let mut high = HighScore::load(&store);

    let mut state = GameState::new(rand::random());
    state.high_score = high.best;
    state.start_match(Mode::Single);

    let mut sampler = InputSampler::new();
    let mut audio = LogAudio;

    let mut frames = 0u64;
    while state.phase == GamePhase::Playing && frames < 200_000 {
        // Scripted left player: chase the ball center like a human mashing
        // the keys, close enough to lose some rounds
        let paddle_center = state.paddle(Side::Left).y + state.paddle_height(Side::Left) / 2.0;
        let ball_center = state.ball.center().y;
        sampler.set_held(Side::Left, ControlDir::Up, ball_center < paddle_center - 4.0);
        sampler.set_held(Side::Left, ControlDir::Down, ball_center > paddle_center + 4.0);

        let events = tick(&mut state, &sampler.sample(), FRAME_DT_MS);
        route_events(&events, &mut audio);
        for event in &events {
            match event {
                GameEvent::Goal { scorer } => log::info!(
                    "goal for {scorer:?}: {} - {}",
                    state.score.left,
                    state.score.right
                ),
                GameEvent::NewHighScore(score) => {
                    high.record(*score, &store);
                }
                GameEvent::MatchOver { winner } => log::info!("{winner:?} wins the match"),
                _ => {}
            }
        }
        frames += 1;
    }

    log::info!(
        "final score {} - {} after {frames} frames (best ever: {})",
        state.score.left,
        state.score.right,
        high.best
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {}
