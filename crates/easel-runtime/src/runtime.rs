//! Composition root: owns the surface, the scheduler and the game.
//!
//! Hosts forward animation-frame callbacks to [`Runtime::frame`] and input
//! events to the `key_*`/`mouse_*` methods. Everything runs on one thread;
//! input dispatch interleaves with frames but never overlaps them.

use crate::config::GameConfig;
use crate::drawable::Drawable;
use crate::input::{KeyEvent, MouseEvent};
use crate::scheduler::FrameScheduler;
use easel_core::{Backend, RenderSurface};

pub struct Runtime<B: Backend, D: Drawable<B>> {
    surface: RenderSurface<B>,
    scheduler: FrameScheduler,
    game: D,
    config: GameConfig,
}

impl<B: Backend, D: Drawable<B>> Runtime<B, D> {
    /// Bind `game` to `backend`, apply the configured scale and start the
    /// schedule at `now_ms`.
    pub fn new(backend: B, game: D, config: GameConfig, now_ms: f64) -> Result<Self, String> {
        config.validate()?;

        let mut surface = RenderSurface::new(backend);
        surface.set_scale(config.scale);

        let mut scheduler = FrameScheduler::new(config.fps);
        scheduler.start(now_ms);

        log::debug!(
            "runtime started: {}x{} @ {} fps, scale {}",
            config.width,
            config.height,
            config.fps,
            config.scale
        );

        Ok(Self {
            surface,
            scheduler,
            game,
            config,
        })
    }

    /// Handle one animation-frame opportunity. Returns whether a tick ran.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let mut stage = Stage {
            game: &mut self.game,
            config: &self.config,
        };
        self.scheduler.run_frame(now_ms, &mut stage, &mut self.surface)
    }

    pub fn key_down(&mut self, event: &KeyEvent) {
        self.game.key_pressed(event);
    }

    pub fn key_up(&mut self, event: &KeyEvent) {
        self.game.key_released(event);
    }

    pub fn mouse_down(&mut self, event: &MouseEvent) {
        let (x, y) = event.scaled_position(self.config.scale);
        self.game.mouse_clicked(event, x, y);
    }

    pub fn mouse_move(&mut self, event: &MouseEvent) {
        let (x, y) = event.scaled_position(self.config.scale);
        self.game.mouse_moved(event, x, y);
    }

    pub fn game(&self) -> &D {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut D {
        &mut self.game
    }

    pub fn surface(&self) -> &RenderSurface<B> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut RenderSurface<B> {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Clears the canvas with the background color, then hands over to the game.
struct Stage<'a, D> {
    game: &'a mut D,
    config: &'a GameConfig,
}

impl<B: Backend, D: Drawable<B>> Drawable<B> for Stage<'_, D> {
    fn draw(&mut self, g: &mut RenderSurface<B>) {
        g.set_color(&self.config.background);
        g.fill_rect(
            0.0,
            0.0,
            self.config.width as f64,
            self.config.height as f64,
        );
        self.game.draw(g);
    }

    fn update(&mut self) {
        self.game.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::record::{Command, RecordingBackend};

    #[derive(Default)]
    struct Counter {
        draws: u32,
        updates: u32,
    }

    impl Drawable<RecordingBackend> for Counter {
        fn draw(&mut self, g: &mut RenderSurface<RecordingBackend>) {
            assert_eq!(self.draws, self.updates, "draw must precede update");
            self.draws += 1;
            g.fill_circle(1.0, 1.0, 1.0);
        }

        fn update(&mut self) {
            self.updates += 1;
        }
    }

    fn runtime() -> Runtime<RecordingBackend, Counter> {
        Runtime::new(
            RecordingBackend::new(),
            Counter::default(),
            GameConfig::default(),
            0.0,
        )
        .unwrap()
    }

    #[test]
    fn new_applies_scale_once() {
        let rt = runtime();
        let scales: Vec<_> = rt
            .surface()
            .backend()
            .commands()
            .iter()
            .filter(|c| matches!(c, Command::Scale { .. }))
            .collect();
        assert_eq!(scales, vec![&Command::Scale { sx: 2.0, sy: 2.0 }]);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = GameConfig {
            fps: 0.0,
            ..GameConfig::default()
        };
        assert!(Runtime::new(RecordingBackend::new(), Counter::default(), config, 0.0).is_err());
    }

    #[test]
    fn frame_clears_before_game_draws() {
        let mut rt = runtime();
        rt.surface_mut().backend_mut().clear();
        assert!(rt.frame(50.0));

        let cmds = rt.surface().backend().commands();
        assert_eq!(cmds[0], Command::SetFillStyle("black".into()));
        assert_eq!(
            cmds[2],
            Command::FillRect {
                x: 0.0,
                y: 0.0,
                w: 1365.0,
                h: 805.0,
            }
        );
        assert_eq!(cmds.last(), Some(&Command::Fill));
        assert_eq!((rt.game().draws, rt.game().updates), (1, 1));
    }

    #[test]
    fn early_frame_does_nothing() {
        let mut rt = runtime();
        rt.surface_mut().backend_mut().clear();
        assert!(!rt.frame(10.0));
        assert!(rt.surface().backend().commands().is_empty());
        assert_eq!(rt.game().draws, 0);
    }
}
