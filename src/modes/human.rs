use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use log::info;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{Action, GameConfig, GameEngine, GameState};
use crate::input::{DirectionLatch, InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Renderer, TerminalSession, TuiTerminal};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The snake ran into itself
    Over { score: u32 },
    /// The player quit before that happened
    Quit,
}

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    latch: DirectionLatch,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let mut engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        }
        .context("Invalid game configuration")?;
        let state = engine.reset();

        Ok(Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            latch: DirectionLatch::new(),
            should_quit: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub async fn run(&mut self) -> Result<GameOutcome> {
        let mut session = TerminalSession::enter()?;

        let result = self.run_game_loop(session.terminal()).await;

        session.leave()?;

        result
    }

    async fn run_game_loop(&mut self, terminal: &mut TuiTerminal) -> Result<GameOutcome> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick fires immediately; the snake should wait one period.
        tick_timer.tick().await;

        self.draw(terminal)?;

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = tick_timer.tick() => {
                    let outcome = self.tick();
                    self.draw(terminal)?;
                    if let Some(outcome) = outcome {
                        return Ok(outcome);
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("player quit at score {}", self.state.score);
                return Ok(GameOutcome::Quit);
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => self.latch.latch(direction),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    /// Advance the game by one step. Returns the outcome once the game ends.
    fn tick(&mut self) -> Option<GameOutcome> {
        let action = Action::from(self.latch.take());
        let result = self.engine.step(&mut self.state, action);

        if result.game_over {
            self.metrics.on_game_over();
            Some(GameOutcome::Over {
                score: result.score,
            })
        } else {
            None
        }
    }

    fn draw(&mut self, terminal: &mut TuiTerminal) -> Result<()> {
        self.metrics.update();
        terminal
            .draw(|frame| {
                self.renderer.render(frame, &self.state, &self.metrics);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }
}
