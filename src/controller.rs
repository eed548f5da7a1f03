use crate::{transition, Action, EngineError, GridState, SessionConfig};
use log::{debug, trace};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Interval, MissedTickBehavior};

/// Owns the periodic stepping schedule as a scoped resource.
///
/// The interval exists exactly while the grid is playing; pausing or dropping
/// the controller releases it, after which no tick can fire.
pub struct StepController {
    period: Duration,
    ticker: Option<Interval>,
}

impl StepController {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            ticker: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.ticker.is_some()
    }

    /// Aligns the schedule with the `playing` flag.
    pub fn sync(&mut self, playing: bool) {
        match (playing, self.ticker.is_some()) {
            (true, false) => {
                // First tick lands one full period after play, not immediately.
                let start = time::Instant::now() + self.period;
                let mut ticker = time::interval_at(start, self.period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                self.ticker = Some(ticker);
                debug!("stepping schedule acquired, period {:?}", self.period);
            }
            (false, true) => {
                self.ticker = None;
                debug!("stepping schedule released");
            }
            _ => {}
        }
    }

    /// Completes at the next tick; pends forever while paused.
    pub async fn tick(&mut self) {
        match &mut self.ticker {
            Some(ticker) => {
                ticker.tick().await;
                trace!("tick");
            }
            None => std::future::pending().await,
        }
    }
}

/// Cheap cloneable handle used by the UI layer to queue actions.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<Action>,
}

impl SessionHandle {
    /// Queues one action for the session loop.
    pub fn dispatch(&self, action: Action) -> Result<(), EngineError> {
        self.commands
            .send(action)
            .map_err(|_| EngineError::SessionClosed)
    }
}

enum Event {
    Command(Option<Action>),
    Tick,
}

/// A running engine session: current state, command queue, and the stepping
/// schedule, driven on a single control thread.
pub struct Session {
    state: GridState,
    controller: StepController,
    toggle_first_cell_on_tick: bool,
    commands: mpsc::UnboundedReceiver<Action>,
    published: watch::Sender<GridState>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<(Self, SessionHandle), EngineError> {
        let state = GridState::initial(config.columns * config.rows, config.columns)?;
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (published, _) = watch::channel(state.clone());
        let session = Self {
            state,
            controller: StepController::new(config.tick_interval),
            toggle_first_cell_on_tick: config.toggle_first_cell_on_tick,
            commands: commands_rx,
            published,
        };
        let handle = SessionHandle {
            commands: commands_tx,
        };
        Ok((session, handle))
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Observes every state the session produces. This is the renderer side
    /// of the engine contract: one value per applied action, latest wins.
    pub fn subscribe(&self) -> watch::Receiver<GridState> {
        self.published.subscribe()
    }

    /// Applies one action and re-aligns the stepping schedule with the
    /// resulting `playing` flag.
    pub fn apply(&mut self, action: Action) -> Result<(), EngineError> {
        self.state = transition(&self.state, &action)?;
        self.controller.sync(self.state.playing());
        self.published.send_replace(self.state.clone());
        Ok(())
    }

    fn apply_tick(&mut self) -> Result<(), EngineError> {
        self.apply(Action::Next)?;
        if self.toggle_first_cell_on_tick {
            self.apply(Action::ToggleCell(0))?;
        }
        Ok(())
    }

    /// Runs until every [`SessionHandle`] is dropped, then returns the final
    /// state.
    ///
    /// Actions are applied wholly, in issue order. Commands win the race
    /// against an elapsed tick, so a pause delivered while a tick is in
    /// flight releases the schedule before that tick could be applied.
    pub async fn run(mut self) -> Result<GridState, EngineError> {
        loop {
            let event = {
                let Self {
                    controller,
                    commands,
                    ..
                } = &mut self;
                tokio::select! {
                    biased;
                    cmd = commands.recv() => Event::Command(cmd),
                    () = controller.tick() => Event::Tick,
                }
            };
            match event {
                Event::Command(Some(action)) => self.apply(action)?,
                Event::Command(None) => return Ok(self.state),
                Event::Tick => self.apply_tick()?,
            }
        }
    }
}
