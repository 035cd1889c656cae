//! Simulation driver
//!
//! Owns the main loop: pop the earliest event, advance the clock, dispatch
//! joins to the matchmaking engine and finished games to the outcome
//! resolver, until the event queue drains or the horizon is reached.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, trace};

use crate::config::{RunOptions, SimulationParameters};
use crate::error::Result;
use crate::matchmaking::{MatchmakingEngine, MatchmakingStrategy};
use crate::outcome::OutcomeResolver;
use crate::rating::RatingCalculator;
use crate::registry::PlayerCensus;
use crate::report::SimulationReport;
use crate::rng::SimulationRng;
use crate::simulation::context::SimulationContext;
use crate::strategy::StrategyRegistry;
use crate::types::{EventKind, PlayerId, QueueType, SimTime};

/// Fraction of the horizon over which initial joins are spread
pub const INITIAL_JOIN_WINDOW: f64 = 0.1;

/// Driver state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Running,
    /// No events remain
    Drained,
    /// The next event lies at or beyond the horizon
    TimeExceeded,
    Done,
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::Running => write!(f, "running"),
            RunState::Drained => write!(f, "drained"),
            RunState::TimeExceeded => write!(f, "time_exceeded"),
            RunState::Done => write!(f, "done"),
        }
    }
}

/// Player and queue occupancy at a point in the run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Census {
    pub players: PlayerCensus,
    pub queue_lengths: BTreeMap<QueueType, usize>,
}

impl Census {
    pub fn total_queued(&self) -> usize {
        self.queue_lengths.values().sum()
    }
}

pub struct Simulation {
    ctx: SimulationContext,
    engine: MatchmakingEngine,
    resolver: OutcomeResolver,
    options: RunOptions,
    state: RunState,
    /// Why the run ended (`Drained` or `TimeExceeded`) once it is `Done`
    termination: Option<RunState>,
    events_processed: u64,
    matches_formed: u64,
    games_resolved: u64,
}

impl Simulation {
    /// Build a run, resolving strategies by name from `strategies`
    pub fn new(
        params: SimulationParameters,
        options: RunOptions,
        strategies: &StrategyRegistry,
    ) -> Result<Self> {
        let calculator = strategies.rating(&options.elo_strategy)?;
        let matcher = strategies.matchmaking(&options.mm_strategy)?;
        Self::with_strategies(params, options, calculator, matcher)
    }

    /// Build a run with explicit strategy instances
    pub fn with_strategies(
        params: SimulationParameters,
        options: RunOptions,
        calculator: Box<dyn RatingCalculator>,
        matcher: Box<dyn MatchmakingStrategy>,
    ) -> Result<Self> {
        params.validate()?;
        options.validate()?;

        let mut rng = SimulationRng::from_optional_seed(options.seed);
        let ratings = (0..options.num_players)
            .map(|_| calculator.initial_rating(&mut rng))
            .collect::<Result<Vec<_>>>()?;

        let mut ctx = SimulationContext::with_rng(params, ratings, rng);

        let join_window = options.sim_time * INITIAL_JOIN_WINDOW;
        for player_id in 0..options.num_players {
            let at = ctx.rng.uniform(0.0, join_window);
            let queue_type = ctx.rng.choose_queue_type();
            ctx.scheduler.schedule(
                at,
                EventKind::JoinQueue {
                    player_id,
                    queue_type,
                },
            )?;
        }

        info!(
            "Simulation prepared: {} players, horizon {}s, seed {}, strategies {}/{}",
            options.num_players,
            options.sim_time,
            ctx.rng.seed(),
            calculator.name(),
            matcher.name()
        );

        Ok(Self {
            ctx,
            engine: MatchmakingEngine::new(matcher),
            resolver: OutcomeResolver::new(calculator),
            options,
            state: RunState::Running,
            termination: None,
            events_processed: 0,
            matches_formed: 0,
            games_resolved: 0,
        })
    }

    /// Process a single event.
    ///
    /// Returns `Running` after an event was dispatched, `Drained` or
    /// `TimeExceeded` on the step that ends the run, and `Done` afterwards.
    pub fn step(&mut self) -> Result<RunState> {
        if self.state == RunState::Done {
            return Ok(RunState::Done);
        }

        let event = match self.ctx.scheduler.pop_earliest() {
            Some(event) => event,
            None => return Ok(self.finish(RunState::Drained)),
        };

        // The run covers [0, sim_time); the event is discarded
        if event.time() >= self.options.sim_time {
            return Ok(self.finish(RunState::TimeExceeded));
        }

        self.ctx.clock = event.time();
        self.events_processed += 1;
        trace!("t={:.3} {}", self.ctx.clock, event.kind.label());

        match event.kind {
            EventKind::JoinQueue {
                player_id,
                queue_type,
            } => self.handle_join(player_id, queue_type)?,
            EventKind::GameFinish {
                players,
                queue_type,
            } => {
                let resolved = self.resolver.resolve(&mut self.ctx, &players, queue_type)?;
                self.games_resolved += 1;
                trace!(
                    "{} requeues scheduled after {} game",
                    resolved.requeues.len(),
                    resolved.queue_type
                );
            }
        }

        Ok(RunState::Running)
    }

    fn handle_join(&mut self, player_id: PlayerId, queue_type: QueueType) -> Result<()> {
        let now = self.ctx.clock;
        if !self.ctx.registry.try_enqueue(player_id, now)? {
            trace!("Ignoring join from busy player {}", player_id);
            return Ok(());
        }

        self.ctx.queues.get_mut(queue_type).push(player_id, now);
        let formed = self.engine.try_match(&mut self.ctx, queue_type)?;
        self.matches_formed += formed.len() as u64;
        Ok(())
    }

    fn finish(&mut self, reason: RunState) -> RunState {
        self.state = RunState::Done;
        self.termination = Some(reason);
        info!(
            "Simulation finished ({}) after {} events at t={:.2}",
            reason, self.events_processed, self.ctx.clock
        );
        reason
    }

    /// Run to completion and summarize
    pub fn run(&mut self) -> Result<SimulationReport> {
        while self.step()? == RunState::Running {}
        Ok(self.report())
    }

    /// Summarize the run in its current state
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            elo_strategy: self.options.elo_strategy.clone(),
            mm_strategy: self.options.mm_strategy.clone(),
            sim_time: self.options.sim_time,
            num_players: self.options.num_players,
            seed: self.ctx.rng.seed(),
            end_state: self.termination.unwrap_or(self.state),
            events_processed: self.events_processed,
            matches_formed: self.matches_formed,
            games_resolved: self.games_resolved,
            player_games: self.ctx.registry.total_games_played(),
            census: self.census(),
            summaries: self.ctx.stats.summarize_all(),
        }
    }

    pub fn census(&self) -> Census {
        Census {
            players: self.ctx.registry.census(),
            queue_lengths: self.ctx.queues.lengths(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn termination(&self) -> Option<RunState> {
        self.termination
    }

    pub fn clock(&self) -> SimTime {
        self.ctx.clock
    }

    pub fn events_processed(&self) -> u64 {
        self.events_processed
    }

    pub fn matches_formed(&self) -> u64 {
        self.matches_formed
    }

    pub fn games_resolved(&self) -> u64 {
        self.games_resolved
    }

    pub fn context(&self) -> &SimulationContext {
        &self.ctx
    }
}
