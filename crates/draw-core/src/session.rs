//! Owning coordinator for one page session.
//!
//! Holds the pool, sequencer, sampler and interaction state, and exposes the
//! two entry points the front-end drives: [`DrawSession::activate`] from the
//! trigger and [`DrawSession::tick`] from the frame loop. Built only after
//! the assets have loaded.

use crate::config::DrawConfig;
use crate::interaction::{ButtonFace, InteractionEvent, InteractionMachine, InteractionState};
use crate::pool::{BallId, BallPool, BallVisual};
use crate::sampler::{DrawResult, DrawSampler};
use crate::sequencer::AnimationSequencer;
use smallvec::SmallVec;
use std::time::Duration;

/// Audio cues the session asks the front-end to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Draw,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawReport {
    pub result: DrawResult,
    pub cue: Cue,
    pub cooldown: Duration,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Slots whose ball reached the tube this frame.
    pub landed: SmallVec<[usize; 8]>,
    /// The trigger became available again this frame.
    pub re_enabled: bool,
}

pub struct DrawSession<S: DrawSampler> {
    config: DrawConfig,
    sampler: S,
    pool: BallPool,
    sequencer: AnimationSequencer,
    machine: InteractionMachine,
    displayed: SmallVec<[BallId; 8]>,
    last_result: Option<DrawResult>,
}

impl<S: DrawSampler> DrawSession<S> {
    /// `config` must already be validated.
    pub fn new(config: DrawConfig, sampler: S) -> Self {
        Self {
            config,
            sampler,
            pool: BallPool::new(),
            sequencer: AnimationSequencer::new(),
            machine: InteractionMachine::new(),
            displayed: SmallVec::new(),
            last_result: None,
        }
    }

    /// Handle a trigger press. `None` when the trigger is locked.
    pub fn activate(&mut self) -> Option<DrawReport> {
        if !self.machine.apply(InteractionEvent::Activate) {
            return None;
        }

        self.clear();
        let result = self
            .sampler
            .sample(self.config.visible_count, self.config.range_size);
        for (slot, number) in result.iter().enumerate() {
            let id = self.pool.acquire(number, slot, &self.config);
            self.displayed.push(id);
        }
        self.sequencer
            .animate(&self.displayed, &mut self.pool, &self.config.motion());

        let cooldown = self.config.cooldown();
        self.machine.apply(InteractionEvent::Armed(cooldown));
        log::info!(
            "[draw] result={:?} cooldown={}ms pool={}",
            result.as_slice(),
            cooldown.as_millis(),
            self.pool.len()
        );
        self.last_result = Some(result.clone());
        Some(DrawReport {
            result,
            cue: Cue::Draw,
            cooldown,
        })
    }

    /// Advance animations and the cooldown timer.
    pub fn tick(&mut self, dt: Duration) -> TickReport {
        let landed = self.sequencer.tick(dt, &mut self.pool);
        let was_locked = !self.machine.state().accepts_input();
        self.machine.apply(InteractionEvent::Elapsed(dt));
        TickReport {
            landed,
            re_enabled: was_locked && self.machine.state().accepts_input(),
        }
    }

    /// Drop the displayed set back into the pool. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.pool.release_all();
        self.displayed.clear();
    }

    /// Displayed balls, left to right.
    pub fn displayed(&self) -> impl Iterator<Item = &BallVisual> + '_ {
        self.displayed.iter().filter_map(|&id| self.pool.get(id))
    }

    pub fn displayed_count(&self) -> usize {
        self.displayed.len()
    }

    pub fn state(&self) -> InteractionState {
        self.machine.state()
    }

    pub fn button_face(&self) -> ButtonFace {
        self.machine.state().button_face()
    }

    pub fn last_result(&self) -> Option<&DrawResult> {
        self.last_result.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        !self.sequencer.is_settled()
    }

    pub fn pool(&self) -> &BallPool {
        &self.pool
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }
}
