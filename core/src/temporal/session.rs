//! Session store
//!
//! A [`Session`] owns everything one visualization needs: the algorithm
//! selection, the dataset, the generated trace and the playback
//! controller. It is passed explicitly to whoever drives it; all mutation
//! goes through its methods, each of which maps onto a playback
//! transition. Consumers read through the accessors only.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::time::Duration;

use log::info;
use rand::Rng;

use crate::algorithm::state::Step;
use crate::algorithm::traits::{AlgorithmInfo, AlgorithmKind, TraceParams, Variant};
use crate::config::SessionConfig;
use crate::data_structures::dataset::Dataset;
use crate::execution::trace::{generate, Trace};
use crate::temporal::playback::{PlaybackController, PlaybackPhase, PlaybackState};
use crate::temporal::scheduler::{ManualScheduler, TickScheduler, TimerId};

/// Session-scoped store for dataset, trace and playback
#[derive(Debug)]
pub struct Session<S: TickScheduler> {
    config: SessionConfig,
    kind: AlgorithmKind,
    variant: Variant,
    params: TraceParams,
    dataset: Dataset,
    trace: Trace,
    playback: PlaybackController<S>,
}

impl<S: TickScheduler> Session<S> {
    /// Starts with bubble sort over an empty sequence
    pub fn new(config: SessionConfig, scheduler: S) -> Self {
        let config = config.sanitized();
        let kind = AlgorithmKind::Sorting;
        let variant = kind.default_variant();
        let params = TraceParams::default();
        Self {
            playback: PlaybackController::new(scheduler, config.default_speed),
            config,
            kind,
            variant,
            params,
            dataset: Dataset::empty_for(kind),
            trace: Trace::empty(kind, variant, params),
        }
    }

    // Read surface

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn params(&self) -> TraceParams {
        self.params
    }

    pub fn info(&self) -> AlgorithmInfo {
        self.variant.info()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn trace_len(&self) -> usize {
        self.trace.len()
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.playback.phase()
    }

    pub fn current_index(&self) -> usize {
        self.playback.state().current_index()
    }

    pub fn speed(&self) -> u8 {
        self.playback.state().speed()
    }

    pub fn running(&self) -> bool {
        self.playback.state().running()
    }

    /// Step at the playback position; `None` for an empty trace
    pub fn current_step(&self) -> Option<&Step> {
        self.trace.get(self.current_index())
    }

    pub fn scheduler(&self) -> &S {
        self.playback.scheduler()
    }

    // Selection and dataset changes

    /// Switches algorithm family, selecting its default variant.
    ///
    /// A dataset of the wrong shape is replaced by an empty one.
    pub fn set_kind(&mut self, kind: AlgorithmKind) {
        self.kind = kind;
        self.variant = kind.default_variant();
        if !self.dataset.fits(kind) {
            self.dataset = Dataset::empty_for(kind);
        }
        self.regenerate();
    }

    /// Selects an explicit family and variant. A variant outside `kind`
    /// is kept as requested and simply produces an empty trace.
    pub fn select(&mut self, kind: AlgorithmKind, variant: Variant) {
        self.kind = kind;
        self.variant = variant;
        self.regenerate();
    }

    pub fn set_params(&mut self, params: TraceParams) {
        self.params = params;
        self.regenerate();
    }

    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.regenerate();
    }

    /// Parses dataset text for the current family and installs it.
    /// Edge pairs are directed when the configuration says so.
    pub fn load_input(&mut self, input: &str) {
        let dataset = match self.kind {
            AlgorithmKind::Graph => Dataset::parse_edges(input, self.config.directed),
            kind => Dataset::parse(kind, input),
        };
        self.set_dataset(dataset);
    }

    /// Installs a random dataset shaped for the current family
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let dataset = match self.kind {
            AlgorithmKind::Sorting | AlgorithmKind::Searching => Dataset::random_sequence(
                rng,
                self.config.random_length,
                self.config.random_max,
            ),
            AlgorithmKind::Graph => Dataset::random_graph(
                rng,
                self.config.random_graph_nodes,
                self.config.random_graph_extra_edges,
            ),
        };
        self.set_dataset(dataset);
    }

    fn regenerate(&mut self) {
        self.trace = generate(self.kind, self.variant, &self.dataset, &self.params);
        self.playback.replace_trace(self.trace.len());
        info!(
            "{} {} over {} elements: {} steps",
            self.kind,
            self.variant,
            self.dataset.len(),
            self.trace.len()
        );
    }

    // Playback commands

    pub fn play(&mut self) {
        self.playback.play();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn step_forward(&mut self) {
        self.playback.step_forward();
    }

    pub fn step_back(&mut self) {
        self.playback.step_back();
    }

    pub fn reset(&mut self) {
        self.playback.reset();
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.playback.set_speed(speed);
    }

    /// Delivers a fired timer to the playback controller
    pub fn on_tick(&mut self, id: TimerId) -> bool {
        self.playback.on_tick(id)
    }
}

impl Session<ManualScheduler> {
    /// Moves virtual time forward, delivering due ticks to playback.
    /// Returns the number of steps advanced.
    pub fn advance(&mut self, by: Duration) -> usize {
        self.playback.advance(by)
    }

    /// Delivers the next armed tick, if any
    pub fn advance_to_next(&mut self) -> usize {
        self.playback.advance_to_next()
    }
}
