//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use gs_agent::{AgentStoreBuilder, BasketPool};
use gs_behavior::{BehaviorTuning, CheckoutLaneRegistry, ShopperController, WorkerAnimator};
use gs_core::{SimConfig, SimRng};
use gs_inventory::Catalog;
use gs_spatial::{CollisionProbe, StoreLayout};

use crate::summary::RunTotals;
use crate::{Sim, SimResult};

/// Offset of the worker-placement stream derived from the master seed.
const WORKER_STREAM: u64 = 1;

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: seed, tick length, population sizes, …
/// - [`StoreLayout`]: the static map
/// - `P: CollisionProbe`: usually an [`ObstacleIndex`][gs_spatial::ObstacleIndex]
///   built from the layout's obstacles
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                         |
/// |-------------------|---------------------------------|
/// | `.tuning(t)`      | `BehaviorTuning::default()`     |
/// | `.catalog(c)`     | `Catalog::grocery()`            |
/// | `.workers(a)`     | `WorkerAnimator::default()`     |
///
/// # Example
///
/// ```rust,ignore
/// let layout = StoreLayout::grocery();
/// let probe = ObstacleIndex::new(&layout.obstacles);
/// let mut sim = SimBuilder::new(config, layout, probe)
///     .tuning(tuning)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: CollisionProbe> {
    config:   SimConfig,
    layout:   StoreLayout,
    probe:    P,
    tuning:   Option<BehaviorTuning>,
    catalog:  Option<Catalog>,
    animator: Option<WorkerAnimator>,
}

impl<P: CollisionProbe> SimBuilder<P> {
    pub fn new(config: SimConfig, layout: StoreLayout, probe: P) -> Self {
        Self {
            config,
            layout,
            probe,
            tuning:   None,
            catalog:  None,
            animator: None,
        }
    }

    pub fn tuning(mut self, tuning: BehaviorTuning) -> Self {
        self.tuning = Some(tuning);
        self
    }

    /// Item catalog shopping lists are drawn from.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn workers(mut self, animator: WorkerAnimator) -> Self {
        self.animator = Some(animator);
        self
    }

    /// Validate every input, spawn the population, and plan each customer's
    /// first journey.
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;
        self.layout.validate()?;

        let tuning = self.tuning.unwrap_or_default();
        let catalog = self.catalog.unwrap_or_else(Catalog::grocery);
        let controller = ShopperController::new(tuning, catalog)?;
        let animator = self.animator.unwrap_or_default();

        let (mut agents, mut rngs) =
            AgentStoreBuilder::new(self.config.customer_count, self.config.seed)
                .workers(self.config.worker_count)
                .build();

        for c in &mut agents.customers {
            let plan = controller.planner().plan(&self.layout, rngs.get_mut(c.id));
            c.begin_journey(plan);
        }

        let mut worker_rng = SimRng::new(self.config.seed).child(WORKER_STREAM);
        animator.place(&mut agents.workers, &self.layout, &mut worker_rng);

        let lanes = CheckoutLaneRegistry::new(self.layout.lane_count());
        let baskets = BasketPool::new(self.layout.basket_positions.len());

        info!(
            customers = agents.customer_count(),
            workers = agents.worker_count(),
            lanes = lanes.lane_count(),
            baskets = baskets.capacity(),
            obstacles = self.probe.obstacle_count(),
            seed = self.config.seed,
            "simulation built"
        );

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            layout: self.layout,
            probe: self.probe,
            agents,
            rngs,
            controller,
            animator,
            lanes,
            baskets,
            totals: RunTotals::default(),
            events: Vec::new(),
        })
    }
}
