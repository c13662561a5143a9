//! Read-only inputs shared by every customer step in a tick.

use gs_spatial::{CollisionProbe, StoreLayout};

/// The static world plus the tick's time step.
///
/// Built once per tick by the orchestrator and passed by reference to
/// [`ShopperController::step`][crate::ShopperController::step] for every
/// customer.
pub struct StepEnv<'a, P: CollisionProbe + ?Sized> {
    /// Seconds of simulated time covered by this tick.
    pub delta:  f32,
    pub layout: &'a StoreLayout,
    pub probe:  &'a P,
}

impl<'a, P: CollisionProbe + ?Sized> StepEnv<'a, P> {
    #[inline]
    pub fn new(delta: f32, layout: &'a StoreLayout, probe: &'a P) -> Self {
        Self { delta, layout, probe }
    }
}
