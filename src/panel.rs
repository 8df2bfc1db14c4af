use crate::{
    activation::ActivationSource,
    region::{RegionId, RegionResolver},
    watcher::OutsideActivationWatcher,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVisibility {
    Closed,
    Open,
}

/// Open/closed state of the slide-out panel. The outside-activation
/// watcher is armed exactly while the panel is open.
pub struct PanelController<S: ActivationSource> {
    visibility: PanelVisibility,
    watcher: OutsideActivationWatcher<S>,
}

impl<S: ActivationSource> PanelController<S> {
    pub fn new(source: S, region: RegionId) -> Self {
        Self {
            visibility: PanelVisibility::Closed,
            watcher: OutsideActivationWatcher::new(source, region),
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility == PanelVisibility::Open
    }

    pub fn region(&self) -> RegionId {
        self.watcher.region()
    }

    pub fn open(&mut self) {
        self.set_visibility(PanelVisibility::Open);
    }

    pub fn close(&mut self) {
        self.set_visibility(PanelVisibility::Closed);
    }

    pub fn toggle(&mut self) {
        match self.visibility {
            PanelVisibility::Closed => self.open(),
            PanelVisibility::Open => self.close(),
        }
    }

    /// Applies pending outside activations. Returns how many were handled.
    pub fn pump(&mut self, regions: &impl RegionResolver) -> usize {
        let outside = self.watcher.poll(regions);
        for _ in &outside {
            self.close();
        }
        outside.len()
    }

    fn set_visibility(&mut self, next: PanelVisibility) {
        if self.visibility == next {
            return;
        }
        self.visibility = next;
        match next {
            PanelVisibility::Open => self.watcher.arm(),
            PanelVisibility::Closed => self.watcher.disarm(),
        }
        debug_assert_eq!(self.watcher.is_armed(), self.is_open());
        tracing::debug!(visibility = ?next, "panel visibility changed");
    }
}
