use std::collections::HashMap;

/// Stable handle for a laid-out region, created once by its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(egui::Id);

impl RegionId {
    pub fn new(salt: impl std::hash::Hash) -> Self {
        Self(egui::Id::new(salt))
    }

    pub fn id(self) -> egui::Id {
        self.0
    }
}

/// Maps a region handle to its current bounds, if it has been laid out.
pub trait RegionResolver {
    fn resolve(&self, region: RegionId) -> Option<egui::Rect>;
}

/// Bounds recorded during the most recent layout pass.
#[derive(Debug, Default)]
pub struct RegionMap {
    rects: HashMap<RegionId, egui::Rect>,
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, region: RegionId, rect: egui::Rect) {
        self.rects.insert(region, rect);
    }

    #[cfg(test)]
    pub fn detach(&mut self, region: RegionId) {
        self.rects.remove(&region);
    }
}

impl RegionResolver for RegionMap {
    fn resolve(&self, region: RegionId) -> Option<egui::Rect> {
        self.rects.get(&region).copied()
    }
}
