use crate::{
    activation::{ActivationSource, ListenerId, PointerActivation},
    region::{RegionId, RegionResolver},
};

/// A pointer activation that landed outside the watched region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutsideActivation {
    pub pos: egui::Pos2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Inside,
    Outside,
    Unresolved,
}

/// Reports pointer activations outside one region while armed.
///
/// The watcher holds a subscription on its source exactly while armed.
/// `arm` and `disarm` are idempotent, and dropping the watcher disarms it.
pub struct OutsideActivationWatcher<S: ActivationSource> {
    source: S,
    region: RegionId,
    listener: Option<ListenerId>,
}

impl<S: ActivationSource> OutsideActivationWatcher<S> {
    pub fn new(source: S, region: RegionId) -> Self {
        Self {
            source,
            region,
            listener: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.listener.is_some()
    }

    pub fn region(&self) -> RegionId {
        self.region
    }

    pub fn arm(&mut self) {
        if self.listener.is_some() {
            return;
        }
        self.listener = Some(self.source.subscribe());
        tracing::trace!(target: "article_params::watcher", region = ?self.region, "armed");
    }

    pub fn disarm(&mut self) {
        if let Some(id) = self.listener.take() {
            self.source.unsubscribe(id);
            tracing::trace!(target: "article_params::watcher", region = ?self.region, "disarmed");
        }
    }

    /// Evaluates the activations delivered since the last poll and returns
    /// one entry per activation outside the region. An unresolved region
    /// counts as inside.
    pub fn poll(&mut self, regions: &impl RegionResolver) -> Vec<OutsideActivation> {
        let Some(id) = self.listener else {
            return Vec::new();
        };
        let bounds = regions.resolve(self.region);
        self.source
            .take(id)
            .into_iter()
            .filter_map(|activation| {
                let verdict = classify(bounds, activation);
                tracing::debug!(
                    target: "article_params::watcher",
                    ?verdict,
                    x = activation.pos.x,
                    y = activation.pos.y,
                    "pointer activation"
                );
                (verdict == Verdict::Outside).then_some(OutsideActivation { pos: activation.pos })
            })
            .collect()
    }
}

impl<S: ActivationSource> Drop for OutsideActivationWatcher<S> {
    fn drop(&mut self) {
        self.disarm();
    }
}

fn classify(bounds: Option<egui::Rect>, activation: PointerActivation) -> Verdict {
    match bounds {
        None => Verdict::Unresolved,
        Some(rect) if rect.contains(activation.pos) => Verdict::Inside,
        Some(_) => Verdict::Outside,
    }
}
