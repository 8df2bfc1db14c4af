use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

/// A primary pointer press at a point in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerActivation {
    pub pos: egui::Pos2,
}

impl PointerActivation {
    #[cfg(test)]
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos: egui::pos2(x, y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// Process-wide stream of pointer activations.
///
/// Listeners only receive activations dispatched while they are
/// subscribed; anything still queued is discarded on unsubscribe.
pub trait ActivationSource {
    fn subscribe(&self) -> ListenerId;
    fn unsubscribe(&self, id: ListenerId);
    /// Takes the activations delivered to `id` since the last call.
    fn take(&self, id: ListenerId) -> Vec<PointerActivation>;
}

/// Subscription bookkeeping, exposed so callers can audit for leaks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BusStats {
    pub subscribes: usize,
    pub unsubscribes: usize,
    pub live: usize,
}

#[derive(Default)]
struct BusState {
    next_id: u64,
    listeners: BTreeMap<ListenerId, Vec<PointerActivation>>,
    stats: BusStats,
}

/// Single-threaded in-process activation stream. Clones share the same
/// listeners. The host feeds it native pointer presses each frame.
#[derive(Clone, Default)]
pub struct ActivationBus {
    inner: Rc<RefCell<BusState>>,
}

impl ActivationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `activation` to every live listener.
    pub fn dispatch(&self, activation: PointerActivation) {
        let mut state = self.inner.borrow_mut();
        for queue in state.listeners.values_mut() {
            queue.push(activation);
        }
    }

    /// Forwards this frame's primary-button presses from egui.
    pub fn feed_from_egui(&self, ctx: &egui::Context) {
        let presses: Vec<egui::Pos2> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::PointerButton {
                        pos,
                        button: egui::PointerButton::Primary,
                        pressed: true,
                        ..
                    } => Some(*pos),
                    _ => None,
                })
                .collect()
        });
        for pos in presses {
            self.dispatch(PointerActivation { pos });
        }
    }

    pub fn stats(&self) -> BusStats {
        self.inner.borrow().stats
    }
}

impl ActivationSource for ActivationBus {
    fn subscribe(&self) -> ListenerId {
        let mut state = self.inner.borrow_mut();
        let id = ListenerId(state.next_id);
        state.next_id += 1;
        state.listeners.insert(id, Vec::new());
        state.stats.subscribes += 1;
        state.stats.live = state.listeners.len();
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        let mut state = self.inner.borrow_mut();
        if state.listeners.remove(&id).is_some() {
            state.stats.unsubscribes += 1;
            state.stats.live = state.listeners.len();
        }
    }

    fn take(&self, id: ListenerId) -> Vec<PointerActivation> {
        self.inner
            .borrow_mut()
            .listeners
            .get_mut(&id)
            .map(std::mem::take)
            .unwrap_or_default()
    }
}
