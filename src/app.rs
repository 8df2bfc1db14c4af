use std::{cell::RefCell, rc::Rc};

use crate::{
    activation::ActivationBus,
    article,
    config::AppConfig,
    options::Configuration,
    params::ParamsPanel,
    region::RegionMap,
};

type CommitFn = Box<dyn FnMut(Configuration)>;

pub struct ArticleParamsApp {
    /// The configuration the article renders with. Written only by the panel.
    committed: Rc<RefCell<Configuration>>,
    panel: ParamsPanel<ActivationBus, CommitFn>,
    pointer_stream: ActivationBus,
    regions: RegionMap,
    panel_width: f32,
    config: AppConfig,
}

impl ArticleParamsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let committed = Rc::new(RefCell::new(Configuration::default()));
        let pointer_stream = ActivationBus::new();

        let sink = committed.clone();
        let on_commit: CommitFn = Box::new(move |next: Configuration| {
            debug_assert!(next.is_consistent());
            *sink.borrow_mut() = next;
        });
        let panel = ParamsPanel::new(*committed.borrow(), pointer_stream.clone(), on_commit);

        Self {
            committed,
            panel,
            pointer_stream,
            regions: RegionMap::new(),
            panel_width: config.resolve_panel_width(),
            config,
        }
    }
}

impl eframe::App for ArticleParamsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window size for saving on exit
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.config.window_width = Some(rect.width());
            self.config.window_height = Some(rect.height());
        }

        // Presses are hit-tested against last frame's panel bounds
        self.pointer_stream.feed_from_egui(ctx);
        self.panel.pump(&self.regions);

        let current = *self.committed.borrow();
        article::show(ctx, &current);
        self.panel.show(ctx, &mut self.regions, self.panel_width);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        tracing::debug!(stats = ?self.pointer_stream.stats(), "pointer stream at exit");
        if let Err(err) = self.config.save() {
            tracing::warn!(%err, "failed to save config");
        }
    }
}
