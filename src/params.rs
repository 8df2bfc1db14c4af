use crate::{
    activation::ActivationSource,
    draft::DraftState,
    options::{Configuration, DEFAULT_CONFIGURATION, FieldKey, StyleOption},
    panel::PanelController,
    region::{RegionId, RegionMap, RegionResolver},
    widgets::{self, ButtonKind, FormRole},
};

/// A user interaction with the panel, collected while drawing and applied
/// once the frame's layout is done.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    SetField(FieldKey, StyleOption),
    Form(FormRole),
    Toggle,
}

/// Slide-out form that edits a draft of the article configuration and
/// hands it to `on_commit` on submit.
pub struct ParamsPanel<S, C>
where
    S: ActivationSource,
    C: FnMut(Configuration),
{
    draft: DraftState,
    controller: PanelController<S>,
    on_commit: C,
}

impl<S, C> ParamsPanel<S, C>
where
    S: ActivationSource,
    C: FnMut(Configuration),
{
    pub fn new(current: Configuration, source: S, on_commit: C) -> Self {
        Self {
            draft: DraftState::seed(current),
            controller: PanelController::new(source, RegionId::new("article_params_panel")),
            on_commit,
        }
    }

    #[cfg(test)]
    pub fn draft(&self) -> Configuration {
        self.draft.current()
    }

    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    pub fn region(&self) -> RegionId {
        self.controller.region()
    }

    pub fn toggle(&mut self) {
        self.controller.toggle();
    }

    /// Closes the panel for activations outside it since the last frame.
    pub fn pump(&mut self, regions: &impl RegionResolver) -> usize {
        self.controller.pump(regions)
    }

    /// Edits the draft only; nothing is committed.
    pub fn set_field(&mut self, field: FieldKey, option: StyleOption) -> Configuration {
        self.draft.set_field(field, option)
    }

    pub fn submit(&mut self) {
        let next = self.draft.current();
        tracing::info!(?next, "committing article parameters");
        (self.on_commit)(next);
        self.controller.close();
    }

    pub fn reset(&mut self) {
        tracing::info!("resetting article parameters to defaults");
        self.draft.replace_all(DEFAULT_CONFIGURATION);
        (self.on_commit)(DEFAULT_CONFIGURATION);
    }

    pub fn form_action(&mut self, role: FormRole) {
        match role {
            FormRole::Submit => self.submit(),
            FormRole::Reset => self.reset(),
        }
    }

    pub fn apply(&mut self, action: PanelAction) {
        match action {
            PanelAction::SetField(field, option) => {
                self.set_field(field, option);
            }
            PanelAction::Form(role) => self.form_action(role),
            PanelAction::Toggle => self.toggle(),
        }
    }

    /// Draws the panel and its arrow tab, and records their combined bounds
    /// under `region()`. The panel stays laid out while closed, slid off
    /// the left edge so only the tab shows.
    pub fn show(&mut self, ctx: &egui::Context, regions: &mut RegionMap, width: f32) {
        let region = self.region();
        let is_open = self.is_open();
        let openness = ctx.animate_bool(region.id().with("slide"), is_open);
        let geometry = PanelGeometry::new(ctx.screen_rect(), width, openness);
        let draft = self.draft.current();
        let mut actions = Vec::new();

        egui::Area::new(region.id())
            .order(egui::Order::Foreground)
            .constrain(false)
            .fixed_pos(geometry.sheet.min)
            .show(ctx, |ui| {
                ui.set_min_size(geometry.sheet.size());
                ui.set_max_size(geometry.sheet.size());
                ui.painter()
                    .rect_filled(geometry.sheet, 0.0, ui.visuals().window_fill());
                let content = geometry.sheet.shrink(SHEET_PADDING);
                let builder = egui::UiBuilder::new()
                    .max_rect(content)
                    .layout(egui::Layout::top_down(egui::Align::Min));
                ui.scope_builder(builder, |ui| {
                    ui.set_max_width(content.width());
                    egui::ScrollArea::vertical()
                        .id_salt("article_params_form")
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            show_form(ui, &draft, content.width() - COMBO_SLACK, &mut actions)
                        });
                });
            });

        egui::Area::new(region.id().with("tab"))
            .order(egui::Order::Foreground)
            .constrain(false)
            .fixed_pos(geometry.tab.min)
            .show(ctx, |ui| {
                if widgets::arrow_button(ui, is_open) {
                    actions.push(PanelAction::Toggle);
                }
            });

        regions.record(region, geometry.region());

        for action in actions {
            self.apply(action);
        }
    }
}

const SHEET_PADDING: f32 = 24.0;
const TAB_GAP: f32 = 8.0;
const TAB_SIZE: f32 = 36.0;
/// Room left beside dropdowns for the scroll bar.
const COMBO_SLACK: f32 = 16.0;

/// Where the sheet and its arrow tab sit for a given slide progress,
/// from 0.0 (closed, sheet off the left edge) to 1.0 (open).
#[derive(Debug, Clone, Copy, PartialEq)]
struct PanelGeometry {
    sheet: egui::Rect,
    tab: egui::Rect,
}

impl PanelGeometry {
    fn new(screen: egui::Rect, width: f32, openness: f32) -> Self {
        let left = screen.left() - width * (1.0 - openness.clamp(0.0, 1.0));
        let sheet = egui::Rect::from_min_size(
            egui::pos2(left, screen.top()),
            egui::vec2(width, screen.height()),
        );
        let tab = egui::Rect::from_min_size(
            egui::pos2(sheet.right() + TAB_GAP, screen.top() + TAB_GAP),
            egui::vec2(TAB_SIZE, TAB_SIZE),
        );
        Self { sheet, tab }
    }

    /// Bounds that count as inside the panel for outside-click detection.
    fn region(&self) -> egui::Rect {
        self.sheet.union(self.tab)
    }
}

fn show_form(
    ui: &mut egui::Ui,
    draft: &Configuration,
    width: f32,
    actions: &mut Vec<PanelAction>,
) {
    ui.label(
        egui::RichText::new("SET PARAMETERS")
            .size(31.0)
            .strong()
            .color(ui.visuals().strong_text_color()),
    );
    ui.add_space(16.0);

    let mut pick = |field: FieldKey, picked: Option<StyleOption>| {
        if let Some(option) = picked {
            actions.push(PanelAction::SetField(field, option));
        }
    };

    let field = FieldKey::FontFamily;
    pick(field, widgets::select(ui, field.title(), draft.get(field), field.options(), width));

    let field = FieldKey::FontSize;
    pick(
        field,
        widgets::radio_group(ui, "font-size", field.title(), draft.get(field), field.options()),
    );

    let field = FieldKey::FontColor;
    pick(field, widgets::select(ui, field.title(), draft.get(field), field.options(), width));

    widgets::separator(ui);

    let field = FieldKey::BackgroundColor;
    pick(field, widgets::select(ui, field.title(), draft.get(field), field.options(), width));

    let field = FieldKey::ContentWidth;
    pick(field, widgets::select(ui, field.title(), draft.get(field), field.options(), width));

    ui.add_space(24.0);
    ui.horizontal(|ui| {
        let reset = widgets::form_button(ui, "Clear", FormRole::Reset, ButtonKind::Clear);
        let submit = widgets::form_button(ui, "Apply", FormRole::Submit, ButtonKind::Apply);
        actions.extend(reset.or(submit).map(PanelAction::Form));
    });
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{
        activation::{ActivationBus, PointerActivation},
        options::find,
    };

    type Commits = Rc<RefCell<Vec<Configuration>>>;

    fn setup() -> (
        ActivationBus,
        RegionMap,
        Commits,
        ParamsPanel<ActivationBus, impl FnMut(Configuration)>,
    ) {
        let bus = ActivationBus::new();
        let commits: Commits = Rc::default();
        let sink = commits.clone();
        let panel = ParamsPanel::new(DEFAULT_CONFIGURATION, bus.clone(), move |next| {
            sink.borrow_mut().push(next)
        });
        let mut regions = RegionMap::new();
        regions.record(
            panel.region(),
            egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(400.0, 800.0)),
        );
        (bus, regions, commits, panel)
    }

    fn option(field: FieldKey, value: &str) -> StyleOption {
        find(field, value).unwrap()
    }

    #[test]
    fn field_edits_never_commit() {
        let (_bus, _regions, commits, mut panel) = setup();
        panel.toggle();
        panel.set_field(FieldKey::FontSize, option(FieldKey::FontSize, "25px"));
        panel.set_field(FieldKey::ContentWidth, option(FieldKey::ContentWidth, "948px"));
        assert!(commits.borrow().is_empty());
        assert!(panel.is_open());
    }

    #[test]
    fn submit_commits_last_edit_per_field() {
        let (_bus, _regions, commits, mut panel) = setup();
        panel.toggle();
        panel.set_field(FieldKey::FontSize, option(FieldKey::FontSize, "25px"));
        panel.set_field(FieldKey::FontColor, option(FieldKey::FontColor, "#FD24AF"));
        panel.submit();

        panel.toggle();
        panel.set_field(FieldKey::FontSize, option(FieldKey::FontSize, "38px"));
        panel.submit();

        let commits = commits.borrow();
        assert_eq!(commits.len(), 2);
        let last = commits[1];
        assert_eq!(last.font_size, option(FieldKey::FontSize, "38px"));
        assert_eq!(last.font_color, option(FieldKey::FontColor, "#FD24AF"));
        assert_eq!(last.font_family, DEFAULT_CONFIGURATION.font_family);
    }

    #[test]
    fn reset_restores_defaults_and_keeps_visibility() {
        let (_bus, _regions, commits, mut panel) = setup();
        panel.toggle();
        panel.set_field(FieldKey::FontFamily, option(FieldKey::FontFamily, "Days One"));
        panel.reset();

        assert_eq!(panel.draft(), DEFAULT_CONFIGURATION);
        assert_eq!(*commits.borrow(), vec![DEFAULT_CONFIGURATION]);
        assert!(panel.is_open());

        panel.toggle();
        panel.reset();
        assert!(!panel.is_open());
        assert_eq!(commits.borrow().len(), 2);
    }

    #[test]
    fn outside_click_without_submit_leaves_committed_default() {
        let (bus, regions, commits, mut panel) = setup();
        panel.toggle();
        panel.set_field(FieldKey::FontSize, option(FieldKey::FontSize, "18px"));
        bus.dispatch(PointerActivation::at(900.0, 10.0));
        panel.pump(&regions);

        assert!(commits.borrow().is_empty());
        assert!(!panel.is_open());
        assert_eq!(bus.stats().live, 0);
    }

    #[test]
    fn submit_background_change_commits_once_and_closes() {
        let (_bus, _regions, commits, mut panel) = setup();
        panel.toggle();
        panel.set_field(
            FieldKey::BackgroundColor,
            option(FieldKey::BackgroundColor, "#F5F5F5"),
        );
        panel.form_action(FormRole::Submit);

        let expected = DEFAULT_CONFIGURATION.with(
            FieldKey::BackgroundColor,
            option(FieldKey::BackgroundColor, "#F5F5F5"),
        );
        assert_eq!(*commits.borrow(), vec![expected]);
        assert!(!panel.is_open());
    }

    #[test]
    fn inside_click_keeps_draft_and_panel() {
        let (bus, regions, commits, mut panel) = setup();
        panel.apply(PanelAction::Toggle);
        panel.apply(PanelAction::SetField(
            FieldKey::FontColor,
            option(FieldKey::FontColor, "#80D994"),
        ));
        bus.dispatch(PointerActivation::at(100.0, 100.0));
        assert_eq!(panel.pump(&regions), 0);

        assert!(panel.is_open());
        assert_eq!(panel.draft().font_color, option(FieldKey::FontColor, "#80D994"));
        assert!(commits.borrow().is_empty());
    }

    #[test]
    fn reset_via_form_action_matches_reset() {
        let (_bus, _regions, commits, mut panel) = setup();
        panel.apply(PanelAction::Form(FormRole::Reset));
        assert_eq!(*commits.borrow(), vec![DEFAULT_CONFIGURATION]);
    }

    const PANEL_WIDTH: f32 = 556.0;

    fn screen() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1440.0, 900.0))
    }

    fn headless_context() -> egui::Context {
        let ctx = egui::Context::default();
        ctx.style_mut(|style| style.animation_time = 0.0);
        ctx
    }

    fn primary(pos: egui::Pos2, pressed: bool) -> Vec<egui::Event> {
        vec![
            egui::Event::PointerMoved(pos),
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::default(),
            },
        ]
    }

    /// One frame in the same order as the app: feed, pump, article, panel.
    fn run_frame<C: FnMut(Configuration)>(
        ctx: &egui::Context,
        bus: &ActivationBus,
        regions: &mut RegionMap,
        panel: &mut ParamsPanel<ActivationBus, C>,
        events: Vec<egui::Event>,
    ) {
        let input = egui::RawInput {
            screen_rect: Some(screen()),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            bus.feed_from_egui(ctx);
            panel.pump(&*regions);
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.label("article");
            });
            panel.show(ctx, regions, PANEL_WIDTH);
        });
    }

    fn settle<C: FnMut(Configuration)>(
        ctx: &egui::Context,
        bus: &ActivationBus,
        regions: &mut RegionMap,
        panel: &mut ParamsPanel<ActivationBus, C>,
    ) {
        for _ in 0..30 {
            run_frame(ctx, bus, regions, panel, Vec::new());
        }
    }

    #[test]
    fn geometry_spans_sheet_and_tab_only() {
        let open = PanelGeometry::new(screen(), PANEL_WIDTH, 1.0);
        assert_eq!(open.sheet.left(), 0.0);
        assert_eq!(open.sheet.width(), PANEL_WIDTH);
        assert_eq!(open.region().width(), PANEL_WIDTH + TAB_GAP + TAB_SIZE);

        let closed = PanelGeometry::new(screen(), PANEL_WIDTH, 0.0);
        assert_eq!(closed.sheet.right(), 0.0);
        assert_eq!(closed.region().right(), TAB_GAP + TAB_SIZE);
    }

    #[test]
    fn closed_panel_is_off_screen_from_the_first_frame() {
        let ctx = headless_context();
        let (bus, _, _commits, mut panel) = setup();
        let mut regions = RegionMap::new();
        run_frame(&ctx, &bus, &mut regions, &mut panel, Vec::new());

        let rect = regions.resolve(panel.region()).unwrap();
        assert!(rect.right() <= TAB_GAP + TAB_SIZE + 0.5, "{rect:?}");
        assert!(rect.left() <= -PANEL_WIDTH + 0.5, "{rect:?}");
    }

    #[test]
    fn laid_out_region_matches_panel_width() {
        let ctx = headless_context();
        let (bus, _, _commits, mut panel) = setup();
        let mut regions = RegionMap::new();
        panel.toggle();
        settle(&ctx, &bus, &mut regions, &mut panel);

        let rect = regions.resolve(panel.region()).unwrap();
        assert!(rect.left().abs() < 0.5, "{rect:?}");
        assert!(
            (rect.width() - (PANEL_WIDTH + TAB_GAP + TAB_SIZE)).abs() < 0.5,
            "{rect:?}"
        );
        let sheet = ctx
            .memory(|mem| mem.area_rect(panel.region().id()))
            .unwrap();
        assert!(sheet.width() <= PANEL_WIDTH + 0.5, "{sheet:?}");
    }

    #[test]
    fn press_over_article_closes_open_panel() {
        let ctx = headless_context();
        let (bus, _, commits, mut panel) = setup();
        let mut regions = RegionMap::new();
        panel.toggle();
        settle(&ctx, &bus, &mut regions, &mut panel);
        assert!(panel.is_open());

        let over_article = egui::pos2(1300.0, 450.0);
        run_frame(&ctx, &bus, &mut regions, &mut panel, primary(over_article, true));
        run_frame(&ctx, &bus, &mut regions, &mut panel, primary(over_article, false));

        assert!(!panel.is_open());
        assert_eq!(bus.stats().live, 0);
        assert!(commits.borrow().is_empty());
    }

    #[test]
    fn press_on_tab_while_open_only_toggles() {
        let ctx = headless_context();
        let (bus, _, commits, mut panel) = setup();
        let mut regions = RegionMap::new();
        panel.toggle();
        settle(&ctx, &bus, &mut regions, &mut panel);

        let tab = egui::pos2(
            PANEL_WIDTH + TAB_GAP + TAB_SIZE / 2.0,
            TAB_GAP + TAB_SIZE / 2.0,
        );
        run_frame(&ctx, &bus, &mut regions, &mut panel, primary(tab, true));
        assert!(panel.is_open());

        run_frame(&ctx, &bus, &mut regions, &mut panel, primary(tab, false));
        assert!(!panel.is_open());
        let stats = bus.stats();
        assert_eq!(stats.subscribes, 1);
        assert_eq!(stats.unsubscribes, 1);
        assert!(commits.borrow().is_empty());
    }
}
