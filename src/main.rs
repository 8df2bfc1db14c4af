mod activation;
mod app;
mod article;
mod config;
mod draft;
mod options;
mod panel;
mod params;
mod region;
mod watcher;
mod widgets;

use app::ArticleParamsApp;
use config::AppConfig;

const DEFAULT_WINDOW: [f32; 2] = [1440.0, 900.0];

fn window_size(config: &AppConfig) -> [f32; 2] {
    [
        config.window_width.unwrap_or(DEFAULT_WINDOW[0]),
        config.window_height.unwrap_or(DEFAULT_WINDOW[1]),
    ]
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load();
    let [width, height] = window_size(&config);
    tracing::debug!(width, height, "opening window");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Article Params")
            .with_app_id("article-params")
            .with_inner_size([width, height]),
        ..Default::default()
    };

    eframe::run_native(
        "article-params",
        native_options,
        Box::new(|cc| Ok(Box::new(ArticleParamsApp::new(cc, config)))),
    )
}
