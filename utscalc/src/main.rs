//! utscalc - the calculator screen of the Proyek UTS app

use eframe::NativeOptions;
use utscalc::app::CalcApp;
use utscalc::CalcSettings;

fn main() -> eframe::Result<()> {
    utscore::logging::init("info");

    let settings = CalcSettings::load();
    tracing::info!(?settings, "starting calculator");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([320.0, 520.0])
            .with_min_inner_size([260.0, 420.0])
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            utscore::UtsTheme::default().apply(&cc.egui_ctx);
            Box::new(CalcApp::new(cc, settings))
        }),
    )
}
