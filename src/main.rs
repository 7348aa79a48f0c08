use gpui::*;
use gpui_component::Root;
use tenant_migrate::app::AppRoot;
use tenant_migrate::state::{AppState, PhaseSpecs};

fn main() {
    env_logger::init();

    Application::new().with_assets(gpui_component_assets::Assets).run(|cx: &mut gpui::App| {
        // Initialize gpui-component library
        gpui_component::init(cx);

        let specs = match PhaseSpecs::new() {
            Ok(specs) => specs,
            Err(err) => {
                log::error!("Invalid trigger configuration: {err}");
                cx.quit();
                return;
            }
        };

        let state = cx.new(|_| AppState::new());
        let default_bounds = Bounds::centered(None, size(px(1200.0), px(800.0)), cx);

        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(default_bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Tenant Migrate".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |window, cx| {
                window.on_window_should_close(cx, |_window, cx| {
                    cx.quit();
                    true
                });

                let app_view = cx.new(|cx| AppRoot::new(state.clone(), specs, window, cx));
                cx.new(|cx| Root::new(app_view, window, cx))
            },
        );

        if let Err(err) = opened {
            log::error!("Failed to open window: {err:#}");
            cx.quit();
        }
    });
}
