use gpui::{
    AnyView, App, AppContext, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::info;

use crate::{
    Quit,
    components::{AppWindow, CalculatorView, WindowPreferences},
    config::AppConfig,
    quit,
};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "VAT Calculator".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator window in the configured starting state.
pub fn open_main_window(
    app_cx: &mut App,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let preferences = WindowPreferences::from(config.window);
    let converter = config.converter();

    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            preferences.size,
            app_cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some("VAT Calculator".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx.open_window(options, move |window, cx| {
        let calculator = cx.new(|cx| CalculatorView::new(converter, window, cx));
        let app_window = cx.new(|cx| AppWindow::new(calculator, cx));
        let view: AnyView = app_window.into();
        cx.new(|cx| Root::new(view, window, cx))
    })?;

    info!(
        rate = %config.rate,
        active = %config.active,
        separator = %config.separator,
        "Calculator window opened"
    );
    Ok(())
}
