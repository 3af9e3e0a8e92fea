pub mod calculator;
pub mod window;

use gpui::{App, SharedString, Window};
use gpui::{ClickEvent, Styled};
use gpui::{Pixels, Size, px};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariants};

pub use calculator::CalculatorView;
pub use window::AppWindow;

use crate::config::WindowConfig;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        WindowConfig::default().into()
    }
}

impl From<WindowConfig> for WindowPreferences {
    fn from(config: WindowConfig) -> Self {
        Self {
            size: Size {
                width: px(config.width),
                height: px(config.height),
            },
        }
    }
}

/// Creates a large keypad button that stretches to fill its row.
pub fn make_key_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .large()
        .flex_1()
        .label(label.into())
        .on_click(on_click)
}

/// Creates a rate selector button; the selected rate is drawn as primary.
pub fn make_rate_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    selected: bool,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    let button = Button::new(id.into())
        .flex_1()
        .label(label.into())
        .on_click(on_click);

    if selected { button.primary() } else { button }
}
