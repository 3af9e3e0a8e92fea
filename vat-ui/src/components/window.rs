// components

use gpui::{
    App, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription, Window, div,
};
use gpui_component::StyledExt;
use tracing::info;

use crate::{Quit, components::CalculatorView, quit};

/// Top-level view of the calculator window.
///
/// Quits the application when the window is closed; there is only ever one
/// window.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    calculator: Entity<CalculatorView>,
}

impl AppWindow {
    pub fn new(
        calculator: Entity<CalculatorView>,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscription = cx.on_window_closed(|cx: &mut App| {
            info!("Window closed callback");
            quit(&Quit, cx);
        });

        info!("Window constructed");
        Self {
            _window_close_subscription: subscription,
            calculator,
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .v_flex()
            .size_full()
            .child(self.calculator.clone())
    }
}
