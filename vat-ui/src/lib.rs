pub mod components;
pub mod config;
pub mod gui;
pub mod logging;

use gpui::{App, actions};
pub use gui::{open_main_window, setup_app};
use tracing::info;

actions!(vat_calculator, [Quit]);

/// Handles the [`Quit`] action by shutting the application down.
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Quitting VAT calculator");
    cx.quit();
}
