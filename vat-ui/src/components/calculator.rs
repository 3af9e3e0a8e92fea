use gpui::{
    ClickEvent, Context, FocusHandle, InteractiveElement, IntoElement, KeyDownEvent,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, TextAlign, Window,
    div, px,
};
use gpui_component::{ActiveTheme, h_flex, v_flex};
use tracing::{debug, warn};
use vat_core::{AmountField, KEYPAD_ROWS, Key, TriFieldConverter, VatRate};

use crate::components::{make_key_button, make_rate_button};

/// The calculator screen: three amount rows, the rate selector and the keypad.
///
/// Owns the converter; every callback mutates it and asks for a re-render.
pub struct CalculatorView {
    converter: TriFieldConverter,
    focus_handle: FocusHandle,
}

impl CalculatorView {
    pub fn new(
        converter: TriFieldConverter,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            converter,
            focus_handle,
        }
    }

    fn press(
        &mut self,
        key: Key,
        cx: &mut Context<Self>,
    ) {
        if let Err(error) = self.converter.press(key) {
            warn!(%error, ?key, "keypad input rejected");
            return;
        }
        cx.notify();
    }

    fn select_rate(
        &mut self,
        rate: VatRate,
        cx: &mut Context<Self>,
    ) {
        self.converter.set_rate(rate);
        cx.notify();
    }

    fn select_field(
        &mut self,
        field: AmountField,
        cx: &mut Context<Self>,
    ) {
        self.converter.set_active(field);
        cx.notify();
    }

    fn on_key_down(
        &mut self,
        event: &KeyDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform || keystroke.modifiers.alt {
            return;
        }

        match Key::from_keystroke(&keystroke.key) {
            Some(key) => self.press(key, cx),
            None => debug!(key = %keystroke.key, "ignored keystroke"),
        }
    }

    fn render_field_row(
        &self,
        field: AmountField,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let active = self.converter.active() == field;
        let text = self.converter.text(field).to_string();
        let border = if active {
            cx.theme().primary
        } else {
            cx.theme().border
        };
        let marker = div().w(px(8.)).h(px(8.)).rounded_full();
        let marker = if active {
            marker.bg(cx.theme().primary)
        } else {
            marker
        };

        v_flex()
            .gap_1()
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(field.label()),
            )
            .child(
                h_flex()
                    .id(SharedString::from(format!("field-{}", field.label())))
                    .h(px(44.))
                    .px_3()
                    .gap_2()
                    .items_center()
                    .rounded_md()
                    .border_1()
                    .border_color(border)
                    .cursor_pointer()
                    .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                        this.select_field(field, cx);
                    }))
                    .child(
                        div()
                            .flex_1()
                            .text_xl()
                            .text_align(TextAlign::Right)
                            .child(text),
                    )
                    .child(marker),
            )
    }

    fn render_rate_row(
        &self,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let selected = self.converter.rate();

        h_flex()
            .w_full()
            .gap_3()
            .children(VatRate::all().iter().copied().map(|rate| {
                make_rate_button(
                    format!("rate-{}", rate.percent()),
                    rate.label(),
                    rate == selected,
                    cx.listener(move |this, _: &ClickEvent, _, cx| {
                        this.select_rate(rate, cx);
                    }),
                )
            }))
    }

    fn render_keypad(
        &self,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let separator = self.converter.separator();
        let key_button = |key: Key, cx: &mut Context<Self>| {
            make_key_button(
                key.id(),
                key.label(separator),
                cx.listener(move |this, _: &ClickEvent, _, cx| {
                    this.press(key, cx);
                }),
            )
        };

        let mut keypad = v_flex().gap_2();
        for row in KEYPAD_ROWS {
            let mut buttons = h_flex().gap_2();
            for key in row {
                buttons = buttons.child(key_button(key, cx));
            }
            keypad = keypad.child(buttons);
        }
        keypad.child(h_flex().w_full().child(key_button(Key::Clear, cx)))
    }
}

impl Render for CalculatorView {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let mut fields = v_flex().gap_3();
        for field in AmountField::all() {
            fields = fields.child(self.render_field_row(*field, cx));
        }

        v_flex()
            .id("calculator")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .size_full()
            .p_4()
            .gap_4()
            .child(fields)
            .child(self.render_rate_row(cx))
            .child(self.render_keypad(cx))
    }
}
