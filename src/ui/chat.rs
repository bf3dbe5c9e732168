use eframe::egui::{
    Align, Align2, Area, Button, Context, Frame, Id, Key, Layout, RichText, ScrollArea, Stroke,
    TextEdit, Ui, Window,
};

use crate::models::{ChatMessage, ChatRequest, ChatSession};
use crate::ui::ui_text::{ICON_CHAT, ICON_CLOSE, ICON_SEND};
use crate::ui::{UI_CONFIG, UI_TEXT};

fn message_bubble(ui: &mut Ui, message: &ChatMessage) {
    let (align, fill) = if message.from_user {
        (Align::Max, UI_CONFIG.colors.info.gamma_multiply(0.25))
    } else {
        (Align::Min, UI_CONFIG.colors.card)
    };
    ui.with_layout(Layout::top_down(align), |ui| {
        Frame::new()
            .fill(fill)
            .stroke(Stroke::new(1.0, UI_CONFIG.colors.card_border))
            .corner_radius(6.0)
            .inner_margin(6.0)
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.8);
                ui.label(RichText::new(&message.content).color(UI_CONFIG.colors.text_primary));
                ui.label(
                    RichText::new(message.clock())
                        .small()
                        .color(UI_CONFIG.colors.text_subdued),
                );
            });
    });
    ui.add_space(4.0);
}

/// Floating toggle in the bottom-right corner. Flips `open` when clicked.
pub(crate) fn render_chat_toggle(ctx: &Context, open: &mut bool) {
    Area::new(Id::new("chat_toggle"))
        .anchor(Align2::RIGHT_BOTTOM, [-16.0, -48.0])
        .show(ctx, |ui| {
            let icon = if *open { ICON_CLOSE } else { ICON_CHAT };
            let button = Button::new(RichText::new(icon).size(22.0))
                .corner_radius(24.0)
                .min_size([44.0, 44.0].into());
            if ui
                .add(button)
                .on_hover_text(UI_TEXT.chat_toggle.as_str())
                .clicked()
            {
                *open = !*open;
            }
        });
}

/// The conversation window. Returns a request when the user sends a message.
pub(crate) fn render_chat_window(
    ctx: &Context,
    open: &mut bool,
    session: &mut ChatSession,
) -> Option<ChatRequest> {
    let mut outgoing = None;
    Window::new(UI_TEXT.chat_title.as_str())
        .open(open)
        .default_size(UI_CONFIG.chat_window_size)
        .anchor(Align2::RIGHT_BOTTOM, [-16.0, -100.0])
        .collapsible(false)
        .show(ctx, |ui| {
            let input_height = 36.0;
            ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .max_height(ui.available_height() - input_height)
                .show(ui, |ui| {
                    for message in &session.messages {
                        message_bubble(ui, message);
                    }
                    if session.is_typing {
                        ui.label(
                            RichText::new(&UI_TEXT.chat_typing)
                                .italics()
                                .color(UI_CONFIG.colors.text_subdued),
                        );
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let input_width = ui.available_width() - 40.0;
                let edit = ui.add_enabled(
                    !session.is_typing,
                    TextEdit::singleline(&mut session.input)
                        .hint_text(UI_TEXT.chat_hint.as_str())
                        .desired_width(input_width),
                );
                let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                let clicked = ui
                    .add_enabled(session.can_send(), Button::new(ICON_SEND))
                    .clicked();
                if enter || clicked {
                    outgoing = session.begin_send();
                    edit.request_focus();
                }
            });
        });
    outgoing
}
