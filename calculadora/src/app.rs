//! Calculadora window

use calccore::keypad::column_span;
use calccore::{action_for_key, action_for_label, Action, CalcConfig, CalcError, Calculator, KeyPress, BUTTON_GRID};
use egui::{Context, Event, Key};
use tracing::debug;

const BUTTON_HEIGHT: f32 = 64.0;
const DISPLAY_FONT_SIZE: f32 = 40.0;
const INFO_FONT_SIZE: f32 = 18.0;

pub struct CalculadoraApp {
    calc: Calculator,
    /// Message shown in the error dialog, if one is open
    error: Option<CalcError>,
}

impl CalculadoraApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &CalcConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self {
            calc: Calculator::with_config(config),
            error: None,
        }
    }

    fn dispatch(&mut self, action: Action) {
        let outcome = self.calc.apply(action);
        debug!(?outcome, info = self.calc.info(), "keypad");
        if let Some(err) = outcome.error() {
            self.error = Some(err);
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_tab(ctx);

        let keys: Vec<KeyPress> = ctx.input(|i| i.events.iter().flat_map(key_presses).collect());
        for key in keys {
            if self.error.is_some() {
                // the dialog owns the keyboard until dismissed
                if matches!(key, KeyPress::Enter | KeyPress::Escape) {
                    self.error = None;
                }
                continue;
            }
            if let Some(action) = action_for_key(key) {
                self.dispatch(action);
            }
        }
    }

    fn render_info(&self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(self.calc.info()).font(egui::FontId::proportional(INFO_FONT_SIZE)));
        });
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let display_height = DISPLAY_FONT_SIZE * 2.0;
        egui::Frame::none()
            .fill(ui.visuals().extreme_bg_color)
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::symmetric(15.0, 4.0))
            .show(ui, |ui| {
                ui.set_min_height(display_height);
                ui.set_max_height(display_height);
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.calc.display())
                            .font(egui::FontId::proportional(DISPLAY_FONT_SIZE))
                            .strong(),
                    );
                });
            });
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing.x;
        let btn_w = (ui.available_width() - spacing * 3.0) / 4.0;

        for (row, labels) in BUTTON_GRID.iter().enumerate() {
            ui.horizontal(|ui| {
                for (col, label) in labels.iter().enumerate() {
                    let span = column_span(row, col);
                    if span == 0 {
                        continue;
                    }
                    let width = btn_w * span as f32 + spacing * (span - 1) as f32;
                    let text = egui::RichText::new(*label).size(INFO_FONT_SIZE + 4.0);
                    let resp = ui.add_sized([width, BUTTON_HEIGHT], egui::Button::new(text));
                    if resp.clicked() {
                        // keep keyboard Enter from re-clicking this button
                        resp.surrender_focus();
                        if let Some(action) = action_for_label(label) {
                            self.dispatch(action);
                        }
                    }
                }
            });
        }
    }

    fn render_error(&mut self, ctx: &Context) {
        let Some(err) = self.error else { return };
        egui::Window::new("Erro")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.label(err.to_string());
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.error = None;
                    }
                });
            });
    }
}

impl eframe::App for CalculadoraApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(ctx.style().visuals.panel_fill).inner_margin(egui::Margin::same(10.0)))
            .show(ctx, |ui| {
                ui.add_enabled_ui(self.error.is_none(), |ui| {
                    self.render_info(ui);
                    self.render_display(ui);
                    ui.add_space(8.0);
                    self.render_buttons(ui);
                });
            });

        self.render_error(ctx);
    }
}

/// Keyboard events the keypad cares about.
fn key_presses(event: &Event) -> Vec<KeyPress> {
    match event {
        Event::Key { key, pressed: true, .. } => match key {
            Key::Enter => vec![KeyPress::Enter],
            Key::Backspace => vec![KeyPress::Backspace],
            Key::Delete => vec![KeyPress::Delete],
            Key::Escape => vec![KeyPress::Escape],
            _ => Vec::new(),
        },
        Event::Text(text) => text.trim().chars().map(KeyPress::Char).collect(),
        _ => Vec::new(),
    }
}

/// Drop Tab presses so focus never lands on a keypad button, where Enter
/// would click it on top of evaluating.
fn consume_tab(ctx: &Context) {
    ctx.input_mut(|i| {
        i.events
            .retain(|e| !matches!(e, Event::Key { key: Key::Tab, .. }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: Key) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(key_presses(&key_event(Key::Enter)), vec![KeyPress::Enter]);
        assert_eq!(key_presses(&key_event(Key::Backspace)), vec![KeyPress::Backspace]);
        assert_eq!(key_presses(&key_event(Key::Delete)), vec![KeyPress::Delete]);
        assert_eq!(key_presses(&key_event(Key::Escape)), vec![KeyPress::Escape]);
        assert!(key_presses(&key_event(Key::A)).is_empty());
    }

    #[test]
    fn test_text_becomes_chars() {
        let presses = key_presses(&Event::Text("1+".to_string()));
        assert_eq!(presses, vec![KeyPress::Char('1'), KeyPress::Char('+')]);
        assert!(key_presses(&Event::Text(" ".to_string())).is_empty());
    }

    #[test]
    fn test_released_keys_ignored() {
        let released = Event::Key {
            key: Key::Enter,
            physical_key: None,
            pressed: false,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        assert!(key_presses(&released).is_empty());
    }
}
