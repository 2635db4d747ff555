//! Calculator screen

use egui::{Align, Color32, Context, Layout, RichText, Rounding};
use utscore::theme::{consume_zoom_keys, menu_bar, UtsColors, UtsTheme};

use crate::engine::{Action, Calculator, Readout};
use crate::keypad::{self, KeyRole, COLUMNS, ROWS};
use crate::settings::CalcSettings;

const KEY_HEIGHT: f32 = 64.0;
const KEY_FONT_SIZE: f32 = 26.0;
const DISPLAY_FONT_SIZE: f32 = 56.0;
const EXPRESSION_FONT_SIZE: f32 = 24.0;
/// Fixed precision offered by the view menu.
const ROUNDED_PLACES: u8 = 10;

pub struct CalcApp {
    calc: Calculator,
    settings: CalcSettings,
    show_about: bool,
}

impl CalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: CalcSettings) -> Self {
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: CalcSettings) -> Self {
        Self {
            calc: Calculator::with_settings(settings.engine()),
            settings,
            show_about: false,
        }
    }

    pub fn press(&mut self, action: Action) {
        self.calc.apply(action);
    }

    pub fn readout(&self) -> Readout {
        self.calc.snapshot()
    }

    pub fn settings(&self) -> &CalcSettings {
        &self.settings
    }

    /// Apply changed settings to the running engine and persist them.
    pub fn update_settings(&mut self, f: impl FnOnce(&mut CalcSettings)) {
        f(&mut self.settings);
        self.calc.set_settings(self.settings.engine());
        self.settings.save();
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_zoom_keys(ctx);
        if !self.settings.keyboard_input || self.show_about {
            return;
        }
        let events = ctx.input(|i| i.events.clone());
        for action in keypad::actions_from_events(&events) {
            self.press(action);
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        ui.with_layout(Layout::bottom_up(Align::Max), |ui| {
            ui.add(
                egui::Label::new(
                    RichText::new(self.calc.display())
                        .size(DISPLAY_FONT_SIZE)
                        .strong()
                        .color(UtsColors::WHITE),
                )
                .wrap(false),
            );
            ui.add_space(8.0);
            ui.add(
                egui::Label::new(
                    RichText::new(self.calc.expression())
                        .size(EXPRESSION_FONT_SIZE)
                        .color(UtsColors::WHITE_DIMMED),
                )
                .wrap(false),
            );
        });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let gap = ui.spacing().item_spacing.x;
        let columns = f32::from(COLUMNS);
        let unit = (ui.available_width() - gap * (columns - 1.0)) / columns;

        for row in ROWS {
            ui.horizontal(|ui| {
                for key in row {
                    let span = f32::from(key.span);
                    let width = unit * span + gap * (span - 1.0);
                    let (fill, text) = key_colors(key.role);
                    let button = egui::Button::new(
                        RichText::new(key.label).size(KEY_FONT_SIZE).color(text),
                    )
                    .fill(fill)
                    .rounding(Rounding::same(KEY_HEIGHT / 2.0))
                    .min_size(egui::vec2(width, KEY_HEIGHT));
                    if ui.add(button).clicked() {
                        self.press(key.action);
                    }
                }
            });
        }
    }

    fn render_menu(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("view", |ui| {
                    let mut keyboard = self.settings.keyboard_input;
                    if ui.checkbox(&mut keyboard, "keyboard input").changed() {
                        self.update_settings(|s| s.keyboard_input = keyboard);
                    }
                    ui.separator();
                    let shortest = self.settings.precision.is_none();
                    if ui.selectable_label(shortest, "exact decimals").clicked() {
                        self.update_settings(|s| s.precision = None);
                        ui.close_menu();
                    }
                    let label = format!("round to {ROUNDED_PLACES} places");
                    if ui.selectable_label(!shortest, label).clicked() {
                        self.update_settings(|s| s.precision = Some(ROUNDED_PLACES));
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(concat!("version ", env!("CARGO_PKG_VERSION")));
                });
                ui.separator();
                ui.label("keys: 0-9 . + - * / % = Enter");
                ui.label("Esc or Backspace clears, n flips the sign");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

fn key_colors(role: KeyRole) -> (Color32, Color32) {
    match role {
        KeyRole::Digit => (UtsColors::WHITE, UtsColors::BLACK),
        KeyRole::Function | KeyRole::Operator => (UtsColors::BUTTON_LIGHT_GRAY, UtsColors::BLACK),
        KeyRole::Equals => (UtsColors::DARK_BLUE, UtsColors::WHITE),
    }
}

impl eframe::App for CalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        self.render_menu(ctx);

        let theme = UtsTheme::default();
        egui::TopBottomPanel::bottom("keypad")
            .frame(theme.tray_frame())
            .show_separator_line(false)
            .show(ctx, |ui| self.render_keypad(ui));

        egui::CentralPanel::default()
            .frame(UtsTheme::header_frame())
            .show(ctx, |ui| self.render_display(ui));

        if self.show_about {
            self.render_about(ctx);
        }
    }
}
