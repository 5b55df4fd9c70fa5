#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use bmi_calculator::{
    assets,
    bmi::{BmiCategory, BmiColor, ImageKey},
    config, logging,
    session::CalculatorState,
};
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{collections::HashMap, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        eprintln!("Config error: {e}");
        config::Config::default()
    });
    if let Some(path) = app_cfg.log_file.as_deref() {
        if let Err(e) = logging::init_file(logging::parse_level(&app_cfg.log_level), path) {
            eprintln!("Logging disabled: {e}");
        }
    }
    log::info!("GUI starting, image_dir={}", app_cfg.image_dir);

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(480.0, 760.0))
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "BMI Calculator",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg.clone()))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "images/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 이미지 파일을 egui 텍스처로 읽어 들인다.
fn load_texture(ctx: &egui::Context, path: &Path) -> Option<egui::TextureHandle> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            log::warn!("cannot read {}: {e}", path.display());
            return None;
        }
    };
    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => {
            log::warn!("cannot decode {}: {e}", path.display());
            return None;
        }
    };
    let (w, h) = img.dimensions();
    let color_image = egui::ColorImage::from_rgba_unmultiplied(
        [w as usize, h as usize],
        img.to_rgba8().as_flat_samples().as_slice(),
    );
    Some(ctx.load_texture(
        path.display().to_string(),
        color_image,
        egui::TextureOptions::LINEAR,
    ))
}

fn color32(color: BmiColor) -> egui::Color32 {
    let (r, g, b) = color.rgb();
    egui::Color32::from_rgb(r, g, b)
}

fn neutral_color() -> egui::Color32 {
    egui::Color32::from_rgb(0x33, 0x33, 0x33)
}

/// 원본 색상에 투명도를 적용한 Visuals를 만든다. 항상 원본에서 계산한다.
fn faded_visuals(base: &egui::Visuals, alpha: f32) -> egui::Visuals {
    let mut visuals = base.clone();
    visuals.window_fill = base.window_fill.linear_multiply(alpha);
    visuals.panel_fill = base.panel_fill.linear_multiply(alpha);
    visuals
}

struct GuiApp {
    config: config::Config,
    state: CalculatorState,
    window_alpha: f32,
    image_dir_input: String,
    alert: Option<&'static str>,
    show_settings_modal: bool,
    settings_status: Option<String>,
    // 첫 프레임의 Visuals. 투명도는 매 프레임 여기서 다시 계산한다.
    base_visuals: Option<egui::Visuals>,
    // 이미지 키별 텍스처 캐시. 파일이 없으면 None을 기억한다.
    textures: HashMap<ImageKey, Option<egui::TextureHandle>>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        Self {
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            image_dir_input: config.image_dir.clone(),
            config,
            state: CalculatorState::new(),
            alert: None,
            show_settings_modal: false,
            settings_status: None,
            base_visuals: None,
            textures: HashMap::new(),
        }
    }

    fn texture_for(&mut self, ctx: &egui::Context, key: ImageKey) -> Option<egui::TextureHandle> {
        let dir = self.config.image_dir.clone();
        self.textures
            .entry(key)
            .or_insert_with(|| {
                let path = assets::resolve_image(Path::new(&dir), key);
                if path.is_none() {
                    log::warn!("no image for {key} in {dir}");
                }
                path.and_then(|p| load_texture(ctx, &p))
            })
            .clone()
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("bmi_inputs")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Weight (kg)");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.state.weight_input)
                            .hint_text("Ex: 70"),
                    );
                    ui.end_row();

                    ui.label("Height (cm)");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.state.height_input)
                            .hint_text("Ex: 175"),
                    );
                    ui.end_row();
                });
        });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let calc = egui::Button::new(egui::RichText::new("Calculate BMI").strong())
                .min_size(egui::vec2(140.0, 32.0));
            if ui.add(calc).clicked() {
                if let Err(e) = self.state.calculate() {
                    self.alert = Some(e.user_message());
                }
            }
            if ui
                .add(egui::Button::new("Reset").min_size(egui::vec2(100.0, 32.0)))
                .clicked()
            {
                self.state.reset();
            }
        });
    }

    fn ui_result(&mut self, ui: &mut egui::Ui) {
        let Some(res) = self.state.result().copied() else {
            return;
        };
        let color = color32(res.color);
        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Your BMI").color(neutral_color()).size(18.0));
                ui.label(egui::RichText::new(res.formatted()).color(color).size(48.0).strong());
                ui.label(egui::RichText::new(res.category.label()).color(color).size(22.0));
                ui.add_space(8.0);
                if let Some(texture) = self.texture_for(ui.ctx(), res.image_key) {
                    ui.add(
                        egui::Image::from_texture(&texture)
                            .max_height(220.0)
                            .maintain_aspect_ratio(true),
                    );
                }
            });
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Interpretation:").strong());
            for category in BmiCategory::ALL {
                ui.label(
                    egui::RichText::new(format!(
                        "• {}: {}",
                        category.range_label(),
                        category.label()
                    ))
                    .color(color32(category.color())),
                );
            }
        });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        egui::Window::new("Settings")
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("Window transparency");
                ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                ui.separator();
                ui.label("Image folder");
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut self.image_dir_input);
                    if ui.button("Browse…").clicked() {
                        if let Some(dir) = FileDialog::new().pick_folder() {
                            self.image_dir_input = dir.display().to_string();
                        }
                    }
                });
                ui.separator();
                if ui.button("Save settings").clicked() {
                    if self.config.image_dir != self.image_dir_input {
                        self.textures.clear();
                    }
                    self.config.image_dir = self.image_dir_input.clone();
                    self.config.window_alpha = self.window_alpha;
                    self.settings_status = Some(match self.config.save() {
                        Ok(()) => "Saved.".to_string(),
                        Err(e) => {
                            log::error!("config save failed: {e}");
                            format!("Save error: {e}")
                        }
                    });
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;
    }

    fn ui_alert(&mut self, ctx: &egui::Context) {
        let Some(msg) = self.alert else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(msg);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.alert = None;
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용
        let base = self
            .base_visuals
            .get_or_insert_with(|| ctx.style().visuals.clone());
        let mut style = (*ctx.style()).clone();
        style.visuals = faded_visuals(base, self.window_alpha);
        ctx.set_style(style);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("BMI Calculator");
                ui.separator();
                if ui.button("Settings").clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }
        self.ui_alert(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("BMI Calculator");
                        ui.label("Body Mass Index");
                    });
                    ui.add_space(12.0);
                    self.ui_inputs(ui);
                    self.ui_result(ui);
                });
        });
    }
}
