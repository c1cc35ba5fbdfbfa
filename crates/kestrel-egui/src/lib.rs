//! egui canvas backend for `kestrel-ui`.
//!
//! [`EguiCanvas`] implements the `Canvas` seam on top of an `egui::Context`:
//! the menu bar becomes a top panel with `egui::MenuBar`, each dock region
//! becomes a fixed-rect undecorated `egui::Window`, and tool buttons are
//! placed at the absolute rectangles the compositor computed. Window,
//! surface, and font acquisition stay with the application; this crate never
//! talks to the GPU.

use kestrel_ui::{Canvas, Color, MenuSurface, Rect, RegionStyle, RegionSurface, Vec2};

/// The one label size the optional secondary font stands in for.
const SECONDARY_FONT_SIZE: i32 = 15;

// ── conversions ───────────────────────────────────────────────────────────

fn to_pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

fn to_rect(r: Rect) -> egui::Rect {
    egui::Rect::from_min_size(to_pos2(r.origin), egui::vec2(r.size.x, r.size.y))
}

fn to_color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

// ── EguiCanvas ────────────────────────────────────────────────────────────

/// One frame's drawing surface over an `egui::Context`.
///
/// Construct it inside the egui UI closure each frame and hand it to
/// `UiDocument::render`:
///
/// ```rust,ignore
/// egui_integration.ui(&window, |ctx| {
///     let mut canvas = EguiCanvas::new(ctx);
///     let interaction = doc.render(&mut canvas, Some(viewport));
///     if interaction.play_clicked {
///         player.start();
///     }
/// });
/// ```
pub struct EguiCanvas<'a> {
    ctx: &'a egui::Context,
    secondary_font: Option<egui::FontId>,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx, secondary_font: None }
    }

    /// Font used for positioned label text of size 15. All other sizes use
    /// the proportional default at their requested size.
    pub fn with_secondary_font(mut self, font: egui::FontId) -> Self {
        self.secondary_font = Some(font);
        self
    }
}

impl Canvas for EguiCanvas<'_> {
    fn menu_bar(&mut self, f: &mut dyn FnMut(&mut dyn MenuSurface)) {
        egui::TopBottomPanel::top("kestrel_menu_bar").show(self.ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                f(&mut EguiMenuSurface { ui });
            });
        });
    }

    fn region(
        &mut self,
        title: &str,
        rect: Rect,
        style: RegionStyle,
        f: &mut dyn FnMut(&mut dyn RegionSurface),
    ) {
        let frame = egui::Frame::NONE
            .fill(to_color32(style.background))
            .inner_margin(egui::Margin::same(6));
        egui::Window::new(title)
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .fixed_rect(to_rect(rect))
            .frame(frame)
            .show(self.ctx, |ui| {
                let mut surface = EguiRegionSurface {
                    ui,
                    foreground: to_color32(style.foreground),
                    secondary_font: self.secondary_font.clone(),
                };
                f(&mut surface);
            });
    }
}

// ── menu surface ──────────────────────────────────────────────────────────

struct EguiMenuSurface<'a> {
    ui: &'a mut egui::Ui,
}

impl MenuSurface for EguiMenuSurface<'_> {
    fn menu(&mut self, label: &str, f: &mut dyn FnMut(&mut dyn MenuSurface)) {
        self.ui.menu_button(label, |ui| {
            f(&mut EguiMenuSurface { ui });
        });
    }

    fn item(&mut self, label: &str) -> bool {
        self.ui.button(label).clicked()
    }

    fn separator(&mut self) {
        self.ui.separator();
    }
}

// ── region surface ────────────────────────────────────────────────────────

struct EguiRegionSurface<'a> {
    ui: &'a mut egui::Ui,
    foreground: egui::Color32,
    secondary_font: Option<egui::FontId>,
}

impl EguiRegionSurface<'_> {
    fn font_for(&self, size: i32) -> egui::FontId {
        if size == SECONDARY_FONT_SIZE {
            if let Some(font) = &self.secondary_font {
                return font.clone();
            }
        }
        egui::FontId::proportional(size.max(1) as f32)
    }
}

impl RegionSurface for EguiRegionSurface<'_> {
    fn text_at(&mut self, pos: Vec2, text: &str, font_size: i32) {
        let font = self.font_for(font_size);
        self.ui
            .painter()
            .text(to_pos2(pos), egui::Align2::LEFT_TOP, text, font, self.foreground);
    }

    fn heading(&mut self, text: &str) {
        self.ui.heading(egui::RichText::new(text).color(self.foreground));
    }

    fn line(&mut self, text: &str) {
        self.ui.label(egui::RichText::new(text).color(self.foreground));
    }

    fn button_at(&mut self, rect: Rect, label: &str) -> bool {
        self.ui.put(to_rect(rect), egui::Button::new(label)).clicked()
    }

    fn play_button_at(&mut self, rect: Rect) -> bool {
        let rect = to_rect(rect);
        let response = self.ui.allocate_rect(rect, egui::Sense::click());
        let visuals = *self.ui.style().interact(&response);

        let painter = self.ui.painter();
        painter.rect_filled(rect, egui::CornerRadius::same(4), visuals.bg_fill);

        let pad_x = rect.width() * 0.3;
        let pad_y = rect.height() * 0.25;
        let points = vec![
            egui::pos2(rect.left() + pad_x, rect.top() + pad_y),
            egui::pos2(rect.right() - pad_x * 0.6, rect.center().y),
            egui::pos2(rect.left() + pad_x, rect.bottom() - pad_y),
        ];
        painter.add(egui::Shape::convex_polygon(
            points,
            visuals.fg_stroke.color,
            egui::Stroke::NONE,
        ));

        response.clicked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_ui::UiDocument;

    fn docked_doc() -> UiDocument {
        let mut doc = UiDocument::new();
        doc.parse_str(
            r#"Window {
                title: "Smoke"
                Label { position: [16, 16]  text: "Hi"  fontSize: 15 }
                MainMenu { Menu { label: "File"
                    MenuItem { label: "Open"  clicked: open }
                    Separator { }
                    MenuItem { label: "Exit"  clicked: exit }
                } }
                Dock {
                    Top { height: 40  ToolBar {
                        ToolButton { icon: select }
                        ToolButton { icon: play }
                    } }
                    Bottom { height: 24  StatusBar { } }
                    Left { width: 48  ToolButton { icon: move } }
                    Right { width: 200  PropertyPanel { } }
                    Center { Viewport3D { }  Overlay { } }
                }
            }"#,
        )
        .unwrap();
        doc
    }

    #[test]
    fn renders_a_docked_document_headless() {
        let mut doc = docked_doc();
        let ctx = egui::Context::default();
        let _output = ctx.run(egui::RawInput::default(), |egui_ctx| {
            let mut canvas = EguiCanvas::new(egui_ctx);
            let interaction =
                doc.render(&mut canvas, Some(Rect::new(0.0, 0.0, 800.0, 600.0)));
            assert!(!interaction.play_clicked);
        });
    }

    #[test]
    fn renders_the_no_dock_fallback_headless() {
        let mut doc = UiDocument::new();
        doc.parse_str(r#"Window { Label { text: "only me" } }"#).unwrap();
        let ctx = egui::Context::default();
        let _output = ctx.run(egui::RawInput::default(), |egui_ctx| {
            let mut canvas =
                EguiCanvas::new(egui_ctx).with_secondary_font(egui::FontId::proportional(15.0));
            doc.render(&mut canvas, Some(Rect::new(0.0, 0.0, 640.0, 480.0)));
        });
    }
}
