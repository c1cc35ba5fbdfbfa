//! Turns declared edge sizes and flags into five screen regions and drives
//! all drawing for one frame.
//!
//! The algorithm is fixed, not reflow-capable: each band is cut from the
//! viewport independently, and a disabled band simply has zero thickness.

use crate::canvas::{Canvas, RegionSurface};
use crate::coords::{Rect, Vec2};
use crate::model::{DockLayout, Window};
use crate::theme::{Color, RegionStyle, Theme};

#[cfg(not(target_os = "macos"))]
use crate::model::Menu;

/// Edge length of a toolbar / side-rail button.
const TOOL_BUTTON_SIZE: f32 = 28.0;
/// Gap between adjacent tool buttons.
const TOOL_BUTTON_GAP: f32 = 6.0;
/// Inset from a region edge to its first button.
const REGION_PADDING: f32 = 8.0;
/// Static placeholder until something reports real status.
const STATUS_LINE: &str = "Ready";

// ── Interaction ───────────────────────────────────────────────────────────

/// What the user did during one render call. Transient: valid for exactly
/// that call.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Interaction {
    /// The triangular play button was clicked this frame.
    pub play_clicked: bool,
}

// ── DockRegions ───────────────────────────────────────────────────────────

/// The five mutually exclusive screen regions cut from a viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DockRegions {
    pub top: Rect,
    pub bottom: Rect,
    pub left: Rect,
    pub right: Rect,
    pub center: Rect,
}

impl DockRegions {
    /// Pure region math. Total over all inputs: sizes of zero or less
    /// contribute a zero-thickness band, so the left/right span and the
    /// center remainder come out the same whether or not the horizontal
    /// bands are enabled.
    pub fn compute(viewport: Rect, dock: &DockLayout) -> Self {
        let top = dock.top_size.max(0) as f32;
        let bottom = dock.bottom_size.max(0) as f32;
        let left = dock.left_size.max(0) as f32;
        let right = dock.right_size.max(0) as f32;

        let Vec2 { x, y } = viewport.origin;
        let Vec2 { x: w, y: h } = viewport.size;
        let middle_h = h - top - bottom;

        Self {
            top: Rect::new(x, y, w, top),
            bottom: Rect::new(x, y + h - bottom, w, bottom),
            left: Rect::new(x, y + top, left, middle_h),
            right: Rect::new(x + w - right, y + top, right, middle_h),
            center: Rect::new(x + left, y + top, w - left - right, middle_h),
        }
    }
}

// ── Tool button labels ────────────────────────────────────────────────────

/// Short caption for a plain tool button. Known icons get a fixed letter;
/// anything else falls back to its upper-cased first character, and an empty
/// name gets a placeholder glyph.
pub(crate) fn short_label(icon: &str) -> String {
    match icon {
        "select" => "S".to_string(),
        "move" => "M".to_string(),
        "paint" => "P".to_string(),
        "" => "?".to_string(),
        other => match other.chars().next() {
            Some(first) => first.to_uppercase().collect(),
            None => "?".to_string(),
        },
    }
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

// ── Render driver ─────────────────────────────────────────────────────────

/// Draws one frame of `window` onto `canvas`.
///
/// Draw order is menu bar, top, bottom, left, right, center. The model is
/// read-only here; the only output besides draw calls is the returned
/// [`Interaction`].
pub(crate) fn render<'p, 'm>(
    window: &Window,
    theme: &Theme,
    canvas: &mut dyn Canvas,
    viewport: Rect,
    mut panel_content: Option<&mut (dyn FnMut(&mut dyn RegionSurface, Rect) + 'p)>,
    menu_action: Option<&mut (dyn FnMut(&str) + 'm)>,
) -> Interaction {
    let mut interaction = Interaction::default();

    if window.main_menu.enabled {
        draw_menu_bar(&window.main_menu.menus, canvas, menu_action);
    }

    if !window.dock.dock {
        draw_fallback(window, theme, canvas, viewport);
        return interaction;
    }

    let dock = &window.dock;
    let regions = DockRegions::compute(viewport, dock);

    if dock.top_size > 0 {
        let title = non_empty(&dock.top_label, "Toolbar");
        canvas.region(title, regions.top, theme.top, &mut |surface| {
            if dock.toolbar {
                draw_toolbar(surface, regions.top, &dock.toolbar_icons, &mut interaction);
            }
        });
    }

    if dock.bottom_size > 0 {
        let title = non_empty(&dock.bottom_label, "Status");
        canvas.region(title, regions.bottom, theme.bottom, &mut |surface| {
            if dock.status_bar {
                surface.line(STATUS_LINE);
            }
        });
    }

    if dock.left_size > 0 {
        let title = non_empty(&dock.left_label, "Tools");
        canvas.region(title, regions.left, theme.left, &mut |surface| {
            draw_rail(surface, regions.left, &dock.rail_icons);
        });
    }

    if dock.right_size > 0 {
        let title = non_empty(&dock.right_label, "Properties");
        canvas.region(title, regions.right, theme.right, &mut |surface| {
            if dock.property_panel {
                surface.heading(title);
                if let Some(panel) = panel_content.as_deref_mut() {
                    panel(surface, regions.right);
                }
            }
        });
    }

    // Center is always drawn, last, with the theme's (default transparent)
    // center background.
    let title = non_empty(&dock.center_label, "Viewport");
    canvas.region(title, regions.center, theme.center, &mut |surface| {
        if dock.overlay {
            let pos = regions.center.origin + Vec2::from(window.label.position);
            surface.text_at(pos, non_empty(&window.label.text, "Label"), window.label.font_size);
        }
    });

    interaction
}

/// Pre-docking behavior: one full-viewport, background-transparent region
/// holding only the label.
fn draw_fallback(window: &Window, theme: &Theme, canvas: &mut dyn Canvas, viewport: Rect) {
    let style = RegionStyle::new(Color::TRANSPARENT, theme.center.foreground);
    let title = non_empty(&window.title, "Window");
    canvas.region(title, viewport, style, &mut |surface| {
        let pos = viewport.origin + Vec2::from(window.label.position);
        surface.text_at(pos, non_empty(&window.label.text, "Label"), window.label.font_size);
    });
}

fn draw_toolbar(
    surface: &mut dyn RegionSurface,
    region: Rect,
    icons: &[String],
    interaction: &mut Interaction,
) {
    let mut x = region.origin.x + REGION_PADDING;
    let y = region.origin.y + ((region.size.y - TOOL_BUTTON_SIZE) * 0.5).max(0.0);
    for icon in icons {
        let rect = Rect::new(x, y, TOOL_BUTTON_SIZE, TOOL_BUTTON_SIZE);
        if icon == "play" {
            if surface.play_button_at(rect) {
                interaction.play_clicked = true;
            }
        } else {
            surface.button_at(rect, &short_label(icon));
        }
        x += TOOL_BUTTON_SIZE + TOOL_BUTTON_GAP;
    }
}

fn draw_rail(surface: &mut dyn RegionSurface, region: Rect, icons: &[String]) {
    let x = region.origin.x + ((region.size.x - TOOL_BUTTON_SIZE) * 0.5).max(0.0);
    let mut y = region.origin.y + REGION_PADDING;
    for icon in icons {
        let rect = Rect::new(x, y, TOOL_BUTTON_SIZE, TOOL_BUTTON_SIZE);
        surface.button_at(rect, &short_label(icon));
        y += TOOL_BUTTON_SIZE + TOOL_BUTTON_GAP;
    }
}

#[cfg(not(target_os = "macos"))]
fn draw_menu_bar<'m>(
    menus: &[Menu],
    canvas: &mut dyn Canvas,
    mut on_action: Option<&mut (dyn FnMut(&str) + 'm)>,
) {
    canvas.menu_bar(&mut |bar| {
        for menu in menus {
            bar.menu(&menu.label, &mut |entries| {
                for item in &menu.items {
                    if item.separator {
                        entries.separator();
                    } else if entries.item(&item.label) {
                        if let Some(on_action) = on_action.as_deref_mut() {
                            on_action(&item.clicked);
                        }
                    }
                }
            });
        }
    });
}

/// macOS provides its own menu surface; the application is expected to build
/// it externally from [`Menu::native_items`](crate::model::Menu::native_items).
/// That integration is not implemented here, so the canvas bar is simply
/// suppressed.
#[cfg(target_os = "macos")]
fn draw_menu_bar<'m>(
    _menus: &[crate::model::Menu],
    _canvas: &mut dyn Canvas,
    _on_action: Option<&mut (dyn FnMut(&str) + 'm)>,
) {
}

// ── Test support ──────────────────────────────────────────────────────────


#[cfg(test)]
mod tests {
    use super::test_support::{Draw, TestCanvas};
    use super::*;
    use crate::model::{DockLayout, Label, Window};
    use kestrel_wml::Vec2i;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 720.0)
    }

    fn dock(top: i32, bottom: i32, left: i32, right: i32) -> DockLayout {
        DockLayout {
            dock: true,
            top_size: top,
            bottom_size: bottom,
            left_size: left,
            right_size: right,
            ..DockLayout::default()
        }
    }

    fn render_plain(window: &Window, canvas: &mut TestCanvas) -> Interaction {
        render(window, &Theme::default(), canvas, viewport(), None, None)
    }

    // ── region math ───────────────────────────────────────────────────────

    #[test]
    fn regions_all_bands_positive() {
        let r = DockRegions::compute(viewport(), &dock(40, 24, 48, 300));
        assert_eq!(r.top, Rect::new(0.0, 0.0, 1280.0, 40.0));
        assert_eq!(r.bottom, Rect::new(0.0, 696.0, 1280.0, 24.0));
        assert_eq!(r.left, Rect::new(0.0, 40.0, 48.0, 656.0));
        assert_eq!(r.right, Rect::new(980.0, 40.0, 300.0, 656.0));
        assert_eq!(r.center, Rect::new(48.0, 40.0, 932.0, 656.0));
    }

    #[test]
    fn side_band_height_is_viewport_minus_top_and_bottom() {
        for (top, bottom) in [(0, 0), (40, 0), (0, 24), (40, 24), (100, 100)] {
            let r = DockRegions::compute(viewport(), &dock(top, bottom, 48, 48));
            let expect = 720.0 - top as f32 - bottom as f32;
            assert_eq!(r.left.size.y, expect, "top={top} bottom={bottom}");
            assert_eq!(r.right.size.y, expect, "top={top} bottom={bottom}");
        }
    }

    #[test]
    fn center_is_the_remainder_for_any_sizes() {
        for (t, b, l, rr) in [(0, 0, 0, 0), (40, 24, 48, 300), (10, 0, 0, 99)] {
            let r = DockRegions::compute(viewport(), &dock(t, b, l, rr));
            assert_eq!(r.center.size.x, 1280.0 - l as f32 - rr as f32);
            assert_eq!(r.center.size.y, 720.0 - t as f32 - b as f32);
            assert_eq!(r.center.origin, Vec2::new(l as f32, t as f32));
        }
    }

    #[test]
    fn negative_sizes_collapse_to_zero_thickness() {
        let r = DockRegions::compute(viewport(), &dock(-5, -1, -100, 0));
        assert_eq!(r.top.size.y, 0.0);
        assert_eq!(r.bottom.size.y, 0.0);
        assert_eq!(r.left.size.x, 0.0);
        assert_eq!(r.center, Rect::new(0.0, 0.0, 1280.0, 720.0));
    }

    // ── no-dock fallback ──────────────────────────────────────────────────

    #[test]
    fn no_dock_renders_exactly_the_fallback() {
        let window = Window {
            title: "Demo".to_string(),
            label: Label {
                position: Vec2i::new(16, 32),
                text: "Hello".to_string(),
                font_size: 15,
            },
            ..Window::default()
        };
        let mut canvas = TestCanvas::default();
        render_plain(&window, &mut canvas);
        assert_eq!(
            canvas.log,
            [
                Draw::Region {
                    title: "Demo".to_string(),
                    rect: viewport(),
                    background: Color::TRANSPARENT,
                },
                Draw::TextAt {
                    pos: Vec2::new(16.0, 32.0),
                    text: "Hello".to_string(),
                    font_size: 15,
                },
            ]
        );
    }

    #[test]
    fn fallback_defaults_for_missing_title_and_text() {
        let mut canvas = TestCanvas::default();
        render_plain(&Window::default(), &mut canvas);
        assert_eq!(
            canvas.log[0],
            Draw::Region {
                title: "Window".to_string(),
                rect: viewport(),
                background: Color::TRANSPARENT,
            }
        );
        assert!(matches!(&canvas.log[1], Draw::TextAt { text, font_size: 13, .. } if text == "Label"));
    }

    // ── band drawing ──────────────────────────────────────────────────────

    #[test]
    fn bands_draw_in_z_order_center_last() {
        let mut window = Window::default();
        window.dock = dock(40, 24, 48, 300);
        let mut canvas = TestCanvas::default();
        render_plain(&window, &mut canvas);
        let titles: Vec<_> = canvas
            .log
            .iter()
            .filter_map(|d| match d {
                Draw::Region { title, .. } => Some(title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, ["Toolbar", "Status", "Tools", "Properties", "Viewport"]);
    }

    #[test]
    fn zero_sized_bands_are_skipped_but_center_always_draws() {
        let mut window = Window::default();
        window.dock = dock(0, 0, 0, 0);
        let mut canvas = TestCanvas::default();
        render_plain(&window, &mut canvas);
        assert_eq!(
            canvas.log,
            [Draw::Region {
                title: "Viewport".to_string(),
                rect: viewport(),
                background: Color::TRANSPARENT,
            }]
        );
    }

    #[test]
    fn status_line_only_when_flagged() {
        let mut window = Window::default();
        window.dock = dock(0, 24, 0, 0);
        let mut canvas = TestCanvas::default();
        render_plain(&window, &mut canvas);
        assert!(!canvas.log.contains(&Draw::Line("Ready".to_string())));

        window.dock.status_bar = true;
        let mut canvas = TestCanvas::default();
        render_plain(&window, &mut canvas);
        assert!(canvas.log.contains(&Draw::Line("Ready".to_string())));
    }

    #[test]
    fn overlay_draws_the_label_inside_center() {
        let mut window = Window::default();
        window.dock = dock(40, 0, 0, 0);
        window.dock.overlay = true;
        window.label.text = "fps: 60".to_string();
        window.label.position = Vec2i::new(8, 8);
        let mut canvas = TestCanvas::default();
        render_plain(&window, &mut canvas);
        // Center starts below the 40px top band.
        assert!(canvas.log.contains(&Draw::TextAt {
            pos: Vec2::new(8.0, 48.0),
            text: "fps: 60".to_string(),
            font_size: 13,
        }));
    }

    // ── toolbar ───────────────────────────────────────────────────────────

    fn toolbar_window(icons: &[&str]) -> Window {
        let mut window = Window::default();
        window.dock = dock(40, 0, 0, 0);
        window.dock.toolbar = true;
        window.dock.toolbar_icons = icons.iter().map(|s| s.to_string()).collect();
        window
    }

    #[test]
    fn toolbar_buttons_draw_left_to_right_with_play_triangular() {
        let window = toolbar_window(&["select", "move", "paint", "play"]);
        let mut canvas = TestCanvas::default();
        render_plain(&window, &mut canvas);

        let buttons: Vec<_> = canvas
            .log
            .iter()
            .filter_map(|d| match d {
                Draw::Button { rect, label } => Some((rect.origin.x, label.as_str())),
                Draw::PlayButton { rect } => Some((rect.origin.x, "<play>")),
                _ => None,
            })
            .collect();
        assert_eq!(buttons.len(), 4);
        assert_eq!(buttons[0].1, "S");
        assert_eq!(buttons[1].1, "M");
        assert_eq!(buttons[2].1, "P");
        assert_eq!(buttons[3].1, "<play>");
        // Strictly increasing x: document order is draw order.
        assert!(buttons.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn play_click_sets_the_flag_for_that_call_only() {
        let window = toolbar_window(&["play"]);

        let mut clicked = TestCanvas { click_play: true, ..TestCanvas::default() };
        assert!(render_plain(&window, &mut clicked).play_clicked);

        let mut idle = TestCanvas::default();
        assert!(!render_plain(&window, &mut idle).play_clicked);
    }

    #[test]
    fn plain_button_clicks_do_not_set_the_play_flag() {
        let window = toolbar_window(&["select", "move"]);
        let mut canvas = TestCanvas { click_play: true, ..TestCanvas::default() };
        // click_play only answers play buttons; none is drawn here.
        assert!(!render_plain(&window, &mut canvas).play_clicked);
    }

    #[test]
    fn toolbar_flag_off_suppresses_buttons() {
        let mut window = toolbar_window(&["play"]);
        window.dock.toolbar = false;
        let mut canvas = TestCanvas::default();
        render_plain(&window, &mut canvas);
        assert!(!canvas.log.iter().any(|d| matches!(d, Draw::PlayButton { .. })));
    }

    // ── side rail ─────────────────────────────────────────────────────────

    #[test]
    fn rail_buttons_draw_top_to_bottom() {
        let mut window = Window::default();
        window.dock = dock(0, 0, 48, 0);
        window.dock.rail_icons = vec!["select".to_string(), "custom".to_string()];
        let mut canvas = TestCanvas::default();
        render_plain(&window, &mut canvas);

        let buttons: Vec<_> = canvas
            .log
            .iter()
            .filter_map(|d| match d {
                Draw::Button { rect, label } => Some((rect.origin.y, label.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].1, "S");
        assert_eq!(buttons[1].1, "C"); // unrecognized icon: first char, upper-cased
        assert!(buttons[0].0 < buttons[1].0);
    }

    // ── property panel ────────────────────────────────────────────────────

    #[test]
    fn property_panel_draws_heading_then_callback_with_region_rect() {
        let mut window = Window::default();
        window.dock = dock(0, 0, 0, 300);
        window.dock.property_panel = true;
        window.dock.right_label = "Inspector".to_string();

        let mut seen = None;
        let mut panel = |surface: &mut dyn RegionSurface, rect: Rect| {
            surface.line("content");
            seen = Some(rect);
        };
        let mut canvas = TestCanvas::default();
        render(&window, &Theme::default(), &mut canvas, viewport(), Some(&mut panel), None);

        assert!(canvas.log.contains(&Draw::Heading("Inspector".to_string())));
        assert!(canvas.log.contains(&Draw::Line("content".to_string())));
        assert_eq!(seen, Some(Rect::new(980.0, 0.0, 300.0, 720.0)));
    }

    // ── menu bar ──────────────────────────────────────────────────────────

    #[cfg(not(target_os = "macos"))]
    mod menu_bar {
        use super::*;
        use crate::model::{MainMenu, Menu, MenuItem};

        fn menu_window() -> Window {
            let mut window = Window::default();
            window.main_menu = MainMenu {
                enabled: true,
                menus: vec![Menu {
                    label: "File".to_string(),
                    items: vec![
                        MenuItem {
                            label: "Open".to_string(),
                            clicked: "open".to_string(),
                            ..MenuItem::default()
                        },
                        MenuItem::separator(),
                        MenuItem {
                            label: "Exit".to_string(),
                            clicked: "exit".to_string(),
                            ..MenuItem::default()
                        },
                    ],
                }],
            };
            window
        }

        #[test]
        fn canvas_menu_shows_every_item_including_exit() {
            let mut canvas = TestCanvas::default();
            render_plain(&menu_window(), &mut canvas);
            assert!(canvas.log.contains(&Draw::MenuBar));
            assert!(canvas.log.contains(&Draw::Menu("File".to_string())));
            assert!(canvas.log.contains(&Draw::Item("Open".to_string())));
            assert!(canvas.log.contains(&Draw::Separator));
            // The duplicate-quit filter applies only to native menu builds.
            assert!(canvas.log.contains(&Draw::Item("Exit".to_string())));
        }

        #[test]
        fn activating_an_item_invokes_the_action_callback() {
            let mut actions = Vec::new();
            let mut on_action = |action: &str| actions.push(action.to_string());
            let mut canvas =
                TestCanvas { click_item: Some("Open".to_string()), ..TestCanvas::default() };
            render(
                &menu_window(),
                &Theme::default(),
                &mut canvas,
                viewport(),
                None,
                Some(&mut on_action),
            );
            assert_eq!(actions, ["open"]);
        }

        #[test]
        fn menu_bar_absent_when_not_declared() {
            let mut canvas = TestCanvas::default();
            render_plain(&Window::default(), &mut canvas);
            assert!(!canvas.log.contains(&Draw::MenuBar));
        }
    }

    // ── short labels ──────────────────────────────────────────────────────

    #[test]
    fn short_labels_for_known_unknown_and_empty() {
        assert_eq!(short_label("select"), "S");
        assert_eq!(short_label("move"), "M");
        assert_eq!(short_label("paint"), "P");
        assert_eq!(short_label("erase"), "E");
        assert_eq!(short_label(""), "?");
    }
}
