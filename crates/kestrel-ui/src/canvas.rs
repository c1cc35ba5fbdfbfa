//! The seam between the compositor and whatever actually draws.
//!
//! Everything here is immediate-mode: interaction results are the return
//! values of the draw calls for the current frame, and the compositor keeps
//! no reference into the canvas beyond the call. `kestrel-egui` provides the
//! shipped backend; tests use a recording implementation.

use crate::coords::{Rect, Vec2};
use crate::theme::RegionStyle;

/// One frame's drawing surface.
pub trait Canvas {
    /// A fixed menu strip above all dock regions. `f` receives the bar
    /// surface once; menus and items are drawn through it.
    fn menu_bar(&mut self, f: &mut dyn FnMut(&mut dyn MenuSurface));

    /// A screen region at a fixed rectangle. `title` identifies the region
    /// to the backend (and doubles as its caption where backends show one).
    fn region(
        &mut self,
        title: &str,
        rect: Rect,
        style: RegionStyle,
        f: &mut dyn FnMut(&mut dyn RegionSurface),
    );
}

/// Drawing surface inside the menu bar or an open drop-down.
pub trait MenuSurface {
    /// A drop-down (or nested sub-menu). `f` runs only while it is open.
    fn menu(&mut self, label: &str, f: &mut dyn FnMut(&mut dyn MenuSurface));

    /// A selectable entry. Returns true when it was activated this frame.
    fn item(&mut self, label: &str) -> bool;

    fn separator(&mut self);
}

/// Drawing surface inside one region.
pub trait RegionSurface {
    /// Text at an absolute position. `font_size` is in points; backends map
    /// it onto their font handles.
    fn text_at(&mut self, pos: Vec2, text: &str, font_size: i32);

    /// Emphasized flowed text (section headers).
    fn heading(&mut self, text: &str);

    /// One flowed line of plain text.
    fn line(&mut self, text: &str);

    /// A plain push button at an absolute rectangle. Returns true when
    /// clicked this frame.
    fn button_at(&mut self, rect: Rect, label: &str) -> bool;

    /// The specialized triangular play button. Returns true when clicked
    /// this frame.
    fn play_button_at(&mut self, rect: Rect) -> bool;
}
