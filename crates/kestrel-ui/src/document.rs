use kestrel_wml::{ParseError, WmlReader};

use crate::builder::WindowBuilder;
use crate::canvas::{Canvas, RegionSurface};
use crate::compositor::{self, Interaction};
use crate::coords::Rect;
use crate::model::{MENU_ACTIONS, PERSIST_SCOPES, TOOL_ICONS, Window};
use crate::theme::Theme;

/// Callback rendering application content into the property panel. Receives
/// the panel's surface and current rectangle each frame.
pub type PanelContentFn = Box<dyn FnMut(&mut dyn RegionSurface, Rect)>;

/// Callback receiving the action identifier of an activated menu item.
pub type MenuActionFn = Box<dyn FnMut(&str)>;

/// A long-lived window document: the current model, its theme, and the two
/// injectable render callbacks.
///
/// Parse and render are synchronous and must not overlap; callbacks are
/// invoked inline during render and must not re-enter [`parse_str`] or
/// mutate the model.
///
/// [`parse_str`]: UiDocument::parse_str
pub struct UiDocument {
    window: Window,
    theme: Theme,
    panel_content: Option<PanelContentFn>,
    menu_action: Option<MenuActionFn>,
}

impl UiDocument {
    pub fn new() -> Self {
        Self {
            window: Window::default(),
            theme: Theme::default(),
            panel_content: None,
            menu_action: None,
        }
    }

    /// The model built by the last [`parse_str`](Self::parse_str) call.
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Takes effect with the next render call.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Takes effect with the next render call.
    pub fn set_panel_content(&mut self, f: impl FnMut(&mut dyn RegionSurface, Rect) + 'static) {
        self.panel_content = Some(Box::new(f));
    }

    /// Takes effect with the next render call.
    pub fn set_menu_action(&mut self, f: impl FnMut(&str) + 'static) {
        self.menu_action = Some(Box::new(f));
    }

    /// Rebuilds the model from `src`, replacing the previous one entirely.
    ///
    /// A failure leaves the model in whatever partial state the event stream
    /// reached — there is no rollback, so callers should discard the
    /// document rather than trust a partially built model. The error message
    /// comes verbatim from the parser.
    pub fn parse_str(&mut self, src: &str) -> Result<(), ParseError> {
        let mut reader = WmlReader::new();
        reader.register_enum("icon", TOOL_ICONS);
        reader.register_enum("scope", PERSIST_SCOPES);
        reader.register_enum("clicked", MENU_ACTIONS);

        let mut builder = WindowBuilder::new();
        let result = reader.parse(src, &mut builder);
        self.window = builder.finish();
        result
    }

    /// Draws the current model onto `canvas` for one frame.
    ///
    /// Pure presentation: the model is untouched, and the only result is the
    /// returned [`Interaction`]. A `None` viewport is a no-op.
    pub fn render(&mut self, canvas: &mut dyn Canvas, viewport: Option<Rect>) -> Interaction {
        let Some(viewport) = viewport else {
            return Interaction::default();
        };
        compositor::render(
            &self.window,
            &self.theme,
            canvas,
            viewport,
            self.panel_content.as_deref_mut(),
            self.menu_action.as_deref_mut(),
        )
    }
}

impl Default for UiDocument {
    fn default() -> Self {
        Self::new()
    }
}
