use kestrel_wml::{PropertyValue, ValueKind, WmlHandler};

use crate::model::{Menu, MenuItem, PersistScope, Window};

// ── ElementKind ───────────────────────────────────────────────────────────

/// Markup vocabulary, tagged. Unknown element names map to [`Other`] so the
/// stack still mirrors nesting depth for them.
///
/// [`Other`]: ElementKind::Other
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ElementKind {
    Window,
    Label,
    MainMenu,
    Menu,
    MenuItem,
    Separator,
    Dock,
    Top,
    Bottom,
    Left,
    Right,
    Center,
    MenuBar,
    ToolBar,
    StatusBar,
    PropertyPanel,
    Viewport3D,
    Overlay,
    ToolButton,
    UiState,
    Other,
}

impl ElementKind {
    fn from_name(name: &str) -> Self {
        match name {
            "Window" => ElementKind::Window,
            "Label" => ElementKind::Label,
            "MainMenu" => ElementKind::MainMenu,
            "Menu" => ElementKind::Menu,
            "MenuItem" => ElementKind::MenuItem,
            "Separator" => ElementKind::Separator,
            "Dock" => ElementKind::Dock,
            "Top" => ElementKind::Top,
            "Bottom" => ElementKind::Bottom,
            "Left" => ElementKind::Left,
            "Right" => ElementKind::Right,
            "Center" => ElementKind::Center,
            "MenuBar" => ElementKind::MenuBar,
            "ToolBar" => ElementKind::ToolBar,
            "StatusBar" => ElementKind::StatusBar,
            "PropertyPanel" => ElementKind::PropertyPanel,
            "Viewport3D" => ElementKind::Viewport3D,
            "Overlay" => ElementKind::Overlay,
            "ToolButton" => ElementKind::ToolButton,
            "UiState" => ElementKind::UiState,
            _ => ElementKind::Other,
        }
    }
}

// ── Rule table ────────────────────────────────────────────────────────────

use self::ElementKind as E;
use kestrel_wml::ValueKind as K;

struct Rule {
    context: ElementKind,
    property: &'static str,
    kind: ValueKind,
    apply: fn(&mut WindowBuilder, &PropertyValue),
}

/// Priority-ordered property assignment: the first rule matching
/// (stack top, property name, value kind) wins; no match means the property
/// is deliberately ignored.
const RULES: &[Rule] = &[
    // Window
    Rule { context: E::Window, property: "title", kind: K::Str, apply: |b, v| {
        if let Some(s) = v.as_str() { b.window.title = s.to_string(); }
    } },
    Rule { context: E::Window, property: "position", kind: K::Vec2i, apply: |b, v| {
        if let Some(p) = v.as_vec2i() { b.window.position = p; }
    } },
    Rule { context: E::Window, property: "size", kind: K::Vec2i, apply: |b, v| {
        if let Some(s) = v.as_vec2i() { b.window.size = s; }
    } },
    // UiState
    Rule { context: E::UiState, property: "scope", kind: K::Enum, apply: |b, v| {
        if let Some(scope) = v.as_enum().and_then(PersistScope::from_name) {
            b.window.ui_state.scope = scope;
        }
    } },
    Rule { context: E::UiState, property: "theme", kind: K::Str, apply: |b, v| {
        if let Some(s) = v.as_str() { b.window.ui_state.theme = s.to_string(); }
    } },
    Rule { context: E::UiState, property: "savePosition", kind: K::Bool, apply: |b, v| {
        if let Some(f) = v.as_bool() { b.window.ui_state.save_position = f; }
    } },
    Rule { context: E::UiState, property: "saveSize", kind: K::Bool, apply: |b, v| {
        if let Some(f) = v.as_bool() { b.window.ui_state.save_size = f; }
    } },
    Rule { context: E::UiState, property: "saveMaximized", kind: K::Bool, apply: |b, v| {
        if let Some(f) = v.as_bool() { b.window.ui_state.save_maximized = f; }
    } },
    Rule { context: E::UiState, property: "saveLastFilePath", kind: K::Bool, apply: |b, v| {
        if let Some(f) = v.as_bool() { b.window.ui_state.save_last_file_path = f; }
    } },
    Rule { context: E::UiState, property: "saveDocking", kind: K::Bool, apply: |b, v| {
        if let Some(f) = v.as_bool() { b.window.ui_state.save_docking = f; }
    } },
    // Label
    Rule { context: E::Label, property: "position", kind: K::Vec2i, apply: |b, v| {
        if let Some(p) = v.as_vec2i() { b.window.label.position = p; }
    } },
    Rule { context: E::Label, property: "text", kind: K::Str, apply: |b, v| {
        if let Some(s) = v.as_str() { b.window.label.text = s.to_string(); }
    } },
    Rule { context: E::Label, property: "fontSize", kind: K::Int, apply: |b, v| {
        if let Some(n) = v.as_int() { b.window.label.font_size = n; }
    } },
    // Menus — only while the matching element is open
    Rule { context: E::Menu, property: "label", kind: K::Str, apply: |b, v| {
        if let (Some(menu), Some(s)) = (b.current_menu_mut(), v.as_str().map(str::to_string)) {
            menu.label = s;
        }
    } },
    Rule { context: E::MenuItem, property: "label", kind: K::Str, apply: |b, v| {
        if let (Some(item), Some(s)) = (b.current_item_mut(), v.as_str().map(str::to_string)) {
            item.label = s;
        }
    } },
    Rule { context: E::MenuItem, property: "clicked", kind: K::Str, apply: |b, v| {
        if let (Some(item), Some(s)) = (b.current_item_mut(), v.as_name().map(str::to_string)) {
            item.clicked = s;
        }
    } },
    Rule { context: E::MenuItem, property: "clicked", kind: K::Enum, apply: |b, v| {
        if let (Some(item), Some(s)) = (b.current_item_mut(), v.as_name().map(str::to_string)) {
            item.clicked = s;
        }
    } },
    Rule { context: E::MenuItem, property: "macos", kind: K::Bool, apply: |b, v| {
        if let (Some(item), Some(f)) = (b.current_item_mut(), v.as_bool()) {
            item.use_on_macos = f;
        }
    } },
    // Dock edge sizes
    Rule { context: E::Top, property: "height", kind: K::Int, apply: |b, v| {
        if let Some(n) = v.as_int() { b.window.dock.top_size = n; }
    } },
    Rule { context: E::ToolBar, property: "height", kind: K::Int, apply: |b, v| {
        if let Some(n) = v.as_int() { b.window.dock.top_size = n; }
    } },
    Rule { context: E::Bottom, property: "height", kind: K::Int, apply: |b, v| {
        if let Some(n) = v.as_int() { b.window.dock.bottom_size = n; }
    } },
    Rule { context: E::StatusBar, property: "height", kind: K::Int, apply: |b, v| {
        if let Some(n) = v.as_int() { b.window.dock.bottom_size = n; }
    } },
    Rule { context: E::Left, property: "width", kind: K::Int, apply: |b, v| {
        if let Some(n) = v.as_int() { b.window.dock.left_size = n; }
    } },
    Rule { context: E::Right, property: "width", kind: K::Int, apply: |b, v| {
        if let Some(n) = v.as_int() { b.window.dock.right_size = n; }
    } },
    Rule { context: E::PropertyPanel, property: "width", kind: K::Int, apply: |b, v| {
        if let Some(n) = v.as_int() { b.window.dock.right_size = n; }
    } },
    // Region labels
    Rule { context: E::Top, property: "label", kind: K::Str, apply: |b, v| {
        if let Some(s) = v.as_str() { b.window.dock.top_label = s.to_string(); }
    } },
    Rule { context: E::ToolBar, property: "label", kind: K::Str, apply: |b, v| {
        if let Some(s) = v.as_str() { b.window.dock.top_label = s.to_string(); }
    } },
    Rule { context: E::Bottom, property: "label", kind: K::Str, apply: |b, v| {
        if let Some(s) = v.as_str() { b.window.dock.bottom_label = s.to_string(); }
    } },
    Rule { context: E::StatusBar, property: "label", kind: K::Str, apply: |b, v| {
        if let Some(s) = v.as_str() { b.window.dock.bottom_label = s.to_string(); }
    } },
    Rule { context: E::Left, property: "label", kind: K::Str, apply: |b, v| {
        if let Some(s) = v.as_str() { b.window.dock.left_label = s.to_string(); }
    } },
    Rule { context: E::Right, property: "label", kind: K::Str, apply: |b, v| {
        if let Some(s) = v.as_str() { b.window.dock.right_label = s.to_string(); }
    } },
    Rule { context: E::PropertyPanel, property: "label", kind: K::Str, apply: |b, v| {
        if let Some(s) = v.as_str() { b.window.dock.right_label = s.to_string(); }
    } },
    Rule { context: E::Center, property: "label", kind: K::Str, apply: |b, v| {
        if let Some(s) = v.as_str() { b.window.dock.center_label = s.to_string(); }
    } },
    Rule { context: E::Viewport3D, property: "label", kind: K::Str, apply: |b, v| {
        if let Some(s) = v.as_str() { b.window.dock.center_label = s.to_string(); }
    } },
    // Tool icons — placement depends on the open-ancestor chain
    Rule { context: E::ToolButton, property: "icon", kind: K::Enum, apply: |b, v| {
        if let Some(icon) = v.as_enum().map(str::to_string) {
            b.place_tool_icon(&icon);
        }
    } },
];

// ── WindowBuilder ─────────────────────────────────────────────────────────

/// Builds a [`Window`] from ordered parse events.
///
/// The builder itself never fails: structural errors are the event source's
/// to raise, and unrecognized elements/properties/value kinds are ignored on
/// purpose so newer documents keep loading on older builds.
pub struct WindowBuilder {
    window: Window,
    stack: Vec<ElementKind>,
    current_menu: Option<usize>,
    current_item: Option<usize>,
    in_main_menu: bool,
}

impl WindowBuilder {
    pub fn new() -> Self {
        Self {
            window: Window::default(),
            stack: Vec::new(),
            current_menu: None,
            current_item: None,
            in_main_menu: false,
        }
    }

    /// The built model. Partial if the event stream stopped early.
    pub fn finish(self) -> Window {
        self.window
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn current_menu_mut(&mut self) -> Option<&mut Menu> {
        let index = self.current_menu?;
        self.window.main_menu.menus.get_mut(index)
    }

    fn current_item_mut(&mut self) -> Option<&mut MenuItem> {
        let menu = self.current_menu?;
        let item = self.current_item?;
        self.window.main_menu.menus.get_mut(menu)?.items.get_mut(item)
    }

    /// Escape hatch from top-of-stack context: a tool icon goes to the
    /// toolbar when the button's immediate parent is the toolbar element,
    /// to the side rail when a left-region element is open anywhere above
    /// it, and is dropped otherwise.
    fn place_tool_icon(&mut self, icon: &str) {
        let parent = self.stack.len().checked_sub(2).map(|i| self.stack[i]);
        if parent == Some(ElementKind::ToolBar) {
            self.window.dock.toolbar_icons.push(icon.to_string());
        } else if self.stack.contains(&ElementKind::Left) {
            self.window.dock.rail_icons.push(icon.to_string());
        } else {
            log::debug!("tool icon {icon:?} outside the toolbar and any left region; dropped");
        }
    }
}

impl Default for WindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WmlHandler for WindowBuilder {
    fn start_element(&mut self, name: &str) {
        let kind = ElementKind::from_name(name);
        self.stack.push(kind);
        match kind {
            ElementKind::MainMenu => {
                self.window.main_menu.enabled = true;
                self.in_main_menu = true;
            }
            ElementKind::Menu if self.in_main_menu => {
                self.window.main_menu.menus.push(Menu::default());
                self.current_menu = Some(self.window.main_menu.menus.len() - 1);
            }
            ElementKind::MenuItem => {
                if let Some(menu) = self.current_menu_mut() {
                    menu.items.push(MenuItem::default());
                    let index = menu.items.len() - 1;
                    self.current_item = Some(index);
                }
            }
            ElementKind::Separator => {
                if let Some(menu) = self.current_menu_mut() {
                    menu.items.push(MenuItem::separator());
                    self.current_item = None;
                }
            }
            ElementKind::Dock => self.window.dock.dock = true,
            ElementKind::MenuBar => self.window.dock.menu_bar = true,
            ElementKind::ToolBar => self.window.dock.toolbar = true,
            ElementKind::StatusBar => self.window.dock.status_bar = true,
            ElementKind::PropertyPanel => self.window.dock.property_panel = true,
            ElementKind::Viewport3D => self.window.dock.viewport3d = true,
            ElementKind::Overlay => self.window.dock.overlay = true,
            _ => {}
        }
    }

    fn on_property(&mut self, name: &str, value: &PropertyValue) {
        let Some(&context) = self.stack.last() else {
            log::debug!("property {name:?} outside any element; ignored");
            return;
        };
        let kind = value.kind();
        for rule in RULES {
            if rule.context == context && rule.property == name && rule.kind == kind {
                (rule.apply)(self, value);
                return;
            }
        }
        log::debug!("no rule for ({context:?}, {name:?}, {kind:?}); ignored");
    }

    fn end_element(&mut self, name: &str) {
        match ElementKind::from_name(name) {
            ElementKind::MenuItem => self.current_item = None,
            ElementKind::Menu => self.current_menu = None,
            ElementKind::MainMenu => self.in_main_menu = false,
            _ => {}
        }
        // Unmatched end events leave an empty stack; popping stays a no-op.
        self.stack.pop();
    }
}
