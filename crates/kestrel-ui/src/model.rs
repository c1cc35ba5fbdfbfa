use kestrel_wml::Vec2i;

/// Action identifier that quits the application.
///
/// Items carrying it are hidden from native menu builds, which already have
/// a platform quit entry.
pub const ACTION_EXIT: &str = "exit";

/// Tool icons the parse entry point registers for the `icon` property.
pub const TOOL_ICONS: &[&str] = &["play", "select", "move", "paint"];

/// Variants the parse entry point registers for the `scope` property.
pub const PERSIST_SCOPES: &[&str] = &["user", "project", "session"];

/// Canonical actions the parse entry point registers for the `clicked`
/// property. `clicked` also accepts arbitrary quoted strings.
pub const MENU_ACTIONS: &[&str] = &["new", "open", "save", "exit"];

// ── Label ─────────────────────────────────────────────────────────────────

/// A positioned text label inside the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub position: Vec2i,
    pub text: String,
    pub font_size: i32,
}

impl Default for Label {
    fn default() -> Self {
        Self { position: Vec2i::new(0, 0), text: String::new(), font_size: 13 }
    }
}

// ── Menus ─────────────────────────────────────────────────────────────────

/// One entry of a drop-down menu.
///
/// An item is either a separator (only `separator` is meaningful) or
/// actionable (`label`, `clicked`, and `use_on_macos` are meaningful).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    /// Action identifier delivered to the menu-action callback when the item
    /// is activated.
    pub clicked: String,
    /// Whether the item should appear in a macOS native menu build.
    pub use_on_macos: bool,
    pub separator: bool,
}

impl MenuItem {
    pub fn separator() -> Self {
        Self { separator: true, ..Self::default() }
    }

    /// True when the item would duplicate the platform quit entry of a
    /// native menu: its action is [`ACTION_EXIT`] or its label is exactly
    /// `"Exit"` (case-sensitive).
    pub fn duplicates_native_quit(&self) -> bool {
        self.clicked == ACTION_EXIT || self.label == "Exit"
    }
}

impl Default for MenuItem {
    fn default() -> Self {
        Self {
            label: String::new(),
            clicked: String::new(),
            use_on_macos: true,
            separator: false,
        }
    }
}

/// A named drop-down menu with its items in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    pub label: String,
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// Items as a native menu build would show them: the duplicate-quit
    /// entry is filtered out. The canvas menu bar shows all items.
    pub fn native_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| !item.duplicates_native_quit())
    }
}

/// The window's menu bar: present only when declared in markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainMenu {
    pub enabled: bool,
    pub menus: Vec<Menu>,
}

// ── DockLayout ────────────────────────────────────────────────────────────

/// Declarative five-region screen partition.
///
/// Edge sizes of zero or less mean "region not drawn". Icon lists keep
/// document order, which is also draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockLayout {
    pub dock: bool,
    pub menu_bar: bool,
    pub toolbar: bool,
    pub status_bar: bool,
    pub property_panel: bool,
    pub viewport3d: bool,
    pub overlay: bool,

    pub top_size: i32,
    pub bottom_size: i32,
    pub left_size: i32,
    pub right_size: i32,

    pub top_label: String,
    pub bottom_label: String,
    pub left_label: String,
    pub right_label: String,
    pub center_label: String,

    pub toolbar_icons: Vec<String>,
    pub rail_icons: Vec<String>,
}

// ── UiState ───────────────────────────────────────────────────────────────

/// Where persisted window state is stored.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PersistScope {
    #[default]
    User,
    Project,
    Session,
}

impl PersistScope {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "user" => Some(PersistScope::User),
            "project" => Some(PersistScope::Project),
            "session" => Some(PersistScope::Session),
            _ => None,
        }
    }
}

/// Which pieces of window state the application persists between runs.
///
/// The model only records the declaration; actual persistence is the
/// application's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub scope: PersistScope,
    pub theme: String,
    pub save_position: bool,
    pub save_size: bool,
    pub save_maximized: bool,
    pub save_last_file_path: bool,
    pub save_docking: bool,
}

// ── Window ────────────────────────────────────────────────────────────────

/// The root of the built document model.
///
/// Rebuilt from scratch on every parse; immutable between parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub title: String,
    pub position: Vec2i,
    pub size: Vec2i,
    pub label: Label,
    pub main_menu: MainMenu,
    pub dock: DockLayout,
    pub ui_state: UiState,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            title: String::new(),
            position: Vec2i::new(0, 0),
            size: Vec2i::new(640, 480),
            label: Label::default(),
            main_menu: MainMenu::default(),
            dock: DockLayout::default(),
            ui_state: UiState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(label: &str, clicked: &str) -> MenuItem {
        MenuItem { label: label.to_string(), clicked: clicked.to_string(), ..MenuItem::default() }
    }

    // ── native menu filter ────────────────────────────────────────────────

    #[test]
    fn filter_matches_exit_action() {
        assert!(item("Quit", "exit").duplicates_native_quit());
    }

    #[test]
    fn filter_matches_exit_label() {
        assert!(item("Exit", "quit_app").duplicates_native_quit());
    }

    #[test]
    fn filter_is_case_sensitive() {
        assert!(!item("exit", "quit_app").duplicates_native_quit());
        assert!(!item("EXIT", "Quit").duplicates_native_quit());
    }

    #[test]
    fn filter_requires_exact_label() {
        assert!(!item("Exit Application", "quit_app").duplicates_native_quit());
    }

    #[test]
    fn native_items_skips_only_the_quit_entry() {
        let menu = Menu {
            label: "File".to_string(),
            items: vec![item("Open", "open"), MenuItem::separator(), item("Exit", "exit")],
        };
        let kept: Vec<_> = menu.native_items().map(|i| i.label.as_str()).collect();
        assert_eq!(kept, ["Open", ""]);
    }

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn window_default_size() {
        let w = Window::default();
        assert_eq!(w.size, kestrel_wml::Vec2i::new(640, 480));
        assert_eq!(w.label.font_size, 13);
    }

    #[test]
    fn menu_item_defaults_to_macos_visible() {
        assert!(MenuItem::default().use_on_macos);
        assert!(!MenuItem::default().separator);
    }
}
