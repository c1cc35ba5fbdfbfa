//! Kestrel UI — window document model and dock-layout compositor.
//!
//! A [`UiDocument`] is built from `.wml` markup (parsed by `kestrel-wml`)
//! and redrawn every frame onto an immediate-mode canvas. The canvas itself
//! is a seam ([`Canvas`]): `kestrel-egui` ships the egui backend, and tests
//! bring their own recording implementation.
//!
//! # Quick start
//!
//! ```rust
//! use kestrel_ui::{Rect, UiDocument};
//!
//! let mut doc = UiDocument::new();
//! doc.parse_str(r#"
//!     Window {
//!         title: "Player"
//!         Label { position: [16, 16]  text: "Hello" }
//!         Dock {
//!             Top { height: 40  ToolBar { ToolButton { icon: play } } }
//!         }
//!     }
//! "#).unwrap();
//!
//! // In your frame callback, with any Canvas backend:
//! // let interaction = doc.render(&mut canvas, Some(viewport));
//! // if interaction.play_clicked { /* start playback */ }
//! # assert_eq!(doc.window().dock.toolbar_icons, ["play"]);
//! # let _ = Rect::new(0.0, 0.0, 1.0, 1.0);
//! ```
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`builder`] | `WindowBuilder` — parse events → model |
//! | [`canvas`] | `Canvas`, `MenuSurface`, `RegionSurface` seams |
//! | [`compositor`] | `DockRegions`, `Interaction`, the render driver |
//! | [`coords`] | `Vec2`, `Rect` |
//! | [`document`] | `UiDocument` — parse/render entry points |
//! | [`logging`] | `init_logging` |
//! | [`model`] | `Window` and everything inside it |
//! | [`theme`] | `Color`, `RegionStyle`, `Theme` |

pub mod builder;
pub mod canvas;
pub mod compositor;
pub mod coords;
pub mod document;
pub mod logging;
pub mod model;
pub mod theme;

pub use builder::WindowBuilder;
pub use canvas::{Canvas, MenuSurface, RegionSurface};
pub use compositor::{DockRegions, Interaction};
pub use coords::{Rect, Vec2};
pub use document::{MenuActionFn, PanelContentFn, UiDocument};
pub use model::{
    DockLayout, Label, MainMenu, Menu, MenuItem, PersistScope, UiState, Window,
};
pub use theme::{Color, RegionStyle, Theme};

// The markup value types appear throughout the model; re-export them so
// applications don't need a direct kestrel-wml dependency.
pub use kestrel_wml::{ParseError, PropertyValue, Vec2i};
