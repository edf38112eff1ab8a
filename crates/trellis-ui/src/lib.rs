//! Trellis UI - retained-mode widget tree with a box layout solver
//!
//! - Widgets stored in an arena and addressed by stable [`WidgetId`]s
//! - Containers laying children out in rows, columns or stacks under per-axis
//!   min/max/preferred [`Constraint`]s
//! - Mouse event routing with hover, press and click tracking
//! - Painting through a backend-agnostic [`RenderSurface`]
//! - A [`Window`] root with a sliding sidebar and a cross-thread job queue
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis_ui::{Dimension, Direction, DrawList, UiEvent, Window};
//! use trellis_core::math::Vec2;
//!
//! let mut window = Window::new(800, 600, DrawList::new());
//! let tree = window.tree_mut();
//!
//! let column = tree.create_panel();
//! tree.set_direction(column, Direction::Column);
//! let title = tree.create_label("Hello, World!");
//! tree.add_child(column, title).unwrap();
//! tree.set_constraint_fixed(column, Dimension::Width, 300);
//! tree.add_child(tree.root(), column).unwrap();
//!
//! window.process_event(&UiEvent::MouseMoved {
//!     position: Vec2::new(400.0, 300.0),
//! });
//! window.render(16.0);
//! assert!(!window.surface().is_empty());
//! ```

pub mod color;
pub mod config;
pub mod constraint;
mod container;
pub mod dirty;
mod dispatch;
pub mod draw_list;
pub mod error;
pub mod event;
mod label;
pub mod layout;
mod paint;
pub mod queue;
pub mod text;
pub mod theme;
pub mod tree;
pub mod widget;
pub mod widget_id;
pub mod widgets;
pub mod window;

pub use color::Color;
pub use config::UiConfig;
pub use constraint::{Constraint, Dimension, SizeConstraints, UNBOUNDED};
pub use dirty::DirtyFlags;
pub use draw_list::{ArcCommand, DrawCommand, DrawList, RenderSurface, TextCommand};
pub use error::TreeError;
pub use event::{MouseButton, MouseEvent, MouseEventType, UiEvent};
pub use layout::{Direction, SpacingPolicy};
pub use queue::{UiQueue, UiSender};
pub use text::{MeasureError, MonospaceMeasurer, TextMeasurer};
pub use theme::Theme;
pub use tree::UiTree;
pub use widget::Widget;
pub use widget_id::{ListenerId, WidgetId};
pub use widgets::{Justification, WidgetKind};
pub use window::{SidebarSide, SidebarState, Window};
