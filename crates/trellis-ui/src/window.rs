//! Window root.
//!
//! A [`Window`] owns the widget tree, the render surface and the UI queue.
//! Its root container always spans the whole window. A second top-level
//! container, the sidebar, slides in over the root from either edge.

use crate::config::UiConfig;
use crate::draw_list::RenderSurface;
use crate::event::UiEvent;
use crate::queue::{UiQueue, UiSender};
use crate::text::{MonospaceMeasurer, TextMeasurer};
use crate::theme::Theme;
use crate::tree::UiTree;
use crate::widget_id::WidgetId;
use trellis_core::geometry::{Rect, Size};
use trellis_core::math::Vec2;
use trellis_core::profiling::profile_function;

pub const SIDEBAR_NAME: &str = "WindowSidebarContainer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidebarSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SidebarState {
    #[default]
    Closed,
    Opening(SidebarSide),
    Open(SidebarSide),
    Closing(SidebarSide),
}

impl SidebarState {
    pub fn side(&self) -> Option<SidebarSide> {
        match *self {
            SidebarState::Closed => None,
            SidebarState::Opening(side)
            | SidebarState::Open(side)
            | SidebarState::Closing(side) => Some(side),
        }
    }
}

pub struct Window<S: RenderSurface> {
    tree: UiTree,
    surface: S,
    queue: UiQueue,
    sidebar: WidgetId,
    sidebar_state: SidebarState,
    /// How many pixels of the sidebar are on screen.
    sidebar_offset: f64,
    size: Size<i32>,
    mouse_position: Vec2,
    background_texture: Option<String>,
}

impl<S: RenderSurface> Window<S> {
    pub fn new(width: i32, height: i32, surface: S) -> Self {
        Self::with_config(width, height, surface, UiConfig::default(), MonospaceMeasurer::new())
    }

    pub fn with_config(
        width: i32,
        height: i32,
        surface: S,
        config: UiConfig,
        measurer: impl TextMeasurer + 'static,
    ) -> Self {
        let mut tree = UiTree::with_config(config, measurer);
        let sidebar = tree.create_top_level(SIDEBAR_NAME);

        let mut window = Self {
            tree,
            surface,
            queue: UiQueue::new(),
            sidebar,
            sidebar_state: SidebarState::Closed,
            sidebar_offset: 0.0,
            size: Size::new(0, 0),
            mouse_position: Vec2::ZERO,
            background_texture: None,
        };
        window.resize(width, height);
        tracing::debug!("Created window {}x{}", width, height);
        window
    }

    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut UiTree {
        &mut self.tree
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn root(&self) -> WidgetId {
        self.tree.root()
    }

    pub fn sidebar(&self) -> WidgetId {
        self.sidebar
    }

    /// Handle for scheduling tree work from other threads.
    pub fn sender(&self) -> UiSender {
        self.queue.sender()
    }

    pub fn size(&self) -> Size<i32> {
        self.size
    }

    /// Last pointer position seen by [`Window::process_event`].
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Negative sizes are treated as zero.
    pub fn resize(&mut self, width: i32, height: i32) {
        let size = Size::new(width.max(0), height.max(0));
        self.size = size;
        let root = self.tree.root();
        self.tree
            .set_bounds(root, Rect::new(0, 0, size.width, size.height));

        let full = self.sidebar_width() as f64;
        self.sidebar_offset = match self.sidebar_state {
            SidebarState::Closed => 0.0,
            SidebarState::Open(_) => full,
            SidebarState::Opening(_) | SidebarState::Closing(_) => self.sidebar_offset.min(full),
        };
        self.place_sidebar();
    }

    fn sidebar_width(&self) -> i32 {
        self.size.width / self.tree.config().sidebar_fraction.max(1)
    }

    fn place_sidebar(&mut self) {
        let width = self.sidebar_width();
        let shown = self.sidebar_offset.round() as i32;
        let x = match self.sidebar_state.side() {
            Some(SidebarSide::Right) => self.size.width - shown,
            Some(SidebarSide::Left) | None => shown - width,
        };
        self.tree
            .set_bounds(self.sidebar, Rect::new(x, 0, width, self.size.height));
    }

    pub fn sidebar_state(&self) -> SidebarState {
        self.sidebar_state
    }

    /// Start sliding the sidebar in from `side`.
    pub fn open_sidebar(&mut self, side: SidebarSide) {
        match self.sidebar_state {
            SidebarState::Open(current) | SidebarState::Opening(current) if current == side => {
                return;
            }
            SidebarState::Closing(current) if current == side => {}
            _ => self.sidebar_offset = 0.0,
        }
        self.sidebar_state = SidebarState::Opening(side);
        tracing::debug!("Sidebar opening from {:?}", side);
        self.animate_sidebar(0.0);
    }

    /// Start sliding the sidebar out. Does nothing when it is closed.
    pub fn close_sidebar(&mut self) {
        match self.sidebar_state {
            SidebarState::Open(side) | SidebarState::Opening(side) => {
                self.sidebar_state = SidebarState::Closing(side);
                tracing::debug!("Sidebar closing");
                self.animate_sidebar(0.0);
            }
            SidebarState::Closing(_) | SidebarState::Closed => {}
        }
    }

    /// Fully open, not merely sliding in.
    pub fn is_sidebar_open(&self) -> bool {
        matches!(self.sidebar_state, SidebarState::Open(_))
    }

    /// Any part of the sidebar may be on screen.
    pub fn is_sidebar_visible(&self) -> bool {
        self.sidebar_state != SidebarState::Closed
    }

    pub fn is_mouse_over_sidebar(&self) -> bool {
        self.is_sidebar_visible()
            && self.tree.get(self.sidebar).is_some_and(|sidebar| {
                sidebar
                    .bounds()
                    .contains_point(self.mouse_position.x, self.mouse_position.y)
            })
    }

    fn animate_sidebar(&mut self, delta_ms: f64) {
        let full = self.sidebar_width() as f64;
        let speed = self.tree.config().sidebar_speed;
        // Zero speed snaps.
        let step = if speed > 0.0 {
            speed * delta_ms / 1000.0
        } else {
            f64::INFINITY
        };

        match self.sidebar_state {
            SidebarState::Opening(side) => {
                self.sidebar_offset = (self.sidebar_offset + step).min(full);
                if self.sidebar_offset >= full {
                    self.sidebar_state = SidebarState::Open(side);
                    tracing::debug!("Sidebar open");
                }
            }
            SidebarState::Closing(_) => {
                self.sidebar_offset = (self.sidebar_offset - step).max(0.0);
                if self.sidebar_offset <= 0.0 {
                    self.sidebar_state = SidebarState::Closed;
                    tracing::debug!("Sidebar closed");
                }
            }
            SidebarState::Open(_) | SidebarState::Closed => return,
        }
        self.place_sidebar();
    }

    /// Theme the root and the sidebar.
    pub fn set_theme(&mut self, name: &str) {
        let root = self.tree.root();
        self.tree.set_theme(root, name);
        self.tree.set_theme(self.sidebar, name);
    }

    /// Texture stretched over the window behind the root.
    pub fn set_background_texture(&mut self, name: Option<String>) {
        self.background_texture = name;
    }

    /// Route one input event. Returns whether a widget consumed it.
    ///
    /// Pending UI jobs run first. A visible sidebar sees events before the
    /// root; button events over the sidebar never reach the root. A release
    /// that skips a container still clears its pressed buttons.
    pub fn process_event(&mut self, event: &UiEvent) -> bool {
        profile_function!();
        self.queue.drain(&mut self.tree);

        if let UiEvent::Resized { width, height } = *event {
            self.resize(width, height);
            return false;
        }
        if let Some(position) = event.position() {
            self.mouse_position = position;
        }

        let released = match *event {
            UiEvent::MouseButtonUp { button, .. } => Some(button),
            _ => None,
        };
        let root = self.tree.root();
        let over_sidebar = self.is_mouse_over_sidebar();
        let sidebar_visible = self.is_sidebar_visible();

        if !sidebar_visible && let Some(button) = released {
            self.tree.release_subtree(self.sidebar, button);
        }
        let consumed = sidebar_visible && self.tree.process_event(self.sidebar, event);
        let shielded = over_sidebar && !matches!(event, UiEvent::MouseMoved { .. });
        if consumed || shielded {
            if let Some(button) = released {
                self.tree.release_subtree(root, button);
            }
            return consumed;
        }
        self.tree.process_event(root, event)
    }

    /// Run pending jobs, advance the sidebar animation by `delta_ms` and
    /// paint the root followed by the sidebar. Each gets its main pass and
    /// then its overlay pass.
    pub fn render(&mut self, delta_ms: f64) {
        profile_function!();
        self.queue.drain(&mut self.tree);
        self.animate_sidebar(delta_ms);

        let root = self.tree.root();
        let bounds = Rect::new(0, 0, self.size.width, self.size.height);
        if !bounds.is_empty() {
            let theme = self
                .tree
                .get(root)
                .and_then(|w| w.as_container())
                .map(|state| Theme::by_name(state.theme()))
                .unwrap_or_default();
            self.surface
                .fill_rounded_rect(bounds, bounds, 0, theme.background);
            if let Some(texture) = &self.background_texture
                && !self.surface.textured_quad(bounds, texture, bounds, 0.0)
            {
                tracing::debug!("Background texture '{}' not found", texture);
            }
        }

        self.tree.render(root, &mut self.surface);
        if self.is_sidebar_visible() {
            self.tree.render(self.sidebar, &mut self.surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_list::DrawList;

    #[test]
    fn test_root_spans_window() {
        let window = Window::new(800, 600, DrawList::new());
        let root = window.tree().get(window.root()).unwrap();
        assert_eq!(root.bounds(), Rect::new(0, 0, 800, 600));
    }

    #[test]
    fn test_closed_sidebar_is_off_screen() {
        let window = Window::new(800, 600, DrawList::new());
        let sidebar = window.tree().get(window.sidebar()).unwrap();
        assert_eq!(sidebar.name(), SIDEBAR_NAME);
        assert_eq!(sidebar.bounds(), Rect::new(-200, 0, 200, 600));
        assert!(!window.is_sidebar_visible());
    }

    #[test]
    fn test_sidebar_animation() {
        let mut window = Window::new(800, 600, DrawList::new());
        window.open_sidebar(SidebarSide::Left);
        assert_eq!(window.sidebar_state(), SidebarState::Opening(SidebarSide::Left));

        // 1500 px/s for 200 ms covers the 200 px sidebar.
        window.render(100.0);
        assert_eq!(window.sidebar_state(), SidebarState::Opening(SidebarSide::Left));
        window.render(100.0);
        assert!(window.is_sidebar_open());
        let bounds = window.tree().get(window.sidebar()).unwrap().bounds();
        assert_eq!(bounds, Rect::new(0, 0, 200, 600));

        window.close_sidebar();
        window.render(50.0);
        assert_eq!(window.sidebar_state(), SidebarState::Closing(SidebarSide::Left));
        window.render(100.0);
        assert_eq!(window.sidebar_state(), SidebarState::Closed);
    }

    #[test]
    fn test_right_sidebar_position() {
        let config = UiConfig::default().with_sidebar_speed(0.0);
        let mut window =
            Window::with_config(800, 600, DrawList::new(), config, MonospaceMeasurer::new());
        window.open_sidebar(SidebarSide::Right);
        assert!(window.is_sidebar_open());
        let bounds = window.tree().get(window.sidebar()).unwrap().bounds();
        assert_eq!(bounds, Rect::new(600, 0, 200, 600));
    }
}
