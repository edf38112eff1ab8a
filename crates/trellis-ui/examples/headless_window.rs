//! Headless window demo.
//!
//! Builds a small settings screen, feeds it a few input events and prints the
//! recorded draw list. Run with `RUST_LOG=trellis_ui=trace` to see routing.

use std::cell::Cell;
use std::rc::Rc;
use trellis_core::logging;
use trellis_core::math::Vec2;
use trellis_core::profiling::{self, ProfilingBackend};
use trellis_ui::{
    Dimension, Direction, DrawCommand, DrawList, MouseButton, MouseEventType, SidebarSide,
    SpacingPolicy, UiEvent, Window,
};

fn main() {
    logging::init();
    profiling::init_profiling(ProfilingBackend::InProcess);

    let mut window = Window::new(800, 600, DrawList::new());
    let clicks = Rc::new(Cell::new(0));

    let tree = window.tree_mut();
    let root = tree.root();
    tree.set_direction(root, Direction::Column);
    tree.set_spacing_policy(root, SpacingPolicy::Around);

    let header = tree.create_panel();
    tree.set_constraint_fixed(header, Dimension::Height, 60);
    let title = tree.create_label("Settings");
    tree.add_child(header, title).ok();
    tree.add_child(root, header).ok();

    let body = tree.create_panel();
    for name in ["Audio", "Video", "Controls"] {
        let entry = tree.create_label(name);
        let counter = clicks.clone();
        tree.add_mouse_listener(entry, MouseEventType::Click, move |_, event| {
            counter.set(counter.get() + 1);
            tracing::info!("Clicked {}", event.widget);
            true
        })
        .ok();
        tree.add_child(body, entry).ok();
    }
    tree.add_child(root, body).ok();

    let sidebar = window.sidebar();
    let tree = window.tree_mut();
    let menu = tree.create_label("Menu");
    tree.add_child(sidebar, menu).ok();

    let position = Vec2::new(400.0, 300.0);
    for event in [
        UiEvent::MouseMoved { position },
        UiEvent::MouseButtonDown {
            button: MouseButton::Left,
            position,
        },
        UiEvent::MouseButtonUp {
            button: MouseButton::Left,
            position,
        },
    ] {
        window.process_event(&event);
    }

    window.open_sidebar(SidebarSide::Left);
    for _ in 0..10 {
        profiling::new_frame();
        window.surface_mut().clear();
        window.render(16.0);
    }

    println!("clicks: {}", clicks.get());
    println!("sidebar: {:?}", window.sidebar_state());
    for command in window.surface().commands() {
        match command {
            DrawCommand::Text { text, .. } => {
                println!("text {:?} at ({}, {})", text.text, text.origin.x, text.origin.y)
            }
            other => println!("{:?}", other),
        }
    }
}
