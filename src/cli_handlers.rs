use crate::bsp::{BspLayout, Rect};
use crate::error::Result;
use crate::graph::{self, Graph};
use crate::sorting;

/// The fixed example graph for the traversal demo.
///
/// ```text
///               A
///          /         \
///         B           C
///     /       \        \
///    D         E        F
///  /   \     /   \       \
/// G     H   F     I       K
///  \
///   K
/// ```
pub fn example_graph() -> Graph {
    let mut g = Graph::new();
    g.add_node("A", &["B", "C"]);
    g.add_node("B", &["D", "E"]);
    g.add_node("C", &["F"]);
    g.add_node("D", &["G", "H"]);
    g.add_node("E", &["F", "I"]);
    g.add_node("F", &["K"]);
    g.add_node("G", &["K"]);
    g.add_node("H", &[]);
    g.add_node("I", &[]);
    g.add_node("K", &[]);
    g
}

/// The fixed example numbers for the sort demo.
pub fn example_numbers() -> Vec<u32> {
    vec![3, 1, 41, 59, 26, 53, 59]
}

/// Handle the traverse command
pub fn handle_traverse() -> Result<()> {
    let graph = example_graph();
    let order = graph::traverse(&graph, "C")?;

    tracing::debug!(visited = order.len(), "traversal finished");

    for node in &order {
        println!("{node}");
    }

    Ok(())
}

/// Handle the sort command
pub fn handle_sort() -> Result<()> {
    let mut numbers = example_numbers();

    println!("{numbers:?}");
    let swaps = sorting::selection_sort(&mut numbers);
    println!("{numbers:?}");

    tracing::debug!(swaps, "selection sort finished");

    Ok(())
}

/// The fixed screen for the bsp demo.
pub fn example_screen() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 1920,
        height: 1080,
    }
}

/// Handle the bsp command
pub fn handle_bsp() -> Result<()> {
    let screen = example_screen();
    let mut layout = BspLayout::new();

    // Open four windows, focusing each as it appears
    for id in 1..=4 {
        layout.add_window(id);
        layout.focus(id);
    }
    print_frames(&layout, screen);

    println!("removed window 2");
    layout.remove_window(2);
    print_frames(&layout, screen);

    Ok(())
}

fn print_frames(layout: &BspLayout, screen: Rect) {
    let frames = layout.frames(screen);
    for id in layout.windows() {
        if let Some(frame) = frames.get(id) {
            println!(
                "window {id}: {}x{} at ({}, {})",
                frame.width, frame.height, frame.x, frame.y
            );
        }
    }
}
