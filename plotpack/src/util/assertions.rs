use crate::entities::{Layout, Placement, Selection, SelectionEntry};
use crate::geometry::{FreeRectTree, Rect};
use crate::util::FPA;
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn layout_is_feasible(layout: &Layout) -> bool {
    placements_within_plot(&layout.placements, layout.plot)
        && placements_are_disjoint(&layout.placements)
}

pub fn placements_within_plot(placements: &[Placement], plot: Rect) -> bool {
    match placements
        .iter()
        .find(|p| !plot.almost_contains(&p.footprint()))
    {
        Some(p) => {
            error!(
                "placement {:?} at ({}, {}) exceeds the plot {:?}",
                p.title, p.x, p.y, plot
            );
            false
        }
        None => true,
    }
}

pub fn placements_are_disjoint(placements: &[Placement]) -> bool {
    let overlapping = placements
        .iter()
        .tuple_combinations()
        .find(|(a, b)| a.footprint().almost_overlaps(&b.footprint()));

    match overlapping {
        Some((a, b)) => {
            error!(
                "footprints of {:?} and {:?} overlap: {:?}",
                a.title,
                b.title,
                Rect::intersection(a.footprint(), b.footprint())
            );
            false
        }
        None => true,
    }
}

/// Every split of the free-space tree must preserve area: free space + placed blocks = plot.
pub fn tree_area_is_conserved(tree: &FreeRectTree, placements: &[Placement]) -> bool {
    let root = tree.node(tree.root());
    let placed_area: f32 = placements.iter().map(|p| p.footprint().area()).sum();
    let total = tree.free_area() + placed_area;
    let expected = root.area();
    //relative tolerance, the areas are sums of many products
    let conserved = (total - expected).abs() <= expected * 1e-4;
    if !conserved {
        error!("free-space tree lost area: {total} != {expected}");
    }
    conserved
}

/// The flexible part of the selection may not exceed the area left by the required buildings by more than a single bucket.
pub fn selection_within_capacity(selection: &Selection, capacity: f32) -> bool {
    let (flexible, required): (Vec<_>, Vec<_>) = selection
        .entries
        .iter()
        .partition(|e| e.building.is_flexible());
    let area = |entries: &[&SelectionEntry]| -> f32 {
        entries
            .iter()
            .map(|e| e.building.area_with_indent() * e.count as f32)
            .sum()
    };
    let remaining = f32::max(capacity - area(&required), 0.0);
    let within = FPA(area(&flexible)) <= FPA(remaining + selection.bucket_size);
    if !within {
        error!(
            "selection uses {} of the {} area left by required buildings",
            area(&flexible),
            remaining
        );
    }
    within
}
