use crate::entities::{Layout, Placement, Selection};
use crate::io::ext_repr::{ExtLayout, ExtPlacement, ExtSelection, ExtSelectionEntry};

pub fn export_selection(selection: &Selection) -> ExtSelection {
    let entries = selection
        .entries
        .iter()
        .map(|e| ExtSelectionEntry {
            title: e.building.title.clone(),
            kind: e.building.kind,
            count: e.count,
            area_with_indent: e.building.area_with_indent(),
            price_to_build: e.building.price_to_build,
            profit: e.building.profit,
        })
        .collect();

    ExtSelection {
        entries,
        total_profit: selection.total_profit,
        total_area: selection.total_area(),
        total_cost: selection.total_cost(),
        capacity_cells: selection.capacity_cells,
        bucket_size: selection.bucket_size,
        fast_path: selection.fast_path,
    }
}

pub fn export_placement(placement: &Placement) -> ExtPlacement {
    ExtPlacement {
        title: placement.title.clone(),
        indent: placement.indent,
        width: placement.width,
        height: placement.height,
        x: placement.x,
        y: placement.y,
        rotated: placement.rotated,
    }
}

pub fn export_layout(layout: &Layout) -> ExtLayout {
    ExtLayout {
        plot_width: layout.plot.width(),
        plot_height: layout.plot.height(),
        density: layout.density(),
        placements: layout.placements.iter().map(export_placement).collect(),
    }
}
