use crate::pack::{AbortReason, SearchBudget};
use plotpack::entities::{Block, Placement};
use plotpack::geometry::FreeRectTree;

/// Result of fitting an ordered list of blocks into a free-space tree
#[derive(Clone, Debug)]
pub enum FitResult {
    /// All blocks were placed. Placements are in the order of the input.
    Placed {
        placements: Vec<Placement>,
        tree: FreeRectTree,
    },
    /// No combination of orientations lets all blocks fit in this order
    Infeasible,
    /// The search budget ran out before a conclusion was reached
    Aborted(AbortReason),
}

/// Fits the blocks in the given order into `tree`.
///
/// The head block goes into the first free node (depth-first, `down` before `right`) that can hold it.
/// The tail is then fitted recursively against a copy of the split tree.
/// If the head does not fit, or the tail cannot be fitted afterwards, the head's rotated orientation is tried next (if allowed).
/// `tree` itself is never modified: every tentative placement works on its own copy.
pub fn try_fit(order: &[&Block], tree: &FreeRectTree, budget: &mut SearchBudget) -> FitResult {
    let mut placed_rev = Vec::with_capacity(order.len());
    match fit_recursive(order, tree, budget, &mut placed_rev) {
        Step::Done(tree) => {
            placed_rev.reverse();
            FitResult::Placed {
                placements: placed_rev,
                tree,
            }
        }
        Step::Aborted(reason) => FitResult::Aborted(reason),
        Step::Infeasible => FitResult::Infeasible,
    }
}

/// Fits the blocks in the given order into an empty `plot_width` x `plot_height` plot, without any search budget.
pub fn fit_in_order(order: &[&Block], plot_width: f32, plot_height: f32) -> Option<Vec<Placement>> {
    let tree = FreeRectTree::new(plot_width, plot_height);
    match try_fit(order, &tree, &mut SearchBudget::unlimited()) {
        FitResult::Placed { placements, .. } => Some(placements),
        FitResult::Infeasible | FitResult::Aborted(_) => None,
    }
}

enum Step {
    /// Holds the tree after the last block was placed
    Done(FreeRectTree),
    Infeasible,
    Aborted(AbortReason),
}

/// On success, `placed_rev` holds the placements in reverse order.
fn fit_recursive(
    order: &[&Block],
    tree: &FreeRectTree,
    budget: &mut SearchBudget,
    placed_rev: &mut Vec<Placement>,
) -> Step {
    let Some((head, tail)) = order.split_first() else {
        return Step::Done(tree.clone());
    };

    for &orientation in head.orientations() {
        if let Err(reason) = budget.spend() {
            return Step::Aborted(reason);
        }
        let (width, height) = head.dims(orientation);
        let mut branch = tree.clone();
        let Some((x, y)) = branch.insert(width, height) else {
            continue;
        };

        match fit_recursive(tail, &branch, budget, placed_rev) {
            Step::Done(final_tree) => {
                placed_rev.push(Placement {
                    title: head.title.clone(),
                    indent: head.indent,
                    width,
                    height,
                    x,
                    y,
                    rotated: orientation.is_rotated(),
                });
                return Step::Done(final_tree);
            }
            Step::Aborted(reason) => return Step::Aborted(reason),
            Step::Infeasible => continue,
        }
    }
    Step::Infeasible
}
