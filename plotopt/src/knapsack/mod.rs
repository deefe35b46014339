mod item;
mod solver;
mod table;

#[doc(inline)]
pub use item::KnapsackItem;

#[doc(inline)]
pub use solver::KnapsackSolver;

#[doc(inline)]
pub use table::DPTable;
