mod budget;
mod packer;
mod search;
mod strategy;

#[doc(inline)]
pub use budget::{AbortReason, SearchBudget};

#[doc(inline)]
pub use packer::{PackOutcome, PackState, RectanglePacker};

#[doc(inline)]
pub use search::{FitResult, fit_in_order, try_fit};

#[doc(inline)]
pub use strategy::{SortKey, SortOrder, Strategy};
