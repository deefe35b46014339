mod block;
mod building;
mod instance;
mod layout;
mod placement;
mod selection;

#[doc(inline)]
pub use block::Block;

#[doc(inline)]
pub use building::BuildingFact;

#[doc(inline)]
pub use building::BuildingKind;

#[doc(inline)]
pub use instance::KnapsackInstance;

#[doc(inline)]
pub use instance::PackInstance;

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use placement::Placement;

#[doc(inline)]
pub use selection::Selection;

#[doc(inline)]
pub use selection::SelectionEntry;
