mod free_rect_tree;
mod rect;

pub mod geo_enums;

#[doc(inline)]
pub use free_rect_tree::FreeRectNode;
#[doc(inline)]
pub use free_rect_tree::FreeRectTree;
#[doc(inline)]
pub use free_rect_tree::NodeId;
#[doc(inline)]
pub use rect::Rect;
