pub mod block_quote;
pub mod code_fence;
pub mod divider;
pub mod heading;
pub mod list_item;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceSig};
pub use divider::Divider;
pub use heading::Heading;
pub use list_item::ListItem;
