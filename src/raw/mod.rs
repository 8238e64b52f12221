//! The raw layer: node storage and the shared tree topology engine.
//!
//! Nothing here knows about balancing. The balance strategies plug their
//! insert/remove logic into [`RawTree`], which owns the arena, the root
//! link, the comparator and every topology operation the strategies share.

mod arena;
mod node;
mod tree;

pub(crate) use arena::NodeId;
pub(crate) use node::Side;
pub(crate) use tree::{Locate, RawTree};
