mod list;
mod slab;

pub(crate) use self::list::Links;
pub(crate) use self::slab::{Node, Slab, SlotId};
