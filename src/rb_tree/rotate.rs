use crate::storage::Storage;
use super::{
    node::{Node, Side},
    RbTree,
};

impl<K, V, S> RbTree<K, V, S>
where S: Storage<Element = Node<K, V>>,
{
    /// Rotates the subtree rooted at `top` in the given direction.
    ///
    /// A left rotation promotes the right child of `top` (the pivot) into the place of `top`, which becomes the pivot's left child; the pivot's former left child is handed over to become the right child of `top`. A right rotation is the mirror image. In-order key sequence is preserved, the root is updated if `top` was the root, and colors are left for the caller to fix.
    ///
    /// # Panics
    /// The pivot must exist: `top` needs a right child for a left rotation and a left child for a right one.
    #[track_caller]
    pub(super) fn rotate(&mut self, top: usize, direction: Side) {
        let pivot_side = direction.opposite();
        let pivot = self
            .node(top)
            .child(pivot_side)
            .expect("rotation needs a child on the side opposite to the direction");
        let inner = self.node(pivot).child(direction);
        let parent = self.node(top).parent;
        log::trace!("rotating {} around node {} (pivot {})", direction.name(), top, pivot);

        self.node_mut(top).set_child(pivot_side, inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(top);
        }

        self.replace_child(parent, top, Some(pivot));
        self.node_mut(pivot).parent = parent;

        self.node_mut(pivot).set_child(direction, Some(top));
        self.node_mut(top).parent = Some(pivot);
    }
}

