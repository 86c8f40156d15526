//! Scene node tree
//!
//! Scene content is a tree of nodes. A parent exclusively owns its children;
//! dropping the parent drops the subtree. Both per-frame operations default
//! to propagating to the children, so a node only overrides what it actually
//! does itself.

use crate::render::Painter;

/// A node in the scene tree
///
/// Implementors that own children return them from [`SceneNode::children`] /
/// [`SceneNode::children_mut`] and get advance/render propagation for free;
/// leaf nodes keep the empty defaults and override only the behavior they
/// carry.
pub trait SceneNode {
    /// Child nodes owned by this node
    fn children(&self) -> &[Box<dyn SceneNode>] {
        &[]
    }

    /// Mutable access to the owned children
    fn children_mut(&mut self) -> &mut [Box<dyn SceneNode>] {
        &mut []
    }

    /// Advance node state by `dt_secs` seconds
    ///
    /// The default implementation propagates to the children.
    fn advance(&mut self, dt_secs: f32) {
        for child in self.children_mut() {
            child.advance(dt_secs);
        }
    }

    /// Render this node through the painter seam
    ///
    /// The default implementation propagates to the children.
    fn render(&self, painter: &mut dyn Painter) {
        for child in self.children() {
            child.render(painter);
        }
    }
}

/// A plain container node holding owned children
#[derive(Default)]
pub struct NodeGroup {
    children: Vec<Box<dyn SceneNode>>,
}

impl NodeGroup {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a child node
    pub fn add_child(&mut self, child: Box<dyn SceneNode>) {
        self.children.push(child);
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl SceneNode for NodeGroup {
    fn children(&self) -> &[Box<dyn SceneNode>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn SceneNode>] {
        &mut self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::color::Color;
    use crate::render::DebugPainter;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Leaf node that counts how often it is advanced and rendered
    struct ProbeNode {
        advanced: Rc<Cell<u32>>,
        rendered: Rc<Cell<u32>>,
    }

    impl SceneNode for ProbeNode {
        fn advance(&mut self, _dt_secs: f32) {
            self.advanced.set(self.advanced.get() + 1);
        }

        fn render(&self, painter: &mut dyn Painter) {
            self.rendered.set(self.rendered.get() + 1);
            painter.draw_polygon(&[], Color::WHITE);
        }
    }

    fn probe() -> (ProbeNode, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let advanced = Rc::new(Cell::new(0));
        let rendered = Rc::new(Cell::new(0));
        let node = ProbeNode {
            advanced: Rc::clone(&advanced),
            rendered: Rc::clone(&rendered),
        };
        (node, advanced, rendered)
    }

    #[test]
    fn test_group_propagates_advance_and_render() {
        let (first, first_advanced, first_rendered) = probe();
        let (second, second_advanced, second_rendered) = probe();

        let mut group = NodeGroup::new();
        group.add_child(Box::new(first));
        group.add_child(Box::new(second));
        assert_eq!(group.len(), 2);

        group.advance(0.016);
        group.advance(0.016);
        assert_eq!(first_advanced.get(), 2);
        assert_eq!(second_advanced.get(), 2);

        let mut painter = DebugPainter::new();
        group.render(&mut painter);
        assert_eq!(first_rendered.get(), 1);
        assert_eq!(second_rendered.get(), 1);
        assert_eq!(painter.polygon_count(), 2);
    }

    #[test]
    fn test_nested_groups_propagate_to_leaves() {
        let (leaf, advanced, _) = probe();

        let mut inner = NodeGroup::new();
        inner.add_child(Box::new(leaf));
        let mut outer = NodeGroup::new();
        outer.add_child(Box::new(inner));

        outer.advance(1.0);
        assert_eq!(advanced.get(), 1);
    }

    #[test]
    fn test_dropping_parent_drops_children() {
        struct DropProbe(Rc<Cell<u32>>);
        impl SceneNode for DropProbe {}
        impl Drop for DropProbe {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        let mut group = NodeGroup::new();
        group.add_child(Box::new(DropProbe(Rc::clone(&drops))));
        group.add_child(Box::new(DropProbe(Rc::clone(&drops))));

        drop(group);
        assert_eq!(drops.get(), 2);
    }
}
