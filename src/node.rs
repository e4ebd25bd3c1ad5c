use alloc::boxed::Box;
use alloc::vec::Vec;
use tracing::trace;

/// A single trie node.
///
/// `children` is indexed directly by the mapped symbol index. It only grows as far as
/// the highest index ever used below this node, so a node with one child at index 3
/// holds four slots, not one per alphabet symbol.
#[derive(Default)]
pub(crate) struct Node {
    children: Vec<Option<Box<Node>>>,
    terminal: bool,
}

/// What a single [`Node::insert_path`] call changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Growth {
    /// Nodes allocated along the path.
    pub(crate) created: usize,
    /// Whether the path end was newly marked terminal.
    pub(crate) terminal: bool,
}

impl Node {
    pub(crate) fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)?.as_deref()
    }

    /// Returns the child at `index`, allocating it first if needed. The second field
    /// is true when the child was just created.
    pub(crate) fn child_or_insert(&mut self, index: usize) -> (&mut Node, bool) {
        if self.children.len() <= index {
            self.children.resize_with(index + 1, || None);
        }
        let slot = &mut self.children[index];
        let created = slot.is_none();
        (&mut **slot.get_or_insert_with(Box::default), created)
    }

    pub(crate) fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns true if the node was not terminal before.
    pub(crate) fn mark_terminal(&mut self) -> bool {
        !core::mem::replace(&mut self.terminal, true)
    }

    /// Same terminal flag and slot count, every slot empty.
    fn shallow_copy(&self) -> Node {
        Node {
            children: self.children.iter().map(|_| None).collect(),
            terminal: self.terminal,
        }
    }

    pub(crate) fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Number of child slots currently allocated.
    #[cfg(test)]
    pub(crate) fn width(&self) -> usize {
        self.children.len()
    }

    /// Follows `path` from this node, creating missing children on the way.
    ///
    /// A `None` entry stops the walk: whatever was created so far stays, but nothing
    /// is marked terminal. An empty path marks nothing either.
    pub(crate) fn insert_path<I>(&mut self, path: I) -> Growth
    where
        I: IntoIterator<Item = Option<usize>>,
    {
        let mut node = self;
        let mut created = 0;
        let mut depth = 0;
        for index in path {
            let Some(index) = index else {
                trace!(depth, "out-of-range element, insertion truncated");
                return Growth {
                    created,
                    terminal: false,
                };
            };
            let (child, fresh) = node.child_or_insert(index);
            created += usize::from(fresh);
            depth += 1;
            node = child;
        }
        Growth {
            created,
            terminal: depth > 0 && node.mark_terminal(),
        }
    }
}

impl Clone for Node {
    // Copied with an explicit worklist, like `drop`, so depth does not matter.
    fn clone(&self) -> Self {
        // (slot in parent, source, next slot to visit, copy under construction)
        let mut stack: Vec<(usize, &Node, usize, Node)> =
            alloc::vec![(0, self, 0, self.shallow_copy())];
        let mut root = None;
        while let Some((_, source, next, _)) = stack.last_mut() {
            let source: &Node = *source;
            let pending = source.children[*next..]
                .iter()
                .position(Option::is_some)
                .map(|offset| *next + offset);
            match pending.and_then(|index| Some((index, source.child(index)?))) {
                Some((index, child)) => {
                    *next = index + 1;
                    stack.push((index, child, 0, child.shallow_copy()));
                }
                None => {
                    let Some((slot, _, _, copy)) = stack.pop() else {
                        break;
                    };
                    match stack.last_mut() {
                        Some((_, _, _, parent)) => parent.children[slot] = Some(Box::new(copy)),
                        None => root = Some(copy),
                    }
                }
            }
        }
        root.unwrap_or_default()
    }
}

impl Drop for Node {
    // Tear the subtree down iteratively; long inserted sequences would otherwise
    // recurse once per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.children.drain(..).flatten().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain(..).flatten());
        }
    }
}
