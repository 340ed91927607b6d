use super::index::ItemFrequencyIndex;
use crate::fp::Item;
use std::collections::HashMap;

/// Index of a node inside the tree's arena. Arena order is creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

const ROOT: NodeId = NodeId(0);

#[derive(Debug, Clone)]
pub struct FpNode<T> {
    item: Option<T>,
    count: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    node_link: Option<NodeId>,
}

impl<T> FpNode<T> {
    fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: Vec::new(),
            node_link: None,
        }
    }

    fn new_item(item: T, count: usize, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: Vec::new(),
            node_link: None,
        }
    }

    /// `None` only for the root sentinel.
    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Next node carrying the same item, in creation order.
    pub fn node_link(&self) -> Option<NodeId> {
        self.node_link
    }
}

#[derive(Debug, Clone)]
pub struct HeaderEntry<T> {
    pub item: T,
    pub count: usize,
    pub head: Option<NodeId>,
    tail: Option<NodeId>,
}

/// Per-tree item table in canonical order, holding each item's count and the
/// ends of its node-link chain.
#[derive(Debug, Clone)]
pub struct HeaderTable<T> {
    entries: Vec<HeaderEntry<T>>,
    positions: HashMap<T, usize>,
}

impl<T: Item> HeaderTable<T> {
    pub fn from_index(index: &ItemFrequencyIndex<T>) -> Self {
        let entries: Vec<HeaderEntry<T>> = index
            .iter()
            .map(|(item, count)| HeaderEntry {
                item: item.clone(),
                count: *count,
                head: None,
                tail: None,
            })
            .collect();
        let positions = entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (entry.item.clone(), pos))
            .collect();

        Self { entries, positions }
    }

    pub fn get(&self, item: &T) -> Option<&HeaderEntry<T>> {
        self.positions.get(item).map(|&pos| &self.entries[pos])
    }

    /// Entries from most to least frequent.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HeaderEntry<T>> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct FpTree<T> {
    nodes: Vec<FpNode<T>>,
    header: HeaderTable<T>,
}

impl<T: Item> FpTree<T> {
    pub fn new(header: HeaderTable<T>) -> Self {
        Self {
            nodes: vec![FpNode::new_root()],
            header,
        }
    }

    /// Builds a tree from transactions already in the index's canonical order.
    pub fn build<S: AsRef<[T]>>(index: &ItemFrequencyIndex<T>, ordered: &[S]) -> Self {
        let mut tree = Self::new(HeaderTable::from_index(index));
        for transaction in ordered {
            tree.insert(transaction.as_ref(), 1);
        }
        tree
    }

    /// Inserts one ordered transaction with the given weight.
    ///
    /// Every item must be present in the header table and the slice must
    /// follow the header's canonical order.
    pub fn insert(&mut self, transaction: &[T], weight: usize) {
        let mut current = ROOT;

        for item in transaction {
            let Some(&position) = self.header.positions.get(item) else {
                panic!("item {:?} inserted but absent from the header table", item);
            };

            let existing = self.nodes[current.0]
                .children
                .iter()
                .copied()
                .find(|child| self.nodes[child.0].item.as_ref() == Some(item));

            current = match existing {
                Some(child) => {
                    self.nodes[child.0].count += weight;
                    child
                }
                None => {
                    let new_id = NodeId(self.nodes.len());
                    self.nodes.push(FpNode::new_item(item.clone(), weight, current));
                    self.nodes[current.0].children.push(new_id);

                    let entry = &mut self.header.entries[position];
                    match entry.tail {
                        Some(tail) => self.nodes[tail.0].node_link = Some(new_id),
                        None => entry.head = Some(new_id),
                    }
                    entry.tail = Some(new_id);
                    new_id
                }
            };
        }
    }

    pub fn root(&self) -> &FpNode<T> {
        &self.nodes[ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> &FpNode<T> {
        &self.nodes[id.0]
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn header(&self) -> &HeaderTable<T> {
        &self.header
    }

    /// Walks the node-link chain of `item`.
    pub fn node_links(&self, item: &T) -> impl Iterator<Item = NodeId> + '_ {
        let head = self.header.get(item).and_then(|entry| entry.head);
        std::iter::successors(head, move |id| self.nodes[id.0].node_link)
    }

    /// Conditional pattern base of `item`: for every occurrence, the labels
    /// from just below the root down to the occurrence's parent, paired with
    /// the occurrence's count. Occurrences directly under the root yield an
    /// empty path.
    pub fn prefix_paths(&self, item: &T) -> Vec<(Vec<T>, usize)> {
        self.node_links(item)
            .map(|id| {
                let node = &self.nodes[id.0];
                let mut path = Vec::new();
                let mut current = node.parent;

                while let Some(parent_id) = current {
                    let parent = &self.nodes[parent_id.0];
                    if let Some(parent_item) = &parent.item {
                        path.push(parent_item.clone());
                    }
                    current = parent.parent;
                }

                path.reverse();
                (path, node.count)
            })
            .collect()
    }

    pub fn has_single_path(&self) -> bool {
        let mut current = ROOT;

        loop {
            match self.nodes[current.0].children.as_slice() {
                [] => return true,
                [only] => current = *only,
                _ => return false,
            }
        }
    }

    /// Items and counts along the leftmost root-to-leaf path.
    pub fn single_path(&self) -> Vec<(T, usize)> {
        let mut path = Vec::new();
        let mut current = ROOT;

        while let Some(&child) = self.nodes[current.0].children.first() {
            let node = &self.nodes[child.0];
            if let Some(item) = &node.item {
                path.push((item.clone(), node.count));
            }
            current = child;
        }
        path
    }

    /// Panics if the tree violates a structural invariant. A failure here
    /// means a construction bug, never bad user input.
    pub fn assert_invariants(&self) {
        let root = self.root();
        assert!(root.item.is_none(), "root carries an item");
        assert_eq!(root.count, 0, "root carries a count");
        assert!(root.parent.is_none(), "root has a parent");

        for (idx, node) in self.nodes.iter().enumerate() {
            let mut labels: Vec<&T> = Vec::with_capacity(node.children.len());
            for &child in &node.children {
                let child_node = &self.nodes[child.0];
                assert_eq!(child_node.parent, Some(NodeId(idx)), "child {:?} has a foreign parent", child);
                if idx != ROOT.0 {
                    assert!(child_node.count <= node.count, "child {:?} outcounts its parent", child);
                }
                if let Some(label) = &child_node.item {
                    assert!(!labels.contains(&label), "duplicate sibling label {:?}", label);
                    labels.push(label);
                }
            }
            if idx != ROOT.0 {
                assert!(node.item.is_some(), "node {} has no item", idx);
                assert!(node.count > 0, "node {} has a zero count", idx);
            }
        }

        let mut visited = vec![false; self.nodes.len()];
        for entry in &self.header.entries {
            let mut total = 0;
            let mut last: Option<NodeId> = None;
            for id in self.node_links(&entry.item) {
                assert!(!visited[id.0], "node {:?} linked twice", id);
                visited[id.0] = true;
                assert_eq!(self.nodes[id.0].item.as_ref(), Some(&entry.item), "chain of {:?} crosses labels", entry.item);
                if let Some(prev) = last {
                    assert!(prev < id, "chain of {:?} out of creation order", entry.item);
                }
                total += self.nodes[id.0].count;
                last = Some(id);
            }
            assert_eq!(last, entry.tail, "chain tail of {:?} is stale", entry.item);
            assert_eq!(total, entry.count, "header count of {:?} disagrees with its chain", entry.item);
        }

        for (idx, seen) in visited.iter().enumerate().skip(1) {
            assert!(*seen, "node {} missing from its node-link chain", idx);
        }
    }
}
