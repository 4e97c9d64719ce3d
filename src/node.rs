/// How item markers of a list are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberingStyle {
    #[default]
    Arabic,
    RomanUpper,
    RomanLower,
    AlphaUpper,
    AlphaLower,
}

/// Style names accepted by `type=`, in lookup order.
const STYLE_NAMES: &[(&str, NumberingStyle)] = &[
    ("number", NumberingStyle::Arabic),
    ("roman", NumberingStyle::RomanUpper),
    ("romanbig", NumberingStyle::RomanUpper),
    ("romansmall", NumberingStyle::RomanLower),
    ("alpha", NumberingStyle::AlphaLower),
    ("alphasmall", NumberingStyle::AlphaLower),
    ("alphabig", NumberingStyle::AlphaUpper),
];

impl NumberingStyle {
    /// Look up a style by name. Unknown names fall back to [`NumberingStyle::Arabic`].
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or_default()
    }

    /// Look up a style by name, returning `None` for unknown names.
    pub fn lookup(name: &str) -> Option<Self> {
        STYLE_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, style)| *style)
    }
}

/// Index of a node inside a [`ListTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A nested list hung under one item of its parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// 1-based item index in the parent. Not range checked.
    pub item: i64,
    pub node: NodeId,
}

/// One level of a numbered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    /// Item index this list hangs under, or the label of a top-level list
    pub number: i64,
    pub length: usize,
    pub style: NumberingStyle,
    pub closure: String,
    pub left_pad: bool,
    pub children: Vec<Attachment>,
}

impl ListNode {
    pub fn new(number: i64, length: usize, style: NumberingStyle, closure: String) -> Self {
        Self {
            number,
            length,
            style,
            closure,
            left_pad: false,
            children: Vec::new(),
        }
    }
}

/// All lists parsed from a single specification string.
///
/// Nodes live in an arena and refer to their children by [`NodeId`], so the
/// tree never needs parent pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTree {
    nodes: Vec<ListNode>,
    root: NodeId,
}

impl ListTree {
    pub(crate) fn from_parts(nodes: Vec<ListNode>, root: NodeId) -> Self {
        debug_assert!(root.0 < nodes.len());
        Self { nodes, root }
    }

    pub(crate) fn push(nodes: &mut Vec<ListNode>, node: ListNode) -> NodeId {
        nodes.push(node);
        NodeId(nodes.len() - 1)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &ListNode {
        &self.nodes[id.0]
    }

    /// Number of nodes in the tree, root included. Never zero.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The list attached under `item` of `parent`. First match wins.
    pub fn child_for_item(&self, parent: NodeId, item: i64) -> Option<NodeId> {
        self.node(parent)
            .children
            .iter()
            .find(|attachment| attachment.item == item)
            .map(|attachment| attachment.node)
    }

    /// Number of items reachable from the root that end their own line,
    /// i.e. items with no list rendered under them.
    pub fn leaf_line_count(&self) -> usize {
        self.leaf_lines_below(self.root)
    }

    fn leaf_lines_below(&self, id: NodeId) -> usize {
        let mut count = 0;
        for item in 1..=self.node(id).length as i64 {
            match self.child_for_item(id, item) {
                Some(child) => count += self.leaf_lines_below(child),
                None => count += 1,
            }
        }
        count
    }
}
