use indexmap::IndexMap;

/// Index of a circuit node. `0` always denotes ground and is never assigned
/// a matrix row.
pub type NodeId = usize;

pub const GROUND: NodeId = 0;

/// Maps node names to dense indices in first-seen order, with `"0"` pinned
/// to ground regardless of when it is first mentioned.
#[derive(Debug, Default, Clone)]
pub struct NodeTable {
    names: IndexMap<String, NodeId>,
    next: NodeId,
}

impl NodeTable {
    pub fn new() -> Self {
        let mut names = IndexMap::new();
        names.insert("0".to_string(), GROUND);
        Self { names, next: 1 }
    }

    /// Resolves a node name to its index, assigning the next free index the
    /// first time a non-ground name is seen.
    pub fn resolve(&mut self, name: &str) -> NodeId {
        let key = name.to_ascii_lowercase();
        if let Some(&id) = self.names.get(&key) {
            return id;
        }
        let id = self.next;
        self.next += 1;
        self.names.insert(key, id);
        id
    }

    /// Number of non-ground nodes, i.e. N in the dimension formula N + M - 1.
    pub fn node_count(&self) -> usize {
        self.next - 1
    }

    /// Looks up an already-seen node name without assigning a new one.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.names.get(&name.to_ascii_lowercase()).copied()
    }

    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.names
            .iter()
            .find(|(_, &v)| v == id)
            .map(|(k, _)| k.as_str())
    }

    /// Non-ground `(id, name)` pairs in ascending id order, for reporting.
    pub fn ordered_names(&self) -> Vec<(NodeId, &str)> {
        let mut out: Vec<(NodeId, &str)> = self
            .names
            .iter()
            .filter(|(_, &v)| v != GROUND)
            .map(|(k, &v)| (v, k.as_str()))
            .collect();
        out.sort_by_key(|(id, _)| *id);
        out
    }
}

/// Translates a 1-based-in-spec node index to a matrix row/column, returning
/// `None` for ground so callers can skip the contribution entirely.
pub fn matrix_index(node: NodeId) -> Option<usize> {
    if node == GROUND { None } else { Some(node - 1) }
}
