//! Defines the inner representation of the frequency trie.
use serde::{Serialize, Deserialize};

use crate::Schema;
use crate::errors::Result;


/// A node of a frequency trie.
/// The root node has the empty key.
///
/// `count` is the number of records whose path passes through this node.
/// It is at least the sum of the children's counts;
/// the difference is the number of records that end here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    pub(super) key: String,
    pub(super) count: u64,
    pub(super) children: Vec<TrieNode>,
}


impl TrieNode {
    /// Returns a node with no observation.
    #[inline]
    pub(crate) fn new<S: Into<String>>(key: S) -> Self {
        Self { key: key.into(), count: 0, children: Vec::new() }
    }


    /// Returns the symbol of this node.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }


    /// Returns the number of records that passed through this node.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }


    /// Returns the children in the order they were first inserted.
    #[inline]
    pub fn children(&self) -> &[TrieNode] {
        &self.children[..]
    }


    /// Returns the child whose key equals `key`.
    /// Keys are compared by exact equality.
    #[inline]
    pub fn child(&self, key: &str) -> Option<&TrieNode> {
        self.children.iter().find(|c| c.key == key)
    }


    /// Returns `true` if this node has no child.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }


    /// Returns the number of records that end at this node.
    pub fn terminating(&self) -> u64 {
        let through = self.children.iter()
            .map(|c| c.count)
            .sum::<u64>();
        self.count.saturating_sub(through)
    }


    /// Returns the child with `key`, inserting an empty one if absent.
    pub(super) fn child_or_insert(&mut self, key: &str) -> &mut TrieNode {
        let pos = match self.children.iter().position(|c| c.key == key) {
            Some(pos) => pos,
            None => {
                self.children.push(TrieNode::new(key));
                self.children.len() - 1
            },
        };
        &mut self.children[pos]
    }


    /// Number of nodes in the subtree rooted at `self`, `self` included.
    pub(crate) fn size(&self) -> usize {
        1 + self.children.iter().map(|c| c.size()).sum::<usize>()
    }


    /// Length of the longest path below `self`.
    pub(crate) fn height(&self) -> usize {
        self.children.iter()
            .map(|c| 1 + c.height())
            .max()
            .unwrap_or(0)
    }


    fn collect_paths(
        &self,
        prefix: &mut Vec<String>,
        out: &mut Vec<(Vec<String>, u64)>,
    )
    {
        for child in &self.children {
            prefix.push(child.key.clone());
            out.push((prefix.clone(), child.count));
            child.collect_paths(prefix, out);
            prefix.pop();
        }
    }
}


/// A frequency trie together with the schema of the records it holds.
///
/// Every record inserted into one trie has
/// `schema.n_attributes() + 1` symbols, label last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTrie {
    pub(super) schema: Schema,
    pub(super) root: TrieNode,
}


impl FrequencyTrie {
    /// Construct an empty trie for `schema`.
    pub fn new(schema: Schema) -> Self {
        Self { schema, root: TrieNode::new("") }
    }


    /// Returns the schema of this trie.
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }


    /// Returns the number of records inserted so far.
    #[inline]
    pub fn n_records(&self) -> u64 {
        self.root.count
    }


    /// Returns `true` if no record has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.count == 0
    }


    /// Insert a record.
    /// Every node on the record's path, root included,
    /// is incremented by one.
    pub fn insert<S>(&mut self, record: &[S]) -> Result<()>
        where S: AsRef<str>,
    {
        self.schema.check_record(record)?;

        let mut node = &mut self.root;
        node.count += 1;
        for symbol in record {
            node = node.child_or_insert(symbol.as_ref());
            node.count += 1;
        }
        Ok(())
    }


    /// Returns the node reached by following `path` from the root.
    pub fn node_at<S>(&self, path: &[S]) -> Option<&TrieNode>
        where S: AsRef<str>,
    {
        path.iter()
            .try_fold(&self.root, |node, symbol| node.child(symbol.as_ref()))
    }


    /// Returns the count at `path`, or `0` if the path does not exist.
    pub fn count_at<S>(&self, path: &[S]) -> u64
        where S: AsRef<str>,
    {
        self.node_at(path).map_or(0, |node| node.count)
    }


    /// Returns every non-root path with its count, depth first.
    pub fn paths(&self) -> Vec<(Vec<String>, u64)> {
        let mut out = Vec::new();
        self.root.collect_paths(&mut Vec::new(), &mut out);
        out
    }


    /// Returns the number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.root.size()
    }


    /// Returns the length of the longest path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.height()
    }


    /// Serialize `self` into a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }


    /// Deserialize a trie from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
