use serde::{Serialize, Deserialize};

use crate::Schema;
use crate::errors::Result;
use super::node::{TrieNode, FrequencyTrie};


/// A node of a [`ProbabilityTrie`].
/// Holds the count of the source node and
/// `probability = count / parent count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityNode {
    pub(super) key: String,
    pub(super) count: u64,
    pub(super) probability: f64,
    pub(super) children: Vec<ProbabilityNode>,
}


impl ProbabilityNode {
    /// Returns the symbol of this node.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }


    /// Returns the count of the source node.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }


    /// Returns the conditional probability of this node given its parent.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }


    /// Returns the children in insertion order.
    #[inline]
    pub fn children(&self) -> &[ProbabilityNode] {
        &self.children[..]
    }


    /// Returns the child whose key equals `key`.
    #[inline]
    pub fn child(&self, key: &str) -> Option<&ProbabilityNode> {
        self.children.iter().find(|c| c.key == key)
    }


    fn to_count_node(&self) -> TrieNode {
        TrieNode {
            key: self.key.clone(),
            count: self.count,
            children: self.children.iter()
                .map(|c| c.to_count_node())
                .collect(),
        }
    }
}


/// A frequency trie annotated with conditional probabilities.
/// Counts stay inspectable next to the probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTrie {
    pub(super) schema: Schema,
    pub(super) root: ProbabilityNode,
}


/// Annotate `trie` with conditional probabilities.
///
/// A child with count `c` under a node with count `C` gets
/// probability `c / C`. If `C == 0`, every child gets `0`.
/// The root gets probability `1`.
pub fn annotate(trie: &FrequencyTrie) -> ProbabilityTrie {
    ProbabilityTrie {
        schema: trie.schema.clone(),
        root: annotate_node(&trie.root, 1.0),
    }
}


fn annotate_node(node: &TrieNode, probability: f64) -> ProbabilityNode {
    let parent = node.count;
    let children = node.children.iter()
        .map(|child| {
            let p = if parent == 0 {
                0.0
            } else {
                child.count as f64 / parent as f64
            };
            annotate_node(child, p)
        })
        .collect::<Vec<_>>();

    ProbabilityNode {
        key: node.key.clone(),
        count: node.count,
        probability,
        children,
    }
}


impl ProbabilityTrie {
    /// Returns the schema of this trie.
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &ProbabilityNode {
        &self.root
    }


    /// Returns the number of records the counts were built from.
    #[inline]
    pub fn n_records(&self) -> u64 {
        self.root.count
    }


    /// Returns the node reached by following `path` from the root.
    pub fn node_at<S>(&self, path: &[S]) -> Option<&ProbabilityNode>
        where S: AsRef<str>,
    {
        path.iter()
            .try_fold(&self.root, |node, symbol| node.child(symbol.as_ref()))
    }


    /// Returns the probability at `path`, or `0` if the path does not exist.
    pub fn probability_at<S>(&self, path: &[S]) -> f64
        where S: AsRef<str>,
    {
        self.node_at(path).map_or(0.0, |node| node.probability)
    }


    /// Recover the underlying frequency trie.
    pub fn counts(&self) -> FrequencyTrie {
        FrequencyTrie {
            schema: self.schema.clone(),
            root: self.root.to_count_node(),
        }
    }


    /// Serialize `self` into a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }


    /// Deserialize a probability trie from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}


impl From<&FrequencyTrie> for ProbabilityTrie {
    #[inline]
    fn from(trie: &FrequencyTrie) -> Self {
        annotate(trie)
    }
}
