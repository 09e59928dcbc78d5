use crate::errors::Result;
use super::node::{TrieNode, FrequencyTrie};


/// Merge two tries into a new one. Neither input is modified.
///
/// At every path present in both inputs the counts are summed.
/// A path present in only one input is copied with its subtree unchanged.
/// Keys are compared by exact equality, so `"NA"` and `"na"` are
/// different branches.
///
/// The merged counts do not depend on the order of merging,
/// so slices can be folded into an accumulator one at a time.
/// Children of `a` keep their order;
/// children found only in `b` follow in `b`'s order.
///
/// Returns [`TrieError::SchemaMismatch`](crate::TrieError::SchemaMismatch)
/// if the two tries were built for different schemas.
pub fn merge(a: &FrequencyTrie, b: &FrequencyTrie) -> Result<FrequencyTrie> {
    a.schema.check_same(&b.schema)?;
    let mut merged = a.clone();
    merge_nodes(&mut merged.root, &b.root);
    Ok(merged)
}


/// Merge `b` into `a`. Only `a` is modified. See [`merge`].
pub fn merge_in_place(a: &mut FrequencyTrie, b: &FrequencyTrie) -> Result<()> {
    a.schema.check_same(&b.schema)?;
    merge_nodes(&mut a.root, &b.root);
    Ok(())
}


fn merge_nodes(dst: &mut TrieNode, src: &TrieNode) {
    dst.count += src.count;
    for child in &src.children {
        match dst.children.iter().position(|c| c.key == child.key) {
            Some(pos) => merge_nodes(&mut dst.children[pos], child),
            None => dst.children.push(child.clone()),
        }
    }
}


impl FrequencyTrie {
    /// Returns the merge of `self` and `other`. See [`merge`].
    #[inline]
    pub fn merge(&self, other: &FrequencyTrie) -> Result<FrequencyTrie> {
        merge(self, other)
    }


    /// Fold `other` into `self`. See [`merge_in_place`].
    #[inline]
    pub fn absorb(&mut self, other: &FrequencyTrie) -> Result<()> {
        merge_in_place(self, other)
    }
}
