//! Generic segment-tree engine for rangekit aggregates.
//!
//! [`SegTree`] answers range queries and point/range updates in `O(log n)`
//! over any [`Aggregate`] plug-in. Nodes live in a flat implicit binary tree
//! (`rangekit-segment` addressing); bulk range updates are deferred as
//! pending markers and pushed into children in place before every descent
//! past a partially covered node.
//!
//! Queries take `&mut self`: push-down materializes deferred work in the
//! children it descends through.
//!
//! If a checked bulk application or marker composition fails mid-descent
//! (see [`TreeError::Overflow`]), the error propagates and the operation is
//! abandoned partway. The tree stays memory safe but its aggregates are
//! unspecified afterwards; rebuild it before further use.

use std::ops::Range;

use rangekit_aggregate::{Aggregate, TreeError};
use rangekit_segment::{left_child, right_child, tree_capacity, Overlap, Segment, ROOT};

/// Interval-aggregation tree over a fixed-size array.
///
/// Built once from a source slice (or identity leaves via
/// [`SegTree::with_len`]), mutated in place, dropped; never resized.
#[derive(Debug, Clone)]
pub struct SegTree<A: Aggregate> {
    len: usize,
    /// Flat implicit tree. Slots the build never reaches stay `None`.
    nodes: Vec<Option<A>>,
    /// Pending bulk-update markers, one lane per internal node. Empty when
    /// the aggregate has no bulk-update support.
    pending: Vec<Option<A::Marker>>,
}

impl<A: Aggregate> SegTree<A> {
    /// Builds a tree whose leaves are seeded from `leaves`, left to right.
    ///
    /// O(n). An empty slice yields a degenerate empty tree that rejects
    /// every operation with [`TreeError::InvalidRange`].
    pub fn from_slice(leaves: &[A::Leaf]) -> Self {
        let len = leaves.len();
        let capacity = tree_capacity(len);
        let mut tree = SegTree {
            len,
            nodes: vec![None; capacity],
            pending: if A::RANGE_UPDATES {
                vec![None; capacity]
            } else {
                Vec::new()
            },
        };
        if len > 0 {
            tree.build(ROOT, Segment::new(0, len - 1), leaves);
        }
        tree
    }

    /// Builds a tree of `len` identity leaves, for update-only workloads.
    pub fn with_len(len: usize) -> Self
    where
        A::Leaf: Default,
    {
        let leaves: Vec<A::Leaf> = std::iter::repeat_with(A::Leaf::default).take(len).collect();
        Self::from_slice(&leaves)
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the tree has no leaves.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Aggregate of the leaves in `range` (half-open).
    pub fn query(&mut self, range: Range<usize>) -> Result<A, TreeError> {
        let query = self.check_range(&range)?;
        self.query_node(ROOT, self.root_segment(), query)
    }

    /// Aggregate of the single leaf at `index`.
    pub fn get(&mut self, index: usize) -> Result<A, TreeError> {
        self.query(index..index.wrapping_add(1))
    }

    /// Replaces the leaf at `index` and recomputes its ancestors.
    pub fn point_update(&mut self, index: usize, leaf: A::Leaf) -> Result<(), TreeError> {
        if index >= self.len {
            return Err(TreeError::InvalidRange {
                start: index,
                end: index.wrapping_add(1),
                len: self.len,
            });
        }
        self.point_update_node(ROOT, self.root_segment(), index, &leaf)
    }

    /// Applies a bulk operation to every leaf in `range` (half-open),
    /// deferring the work below fully covered nodes as pending markers.
    ///
    /// Rejected with [`TreeError::UnsupportedOperation`] unless the
    /// aggregate opts into bulk updates.
    pub fn range_update(&mut self, range: Range<usize>, marker: A::Marker) -> Result<(), TreeError> {
        if !A::RANGE_UPDATES {
            return Err(TreeError::UnsupportedOperation {
                aggregate: std::any::type_name::<A>(),
            });
        }
        let update = self.check_range(&range)?;
        self.range_update_node(ROOT, self.root_segment(), update, &marker)
    }

    fn root_segment(&self) -> Segment {
        Segment::new(0, self.len - 1)
    }

    /// Converts a half-open caller range to the closed segment the
    /// addressing math uses, rejecting empty and out-of-bounds ranges.
    fn check_range(&self, range: &Range<usize>) -> Result<Segment, TreeError> {
        if range.start >= range.end || range.end > self.len {
            return Err(TreeError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.len,
            });
        }
        Ok(Segment::new(range.start, range.end - 1))
    }

    /// Shared access to a node the recursion has reached. Every reachable
    /// slot is materialized during build.
    fn node(&self, index: usize) -> &A {
        self.nodes[index]
            .as_ref()
            .expect("reachable nodes are materialized during build")
    }

    fn combine_children(&self, index: usize) -> A {
        self.node(left_child(index)).combine(self.node(right_child(index)))
    }

    fn build(&mut self, node: usize, seg: Segment, leaves: &[A::Leaf]) {
        if seg.is_unit() {
            self.nodes[node] = Some(A::from_leaf(&leaves[seg.lo()]));
            return;
        }
        let (left_seg, right_seg) = seg.split();
        self.build(left_child(node), left_seg, leaves);
        self.build(right_child(node), right_seg, leaves);
        self.nodes[node] = Some(self.combine_children(node));
    }

    /// Applies `marker` to a node covering `seg`: its materialized
    /// aggregate is updated in closed form, and internal nodes record the
    /// marker as pending work for their descendants.
    fn apply_to(&mut self, node: usize, seg: Segment, marker: &A::Marker) -> Result<(), TreeError> {
        let aggregate = self.nodes[node]
            .as_mut()
            .expect("reachable nodes are materialized during build");
        aggregate.apply(marker, seg.len())?;
        if !seg.is_unit() {
            match self.pending[node].as_mut() {
                Some(prev) => A::compose(prev, marker)?,
                None => self.pending[node] = Some(marker.clone()),
            }
        }
        Ok(())
    }

    /// Transfers a pending marker into both children in place, leaving them
    /// independently correct before the recursion descends past `node`.
    fn push_down(&mut self, node: usize, seg: Segment) -> Result<(), TreeError> {
        if !A::RANGE_UPDATES {
            return Ok(());
        }
        let Some(marker) = self.pending[node].take() else {
            return Ok(());
        };
        let (left_seg, right_seg) = seg.split();
        self.apply_to(left_child(node), left_seg, &marker)?;
        self.apply_to(right_child(node), right_seg, &marker)
    }

    fn query_node(&mut self, node: usize, seg: Segment, query: Segment) -> Result<A, TreeError> {
        match seg.classify(query) {
            // The materialized aggregate already reflects this node's own
            // pending marker.
            Overlap::Total => Ok(self.node(node).clone()),
            Overlap::LeftHalf => {
                self.push_down(node, seg)?;
                let (left_seg, _) = seg.split();
                self.query_node(left_child(node), left_seg, query)
            }
            Overlap::RightHalf => {
                self.push_down(node, seg)?;
                let (_, right_seg) = seg.split();
                self.query_node(right_child(node), right_seg, query)
            }
            Overlap::BothHalves => {
                self.push_down(node, seg)?;
                let (left_seg, right_seg) = seg.split();
                let left = self.query_node(left_child(node), left_seg, query)?;
                let right = self.query_node(right_child(node), right_seg, query)?;
                // Left-to-right order matters for non-commutative combines.
                Ok(left.combine(&right))
            }
        }
    }

    fn point_update_node(
        &mut self,
        node: usize,
        seg: Segment,
        index: usize,
        leaf: &A::Leaf,
    ) -> Result<(), TreeError> {
        if seg.is_unit() {
            self.nodes[node] = Some(A::from_leaf(leaf));
            return Ok(());
        }
        self.push_down(node, seg)?;
        let (left_seg, right_seg) = seg.split();
        if left_seg.contains(index) {
            self.point_update_node(left_child(node), left_seg, index, leaf)?;
        } else {
            self.point_update_node(right_child(node), right_seg, index, leaf)?;
        }
        self.nodes[node] = Some(self.combine_children(node));
        Ok(())
    }

    fn range_update_node(
        &mut self,
        node: usize,
        seg: Segment,
        update: Segment,
        marker: &A::Marker,
    ) -> Result<(), TreeError> {
        match seg.classify(update) {
            Overlap::Total => self.apply_to(node, seg, marker),
            Overlap::LeftHalf => {
                self.push_down(node, seg)?;
                let (left_seg, _) = seg.split();
                self.range_update_node(left_child(node), left_seg, update, marker)?;
                self.nodes[node] = Some(self.combine_children(node));
                Ok(())
            }
            Overlap::RightHalf => {
                self.push_down(node, seg)?;
                let (_, right_seg) = seg.split();
                self.range_update_node(right_child(node), right_seg, update, marker)?;
                self.nodes[node] = Some(self.combine_children(node));
                Ok(())
            }
            Overlap::BothHalves => {
                self.push_down(node, seg)?;
                let (left_seg, right_seg) = seg.split();
                self.range_update_node(left_child(node), left_seg, update, marker)?;
                self.range_update_node(right_child(node), right_seg, update, marker)?;
                self.nodes[node] = Some(self.combine_children(node));
                Ok(())
            }
        }
    }
}
