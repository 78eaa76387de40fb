//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Quadtree traversal

use crate::grid::GridSpace;
use crate::index::TileIndex;

/// Walk the quadtree below `node`.
///
/// Subtrees are pruned where `should_descend` is false. `on_leaf` is called for every
/// accepted node where `is_leaf` is true, all other accepted nodes are split into their
/// children (NW, NE, SW, SE). `is_leaf` has to hold at the finest level, otherwise the
/// walk does not terminate.
pub fn traverse_if<D, L, F>(node: TileIndex, mut should_descend: D, mut is_leaf: L, mut on_leaf: F)
where
    D: FnMut(&TileIndex) -> bool,
    L: FnMut(&TileIndex) -> bool,
    F: FnMut(TileIndex),
{
    walk(node, &mut should_descend, &mut is_leaf, &mut on_leaf);
}

fn walk<D, L, F>(node: TileIndex, should_descend: &mut D, is_leaf: &mut L, on_leaf: &mut F)
where
    D: FnMut(&TileIndex) -> bool,
    L: FnMut(&TileIndex) -> bool,
    F: FnMut(TileIndex),
{
    if !should_descend(&node) {
        return;
    }
    if is_leaf(&node) {
        on_leaf(node);
    } else {
        for child in node.children().iter() {
            walk(*child, should_descend, is_leaf, on_leaf);
        }
    }
}

/// Depth-first leaf iterator with the same pruning rules and order as [`traverse_if`]
pub struct QuadtreeIter<D, L> {
    stack: Vec<TileIndex>,
    should_descend: D,
    is_leaf: L,
}

impl<D, L> QuadtreeIter<D, L>
where
    D: FnMut(&TileIndex) -> bool,
    L: FnMut(&TileIndex) -> bool,
{
    pub fn new(root: TileIndex, should_descend: D, is_leaf: L) -> QuadtreeIter<D, L> {
        QuadtreeIter {
            stack: vec![root],
            should_descend,
            is_leaf,
        }
    }
}

impl<D, L> Iterator for QuadtreeIter<D, L>
where
    D: FnMut(&TileIndex) -> bool,
    L: FnMut(&TileIndex) -> bool,
{
    type Item = TileIndex;

    fn next(&mut self) -> Option<TileIndex> {
        while let Some(node) = self.stack.pop() {
            if !(self.should_descend)(&node) {
                continue;
            }
            if (self.is_leaf)(&node) {
                return Some(node);
            }
            // reversed, so that NW is popped first
            self.stack.extend(node.children().iter().rev());
        }
        None
    }
}

impl GridSpace {
    /// Walk the quadtree below `node`, see [`traverse_if`]
    pub fn traverse_if<D, L, F>(&self, node: TileIndex, should_descend: D, is_leaf: L, on_leaf: F)
    where
        D: FnMut(&TileIndex) -> bool,
        L: FnMut(&TileIndex) -> bool,
        F: FnMut(TileIndex),
    {
        traverse_if(node, should_descend, is_leaf, on_leaf)
    }
    /// Leaves on the finest grid level below `node` accepted by `should_descend`
    pub fn finest_tiles<'a, D>(
        &'a self,
        node: TileIndex,
        should_descend: D,
    ) -> QuadtreeIter<D, impl FnMut(&TileIndex) -> bool + 'a>
    where
        D: FnMut(&TileIndex) -> bool,
    {
        QuadtreeIter::new(node, should_descend, move |index: &TileIndex| {
            self.is_finest(index)
        })
    }
}
