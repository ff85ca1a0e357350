// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fmt;

/// One word in the tree, plus its children keyed by their exact distance
/// from this word.
///
/// Keys are unique per node. A second word at an occupied distance descends
/// into that child instead of replacing it, so every stored word survives.
/// `BTreeMap` keeps the keys ascending, which fixes query result order.
///
/// Drop and clone walk the subtree with explicit stacks. A chain of
/// duplicates is as deep as it is long, so neither may recurse per level.
pub(crate) struct Node {
    pub(crate) word: String,
    pub(crate) children: BTreeMap<usize, Box<Node>>,
}

impl Node {
    pub(crate) fn leaf(word: String) -> Self {
        Self {
            word,
            children: BTreeMap::new(),
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = std::mem::take(&mut self.children)
            .into_values()
            .collect();
        while let Some(mut node) = pending.pop() {
            // Detach before `node` goes out of scope, so its own drop is shallow
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        let mut root = Node::leaf(self.word.clone());

        // Copies in pre-order as (parent copy, edge key, node). `None` is the
        // root. A parent always sits at a lower index than its children.
        let mut copies: Vec<(Option<usize>, usize, Node)> = Vec::new();
        let mut pending: Vec<(Option<usize>, &Node)> = vec![(None, self)];
        while let Some((slot, node)) = pending.pop() {
            for (&key, child) in &node.children {
                copies.push((slot, key, Node::leaf(child.word.clone())));
                pending.push((Some(copies.len() - 1), &**child));
            }
        }

        // Attach from the back, so every child is complete before it moves
        while let Some((parent, key, node)) = copies.pop() {
            let parent = match parent {
                Some(index) => &mut copies[index].2,
                None => &mut root,
            };
            parent.children.insert(key, Box::new(node));
        }
        root
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("word", &self.word)
            .field("keys", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
