//! # Focus chain construction
//!
//! A form hands its children to [`build_chain`] once per render. The result
//! has the same length and order as the input: non-focusable children pass
//! through untouched, every focusable child becomes a [`ChainEntry`] that
//! knows the render index of the nearest focusable sibling after it.
//!
//! The chain is built in one backward pass with a "next" accumulator, so any
//! number of non-focusable siblings between two fields never breaks the
//! link:
//!
//! ```rust
//! use formchain_core::chain::build_chain;
//!
//! let kids = ["text", "A", "spacer", "B", "text"];
//! let chain = build_chain(&kids, |k| k.len() == 1);
//!
//! let a = chain.entry_at(1).unwrap();
//! assert_eq!(a.next, Some(3));
//! assert_eq!(chain.entry_at(3).unwrap().next, None);
//! assert_eq!(chain.len(), 2);
//! ```
//!
//! Names follow the order entries are met during the backward pass, so the
//! last field is `input1`.

use crate::Child;
use crate::config::FocusPredicate;

#[derive(Clone, Debug, PartialEq)]
pub struct ChainEntry<C> {
    pub child: C,
    /// Per-render identity (`input1`, `input2`, ...).
    pub name: String,
    /// Render index in the original sequence.
    pub index: usize,
    /// Position among focusable children, counting from the front.
    pub position: usize,
    /// Render index of the next focusable child.
    pub next: Option<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChainNode<C> {
    Passthrough(C),
    Field(ChainEntry<C>),
}

impl<C> ChainNode<C> {
    pub fn entry(&self) -> Option<&ChainEntry<C>> {
        match self {
            ChainNode::Field(e) => Some(e),
            ChainNode::Passthrough(_) => None,
        }
    }

    pub fn child(&self) -> &C {
        match self {
            ChainNode::Field(e) => &e.child,
            ChainNode::Passthrough(c) => c,
        }
    }
}

/// Output of one chain build, in render order.
#[derive(Clone, Debug, PartialEq)]
pub struct Chain<C> {
    nodes: Vec<ChainNode<C>>,
    fields: usize,
}

impl<C> Chain<C> {
    pub fn nodes(&self) -> &[ChainNode<C>] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<ChainNode<C>> {
        self.nodes
    }

    /// Focusable entries in render order.
    pub fn entries(&self) -> impl Iterator<Item = &ChainEntry<C>> {
        self.nodes.iter().filter_map(ChainNode::entry)
    }

    pub fn entry_at(&self, index: usize) -> Option<&ChainEntry<C>> {
        self.nodes.get(index).and_then(ChainNode::entry)
    }

    pub fn head(&self) -> Option<&ChainEntry<C>> {
        self.entries().next()
    }

    pub fn next_of(&self, entry: &ChainEntry<C>) -> Option<&ChainEntry<C>> {
        entry.next.and_then(|i| self.entry_at(i))
    }

    /// Number of focusable entries.
    pub fn len(&self) -> usize {
        self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields == 0
    }
}

/// Link every focusable child to the next one.
///
/// `is_focusable` is evaluated exactly once per child.
pub fn build_chain<C: Clone>(children: &[C], mut is_focusable: impl FnMut(&C) -> bool) -> Chain<C> {
    let marks: Vec<bool> = children.iter().map(&mut is_focusable).collect();
    let total = marks.iter().filter(|&&m| m).count();

    let mut nodes = Vec::with_capacity(children.len());
    let mut next: Option<usize> = None;
    let mut seen = 0usize;

    for (index, child) in children.iter().enumerate().rev() {
        if !marks[index] {
            nodes.push(ChainNode::Passthrough(child.clone()));
            continue;
        }
        seen += 1;
        nodes.push(ChainNode::Field(ChainEntry {
            child: child.clone(),
            name: format!("input{seen}"),
            index,
            position: total - seen,
            next,
        }));
        next = Some(index);
    }
    nodes.reverse();

    Chain {
        nodes,
        fields: total,
    }
}

/// [`build_chain`] over form children with a configured predicate.
#[derive(Clone, Debug, Default)]
pub struct ChainBuilder {
    predicate: FocusPredicate,
}

impl ChainBuilder {
    pub fn new(predicate: FocusPredicate) -> Self {
        Self { predicate }
    }

    pub fn build(&self, children: &[Child]) -> Chain<Child> {
        build_chain(children, |c| self.predicate.matches(c))
    }
}
