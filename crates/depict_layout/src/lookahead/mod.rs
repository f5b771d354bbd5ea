//! One-element lookahead over an arbitrary iterator.
//!
//! Composites need to know whether the element they are about to render is the
//! last one, without knowing (or being able to afford) the length of their
//! source. [`LookaheadSequence`] answers that by prefetching exactly one
//! element ahead.
//!
//! With a cap of `N`, indices `0..N` are regular elements and index `N`, if the
//! source reaches it, is the *cap element*: [`has_reached_cap`] is true, it is
//! always the last element, and callers render an elision marker in its
//! place. At most `N + 1` source elements are ever pulled, so unbounded
//! sources are safe.
//!
//! [`has_reached_cap`]: LookaheadSequence::has_reached_cap

use std::iter::Fuse;

use crate::error::StateError;

/// Iterator wrapper exposing position predicates via one-element lookahead.
pub struct LookaheadSequence<I: Iterator> {
    source: Fuse<I>,
    current: Option<I::Item>,
    next: Option<I::Item>,
    index: Option<usize>,
    cap: Option<usize>,
    advanced: bool,
}

impl<I: Iterator> LookaheadSequence<I> {
    /// Wrap `source`, optionally capped at `cap` regular elements.
    pub fn new(source: impl IntoIterator<IntoIter = I>, cap: Option<usize>) -> Self {
        LookaheadSequence {
            source: source.into_iter().fuse(),
            current: None,
            next: None,
            index: None,
            cap,
            advanced: false,
        }
    }

    /// Wrap `source` without a cap.
    pub fn uncapped(source: impl IntoIterator<IntoIter = I>) -> Self {
        Self::new(source, None)
    }

    /// Move to the next element. Returns `false` once the sequence is
    /// exhausted, after which there is no current element.
    pub fn advance(&mut self) -> bool {
        let produced = if self.advanced {
            if self.has_reached_cap() {
                None
            } else {
                self.next.take()
            }
        } else {
            self.advanced = true;
            self.source.next()
        };

        let Some(item) = produced else {
            self.current = None;
            return false;
        };

        let index = self.index.map_or(0, |index| index + 1);
        self.index = Some(index);
        self.current = Some(item);
        self.next = if self.cap.is_some_and(|cap| index >= cap) {
            None
        } else {
            self.source.next()
        };
        true
    }

    /// The current element.
    pub fn current(&self) -> Result<&I::Item, StateError> {
        if !self.advanced {
            return Err(StateError::NotAdvanced);
        }
        self.current.as_ref().ok_or(StateError::Exhausted)
    }

    /// Zero-based position of the current (or, once exhausted, the last)
    /// element.
    pub fn index(&self) -> Result<usize, StateError> {
        if !self.advanced {
            return Err(StateError::NotAdvanced);
        }
        self.index.ok_or(StateError::Exhausted)
    }

    pub fn is_first(&self) -> bool {
        self.current.is_some() && self.index == Some(0)
    }

    /// Whether the current element is the last one that will be produced.
    pub fn is_last(&self) -> bool {
        self.current.is_some() && (self.next.is_none() || self.has_reached_cap())
    }

    /// Whether the source produced no element. Only meaningful after
    /// [`advance`](Self::advance) has been called at least once.
    pub fn is_empty(&self) -> Result<bool, StateError> {
        if !self.advanced {
            return Err(StateError::NotAdvanced);
        }
        Ok(self.index.is_none())
    }

    /// Whether the current position is the cap element.
    pub fn has_reached_cap(&self) -> bool {
        matches!((self.index, self.cap), (Some(index), Some(cap)) if index >= cap)
    }

    pub fn cap(&self) -> Option<usize> {
        self.cap
    }
}
