//! Runtime inspection of derivation clauses.
//!
//! Allows iterating over the tag names of a clause for debugging.

use super::list::TagList;
use super::Deriving;

/// Runtime inspection of a clause's tags.
pub trait Inspect {
    /// Calls `f` with the short name of every tag in the clause.
    fn inspect<F: FnMut(&'static str)>(&self, f: F);
}

impl<L: TagList> Inspect for Deriving<L> {
    fn inspect<F: FnMut(&'static str)>(&self, mut f: F) {
        L::for_each_name(&mut f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivables::{Hash, Show};
    use crate::deriving;

    #[test]
    fn lists_every_tag_once() {
        let mut seen = 0;
        let mut has_show = false;
        <deriving![Show, Hash, Show]>::new().inspect(|name| {
            seen += 1;
            has_show |= name == "Show";
        });
        assert_eq!(seen, 2);
        assert!(has_show);
    }
}
