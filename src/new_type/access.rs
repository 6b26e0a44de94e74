//! Access to the stored value: `Hash`, `Indirection`, `ImplicitConversion`.

use core::borrow::Borrow;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

use super::NewType;
use crate::clause::Derives;
use crate::derivables as tag;

/// Hashes exactly as the base value does.
impl<B, Tag, D> Hash for NewType<B, Tag, D>
where
    B: Hash,
    D: Derives<tag::Hash>,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<B, Tag, D> Deref for NewType<B, Tag, D>
where
    D: Derives<tag::Indirection>,
{
    type Target = B;

    #[inline]
    fn deref(&self) -> &B {
        &self.value
    }
}

impl<B, Tag, D> DerefMut for NewType<B, Tag, D>
where
    D: Derives<tag::Indirection>,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut B {
        &mut self.value
    }
}

impl<B, Tag, D> AsRef<B> for NewType<B, Tag, D>
where
    D: Derives<tag::ImplicitConversion>,
{
    #[inline]
    fn as_ref(&self) -> &B {
        &self.value
    }
}

impl<B, Tag, D> Borrow<B> for NewType<B, Tag, D>
where
    D: Derives<tag::ImplicitConversion>,
{
    #[inline]
    fn borrow(&self) -> &B {
        &self.value
    }
}
