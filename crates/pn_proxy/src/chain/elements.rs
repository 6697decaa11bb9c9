use core::fmt;

use crate::PropertyError;
use crate::chain::PathChain;
use crate::info::CollectionKind;

/// The container a stand-in returns for a collection-valued property.
///
/// Holds exactly one element stand-in when the element type is navigable, and
/// nothing when it is terminal. Use [`any`] to continue the chain through the
/// element.
///
/// [`any`]: crate::chain::any
pub struct Elements<P> {
    kind: CollectionKind,
    type_path: &'static str,
    items: Vec<P>,
    chain: PathChain,
}

impl<P> Elements<P> {
    #[inline]
    pub(crate) fn new(
        kind: CollectionKind,
        type_path: &'static str,
        items: Vec<P>,
        chain: PathChain,
    ) -> Self {
        Self {
            kind,
            type_path,
            items,
            chain,
        }
    }

    /// The declared container shape.
    #[inline]
    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// The path of the declared container type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows the element stand-in, if there is one.
    #[inline]
    pub fn first(&self) -> Option<&P> {
        self.items.first()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, P> {
        self.items.iter()
    }

    /// Unwraps the sole element stand-in.
    ///
    /// Fails with [`PropertyError::UnsupportedTarget`] when the elements are
    /// terminal values, and poisons the chain.
    pub fn any(self) -> Result<P, PropertyError> {
        match self.items.into_iter().next() {
            Some(element) => Ok(element),
            None => {
                let error = PropertyError::unsupported(
                    self.type_path,
                    "collection elements are not navigable",
                );
                self.chain.fail(error.clone());
                Err(error)
            }
        }
    }
}

impl<P> IntoIterator for Elements<P> {
    type Item = P;
    type IntoIter = alloc::vec::IntoIter<P>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a Elements<P> {
    type Item = &'a P;
    type IntoIter = core::slice::Iter<'a, P>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<P: fmt::Debug> fmt::Debug for Elements<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Elements")
            .field("kind", &self.kind)
            .field("type_path", &self.type_path)
            .field("items", &self.items)
            .finish()
    }
}
