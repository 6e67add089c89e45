use std::iter::FusedIterator;

/// Lazy iterator over the elements of one index bucket, in insertion order.
///
/// Returned by [`IndexedCollection::search_iter`](super::IndexedCollection::search_iter).
#[derive(Debug, Clone)]
pub struct Matches<'a, E> {
    elements: &'a [E],
    slots: std::slice::Iter<'a, usize>,
}

impl<'a, E> Matches<'a, E> {
    pub(crate) fn new(elements: &'a [E], slots: &'a [usize]) -> Self {
        Self {
            elements,
            slots: slots.iter(),
        }
    }
}

impl<'a, E> Iterator for Matches<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let elements = self.elements;
        self.slots.next().map(move |&slot| &elements[slot])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<E> DoubleEndedIterator for Matches<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let elements = self.elements;
        self.slots.next_back().map(move |&slot| &elements[slot])
    }
}

impl<E> ExactSizeIterator for Matches<'_, E> {}

impl<E> FusedIterator for Matches<'_, E> {}
