use core::cmp::PartialOrd;

/// A pair of elements sorted in increasing order.
///
/// Used as an unordered key: `SortedPair::new(a, b) == SortedPair::new(b, a)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortedPair<T: PartialOrd>([T; 2]);

impl<T: PartialOrd> SortedPair<T> {
    /// Sorts two elements in increasing order into a new pair.
    pub fn new(element1: T, element2: T) -> Self {
        if element1 > element2 {
            SortedPair([element2, element1])
        } else {
            SortedPair([element1, element2])
        }
    }

    /// The smallest element of this pair.
    #[inline]
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    /// The largest element of this pair.
    #[inline]
    pub fn second(&self) -> &T {
        &self.0[1]
    }

    /// Does this pair contain `element`?
    #[inline]
    pub fn contains(&self, element: &T) -> bool {
        self.0[0] == *element || self.0[1] == *element
    }
}

impl<T: PartialOrd + Copy> SortedPair<T> {
    /// Both elements of this pair, smallest first.
    #[inline]
    pub fn pair(&self) -> (T, T) {
        (self.0[0], self.0[1])
    }
}
