use std::{
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
};

/// A vector that can store up to N elements on the stack,
/// and falls back to heap allocation for larger sizes.
///
/// Tensor shapes, multiplier tables and multi-indices are short (rank rarely exceeds a handful of axes),
/// so keeping them inline avoids an allocation per index computation.
pub struct SmallVec<T, const N: usize> {
    data: SmallVecData<T, N>,
    len: usize,
}

enum SmallVecData<T, const N: usize> {
    Stack([MaybeUninit<T>; N]),
    Heap(Vec<T>),
}

impl<T, const N: usize> SmallVec<T, N> {
    /// Creates a new empty SmallVec
    pub fn new() -> Self {
        Self {
            data: SmallVecData::Stack([const { MaybeUninit::uninit() }; N]),
            len: 0,
        }
    }

    /// Creates a SmallVec holding `len` clones of `value`.
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        let mut sv = Self::new();
        if len > N {
            sv.spill_to_heap();
        }
        for _ in 0..len {
            sv.push(value.clone());
        }
        sv
    }

    /// Returns the number of elements in the SmallVec
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SmallVec is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true while elements are kept inline.
    pub fn is_inline(&self) -> bool {
        matches!(self.data, SmallVecData::Stack(_))
    }

    /// Adds an element to the end of the SmallVec
    pub fn push(&mut self, value: T) {
        if self.len == N && self.is_inline() {
            self.spill_to_heap();
        }

        match &mut self.data {
            SmallVecData::Stack(arr) => {
                arr[self.len].write(value);
            }
            SmallVecData::Heap(vec) => {
                vec.push(value);
            }
        }
        self.len += 1;
    }

    /// Removes and returns the last element, or None if empty
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        match &mut self.data {
            // SAFETY: the slot at the old `len - 1` was initialized by `push`
            SmallVecData::Stack(arr) => Some(unsafe { arr[self.len].assume_init_read() }),
            SmallVecData::Heap(vec) => vec.pop(),
        }
    }

    /// Shortens the SmallVec to `len` elements, dropping the rest.
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            self.pop();
        }
    }

    /// Clears the SmallVec, removing all elements
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        match &self.data {
            // SAFETY: elements 0..len are initialized
            SmallVecData::Stack(arr) => unsafe {
                std::slice::from_raw_parts(arr.as_ptr() as *const T, self.len)
            },
            SmallVecData::Heap(vec) => vec.as_slice(),
        }
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.data {
            // SAFETY: elements 0..len are initialized
            SmallVecData::Stack(arr) => unsafe {
                std::slice::from_raw_parts_mut(arr.as_mut_ptr() as *mut T, self.len)
            },
            SmallVecData::Heap(vec) => vec.as_mut_slice(),
        }
    }

    /// Converts stack storage to heap storage
    fn spill_to_heap(&mut self) {
        if let SmallVecData::Stack(arr) = &mut self.data {
            let mut vec = Vec::with_capacity((N * 2).max(self.len + 1));

            for slot in arr.iter().take(self.len) {
                // SAFETY: slots 0..len are initialized and are moved exactly once,
                // the array is replaced right after without dropping its contents
                vec.push(unsafe { slot.assume_init_read() });
            }

            self.data = SmallVecData::Heap(vec);
        }
    }
}

impl<T, const N: usize> Default for SmallVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Drop for SmallVec<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> Deref for SmallVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for SmallVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: Clone, const N: usize> Clone for SmallVec<T, N> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for SmallVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for SmallVec<T, N> {}

impl<T: Hash, const N: usize> Hash for SmallVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: std::fmt::Debug, const N: usize> std::fmt::Debug for SmallVec<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone, const N: usize> From<&[T]> for SmallVec<T, N> {
    fn from(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a SmallVec<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<T, const N: usize> FromIterator<T> for SmallVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sv = Self::new();
        sv.extend(iter);
        sv
    }
}

impl<T, const N: usize> Extend<T> for SmallVec<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

#[macro_export]
macro_rules! small_vec {
    ($($elem:expr),* $(,)?) => {
        {
            let mut sv = $crate::SmallVec::new();
            $(sv.push($elem);)*
            sv
        }
    };
    ($elem:expr; $n:expr) => {
        $crate::SmallVec::from_elem($elem, $n)
    };
}
