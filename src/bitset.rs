//! Fixed-capacity bit set over `0..capacity`.
//!
//! Backing storage of [`BitmapSet`][crate::set::BitmapSet]: one bit per offset
//! of the governing domain's bounding box. The capacity is fixed at
//! construction; indices outside it are never stored.

/// A bit set backed by a vector of `u64` words, with a cached population count.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BitSet {
    words: Vec<u64>,
    capacity: usize,
    count: usize,
}

impl BitSet {
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty bit set able to hold indices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        let num_words = capacity.div_ceil(Self::BITS_PER_WORD);
        Self {
            words: vec![0; num_words],
            capacity,
            count: 0,
        }
    }

    /// Number of set bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Largest storable index plus one.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn locate(index: usize) -> (usize, u64) {
        (index / Self::BITS_PER_WORD, 1u64 << (index % Self::BITS_PER_WORD))
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        let (w, mask) = Self::locate(index);
        self.words[w] & mask != 0
    }

    /// Sets the bit. Returns true if it was clear.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()`.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(
            index < self.capacity,
            "Bit index {} out of capacity {}",
            index,
            self.capacity
        );
        let (w, mask) = Self::locate(index);
        let was_clear = self.words[w] & mask == 0;
        if was_clear {
            self.words[w] |= mask;
            self.count += 1;
        }
        was_clear
    }

    /// Clears the bit. Returns true if it was set.
    #[inline]
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        let (w, mask) = Self::locate(index);
        let was_set = self.words[w] & mask != 0;
        if was_set {
            self.words[w] &= !mask;
            self.count -= 1;
        }
        was_set
    }

    pub fn clear(&mut self) {
        self.words.fill(0);
        self.count = 0;
    }

    /// Iterates over set indices in increasing order.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
            remaining: self.count,
        }
    }
}

/// Iterator over the set indices of a [`BitSet`].
#[derive(Debug, Clone)]
pub struct BitSetIter<'a> {
    words: &'a [u64],
    word_idx: usize,
    current: u64,
    remaining: usize,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        while self.current == 0 {
            self.word_idx += 1;
            self.current = *self.words.get(self.word_idx)?;
        }
        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        self.remaining -= 1;
        Some(self.word_idx * BitSet::BITS_PER_WORD + bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BitSetIter<'_> {}
