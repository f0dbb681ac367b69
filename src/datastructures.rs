use bitvec::prelude::*;
use core::mem;
use num::ToPrimitive;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::ops::Index;

/// Vertex mask over a fixed universe: adjacency rows, deleted vertices and
/// component marks.
#[derive(Clone, Default)]
pub struct BitSet {
    cardinality: usize,
    bit_vec: BitVec,
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let values: Vec<_> = self.iter().map(|i| i.to_string()).collect();
        write!(
            f,
            "BitSet {{ cardinality: {}, bit_vec: [{}]}}",
            self.cardinality,
            values.join(", "),
        )
    }
}

const fn block_size() -> usize {
    mem::size_of::<usize>() * 8
}

impl BitSet {
    #[inline]
    pub fn new(size: usize) -> Self {
        Self {
            cardinality: 0,
            bit_vec: bitvec![0; size],
        }
    }

    pub fn from_slice<T: ToPrimitive + Copy>(size: usize, slice: &[T]) -> Self {
        let mut set = Self::new(size);
        for i in slice {
            match i.to_usize() {
                Some(idx) => set.set_bit(idx),
                None => panic!("element is not a valid index"),
            };
        }
        set
    }

    #[inline]
    pub fn empty(&self) -> bool {
        self.cardinality == 0
    }

    /// Returns whether the bit was already set.
    #[inline]
    pub fn set_bit(&mut self, idx: usize) -> bool {
        if !self.bit_vec[idx] {
            self.bit_vec.set(idx, true);
            self.cardinality += 1;
            false
        } else {
            true
        }
    }

    /// Returns whether the bit was set before.
    #[inline]
    pub fn unset_bit(&mut self, idx: usize) -> bool {
        if self.bit_vec[idx] {
            self.bit_vec.set(idx, false);
            self.cardinality -= 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn at(&self, idx: usize) -> bool {
        self.bit_vec[idx]
    }

    #[inline]
    pub fn contains_all(&self, vertices: &[usize]) -> bool {
        vertices.iter().all(|v| self.bit_vec[*v])
    }

    #[inline]
    pub fn unset_all(&mut self) {
        self.bit_vec.as_mut_slice().iter_mut().for_each(|x| *x = 0);
        self.cardinality = 0;
    }

    #[inline]
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    #[inline]
    pub fn iter(&self) -> BitSetIterator<'_> {
        BitSetIterator {
            iter: self.bit_vec.as_slice().iter(),
            block: 0,
            idx: 0,
            size: self.bit_vec.len(),
        }
    }
}

pub struct BitSetIterator<'a> {
    iter: ::std::slice::Iter<'a, usize>,
    block: usize,
    idx: usize,
    size: usize,
}

impl<'a> Iterator for BitSetIterator<'a> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.block == 0 {
            self.block = if let Some(&i) = self.iter.next() {
                if i == 0 {
                    self.idx += block_size();
                    continue;
                } else {
                    self.idx = ((self.idx + block_size() - 1) / block_size()) * block_size();
                    i
                }
            } else {
                return None;
            }
        }
        let offset = self.block.trailing_zeros() as usize;
        self.block >>= offset;
        self.block >>= 1;
        self.idx += offset + 1;
        if self.idx - 1 >= self.size {
            return None;
        }
        Some(self.idx - 1)
    }
}

impl Index<usize> for BitSet {
    type Output = bool;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.bit_vec.index(index)
    }
}

#[cfg(test)]
mod tests {
    use crate::datastructures::BitSet;

    #[test]
    fn iter() {
        let mut bs = BitSet::new(200);

        let a: Vec<usize> = (0..200).filter(|i| i % 3 == 0).collect();
        for i in &a {
            bs.set_bit(*i);
        }

        let b: Vec<usize> = bs.iter().collect();
        assert_eq!(a, b);
        assert!(!bs.empty());
    }

    #[test]
    fn set_and_unset() {
        let mut bs = BitSet::new(10);
        assert!(!bs.set_bit(3));
        assert!(bs.set_bit(3));
        assert_eq!(bs.to_vec(), vec![3]);
        assert!(bs.unset_bit(3));
        assert!(!bs.unset_bit(3));
        assert!(bs.empty());
    }

    #[test]
    fn from_slice_and_clear() {
        let mut a = BitSet::from_slice(130, &[1u32, 64, 129]);
        assert_eq!(a.to_vec(), vec![1, 64, 129]);
        assert!(a.contains_all(&[64, 129]));
        assert!(!a.contains_all(&[0, 1]));
        assert!(a.at(64));
        a.unset_all();
        assert!(a.empty());
        assert!(!a[1]);
    }
}
