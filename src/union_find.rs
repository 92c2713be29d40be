use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum UnionFindError {
    #[error("{size} is not positive")]
    InvalidSize { size: i32 },

    #[error("{index} too low. Minimum is 0")]
    IndexTooLow { index: i32 },

    #[error("{index} too high. Maximum is {max}")]
    IndexTooHigh { index: i32, max: i32 },
}

/// A partition of `0..len` into disjoint sets, with union by size and full path compression.
///
/// Indices are signed so that negative arguments can be reported instead of wrapping around.
/// Every operation validates its arguments before touching the forest, so an `Err` leaves the
/// structure exactly as it was.
#[derive(Clone, Debug)]
pub struct DisjointSetUnion {
    // If `x >= 0`, it's the parent ID. If `x < 0`, it's `-size`.
    parents_or_sizes: Vec<i32>,
}

impl DisjointSetUnion {
    pub fn new(size: i32) -> Result<Self, UnionFindError> {
        if size < 1 {
            return Err(UnionFindError::InvalidSize { size });
        }
        Ok(Self {
            parents_or_sizes: vec![-1; size as usize],
        })
    }

    // Never empty: construction requires at least one element.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> i32 {
        self.parents_or_sizes.len() as i32
    }

    fn check_index(&self, index: i32) -> Result<usize, UnionFindError> {
        if index < 0 {
            return Err(UnionFindError::IndexTooLow { index });
        }
        if index >= self.len() {
            return Err(UnionFindError::IndexTooHigh {
                index,
                max: self.len() - 1,
            });
        }
        Ok(index as usize)
    }

    /// Returns the representative of the set containing `index`.
    ///
    /// Every element visited on the way is re-parented directly onto the representative.
    pub fn find(&mut self, index: i32) -> Result<i32, UnionFindError> {
        let index = self.check_index(index)?;
        Ok(self.resolve(index) as i32)
    }

    fn resolve(&mut self, mut index: usize) -> usize {
        let mut leader = index;
        while self.parents_or_sizes[leader] >= 0 {
            leader = self.parents_or_sizes[leader] as usize;
        }
        while index != leader {
            index = core::mem::replace(&mut self.parents_or_sizes[index], leader as i32) as usize;
        }
        leader
    }

    /// Joins the sets containing `a` and `b` and returns the size of the resulting set.
    ///
    /// The smaller set is attached under the larger one. On a tie, `a`'s representative becomes
    /// the child. Merging two elements of the same set changes nothing and returns its size.
    pub fn merge(&mut self, a: i32, b: i32) -> Result<i32, UnionFindError> {
        let a = self.check_index(a)?;
        let b = self.check_index(b)?;

        let mut child = self.resolve(a);
        let mut leader = self.resolve(b);
        if child == leader {
            return Ok(-self.parents_or_sizes[leader]);
        }

        // Sizes are stored negated, so the lesser slot belongs to the larger set
        if self.parents_or_sizes[child] < self.parents_or_sizes[leader] {
            core::mem::swap(&mut child, &mut leader);
        }
        self.parents_or_sizes[leader] += self.parents_or_sizes[child];
        self.parents_or_sizes[child] = leader as i32;
        Ok(-self.parents_or_sizes[leader])
    }

    pub fn size(&mut self, index: i32) -> Result<i32, UnionFindError> {
        let index = self.check_index(index)?;
        let leader = self.resolve(index);
        Ok(-self.parents_or_sizes[leader])
    }

    pub fn same_set(&mut self, a: i32, b: i32) -> Result<bool, UnionFindError> {
        let a = self.check_index(a)?;
        let b = self.check_index(b)?;
        Ok(self.resolve(a) == self.resolve(b))
    }

    /// Number of disjoint sets. This is a linear scan.
    pub fn count(&self) -> i32 {
        self.parents_or_sizes
            .iter()
            .filter(|&&parent_or_size| parent_or_size < 0)
            .count() as i32
    }

    /// Groups every element by its representative. Members are listed in ascending order.
    pub fn sets(&mut self) -> FxHashMap<i32, Vec<i32>> {
        let mut sets: FxHashMap<i32, Vec<i32>> = FxHashMap::default();
        for index in 0..self.parents_or_sizes.len() {
            let leader = self.resolve(index);
            sets.entry(leader as i32).or_default().push(index as i32);
        }
        sets
    }
}
