mod pairs;
mod union_find;

pub use self::pairs::{
    PairFlow, for_each_indexed_pair, for_each_indexed_pair_mut, for_each_pair, for_each_pair_mut,
};
pub use self::union_find::{DisjointSetUnion, UnionFindError};
