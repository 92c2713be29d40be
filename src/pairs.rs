use core::ops::ControlFlow;

// Every entry point visits the pairs `(i, j)`, `i < j`, in lexicographic order. The container stays
// borrowed for the whole enumeration, so callbacks can't insert or remove elements; the `_mut`
// variants only allow modifying elements in place.

/// How the value returned by a pair callback affects the rest of the enumeration.
///
/// - `()` never stops.
/// - `bool` stops on `true`; the entry point returns whether it stopped early.
/// - `Result<(), E>` stops on `Err`, which is returned as is.
/// - `ControlFlow<B>` stops on `Break`, which is returned as is.
pub trait PairFlow {
    type Output;

    fn into_flow(self) -> ControlFlow<Self::Output>;

    fn completed() -> Self::Output;
}

impl PairFlow for () {
    type Output = ();

    fn into_flow(self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    fn completed() {}
}

impl PairFlow for bool {
    type Output = bool;

    fn into_flow(self) -> ControlFlow<bool> {
        if self {
            ControlFlow::Break(true)
        } else {
            ControlFlow::Continue(())
        }
    }

    fn completed() -> bool {
        false
    }
}

impl<E> PairFlow for Result<(), E> {
    type Output = Result<(), E>;

    fn into_flow(self) -> ControlFlow<Self::Output> {
        match self {
            Ok(()) => ControlFlow::Continue(()),
            Err(error) => ControlFlow::Break(Err(error)),
        }
    }

    fn completed() -> Self::Output {
        Ok(())
    }
}

impl<B> PairFlow for ControlFlow<B> {
    type Output = ControlFlow<B>;

    fn into_flow(self) -> ControlFlow<Self::Output> {
        match self {
            ControlFlow::Continue(()) => ControlFlow::Continue(()),
            ControlFlow::Break(value) => ControlFlow::Break(ControlFlow::Break(value)),
        }
    }

    fn completed() -> Self::Output {
        ControlFlow::Continue(())
    }
}

/// Calls `f(i, j, items[i], items[j])` for every `i < j`.
///
/// Only forward iteration is needed: the inner loop runs over a clone of the outer iterator, so
/// this works for linked lists, ordered sets and the like, as long as their iterators are `Clone`.
pub fn for_each_indexed_pair<I, R>(
    items: I,
    mut f: impl FnMut(usize, usize, I::Item, I::Item) -> R,
) -> R::Output
where
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Clone,
    R: PairFlow,
{
    let mut outer = items.into_iter();
    let mut i = 0;
    while let Some(first) = outer.next() {
        for (j, second) in (i + 1..).zip(outer.clone()) {
            if let ControlFlow::Break(output) = f(i, j, first.clone(), second).into_flow() {
                return output;
            }
        }
        i += 1;
    }
    R::completed()
}

pub fn for_each_pair<I, R>(items: I, mut f: impl FnMut(I::Item, I::Item) -> R) -> R::Output
where
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Clone,
    R: PairFlow,
{
    for_each_indexed_pair(items, |_, _, first, second| f(first, second))
}

/// Like [`for_each_indexed_pair`], but hands out mutable references to both elements.
///
/// Only slices are accepted. A `VecDeque` can be passed via `make_contiguous()`; a `LinkedList`
/// only supports shared access through [`for_each_indexed_pair`].
pub fn for_each_indexed_pair_mut<T, R>(
    items: &mut [T],
    mut f: impl FnMut(usize, usize, &mut T, &mut T) -> R,
) -> R::Output
where
    R: PairFlow,
{
    for i in 0..items.len() {
        let (head, tail) = items.split_at_mut(i + 1);
        let first = &mut head[i];
        for (j, second) in (i + 1..).zip(tail) {
            if let ControlFlow::Break(output) = f(i, j, &mut *first, second).into_flow() {
                return output;
            }
        }
    }
    R::completed()
}

/// Like [`for_each_pair`], but hands out mutable references to both elements.
///
/// Only slices are accepted. A `VecDeque` can be passed via `make_contiguous()`.
pub fn for_each_pair_mut<T, R>(items: &mut [T], mut f: impl FnMut(&mut T, &mut T) -> R) -> R::Output
where
    R: PairFlow,
{
    for_each_indexed_pair_mut(items, |_, _, first, second| f(first, second))
}
