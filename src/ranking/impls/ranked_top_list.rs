use std::cmp::Ordering;
use crate::ranking::structs::ranked_top_list::RankedTopList;

impl<T> Default for RankedTopList<T> {
    fn default() -> RankedTopList<T>
    {
        RankedTopList::new()
    }
}

impl<T> RankedTopList<T> {
    pub fn new() -> RankedTopList<T>
    {
        RankedTopList { items: Vec::new() }
    }

    /// Offers `item` to the list.
    ///
    /// An existing item with the same unique key is always replaced, whatever
    /// the ranks. A new key enters a full list only when it ranks strictly
    /// above the current last item, which is then evicted. Among equal ranks
    /// the newcomer is placed after the items already present.
    ///
    /// Returns whether the list changed.
    pub fn update<R, U, RF, UF>(&mut self, max_size: usize, rank_key: RF, unique_key: UF, item: T) -> bool
    where
        R: PartialOrd,
        U: PartialEq,
        RF: Fn(&T) -> R,
        UF: Fn(&T) -> U,
    {
        if max_size == 0 {
            self.items.clear();
            return false;
        }

        let item_unique = unique_key(&item);
        match self.items.iter().position(|existing| unique_key(existing) == item_unique) {
            Some(index) => {
                self.items.remove(index);
            }
            None => {
                if self.items.len() >= max_size {
                    let Some(last) = self.items.last() else { return false };
                    if rank_key(&item).partial_cmp(&rank_key(last)) != Some(Ordering::Greater) {
                        return false;
                    }
                    self.items.pop();
                }
            }
        }

        let item_rank = rank_key(&item);
        let index = self.items.partition_point(|existing| rank_key(existing) >= item_rank);
        self.items.insert(index, item);
        self.items.truncate(max_size);
        true
    }

    /// The best `count` items.
    pub fn take(&self, count: usize) -> &[T]
    {
        &self.items[..count.min(self.items.len())]
    }

    pub fn as_slice(&self) -> &[T]
    {
        &self.items
    }

    pub fn len(&self) -> usize
    {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.items.is_empty()
    }

    pub fn into_inner(self) -> Vec<T>
    {
        self.items
    }
}

impl<T> From<Vec<T>> for RankedTopList<T> {
    fn from(items: Vec<T>) -> Self
    {
        RankedTopList { items }
    }
}
