use crate::{
    error::{ExtractError, require},
    extract::{Cardinality, Extractor, ExtractorKind, ExtractorShape},
    row::Row,
};
use std::{collections::HashMap, hash::Hash};

///
/// Groups
///
/// Ordered map from group key to the inner fold state of that group.
/// Iteration order is the order in which each key was first seen.
///

#[derive(Clone, Debug)]
pub struct Groups<K, A> {
    entries: Vec<(K, A)>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone, A> Groups<K, A> {
    fn seeded(key: K, state: A) -> Self {
        let mut index = HashMap::new();
        index.insert(key.clone(), 0);

        Self {
            entries: vec![(key, state)],
            index,
        }
    }

    fn insert(&mut self, key: K, state: A) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, state));
    }

    fn state_mut(&mut self, key: &K) -> Option<&mut A> {
        let position = *self.index.get(key)?;

        self.entries.get_mut(position).map(|(_, state)| state)
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Group keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }
}

impl<K, A> Groups<K, A> {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

///
/// GroupedMulti
///
/// Partitions rows by a group key and folds each group's rows through the
/// inner extractor. Unlike `ListMulti`, the inner state is threaded per group,
/// so rows of one group may be non-adjacent and may each contribute part of a
/// nested one-to-many child.
///
/// Group keys must never be null. Each group must emit a definite value.
///

#[derive(Clone, Debug)]
pub struct GroupedMulti<E, K> {
    inner: E,
    key: K,
    max_groups: Option<usize>,
}

impl<E, K> GroupedMulti<E, K> {
    pub const fn new(inner: E, key: K) -> Self {
        Self {
            inner,
            key,
            max_groups: None,
        }
    }

    /// Hard limit on distinct groups per extraction scope.
    #[must_use]
    pub const fn with_max_groups(mut self, limit: usize) -> Self {
        self.max_groups = Some(limit);
        self
    }

    #[must_use]
    pub const fn max_groups(&self) -> Option<usize> {
        self.max_groups
    }
}

impl<E, K> GroupedMulti<E, K>
where
    K: Extractor,
    K::Output: Eq + Hash + Clone,
{
    fn read_key(&self, row: &dyn Row) -> Result<K::Output, ExtractError> {
        self.key.evaluate(row)?.ok_or(ExtractError::NullGroupKey)
    }

    fn ensure_budget(&self, groups: usize) -> Result<(), ExtractError> {
        match self.max_groups {
            Some(limit) if groups > limit => Err(ExtractError::GroupLimitExceeded { limit }),
            _ => Ok(()),
        }
    }
}

impl<E, K> Extractor for GroupedMulti<E, K>
where
    E: Extractor,
    K: Extractor,
    K::Output: Eq + Hash + Clone,
{
    type Acc = Groups<K::Output, E::Acc>;
    type Output = Vec<E::Output>;
    type Item = E::Output;

    const CARDINALITY: Cardinality = Cardinality::Multi;

    fn initialize(&self, row: &dyn Row) -> Result<Self::Acc, ExtractError> {
        let key = self.read_key(row)?;
        self.ensure_budget(1)?;

        Ok(Groups::seeded(key, self.inner.initialize(row)?))
    }

    fn accumulate(&self, acc: &mut Self::Acc, row: &dyn Row) -> Result<(), ExtractError> {
        let key = self.read_key(row)?;

        if let Some(state) = acc.state_mut(&key) {
            return self.inner.accumulate(state, row);
        }

        self.ensure_budget(acc.len() + 1)?;
        acc.insert(key, self.inner.initialize(row)?);

        Ok(())
    }

    fn emit(&self, acc: &Self::Acc) -> Result<Option<Self::Output>, ExtractError> {
        let kind = self.inner.kind();
        let values = acc
            .entries
            .iter()
            .map(|(_, state)| require(self.inner.emit(state)?, kind))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(values))
    }

    fn into_items(&self, output: Self::Output) -> Vec<Self::Item> {
        output
    }

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::GroupedMulti
    }

    fn group_count(&self, acc: &Self::Acc) -> usize {
        acc.len()
    }

    fn opens_group(&self, acc: &Self::Acc, row: &dyn Row) -> Result<bool, ExtractError> {
        Ok(!acc.contains_key(&self.read_key(row)?))
    }

    fn shape(&self) -> ExtractorShape {
        ExtractorShape::with_children(
            ExtractorKind::GroupedMulti,
            vec![self.inner.shape(), self.key.shape()],
        )
    }
}
