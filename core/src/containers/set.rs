use hashbrown::HashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Operation, Result};
use crate::split::{Characteristics, IteratorSpliterator, PrimitiveSpliterator};
use crate::traits::{Collection, Cursor, Modifiability, PrimitiveCollection, PrimitiveIterator};
use crate::traits::SliceCursor;
use crate::width::{Primitive, Width};
use crate::{Box, Vec};

/// Set of `P` values with identity by bit pattern.
///
/// Elements live densely in a `Vec` with a hash index from bit pattern to
/// slot. Removal swaps the last element into the freed slot, so iteration
/// order is insertion order only until the first removal.
#[derive(Clone, Default)]
pub struct PrimitiveSet<P: Primitive> {
    values: Vec<P>,
    index: HashMap<u64, usize>,
}

impl<P: Primitive> PrimitiveSet<P> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn as_slice(&self) -> &[P] {
        &self.values
    }

    fn insert(&mut self, value: P) -> bool {
        let key = value.bit_pattern();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.values.len());
        self.values.push(value);
        true
    }

    fn remove_at(&mut self, slot: usize) {
        let removed = self.values.swap_remove(slot);
        self.index.remove(&removed.bit_pattern());
        if let Some(moved) = self.values.get(slot) {
            self.index.insert(moved.bit_pattern(), slot);
        }
    }
}

impl<P: Primitive> PartialEq for PrimitiveSet<P> {
    fn eq(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .all(|value| other.index.contains_key(&value.bit_pattern()))
    }
}

impl<P: Primitive> core::fmt::Debug for PrimitiveSet<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.values.iter()).finish()
    }
}

impl<P: Primitive> FromIterator<P> for PrimitiveSet<P> {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<P: Primitive> Extend<P> for PrimitiveSet<P> {
    fn extend<T: IntoIterator<Item = P>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<P: Primitive> Modifiability for PrimitiveSet<P> {}

impl<P: Primitive> Collection for PrimitiveSet<P> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn width(&self) -> Option<Width> {
        Some(P::WIDTH)
    }

    fn cursor(&self) -> Box<dyn Cursor + '_> {
        Box::new(SliceCursor::new(self.values.as_slice()))
    }
}

impl<P: Primitive> PrimitiveCollection<P> for PrimitiveSet<P> {
    fn contains(&self, value: P) -> Result<bool> {
        Ok(self.index.contains_key(&value.bit_pattern()))
    }

    fn iter(&self) -> Result<Box<dyn PrimitiveIterator<P> + '_>> {
        Ok(Box::new(SliceCursor::new(self.values.as_slice())))
    }

    fn iter_mut(&mut self) -> Result<Box<dyn PrimitiveIterator<P> + '_>> {
        Ok(Box::new(SetIterMut {
            set: self,
            pos: 0,
            last: None,
        }))
    }

    fn add(&mut self, value: P) -> Result<bool> {
        Ok(self.insert(value))
    }

    fn remove(&mut self, value: P) -> Result<bool> {
        match self.index.get(&value.bit_pattern()).copied() {
            Some(slot) => {
                self.remove_at(slot);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<()> {
        self.values.clear();
        self.index.clear();
        Ok(())
    }

    fn to_vec(&self) -> Result<Vec<P>> {
        Ok(self.values.clone())
    }

    fn spliterator(&self) -> Result<Box<dyn PrimitiveSpliterator<P> + '_>> {
        Ok(Box::new(IteratorSpliterator::over(
            self,
            Characteristics::DISTINCT,
        )))
    }
}

/// Mutable cursor; removal swaps the last element into the freed slot,
/// which is visited next.
struct SetIterMut<'a, P: Primitive> {
    set: &'a mut PrimitiveSet<P>,
    pos: usize,
    last: Option<usize>,
}

impl<P: Primitive> Modifiability for SetIterMut<'_, P> {}

impl<P: Primitive> Cursor for SetIterMut<'_, P> {
    fn has_next(&self) -> bool {
        self.pos < self.set.values.len()
    }
}

impl<P: Primitive> PrimitiveIterator<P> for SetIterMut<'_, P> {
    fn next_value(&mut self) -> Result<Option<P>> {
        let value = self.set.values.get(self.pos).copied();
        if value.is_some() {
            self.last = Some(self.pos);
            self.pos += 1;
        }
        Ok(value)
    }

    fn remove(&mut self) -> Result<()> {
        let slot = self.last.take().ok_or(Error::invalid_state(
            Operation::IteratorRemove,
            "no element to remove: call next_value first",
        ))?;
        self.set.remove_at(slot);
        self.pos = slot;
        Ok(())
    }
}

impl<P: Primitive> Serialize for PrimitiveSet<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values.iter())
    }
}

impl<'de, P: Primitive> Deserialize<'de> for PrimitiveSet<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<P>::deserialize(deserializer).map(|values| values.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "set_test.rs"]
mod set_test;
