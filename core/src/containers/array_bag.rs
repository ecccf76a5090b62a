use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use crate::error::{Error, Operation, Result};
use crate::traits::{Collection, Cursor, Modifiability, PrimitiveCollection, PrimitiveIterator};
use crate::traits::SliceCursor;
use crate::width::{Primitive, Width};
use crate::{Box, Vec};

/// Elements stored inline before the bag spills to the heap.
const INLINE: usize = 8;

/// Insertion-ordered multiset of `P` values.
#[derive(Clone, Default, PartialEq)]
pub struct ArrayBag<P: Primitive> {
    items: SmallVec<[P; INLINE]>,
}

impl<P: Primitive> ArrayBag<P> {
    pub fn new() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: SmallVec::with_capacity(capacity),
        }
    }

    pub fn as_slice(&self) -> &[P] {
        &self.items
    }

    /// Whether the elements still fit in inline storage.
    pub fn is_inline(&self) -> bool {
        !self.items.spilled()
    }

    fn position(&self, value: P) -> Option<usize> {
        self.items.iter().position(|item| item.same(value))
    }
}

impl<P: Primitive> core::fmt::Debug for ArrayBag<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<P: Primitive> From<Vec<P>> for ArrayBag<P> {
    fn from(values: Vec<P>) -> Self {
        Self {
            items: SmallVec::from_vec(values),
        }
    }
}

impl<P: Primitive> FromIterator<P> for ArrayBag<P> {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<P: Primitive> Extend<P> for ArrayBag<P> {
    fn extend<T: IntoIterator<Item = P>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl<P: Primitive> Modifiability for ArrayBag<P> {}

impl<P: Primitive> Collection for ArrayBag<P> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn width(&self) -> Option<Width> {
        Some(P::WIDTH)
    }

    fn cursor(&self) -> Box<dyn Cursor + '_> {
        Box::new(SliceCursor::new(self.items.as_slice()))
    }
}

impl<P: Primitive> PrimitiveCollection<P> for ArrayBag<P> {
    fn contains(&self, value: P) -> Result<bool> {
        Ok(self.position(value).is_some())
    }

    fn iter(&self) -> Result<Box<dyn PrimitiveIterator<P> + '_>> {
        Ok(Box::new(SliceCursor::new(self.items.as_slice())))
    }

    fn iter_mut(&mut self) -> Result<Box<dyn PrimitiveIterator<P> + '_>> {
        Ok(Box::new(BagIterMut {
            bag: self,
            pos: 0,
            last: None,
        }))
    }

    fn add(&mut self, value: P) -> Result<bool> {
        self.items.push(value);
        Ok(true)
    }

    fn remove(&mut self, value: P) -> Result<bool> {
        match self.position(value) {
            Some(index) => {
                self.items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn try_remove_if(&mut self, predicate: &mut dyn FnMut(P) -> Result<bool>) -> Result<bool> {
        let before = self.items.len();
        let mut kept = 0;
        let mut failure = None;
        for index in 0..before {
            let value = self.items[index];
            let remove = match failure {
                Some(_) => false,
                None => match predicate(value) {
                    Ok(remove) => remove,
                    Err(err) => {
                        failure = Some(err);
                        false
                    }
                },
            };
            if !remove {
                self.items[kept] = value;
                kept += 1;
            }
        }
        self.items.truncate(kept);
        match failure {
            Some(err) => Err(err),
            None => Ok(kept != before),
        }
    }

    fn clear(&mut self) -> Result<()> {
        self.items.clear();
        Ok(())
    }

    fn to_vec(&self) -> Result<Vec<P>> {
        Ok(self.items.to_vec())
    }

    fn for_each(&self, action: &mut dyn FnMut(P)) -> Result<()> {
        self.items.iter().for_each(|&value| action(value));
        Ok(())
    }
}

/// Mutable cursor; removal shifts the tail left.
struct BagIterMut<'a, P: Primitive> {
    bag: &'a mut ArrayBag<P>,
    pos: usize,
    last: Option<usize>,
}

impl<P: Primitive> Modifiability for BagIterMut<'_, P> {}

impl<P: Primitive> Cursor for BagIterMut<'_, P> {
    fn has_next(&self) -> bool {
        self.pos < self.bag.items.len()
    }
}

impl<P: Primitive> PrimitiveIterator<P> for BagIterMut<'_, P> {
    fn next_value(&mut self) -> Result<Option<P>> {
        let value = self.bag.items.get(self.pos).copied();
        if value.is_some() {
            self.last = Some(self.pos);
            self.pos += 1;
        }
        Ok(value)
    }

    fn remove(&mut self) -> Result<()> {
        let index = self.last.take().ok_or(Error::invalid_state(
            Operation::IteratorRemove,
            "no element to remove: call next_value first",
        ))?;
        self.bag.items.remove(index);
        self.pos = index;
        Ok(())
    }
}

impl<P: Primitive> Serialize for ArrayBag<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

impl<'de, P: Primitive> Deserialize<'de> for ArrayBag<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<P>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
#[path = "array_bag_test.rs"]
mod array_bag_test;
