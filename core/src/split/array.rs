use crate::Arc;
use crate::error::Result;
use crate::split::{Characteristics, PrimitiveSpliterator};
use crate::traits::Modifiability;
use crate::width::Primitive;

/// Spliterator over a shared, immutable array range.
///
/// Splitting hands off the lower half of the range; both halves share the
/// same backing array. Always `SIZED | SUBSIZED`.
#[derive(Debug, Clone)]
pub struct ArraySpliterator<P> {
    array: Arc<[P]>,
    index: usize,
    fence: usize,
    characteristics: Characteristics,
}

impl<P: Primitive> ArraySpliterator<P> {
    pub fn new(values: impl Into<Arc<[P]>>, characteristics: Characteristics) -> Self {
        let array = values.into();
        let fence = array.len();
        Self {
            array,
            index: 0,
            fence,
            characteristics: characteristics | Characteristics::SIZED | Characteristics::SUBSIZED,
        }
    }

    /// The elements not yet traversed.
    pub fn remaining(&self) -> &[P] {
        &self.array[self.index..self.fence]
    }

    pub fn len(&self) -> usize {
        self.fence - self.index
    }

    pub fn is_empty(&self) -> bool {
        self.index >= self.fence
    }
}

impl<P> Modifiability for ArraySpliterator<P> {
    fn is_unmodifiable(&self) -> bool {
        true
    }
}

impl<P: Primitive> PrimitiveSpliterator<P> for ArraySpliterator<P> {
    fn try_advance(&mut self, action: &mut dyn FnMut(P)) -> Result<bool> {
        if self.index < self.fence {
            let value = self.array[self.index];
            self.index += 1;
            action(value);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn for_each_remaining(&mut self, action: &mut dyn FnMut(P)) -> Result<()> {
        for &value in &self.array[self.index..self.fence] {
            action(value);
        }
        self.index = self.fence;
        Ok(())
    }

    fn try_split(&mut self) -> Result<Option<ArraySpliterator<P>>> {
        let lo = self.index;
        let mid = lo + (self.fence - lo) / 2;
        if lo >= mid {
            return Ok(None);
        }
        self.index = mid;
        Ok(Some(ArraySpliterator {
            array: Arc::clone(&self.array),
            index: lo,
            fence: mid,
            characteristics: self.characteristics,
        }))
    }

    fn estimate_size(&mut self) -> Result<u64> {
        Ok(self.len() as u64)
    }

    fn characteristics(&self) -> Characteristics {
        self.characteristics
    }
}

impl<P: Primitive> Iterator for ArraySpliterator<P> {
    type Item = P;

    fn next(&mut self) -> Option<P> {
        let value = self.remaining().first().copied()?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<P: Primitive> ExactSizeIterator for ArraySpliterator<P> {}
