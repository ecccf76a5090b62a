//! Host collections and the slice cursor shared by array-backed containers.
//!
//! `Vec<T>` and `&[T]` take part as untyped collections: they report a
//! length and a cursor but are never viewed as primitive collections, even
//! when `T` is a primitive. Wrapping one in a forwarding collection is only
//! useful under the minimal discipline.

use crate::Box;
use crate::Vec;
use crate::error::Result;
use crate::traits::{AsPrimitive, Collection, Cursor, Modifiability, PrimitiveCollection};
use crate::traits::PrimitiveIterator;
use crate::width::Primitive;

/// Read-only cursor over a borrowed slice.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items, pos: 0 }
    }

    /// Elements not yet returned.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.pos
    }
}

impl<T> Modifiability for SliceCursor<'_, T> {
    fn is_unmodifiable(&self) -> bool {
        true
    }
}

impl<T> Cursor for SliceCursor<'_, T> {
    fn has_next(&self) -> bool {
        self.pos < self.items.len()
    }
}

impl<P: Primitive> PrimitiveIterator<P> for SliceCursor<'_, P> {
    fn next_value(&mut self) -> Result<Option<P>> {
        let value = self.items.get(self.pos).copied();
        if value.is_some() {
            self.pos += 1;
        }
        Ok(value)
    }

    fn for_each_remaining(&mut self, action: &mut dyn FnMut(P)) -> Result<()> {
        for &value in &self.items[self.pos..] {
            action(value);
        }
        self.pos = self.items.len();
        Ok(())
    }
}

// ============================================================================
// Host collections
// ============================================================================

impl<T> Modifiability for Vec<T> {}

impl<T> Collection for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn cursor(&self) -> Box<dyn Cursor + '_> {
        Box::new(SliceCursor::new(self.as_slice()))
    }
}

impl<P: Primitive, T> AsPrimitive<P> for Vec<T> {
    fn as_primitive(&self) -> Option<&dyn PrimitiveCollection<P>> {
        None
    }

    fn as_primitive_mut(&mut self) -> Option<&mut dyn PrimitiveCollection<P>> {
        None
    }
}

impl<T> Modifiability for &[T] {
    fn is_unmodifiable(&self) -> bool {
        true
    }
}

impl<T> Collection for &[T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn cursor(&self) -> Box<dyn Cursor + '_> {
        Box::new(SliceCursor::new(self))
    }
}

impl<P: Primitive, T> AsPrimitive<P> for &[T] {
    fn as_primitive(&self) -> Option<&dyn PrimitiveCollection<P>> {
        None
    }

    fn as_primitive_mut(&mut self) -> Option<&mut dyn PrimitiveCollection<P>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec;

    #[test]
    fn test_slice_cursor_walks_and_stops() {
        let items = [1i64, 2, 3];
        let mut cursor = SliceCursor::new(&items);
        assert!(cursor.is_unmodifiable());
        assert_eq!(cursor.next_value().unwrap(), Some(1));
        assert_eq!(cursor.remaining(), 2);

        let mut seen = Vec::new();
        cursor.for_each_remaining(&mut |v| seen.push(v)).unwrap();
        assert_eq!(seen, vec![2, 3]);
        assert!(!cursor.has_next());
        assert_eq!(cursor.next_value().unwrap(), None);
    }

    #[test]
    fn test_slice_cursor_rejects_remove() {
        let items = [1.5f64];
        let mut cursor = SliceCursor::new(&items);
        assert_eq!(cursor.next_value().unwrap(), Some(1.5));
        assert!(matches!(
            PrimitiveIterator::<f64>::remove(&mut cursor),
            Err(crate::Error::Unsupported { .. })
        ));
    }

    #[test]
    fn test_host_collections_are_opaque() {
        let words = vec!["a", "b"];
        assert_eq!(Collection::len(&words), 2);
        assert!(!words.is_unmodifiable());
        assert!(words.cursor().has_next());
        assert!(AsPrimitive::<i32>::as_primitive(&words).is_none());

        let ints = vec![1i32, 2];
        assert!(AsPrimitive::<i32>::as_primitive(&ints).is_none());

        let slice: &[u8] = &[];
        assert!(slice.is_unmodifiable());
        assert!(!slice.cursor().has_next());
    }
}
