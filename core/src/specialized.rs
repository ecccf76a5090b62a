//! Width-specialized names.
//!
//! Every component is generic over [`Primitive`](crate::Primitive); these
//! aliases name the three instantiations the way callers usually spell them.
//!
//! ```
//! use primcoll_core::specialized::{DoubleSet, IntBag, LongCollection};
//! use primcoll_core::traits::{Collection, PrimitiveCollection};
//!
//! let mut set = DoubleSet::new();
//! assert!(set.add(f64::NAN).unwrap());
//! assert!(!set.add(f64::NAN).unwrap());
//!
//! let bag: IntBag = [3, 3, 4].into_iter().collect();
//! assert_eq!(bag.to_vec().unwrap(), [3, 3, 4]);
//!
//! let boxed: Box<LongCollection<'_>> = Box::new(primcoll_core::specialized::LongBag::new());
//! assert!(boxed.is_empty());
//! ```

use crate::containers::{ArrayBag, PrimitiveSet};
use crate::forwarding::{ForwardingCollection, ForwardingIterator};
use crate::split::{ArraySpliterator, IteratorSpliterator, PrimitiveSpliterator};
use crate::traits::{PrimitiveCollection, PrimitiveIterator};

macro_rules! specialize {
    ($(
        $ty:ty => {
            bag: $bag:ident,
            set: $set:ident,
            forwarding: $forwarding:ident,
            forwarding_iter: $forwarding_iter:ident,
            collection: $collection:ident,
            iterator: $iterator:ident,
            spliterator: $spliterator:ident,
            array_spliterator: $array_spliterator:ident,
            iterator_spliterator: $iterator_spliterator:ident,
        }
    )+) => {
        $(
            pub type $bag = ArrayBag<$ty>;
            pub type $set = PrimitiveSet<$ty>;
            pub type $forwarding<D> = ForwardingCollection<$ty, D>;
            pub type $forwarding_iter<I> = ForwardingIterator<$ty, I>;
            pub type $collection<'a> = dyn PrimitiveCollection<$ty> + 'a;
            pub type $iterator<'a> = dyn PrimitiveIterator<$ty> + 'a;
            pub type $spliterator<'a> = dyn PrimitiveSpliterator<$ty> + 'a;
            pub type $array_spliterator = ArraySpliterator<$ty>;
            pub type $iterator_spliterator<'a> = IteratorSpliterator<'a, $ty>;
        )+
    };
}

specialize! {
    i32 => {
        bag: IntBag,
        set: IntSet,
        forwarding: ForwardingIntCollection,
        forwarding_iter: ForwardingIntIterator,
        collection: IntCollection,
        iterator: IntIterator,
        spliterator: IntSpliterator,
        array_spliterator: IntArraySpliterator,
        iterator_spliterator: IntIteratorSpliterator,
    }
    i64 => {
        bag: LongBag,
        set: LongSet,
        forwarding: ForwardingLongCollection,
        forwarding_iter: ForwardingLongIterator,
        collection: LongCollection,
        iterator: LongIterator,
        spliterator: LongSpliterator,
        array_spliterator: LongArraySpliterator,
        iterator_spliterator: LongIteratorSpliterator,
    }
    f64 => {
        bag: DoubleBag,
        set: DoubleSet,
        forwarding: ForwardingDoubleCollection,
        forwarding_iter: ForwardingDoubleIterator,
        collection: DoubleCollection,
        iterator: DoubleIterator,
        spliterator: DoubleSpliterator,
        array_spliterator: DoubleArraySpliterator,
        iterator_spliterator: DoubleIteratorSpliterator,
    }
}
