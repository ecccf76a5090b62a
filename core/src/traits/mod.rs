mod collection;
mod host;
mod iterator;

pub use collection::{AsPrimitive, Collection, Modifiability, PrimitiveCollection};
pub use host::SliceCursor;
pub use iterator::{AsPrimitiveIterator, Cursor, PrimitiveIterator, Values};
