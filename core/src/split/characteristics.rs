use bitflags::bitflags;

bitflags! {
    /// Properties a spliterator advertises about the elements it covers.
    ///
    /// Bit values follow the conventional spliterator encoding so they can be
    /// compared with sources that speak it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Characteristics: u32 {
        const DISTINCT = 0x0000_0001;
        const SORTED = 0x0000_0004;
        const ORDERED = 0x0000_0010;
        const SIZED = 0x0000_0040;
        const NONNULL = 0x0000_0100;
        const IMMUTABLE = 0x0000_0400;
        const CONCURRENT = 0x0000_1000;
        /// Every split is itself `SIZED`.
        const SUBSIZED = 0x0000_4000;
    }
}

impl Characteristics {
    /// Adds `SIZED | SUBSIZED` unless the source is `CONCURRENT`.
    pub fn sized_unless_concurrent(self) -> Self {
        if self.contains(Self::CONCURRENT) {
            self
        } else {
            self | Self::SIZED | Self::SUBSIZED
        }
    }
}
