//! Bounds-checked positional access over byte regions
//!
//! A [`Cursor`] pairs an access capability with a position and a remaining
//! byte budget. Operations consume the cursor and return it advanced, so a
//! sequence of accesses reads as a chain. Out-of-bounds operations never
//! fail: the transfer is dropped, the region stays untouched, and the
//! returned cursor is advanced as if the operation had landed.

/// Access capability backing a cursor
///
/// A cursor holds at most one side: regions opened for writing do not
/// expose reads, and read-backs go through a separate read-only cursor.
#[derive(Debug)]
enum Access<'a> {
    /// No region attached; every operation is a pure advance
    Null,
    /// Shared read access into an existing region
    Read(&'a [u8]),
    /// Exclusive write access into an existing region
    Write(&'a mut [u8]),
}

/// Fixed-size records that can be stamped into or lifted out of a region
///
/// Implementors define one wire size and encode/decode over exactly that
/// many bytes. Decoding is total: every byte pattern produces a value.
pub trait FixedRecord: Sized {
    /// Encoded size in bytes, identical for every value of the type
    const SIZE: usize;

    /// Write the record into `buf`, which is exactly [`Self::SIZE`] bytes
    fn encode_into(&self, buf: &mut [u8]);

    /// Rebuild the record from `buf`, which is exactly [`Self::SIZE`] bytes
    fn decode_from(buf: &[u8]) -> Self;
}

/// A position-advancing view over a byte region
///
/// The cursor itself is a small value: copying one around never copies the
/// region, and advancing returns a new cursor instead of mutating in place.
#[derive(Debug)]
pub struct Cursor<'a> {
    access: Access<'a>,
    offset: usize,
    remaining: usize,
}

impl<'a> Cursor<'a> {
    /// Create a read-only cursor over an existing region
    ///
    /// `offset` and `size` are taken as given; a position at or past the
    /// budget simply means no further operation lands.
    pub fn read_only(region: &'a [u8], offset: usize, size: usize) -> Self {
        Self {
            access: Access::Read(region),
            offset,
            remaining: size,
        }
    }

    /// Create a read-write cursor over an existing mutable region
    ///
    /// The cursor carries only the write side: reads through it never land.
    pub fn read_write(region: &'a mut [u8], offset: usize, size: usize) -> Self {
        Self {
            access: Access::Write(region),
            offset,
            remaining: size,
        }
    }

    /// Create a cursor with no backing region and a zero budget
    pub fn null() -> Self {
        Self {
            access: Access::Null,
            offset: 0,
            remaining: 0,
        }
    }

    /// Current position within the region
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left in the cursor's budget
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Write one byte at the current position, then advance by 1
    ///
    /// The byte lands only through a write capability with the position
    /// still inside the budget and the real region.
    pub fn write_u8(mut self, value: u8) -> Self {
        if self.offset < self.remaining {
            if let Access::Write(region) = &mut self.access {
                if let Some(slot) = region.get_mut(self.offset) {
                    *slot = value;
                }
            }
        }
        self.advance(1)
    }

    /// Read one byte at the current position into `value`, then advance by 1
    ///
    /// Without a read capability, or out of bounds, `value` keeps whatever
    /// the caller put in it.
    pub fn read_u8(self, value: &mut u8) -> Self {
        if self.offset < self.remaining {
            if let Access::Read(region) = &self.access {
                if let Some(byte) = region.get(self.offset) {
                    *value = *byte;
                }
            }
        }
        self.advance(1)
    }

    /// Stamp a fixed-size record at the current position, then advance by
    /// [`FixedRecord::SIZE`]
    ///
    /// The record lands only if the whole window fits inside the budget.
    pub fn write_record<T: FixedRecord>(mut self, record: &T) -> Self {
        if let Some(end) = self.offset.checked_add(T::SIZE) {
            if end <= self.remaining {
                if let Access::Write(region) = &mut self.access {
                    if let Some(window) = region.get_mut(self.offset..end) {
                        record.encode_into(window);
                    }
                }
            }
        }
        self.advance(T::SIZE)
    }

    /// Lift a fixed-size record out of the current position into `record`,
    /// then advance by [`FixedRecord::SIZE`]
    ///
    /// Out of bounds or without a read capability, `record` is untouched.
    pub fn read_record<T: FixedRecord>(self, record: &mut T) -> Self {
        if let Some(end) = self.offset.checked_add(T::SIZE) {
            if end <= self.remaining {
                if let Access::Read(region) = &self.access {
                    if let Some(window) = region.get(self.offset..end) {
                        *record = T::decode_from(window);
                    }
                }
            }
        }
        self.advance(T::SIZE)
    }

    /// Bytes visible through the read capability at the current position
    ///
    /// Returns `None` unless the cursor is readable and its budget and the
    /// real region both cover `len` bytes from here. The cursor does not
    /// advance; the returned slice borrows the region, not the cursor.
    pub fn peek(&self, len: usize) -> Option<&'a [u8]> {
        if self.remaining < len {
            return None;
        }
        let region: &'a [u8] = match &self.access {
            Access::Read(region) => region,
            _ => return None,
        };
        let end = self.offset.checked_add(len)?;
        region.get(self.offset..end)
    }

    /// Advance by `count` bytes
    ///
    /// The position grows while the remaining budget shrinks toward zero;
    /// both saturate instead of wrapping.
    pub fn advance(mut self, count: usize) -> Self {
        self.offset = self.offset.saturating_add(count);
        self.remaining = self.remaining.saturating_sub(count);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    struct Pair {
        a: u8,
        b: u8,
    }

    impl FixedRecord for Pair {
        const SIZE: usize = 2;

        fn encode_into(&self, buf: &mut [u8]) {
            buf[0] = self.a;
            buf[1] = self.b;
        }

        fn decode_from(buf: &[u8]) -> Self {
            Self {
                a: buf[0],
                b: buf[1],
            }
        }
    }

    #[test]
    fn test_write_then_read_back() {
        let mut region = [0u8; 8];

        let cursor = Cursor::read_write(&mut region, 0, 8);
        let cursor = cursor.write_u8(0xAB).write_u8(0xCD);
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.remaining(), 6);

        let mut first = 0u8;
        let mut second = 0u8;
        let reader = Cursor::read_only(&region, 0, 8);
        let reader = reader.read_u8(&mut first).read_u8(&mut second);
        assert_eq!(first, 0xAB);
        assert_eq!(second, 0xCD);
        assert_eq!(reader.offset(), 2);
    }

    #[test]
    fn test_budget_shrinks_while_position_grows() {
        // Each operation moves the position up and the budget down, so a
        // fresh 4-byte budget stops landing single bytes after two writes.
        let mut region = [0u8; 4];
        let cursor = Cursor::read_write(&mut region, 0, 4);
        let cursor = cursor.write_u8(1).write_u8(2).write_u8(3).write_u8(4);
        assert_eq!(cursor.offset(), 4);
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(region, [1, 2, 0, 0]);
    }

    #[test]
    fn test_write_past_budget_is_dropped() {
        let mut region = [0xFFu8; 8];
        let cursor = Cursor::read_write(&mut region, 6, 4);
        // 6 < 4 fails: nothing lands, the cursor still advances
        let cursor = cursor.write_u8(0x11);
        assert_eq!(cursor.offset(), 7);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(region, [0xFF; 8]);
    }

    #[test]
    fn test_write_requires_write_capability() {
        let region = [0u8; 4];
        let cursor = Cursor::read_only(&region, 0, 4);
        let cursor = cursor.write_u8(0x55);
        assert_eq!(cursor.offset(), 1);
        assert_eq!(region, [0; 4]);
    }

    #[test]
    fn test_read_requires_read_capability() {
        let mut region = [0x42u8; 4];
        let mut value = 0x99u8;
        let cursor = Cursor::read_write(&mut region, 0, 4);
        let cursor = cursor.read_u8(&mut value);
        assert_eq!(value, 0x99);
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn test_null_cursor_is_pure_advance() {
        let mut value = 0x77u8;
        let cursor = Cursor::null()
            .write_u8(0x01)
            .read_u8(&mut value)
            .advance(100);
        assert_eq!(value, 0x77);
        assert_eq!(cursor.offset(), 102);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_advance_saturates() {
        let region = [0u8; 2];
        let cursor = Cursor::read_only(&region, 0, 2).advance(usize::MAX).advance(10);
        assert_eq!(cursor.offset(), usize::MAX);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_record_roundtrip() {
        let mut region = [0u8; 8];
        let record = Pair { a: 0xDE, b: 0xAD };

        let cursor = Cursor::read_write(&mut region, 0, 8).write_record(&record);
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.remaining(), 6);

        let mut lifted = Pair::default();
        Cursor::read_only(&region, 0, 8).read_record(&mut lifted);
        assert_eq!(lifted, record);
    }

    #[test]
    fn test_record_needs_full_window() {
        let mut region = [0u8; 8];
        let record = Pair { a: 1, b: 2 };
        // Budget of 1 cannot hold a 2-byte record
        let cursor = Cursor::read_write(&mut region, 0, 1).write_record(&record);
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(region, [0; 8]);
    }

    #[test]
    fn test_read_record_out_of_bounds_keeps_value() {
        let region = [0x33u8; 8];
        let mut lifted = Pair { a: 9, b: 9 };
        Cursor::read_only(&region, 7, 8).read_record(&mut lifted);
        assert_eq!(lifted, Pair { a: 9, b: 9 });
    }

    #[test]
    fn test_peek_respects_budget_and_capability() {
        let region = [1u8, 2, 3, 4];
        let cursor = Cursor::read_only(&region, 0, 4);
        assert_eq!(cursor.peek(3), Some(&region[..3]));
        assert_eq!(cursor.peek(5), None);

        let cursor = cursor.advance(2);
        assert_eq!(cursor.peek(2), Some(&region[2..4]));

        let mut writable = [1u8, 2, 3, 4];
        let writer = Cursor::read_write(&mut writable, 0, 4);
        assert_eq!(writer.peek(1), None);
        assert_eq!(Cursor::null().peek(0), None);
    }

    #[test]
    fn test_oversized_budget_never_touches_past_region() {
        // The budget claims more than the region holds; the real bounds win.
        let mut region = [0u8; 4];
        let cursor = Cursor::read_write(&mut region, 50, 100);
        let cursor = cursor.write_u8(0xEE);
        assert_eq!(cursor.offset(), 51);
        assert_eq!(region, [0; 4]);
    }
}
