//! Low-level buffer slot helpers

use super::types::error::{BasError, Result};

/// Borrow exactly `size` bytes starting at `offset`.
///
/// Fails with `TruncatedBuffer` when fewer than `size` bytes remain.
pub fn slot<'a>(buffer: &'a [u8], offset: usize, size: usize, context: &'static str) -> Result<&'a [u8]> {
    let end = slot_end(buffer.len(), offset, size, context)?;
    Ok(&buffer[offset..end])
}

/// Mutable counterpart of [`slot`].
pub fn slot_mut<'a>(
    buffer: &'a mut [u8],
    offset: usize,
    size: usize,
    context: &'static str,
) -> Result<&'a mut [u8]> {
    let end = slot_end(buffer.len(), offset, size, context)?;
    Ok(&mut buffer[offset..end])
}

fn slot_end(len: usize, offset: usize, size: usize, context: &'static str) -> Result<usize> {
    let available = len.saturating_sub(offset);
    if available < size {
        return Err(BasError::TruncatedBuffer {
            context,
            offset,
            expected: size,
            found: available,
        });
    }
    Ok(offset + size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_borrows_exact_range() {
        let buffer = [0u8, 1, 2, 3, 4, 5];
        assert_eq!(slot(&buffer, 2, 3, "test").unwrap(), &[2, 3, 4]);
        assert_eq!(slot(&buffer, 6, 0, "test").unwrap(), &[] as &[u8]);

        let mut owned = buffer;
        slot_mut(&mut owned, 4, 2, "test").unwrap().copy_from_slice(&[9, 9]);
        assert_eq!(owned, [0, 1, 2, 3, 9, 9]);
    }

    #[test]
    fn slot_past_end_is_truncated() {
        let buffer = [0u8; 4];
        assert!(matches!(
            slot(&buffer, 2, 3, "test"),
            Err(BasError::TruncatedBuffer { context: "test", offset: 2, expected: 3, found: 2 })
        ));
        assert!(matches!(
            slot(&buffer, 10, 1, "test"),
            Err(BasError::TruncatedBuffer { found: 0, .. })
        ));
    }
}
