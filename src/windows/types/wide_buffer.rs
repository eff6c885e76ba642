//! Bounded UTF-16 output buffer for OS calls that write variable-length text
//!
//! The buffer tracks its fixed capacity and the length the OS reported
//! writing. Decoding stops at the first NUL unit and never looks past
//! either bound.

use crate::windows::utils::string_conv::wide_to_string;

/// Size of one UTF-16 code unit in bytes
pub const WIDE_UNIT_BYTES: usize = 2;

/// Zero-initialised UTF-16 buffer with a fixed capacity
#[derive(Debug, Clone)]
pub struct WideBuffer {
    units: Vec<u16>,
    used: usize,
}

impl WideBuffer {
    /// Allocate `capacity` zeroed code units. Until the OS reports a length,
    /// the whole capacity is considered written.
    pub fn with_capacity(capacity: usize) -> Self {
        WideBuffer {
            units: vec![0u16; capacity],
            used: capacity,
        }
    }

    /// Allocate as many code units as fit in `bytes`
    pub fn from_byte_budget(bytes: usize) -> Self {
        Self::with_capacity(bytes / WIDE_UNIT_BYTES)
    }

    /// Capacity in code units
    pub fn capacity(&self) -> usize {
        self.units.len()
    }

    /// Capacity for APIs taking a `DWORD` count
    pub fn capacity_u32(&self) -> u32 {
        u32::try_from(self.units.len()).unwrap_or(u32::MAX)
    }

    /// Capacity for APIs taking an `int` count
    pub fn capacity_i32(&self) -> i32 {
        i32::try_from(self.units.len()).unwrap_or(i32::MAX)
    }

    /// Pointer handed to the OS. Writes through it must stay within
    /// `capacity()` units.
    pub fn as_mut_ptr(&mut self) -> *mut u16 {
        self.units.as_mut_ptr()
    }

    /// Record the length the OS reported. Values beyond the capacity are
    /// clamped; the clamped length is returned.
    pub fn set_used(&mut self, reported: usize) -> usize {
        self.used = reported.min(self.units.len());
        self.used
    }

    /// Length currently considered written
    pub fn used(&self) -> usize {
        self.used
    }

    /// True when the OS reported more units than the buffer holds
    pub fn would_truncate(&self, reported: usize) -> bool {
        reported > self.units.len()
    }

    /// Written units up to, not including, the first NUL
    pub fn as_units(&self) -> &[u16] {
        let written = &self.units[..self.used];
        let end = written
            .iter()
            .position(|&unit| unit == 0)
            .unwrap_or(written.len());
        &written[..end]
    }

    /// Mutable view of the whole allocation
    pub fn as_mut_slice(&mut self) -> &mut [u16] {
        &mut self.units
    }

    /// Decode the written prefix, replacing invalid UTF-16 with U+FFFD
    pub fn to_string_lossy(&self) -> String {
        wide_to_string(self.as_units())
    }

    /// Zero the contents and reset the used length to the full capacity
    pub fn clear(&mut self) {
        self.units.fill(0);
        self.used = self.units.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_buffer_decodes_empty() {
        let buffer = WideBuffer::with_capacity(16);
        assert_eq!(buffer.capacity(), 16);
        assert_eq!(buffer.to_string_lossy(), "");
        assert!(buffer.as_units().is_empty());
    }

    #[test]
    fn test_byte_budget() {
        assert_eq!(WideBuffer::from_byte_budget(66000).capacity(), 33000);
        assert_eq!(WideBuffer::from_byte_budget(7).capacity(), 3);
        assert_eq!(WideBuffer::from_byte_budget(0).capacity(), 0);
    }

    #[test]
    fn test_decode_stops_at_first_nul() {
        let mut buffer = WideBuffer::with_capacity(8);
        buffer
            .as_mut_slice()
            .copy_from_slice(&[72, 105, 0, 88, 88, 0, 0, 0]);
        assert_eq!(buffer.to_string_lossy(), "Hi");
    }

    #[test]
    fn test_set_used_limits_decoding() {
        let mut buffer = WideBuffer::with_capacity(5);
        buffer.as_mut_slice().copy_from_slice(&[65, 66, 67, 68, 69]);
        assert_eq!(buffer.set_used(3), 3);
        assert_eq!(buffer.to_string_lossy(), "ABC");
    }

    #[test]
    fn test_set_used_clamps_to_capacity() {
        let mut buffer = WideBuffer::with_capacity(4);
        assert!(buffer.would_truncate(10));
        assert_eq!(buffer.set_used(10), 4);
        assert_eq!(buffer.used(), 4);
    }

    #[test]
    fn test_full_buffer_without_terminator() {
        let mut buffer = WideBuffer::with_capacity(6);
        buffer.as_mut_slice().fill(u16::from(b'z'));
        assert_eq!(buffer.to_string_lossy(), "zzzzzz");
        assert_eq!(buffer.as_units().len(), 6);
    }

    #[test]
    fn test_capacity_conversions() {
        let buffer = WideBuffer::with_capacity(260);
        assert_eq!(buffer.capacity_u32(), 260);
        assert_eq!(buffer.capacity_i32(), 260);
    }

    #[test]
    fn test_clear() {
        let mut buffer = WideBuffer::with_capacity(3);
        buffer.as_mut_slice().copy_from_slice(&[49, 50, 51]);
        buffer.set_used(2);
        buffer.clear();
        assert_eq!(buffer.used(), 3);
        assert_eq!(buffer.to_string_lossy(), "");
    }
}
