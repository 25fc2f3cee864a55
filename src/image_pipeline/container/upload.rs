//! Packet framing used by the device's upload port.
//!
//! Only the arithmetic lives here so the encoder can report how a file
//! will be split; transport is handled by the upload tool.

/// TCP payload size the device expects per packet.
pub const PACKET_SIZE: usize = 1460;
pub const PACKET_HEADER: &[u8] = b"d3e0c9ba02014dd8";
pub const PACKET_TYPE_NAME: &[u8] = b"0AgQ";
pub const PACKET_TYPE_DATA: &[u8] = b"1GnH";
pub const PACKET_TYPE_END: &[u8] = b"1AfF";
pub const PACKET_TRAILER: &[u8] = b"bfb5d2a2";

/// How a file of a given size is split into data packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPlan {
    pub file_size: usize,
    /// File bytes carried per data packet
    pub chunk_size: usize,
    pub packets: usize,
    /// Filler appended to the last chunk
    pub padding: usize,
}

impl UploadPlan {
    pub const fn chunk_size() -> usize {
        PACKET_SIZE - PACKET_HEADER.len() - PACKET_TYPE_DATA.len() - PACKET_TRAILER.len()
    }

    pub fn for_file_size(file_size: usize) -> Self {
        let chunk_size = Self::chunk_size();
        let packets = file_size.div_ceil(chunk_size);
        Self {
            file_size,
            chunk_size,
            packets,
            padding: packets * chunk_size - file_size,
        }
    }

    /// Length announced in the name packet; the device counts the padding.
    pub fn announced_length(&self) -> usize {
        self.file_size + self.padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::codec::EncoderConfig;

    #[test]
    fn chunk_size_leaves_room_for_framing() {
        assert_eq!(UploadPlan::chunk_size(), 1432);
    }

    #[test]
    fn single_image_container() {
        let size = EncoderConfig::default().container_size(1);
        assert_eq!(size, 118_784);

        let plan = UploadPlan::for_file_size(size);
        assert_eq!(plan.packets, 83);
        assert_eq!(plan.padding, 83 * 1432 - 118_784);
        assert_eq!(plan.announced_length() % plan.chunk_size, 0);
    }

    #[test]
    fn exact_multiple_needs_no_padding() {
        let plan = UploadPlan::for_file_size(2 * 1432);
        assert_eq!(plan.packets, 2);
        assert_eq!(plan.padding, 0);

        let empty = UploadPlan::for_file_size(0);
        assert_eq!(empty.packets, 0);
        assert_eq!(empty.padding, 0);
    }
}
