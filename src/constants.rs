pub const MAX_DIGITS: u8 = 8;
pub const MAX_INTENSITY: u8 = 15; // 4 bits
pub const MAX_DECODE_MASK: u8 = 0x07;
pub const DP: u8 = 0x80; // OR into a digit value to light the decimal point

/*
 * No-decode segment data, datasheet Table 16:
 *
 *        7  6  5  4  3  2  1  0
 * Line  DP  a  b  c  d  e  f  g
 */
pub const NUMBERS: [u8; 10] = [
    0x7E, 0x30, 0x6D, 0x79, 0x33, 0x5B, 0x5F, 0x70, 0x7F, 0x7B,
];
pub const LETTERS: [u8; 26] = [
    0x7D, 0x1F, 0x0D, 0x3D, 0x4F, 0x47, 0x5E, 0x17, 0x44, 0x58, 0x57, 0x0E, 0x55, 0x15, 0x1D, 0x67,
    0x73, 0x05, 0x5A, 0x0F, 0x1C, 0x2A, 0x2B, 0x14, 0x3B, 0x6C,
];
pub const SEG_MINUS: u8 = 0x01;

pub mod register {
    pub const NO_OP: u8 = 0x00;
    pub const DECODE_MODE: u8 = 0x01;
    pub const INTENSITY: u8 = 0x02;
    pub const SCAN_LIMIT: u8 = 0x03;
    pub const CONFIGURATION: u8 = 0x04;
    // 0x05 does not exist, 0x06 is factory reserved
    pub const DISPLAY_TEST: u8 = 0x07;

    pub mod configuration {
        pub const NORMAL_OPERATION: u8 = 0x01; // bit 0 clear: shutdown mode
        pub const RESERVED: u8 = 0x02; // bit 1: must be written as 0
        pub const BLINK_RATE_FAST: u8 = 0x04; // bit 2 clear: slow blink
        pub const BLINK_ENABLE: u8 = 0x08; // bit 3: enables plane alternation
        pub const BLINK_TIMING_RESET: u8 = 0x10; // bit 4: restarts the blink cycle
        pub const RESET_DATA: u8 = 0x20; // bit 5: clears all data in planes P0 and P1
    }

    pub mod display_test {
        pub const TEST_MODE: u8 = 0x00;
        pub const NORMAL_OPERATION: u8 = 0x01;
    }
}

/*
 * Code-B indices, MAX7219 datasheet Table 5. Indices 0-9 decode to the
 * matching digit glyph.
 */
pub mod code_b {
    pub const HYPHEN: u8 = 0x0A;
    pub const E: u8 = 0x0B;
    pub const H: u8 = 0x0C;
    pub const L: u8 = 0x0D;
    pub const P: u8 = 0x0E;
    pub const BLANK: u8 = 0x0F;
}
