//! Encodings shared by the unit tests.

pub const MINIMAL_SIG: &str = "3006020101020101";

pub const HIGH_S_SIG: &str = "304502203e4516da7253cf068effec6b95c41221c0cf3a8e6ccb8cbf1725b562e9afde2c022100ab1e3da73d67e32045a20e0b999e049978ea8d6ee5480d485fcf2ce0d03b2ef0";

/// 64 bytes that happen to be a valid DER signature.
pub const DER_64: &str = "303e021d4444444444444444444444444444444444444444444444444444444444021d4444444444444444444444444444444444444444444444444444444444";

/// Parsable, but not canonical DER.
pub const NON_DER_SIGS: [&str; 9] = [
    // non canonical total length
    "308006020101020101",
    // zero length R
    "302f0200022100ab1e3da73d67e32045a20e0b999e049978ea8d6ee5480d485fcf2ce0d03b2ef0",
    // non canonical length for R
    "30310280016c022100ab1e3da73d67e32045a20e0b999e049978ea8d6ee5480d485fcf2ce0d03b2ef0",
    // negative R
    "3030020180022100ab1e3da73d67e32045a20e0b999e049978ea8d6ee5480d485fcf2ce0d03b2ef0",
    // null prefixed R
    "303102020001022100ab1e3da73d67e32045a20e0b999e049978ea8d6ee5480d485fcf2ce0d03b2ef0",
    // zero length S
    "302f022100ab1e3da73d67e32045a20e0b999e049978ea8d6ee5480d485fcf2ce0d03b2ef00200",
    // non canonical length for S
    "3031022100ab1e3da73d67e32045a20e0b999e049978ea8d6ee5480d485fcf2ce0d03b2ef00280016c",
    // negative S
    "3030022100ab1e3da73d67e32045a20e0b999e049978ea8d6ee5480d485fcf2ce0d03b2ef0020180",
    // null prefixed S
    "3031022100ab1e3da73d67e32045a20e0b999e049978ea8d6ee5480d485fcf2ce0d03b2ef002020001",
];

pub const NON_PARSABLE_SIGS: [&str; 18] = [
    // too short
    "30",
    "3006",
    "300602",
    "30060201",
    "3006020101",
    "300602010102",
    "30060201010201",
    // invalid type (must be 0x30, compound)
    "4206020101020101",
    // invalid sizes
    "3005020101020101",
    "3007020101020101",
    // invalid R and S sizes
    "3006020001020101",
    "3006020201020101",
    "3006020101020001",
    "3006020101020201",
    // invalid R and S types
    "3006420101020101",
    "3006020101420101",
    // S out of bounds
    "3006020101020200",
    // too long
    "30470221008e4516da7253cf068effec6b95c41221c0cf3a8e6ccb8cbf1725b562e9afde2c022200ab1e3d00a73d67e32045a20e0b999e049978ea8d6ee5480d485fcf2ce0d03b2ef0",
];

pub const COMPRESSED_KEY_0: &str =
    "02123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0";
pub const COMPRESSED_KEY_1: &str =
    "0356789abcdef0123456789abcdef0123456789abcdef0123456789abcdef00fff";
pub const FULL_KEY: &str = "04123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef056789abcdef0123456789abcdef0123456789abcdef0123456789abcdef00fff";

pub const INVALID_KEYS: [&str; 26] = [
    // degenerate keys
    "",
    "00",
    "01",
    "02",
    "03",
    "04",
    "05",
    "42",
    "ff",
    // invalid first byte
    "00123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0",
    "00123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef056789abcdef0123456789abcdef0123456789abcdef0123456789abcdef00fff",
    "01123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0",
    "01123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef056789abcdef0123456789abcdef0123456789abcdef0123456789abcdef00fff",
    "05123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0",
    "05123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef056789abcdef0123456789abcdef0123456789abcdef0123456789abcdef00fff",
    "ff123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0",
    "ff123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef056789abcdef0123456789abcdef0123456789abcdef0123456789abcdef00fff",
    // compressed key too short
    "02123456789abcdef0123456789abcdef0123456789adef0123456789abcdef0",
    "0356789abcdef0123456789abcdef0123456789abcdef03456789abcdef00fff",
    // compressed key too long
    "02123456789abcdef0123456789abcdef012345678abba9adef0123456789abcdef0",
    "0356789abcdef0123456789abcdef0123456789abcdef0abba3456789abcdef00fff",
    // compressed key, full key size
    "02123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef056789abcdef0123456789abcdef0123456789abcdef0123456789abcdef00fff",
    "03123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef056789abcdef0123456789abcdef0123456789abcdef0123456789abcdef00fff",
    // full key, too short
    "04123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef056789abcdef0123456789adef0123456789abcdef0123456789abcdef00fff",
    // full key, too long
    "04123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef05678ab9abcdef0123456789adef0123456789abcdedef0123456789abcdef00fff",
    // full key, compressed key size
    "04123456789abcdef0123456789abcdef012345678abba9adef0123456789abcdef0",
];

pub fn bytes(hex: &str) -> Vec<u8> {
    hex::decode(hex).unwrap()
}
