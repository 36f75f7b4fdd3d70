// The DER rules below follow the Bitcoin Core source code, src/script/interpreter.cpp
// (IsValidSignatureEncoding), restated for a signature without its trailing hashtype byte.

// Orignal Bitcoin Core copyright header:
// Copyright (c) 2009-2010 Satoshi Nakamoto
// Copyright (c) 2009-2022 The Bitcoin Core developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

const DER_SEQUENCE: u8 = 0x30;
const DER_INTEGER: u8 = 0x02;

pub const MIN_DER_SIGNATURE_SIZE: usize = 8;
pub const MAX_DER_SIGNATURE_SIZE: usize = 72;

/// Order of the secp256k1 group, big endian.
const CURVE_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// `CURVE_ORDER / 2`, the largest S value that is still low.
const HALF_CURVE_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

/// A strictly DER encoded ECDSA signature, borrowed from the bytes it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerSignature<'a> {
    r: &'a [u8],
    s: &'a [u8],
}

impl<'a> DerSignature<'a> {
    /// A canonical signature exists of: <30> <total len> <02> <len R> <R> <02> <len S> <S>
    /// Where R and S are not negative (their first byte has its highest bit not set), and not
    /// excessively padded (do not start with a 0 byte, unless an otherwise negative number
    /// follows, in which case a single 0 byte is necessary and even required).
    ///
    /// See https://bitcointalk.org/index.php?topic=8392.msg127623#msg127623
    ///
    /// This function is consensus-critical since BIP66.
    pub fn parse(sig: &'a [u8]) -> Option<Self> {
        if !(MIN_DER_SIGNATURE_SIZE..=MAX_DER_SIGNATURE_SIZE).contains(&sig.len()) {
            return None;
        }

        // The total length must cover the entire signature.
        if sig[0] != DER_SEQUENCE || sig[1] as usize != sig.len() - 2 {
            return None;
        }

        // The length of S must still be inside the signature.
        let len_r = sig[3] as usize;
        if 5 + len_r >= sig.len() {
            return None;
        }

        // Both elements together must fill the signature exactly.
        let len_s = sig[5 + len_r] as usize;
        if len_r + len_s + 6 != sig.len() {
            return None;
        }

        let r = parse_integer(&sig[2..4 + len_r])?;
        let s = parse_integer(&sig[4 + len_r..])?;

        Some(Self { r, s })
    }

    /// Big endian R, including its sign padding byte if it has one.
    pub fn r(&self) -> &'a [u8] {
        self.r
    }

    /// Big endian S, including its sign padding byte if it has one.
    pub fn s(&self) -> &'a [u8] {
        self.s
    }

    /// Whether S is at most half the curve order.
    ///
    /// Signatures where R or S do not fit below the curve order are treated as the zero
    /// signature, like libsecp256k1's lax DER parser does, and count as low.
    pub fn has_low_s(&self) -> bool {
        match (to_scalar(self.r), to_scalar(self.s)) {
            (Some(r), Some(s)) if r < CURVE_ORDER && s < CURVE_ORDER => s <= HALF_CURVE_ORDER,
            _ => true,
        }
    }
}

/// Checks an INTEGER element (tag, length and value) whose length was already checked to be
/// consistent with the enclosing sequence, and returns its value.
fn parse_integer(element: &[u8]) -> Option<&[u8]> {
    let [tag, _len, value @ ..] = element else {
        return None;
    };

    if *tag != DER_INTEGER {
        return None;
    }

    match value {
        // Zero-length integers are not allowed.
        [] => None,
        // Negative numbers are not allowed.
        [first, ..] if first & 0x80 != 0 => None,
        // Null bytes at the start are not allowed, unless the integer would otherwise be
        // interpreted as a negative number.
        [0x00, second, ..] if second & 0x80 == 0 => None,
        _ => Some(value),
    }
}

fn to_scalar(value: &[u8]) -> Option<[u8; 32]> {
    let start = value.iter().position(|&b| b != 0).unwrap_or(value.len());
    let value = &value[start..];
    if value.len() > 32 {
        return None;
    }

    let mut scalar = [0; 32];
    scalar[32 - value.len()..].copy_from_slice(value);
    Some(scalar)
}

/// Whether `sig` (without hashtype byte) is a strictly DER encoded signature.
pub fn is_valid_der_signature_encoding(sig: &[u8]) -> bool {
    DerSignature::parse(sig).is_some()
}

/// Same as [`is_valid_der_signature_encoding`], for a signature that still carries its
/// trailing hashtype byte.
pub fn is_valid_signature_encoding(sig: &[u8]) -> bool {
    sig.split_last()
        .is_some_and(|(_, der)| is_valid_der_signature_encoding(der))
}

/// Whether `sig` (without hashtype byte) is strictly DER encoded and has a low S value.
pub fn is_low_s(sig: &[u8]) -> bool {
    DerSignature::parse(sig).is_some_and(|sig| sig.has_low_s())
}
