use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::flags::ScriptFlags;

pub const SIGHASH_ALL: u8 = 0x01;
pub const SIGHASH_NONE: u8 = 0x02;
pub const SIGHASH_SINGLE: u8 = 0x03;
pub const SIGHASH_UTXOS: u8 = 0x20;
pub const SIGHASH_FORKID: u8 = 0x40;
pub const SIGHASH_ANYONECANPAY: u8 = 0x80;

const BASE_TYPE_MASK: u8 = 0x1f;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseSigHashType {
    Unsupported,
    All,
    None,
    Single,
}

impl BaseSigHashType {
    fn from_bits(bits: u8) -> Self {
        match bits {
            SIGHASH_ALL => Self::All,
            SIGHASH_NONE => Self::None,
            SIGHASH_SINGLE => Self::Single,
            _ => Self::Unsupported,
        }
    }

    fn bits(self) -> u8 {
        match self {
            Self::Unsupported => 0,
            Self::All => SIGHASH_ALL,
            Self::None => SIGHASH_NONE,
            Self::Single => SIGHASH_SINGLE,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Unsupported => "UNSUPPORTED",
            Self::All => "ALL",
            Self::None => "NONE",
            Self::Single => "SINGLE",
        }
    }
}

/// The hash type byte appended to a transaction signature.
///
/// Values are never mutated, the `with_*` methods return a modified copy:
///
/// ```
/// use bitcoin_sigencoding::{BaseSigHashType, SigHashType};
///
/// let sighash = SigHashType::default()
///     .with_base_type(BaseSigHashType::Single)
///     .with_fork(true);
/// assert_eq!(sighash.raw(), 0x43);
/// assert_eq!(SigHashType::from_raw(sighash.raw()), sighash);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SigHashType(u8);

impl Default for SigHashType {
    fn default() -> Self {
        Self(SIGHASH_ALL)
    }
}

impl SigHashType {
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Hash type of a signature, which is its last byte. An empty signature has hash type 0.
    pub fn from_signature(sig: &[u8]) -> Self {
        Self(sig.last().copied().unwrap_or(0))
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub fn base_type(self) -> BaseSigHashType {
        BaseSigHashType::from_bits(self.0 & BASE_TYPE_MASK)
    }

    pub fn has_anyone_can_pay(self) -> bool {
        self.0 & SIGHASH_ANYONECANPAY != 0
    }

    pub fn has_fork(self) -> bool {
        self.0 & SIGHASH_FORKID != 0
    }

    pub fn has_utxos(self) -> bool {
        self.0 & SIGHASH_UTXOS != 0
    }

    /// Replaces the base type. Unknown bits inside the base type field are cleared too.
    pub fn with_base_type(self, base_type: BaseSigHashType) -> Self {
        Self((self.0 & !BASE_TYPE_MASK) | base_type.bits())
    }

    pub fn with_anyone_can_pay(self, anyone_can_pay: bool) -> Self {
        self.with_bit(SIGHASH_ANYONECANPAY, anyone_can_pay)
    }

    pub fn with_fork(self, fork: bool) -> Self {
        self.with_bit(SIGHASH_FORKID, fork)
    }

    pub fn with_utxos(self, utxos: bool) -> Self {
        self.with_bit(SIGHASH_UTXOS, utxos)
    }

    fn with_bit(self, bit: u8, set: bool) -> Self {
        if set {
            Self(self.0 | bit)
        } else {
            Self(self.0 & !bit)
        }
    }

    /// Whether this hash type is defined under the given script flags.
    ///
    /// The base type must be ALL, NONE or SINGLE. SIGHASH_UTXOS (0x20) is only defined when the
    /// flags enable both the fork id and the token upgrade, and never together with
    /// SIGHASH_ANYONECANPAY.
    pub fn is_defined(self, flags: ScriptFlags) -> bool {
        if self.base_type() == BaseSigHashType::Unsupported {
            return false;
        }

        if self.has_utxos() {
            if !flags.sighash_utxos_enabled() {
                return false;
            }
            if self.has_anyone_can_pay() {
                return false;
            }
        }

        true
    }
}

impl fmt::Display for SigHashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_type().name())?;
        if self.has_fork() {
            f.write_str("|FORKID")?;
        }
        if self.has_anyone_can_pay() {
            f.write_str("|ANYONECANPAY")?;
        }
        if self.has_utxos() {
            f.write_str("|UTXOS")?;
        }

        // the named bits and the base type field cover the whole byte
        let base = self.0 & BASE_TYPE_MASK;
        if self.base_type() == BaseSigHashType::Unsupported && base != 0 {
            write!(f, "|0x{base:02x}")?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSigHashTypeError {
    #[error("unknown sighash flag \"{0}\"")]
    UnknownFlag(String),
    #[error("sighash flag \"{0}\" given more than once")]
    DuplicateFlag(String),
    #[error("sighash type needs exactly one of ALL, NONE or SINGLE")]
    MissingBaseType,
}

impl FromStr for SigHashType {
    type Err = ParseSigHashTypeError;

    /// Parses the `|` separated form produced by [`fmt::Display`], e.g. `ALL|FORKID`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut base = None;
        let mut raw = 0u8;

        for token in s.split('|').map(str::trim) {
            let (bit, is_base) = match token {
                "ALL" => (SIGHASH_ALL, true),
                "NONE" => (SIGHASH_NONE, true),
                "SINGLE" => (SIGHASH_SINGLE, true),
                "FORKID" => (SIGHASH_FORKID, false),
                "ANYONECANPAY" => (SIGHASH_ANYONECANPAY, false),
                "UTXOS" => (SIGHASH_UTXOS, false),
                _ => return Err(ParseSigHashTypeError::UnknownFlag(token.to_owned())),
            };

            if is_base {
                if base.is_some() {
                    return Err(ParseSigHashTypeError::MissingBaseType);
                }
                base = Some(bit);
            } else {
                if raw & bit != 0 {
                    return Err(ParseSigHashTypeError::DuplicateFlag(token.to_owned()));
                }
                raw |= bit;
            }
        }

        let base = base.ok_or(ParseSigHashTypeError::MissingBaseType)?;
        Ok(Self(raw | base))
    }
}
