use crate::flags::ScriptFlags;
use crate::script_error::ScriptError;

pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;
pub const PUBLIC_KEY_SIZE: usize = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PubKeyCheckResult {
    Invalid,
    Valid { compressed: bool },
}

/// Classifies a SEC1 encoded public key by its length and prefix byte. The point itself is
/// not checked to be on the curve.
pub fn check_pub_key(pub_key: &[u8]) -> PubKeyCheckResult {
    match pub_key {
        [0x02 | 0x03, ..] if pub_key.len() == COMPRESSED_PUBLIC_KEY_SIZE => {
            PubKeyCheckResult::Valid { compressed: true }
        }
        [0x04, ..] if pub_key.len() == PUBLIC_KEY_SIZE => {
            PubKeyCheckResult::Valid { compressed: false }
        }
        _ => PubKeyCheckResult::Invalid,
    }
}

pub fn is_compressed_or_uncompressed_pubkey(pub_key: &[u8]) -> bool {
    matches!(check_pub_key(pub_key), PubKeyCheckResult::Valid { .. })
}

pub fn is_compressed_pubkey(pub_key: &[u8]) -> bool {
    check_pub_key(pub_key) == PubKeyCheckResult::Valid { compressed: true }
}

/// With STRICTENC, only compressed and uncompressed keys are accepted. Without it, any byte
/// string is.
pub fn check_pubkey_encoding(pub_key: &[u8], flags: ScriptFlags) -> Result<(), ScriptError> {
    if flags.enforces_strict_encoding() && !is_compressed_or_uncompressed_pubkey(pub_key) {
        tracing::trace!(len = pub_key.len(), "rejected public key encoding");
        return Err(ScriptError::SCRIPT_ERR_PUBKEYTYPE);
    }

    Ok(())
}
