//! Encoding checks for signatures, done before any signature is verified.
//!
//! A 64 byte signature (not counting the hashtype byte) is a Schnorr signature, anything else
//! is treated as a DER encoded ECDSA signature. An empty signature is always accepted, it is
//! the compact way to provide an invalid signature to CHECK(MULTI)SIG.

use crate::der::{is_low_s, is_valid_der_signature_encoding};
use crate::flags::ScriptFlags;
use crate::script_error::ScriptError;
use crate::sighash::SigHashType;

pub const SCHNORR_SIGNATURE_SIZE: usize = 64;

fn is_schnorr_sig(sig: &[u8]) -> bool {
    sig.len() == SCHNORR_SIGNATURE_SIZE
}

fn reject(sig: &[u8], err: ScriptError) -> Result<(), ScriptError> {
    tracing::trace!(len = sig.len(), ?err, "rejected signature encoding");
    Err(err)
}

fn check_raw_ecdsa_signature_encoding(sig: &[u8], flags: ScriptFlags) -> Result<(), ScriptError> {
    // In an ECDSA-only context, 64 byte signatures are forbidden.
    if is_schnorr_sig(sig) {
        return reject(sig, ScriptError::SCRIPT_ERR_SIG_BADLENGTH);
    }

    if flags.enforces_der() && !is_valid_der_signature_encoding(sig) {
        return reject(sig, ScriptError::SCRIPT_ERR_SIG_DER);
    }

    if flags.enforces_low_s() && !is_low_s(sig) {
        return reject(sig, ScriptError::SCRIPT_ERR_SIG_HIGH_S);
    }

    Ok(())
}

fn check_raw_schnorr_signature_encoding(
    sig: &[u8],
    _flags: ScriptFlags,
) -> Result<(), ScriptError> {
    if !is_schnorr_sig(sig) {
        return reject(sig, ScriptError::SCRIPT_ERR_SIG_NONSCHNORR);
    }

    Ok(())
}

fn check_raw_signature_encoding(sig: &[u8], flags: ScriptFlags) -> Result<(), ScriptError> {
    if is_schnorr_sig(sig) {
        // A fixed length 64 byte string has no inner structure to check.
        return Ok(());
    }

    check_raw_ecdsa_signature_encoding(sig, flags)
}

fn check_sighash_encoding(sig: &[u8], flags: ScriptFlags) -> Result<(), ScriptError> {
    if !flags.enforces_strict_encoding() {
        return Ok(());
    }

    let sighash = SigHashType::from_signature(sig);
    if !sighash.is_defined(flags) {
        return reject(sig, ScriptError::SCRIPT_ERR_SIG_HASHTYPE);
    }

    match (flags.sighash_forkid_enabled(), sighash.has_fork()) {
        (false, true) => reject(sig, ScriptError::SCRIPT_ERR_ILLEGAL_FORKID),
        (true, false) => reject(sig, ScriptError::SCRIPT_ERR_MUST_USE_FORKID),
        _ => Ok(()),
    }
}

/// Runs `check_raw` on the signature without its hashtype byte, then checks the hashtype.
/// Shape errors therefore take precedence over hashtype errors.
fn check_transaction_signature_encoding_with(
    sig: &[u8],
    flags: ScriptFlags,
    check_raw: fn(&[u8], ScriptFlags) -> Result<(), ScriptError>,
) -> Result<(), ScriptError> {
    let Some((_, raw)) = sig.split_last() else {
        return Ok(());
    };

    check_raw(raw, flags)?;
    check_sighash_encoding(sig, flags)
}

/// Checks a signature that does not carry a hashtype byte, as used by OP_CHECKDATASIG.
pub fn check_data_signature_encoding(sig: &[u8], flags: ScriptFlags) -> Result<(), ScriptError> {
    if sig.is_empty() {
        return Ok(());
    }

    check_raw_signature_encoding(sig, flags)
}

/// Checks a transaction signature (with hashtype byte) that may be either Schnorr or ECDSA.
pub fn check_transaction_signature_encoding(
    sig: &[u8],
    flags: ScriptFlags,
) -> Result<(), ScriptError> {
    check_transaction_signature_encoding_with(sig, flags, check_raw_signature_encoding)
}

/// Checks a transaction signature (with hashtype byte) that must be ECDSA, as in
/// legacy-mode CHECKMULTISIG.
pub fn check_transaction_ecdsa_signature_encoding(
    sig: &[u8],
    flags: ScriptFlags,
) -> Result<(), ScriptError> {
    check_transaction_signature_encoding_with(sig, flags, check_raw_ecdsa_signature_encoding)
}

/// Checks a transaction signature (with hashtype byte) that must be Schnorr, as in
/// Schnorr-mode CHECKMULTISIG.
pub fn check_transaction_schnorr_signature_encoding(
    sig: &[u8],
    flags: ScriptFlags,
) -> Result<(), ScriptError> {
    check_transaction_signature_encoding_with(sig, flags, check_raw_schnorr_signature_encoding)
}
