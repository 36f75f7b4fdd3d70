// Error names and messages follow the Bitcoin Cash Node source code, file
// src/script/script_error.{h,cpp}, restricted to the encoding checks done by this crate.

// Orignal copyright header:
// Copyright (c) 2009-2010 Satoshi Nakamoto
// Copyright (c) 2009-2016 The Bitcoin Core developers
// Copyright (c) 2017-2022 The Bitcoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

use thiserror::Error;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[allow(non_camel_case_types)]
pub enum ScriptError {
    /// Never returned by a check, only useful as the initial value of an error slot.
    #[default]
    #[error("No error")]
    SCRIPT_ERR_OK,

    /* Malleability */
    #[error("Signature hash type missing or not understood")]
    SCRIPT_ERR_SIG_HASHTYPE,
    #[error("Non-canonical DER signature")]
    SCRIPT_ERR_SIG_DER,
    #[error("Non-canonical signature: S value is unnecessarily high")]
    SCRIPT_ERR_SIG_HIGH_S,
    #[error("Public key is neither compressed or uncompressed")]
    SCRIPT_ERR_PUBKEYTYPE,

    /* Schnorr */
    #[error("Signature cannot be 65 bytes in CHECKMULTISIG or ECDSA-only contexts")]
    SCRIPT_ERR_SIG_BADLENGTH,
    #[error("Only Schnorr signatures allowed in this operation")]
    SCRIPT_ERR_SIG_NONSCHNORR,

    /* Replay protection */
    #[error("Signature must use SIGHASH_FORKID")]
    SCRIPT_ERR_MUST_USE_FORKID,
    #[error("Illegal use of SIGHASH_FORKID")]
    SCRIPT_ERR_ILLEGAL_FORKID,
}

impl ScriptError {
    pub fn is_ok(&self) -> bool {
        *self == ScriptError::SCRIPT_ERR_OK
    }
}
