//! Encoding checks for signatures and public keys pushed to a script interpreter.
//!
//! Every check is a pure function of the bytes and the active [`ScriptFlags`], and only looks
//! at the encoding. Nothing here verifies a signature or validates a curve point.

pub mod der;
mod flags;
pub mod pubkey;
pub mod script_error;
mod sigencoding;
mod sighash;

#[cfg(test)]
mod test_vectors;

pub use crate::{
    flags::ScriptFlags,
    pubkey::{check_pubkey_encoding, PubKeyCheckResult},
    script_error::ScriptError,
    sigencoding::{
        check_data_signature_encoding, check_transaction_ecdsa_signature_encoding,
        check_transaction_schnorr_signature_encoding, check_transaction_signature_encoding,
        SCHNORR_SIGNATURE_SIZE,
    },
    sighash::{
        BaseSigHashType, ParseSigHashTypeError, SigHashType, SIGHASH_ALL, SIGHASH_ANYONECANPAY,
        SIGHASH_FORKID, SIGHASH_NONE, SIGHASH_SINGLE, SIGHASH_UTXOS,
    },
};
