mod cli;

use self::cli::{Args, InputKind};

use std::process::ExitCode;

use bitcoin_sigencoding::{
    ScriptError, ScriptFlags, SigHashType, check_data_signature_encoding, check_pubkey_encoding,
    check_transaction_ecdsa_signature_encoding, check_transaction_schnorr_signature_encoding,
    check_transaction_signature_encoding,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn check(kind: InputKind, bytes: &[u8], flags: ScriptFlags) -> Result<(), ScriptError> {
    match kind {
        InputKind::Data => check_data_signature_encoding(bytes, flags),
        InputKind::Tx => check_transaction_signature_encoding(bytes, flags),
        InputKind::Ecdsa => check_transaction_ecdsa_signature_encoding(bytes, flags),
        InputKind::Schnorr => check_transaction_schnorr_signature_encoding(bytes, flags),
        InputKind::Pubkey => check_pubkey_encoding(bytes, flags),
        InputKind::Sighash => {
            let sighash = SigHashType::from_signature(bytes);
            println!("sighash: {sighash}");
            if sighash.is_defined(flags) {
                Ok(())
            } else {
                Err(ScriptError::SCRIPT_ERR_SIG_HASHTYPE)
            }
        }
    }
}

pub fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let bytes = match hex::decode(args.input.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("invalid hex: {e}");
            return ExitCode::from(2);
        }
    };

    if args.kind == InputKind::Sighash && bytes.len() != 1 {
        eprintln!("a sighash is exactly one byte, got {}", bytes.len());
        return ExitCode::from(2);
    }

    tracing::debug!(kind = ?args.kind, len = bytes.len(), flags = ?args.flags, "checking");

    match check(args.kind, &bytes, args.flags) {
        Ok(()) => {
            println!("ok");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
