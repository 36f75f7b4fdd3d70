use bitcoin_sigencoding::ScriptFlags;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputKind {
    /// Signature without hashtype byte (OP_CHECKDATASIG)
    Data,
    /// Transaction signature, Schnorr or ECDSA
    Tx,
    /// Transaction signature, ECDSA only
    Ecdsa,
    /// Transaction signature, Schnorr only
    Schnorr,
    /// Public key
    Pubkey,
    /// A single hashtype byte
    Sighash,
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// What the input is checked as
    pub kind: InputKind,

    /// Input bytes as hex
    pub input: String,

    /// Script flags, e.g. "STRICTENC | LOW_S | SIGHASH_FORKID"
    #[arg(short, long, default_value = "", value_parser = parse_flags)]
    pub flags: ScriptFlags,
}

fn parse_flags(s: &str) -> Result<ScriptFlags, String> {
    bitflags::parser::from_str(s).map_err(|e| e.to_string())
}
