use bitflags::bitflags;

bitflags! {
    /// Script verification flags consumed by the encoding checks.
    ///
    /// Bit positions match the ones used by Bitcoin Cash Node, so a flag word produced by an
    /// interpreter can be passed through with [`ScriptFlags::from_bits_retain`]. Bits that are
    /// not named here are kept but never looked at.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ScriptFlags: u32 {
        /// Passing a non-strict-DER signature or one with an undefined hashtype to a checksig
        /// operation causes script failure. Evaluating a pubkey that is not (0x04 + 64 bytes)
        /// or (0x02 or 0x03 + 32 bytes) by checksig causes script failure.
        const STRICTENC = 1 << 1;

        /// Passing a non-strict-DER signature to a checksig operation causes script failure
        /// (BIP62 rule 1, BIP66).
        const DERSIG = 1 << 2;

        /// Passing a non-strict-DER signature or one with S > order/2 to a checksig operation
        /// causes script failure (BIP62 rule 5).
        const LOW_S = 1 << 3;

        /// Signatures must commit to the fork id (replay protection).
        const SIGHASH_FORKID = 1 << 16;

        /// Token upgrade, makes SIGHASH_UTXOS usable together with SIGHASH_FORKID.
        const ENABLE_TOKENS = 1 << 27;
    }
}

impl ScriptFlags {
    /// Any of DERSIG, LOW_S and STRICTENC turns on strict DER parsing.
    pub fn enforces_der(&self) -> bool {
        self.intersects(Self::DERSIG | Self::LOW_S | Self::STRICTENC)
    }

    pub fn enforces_low_s(&self) -> bool {
        self.contains(Self::LOW_S)
    }

    pub fn enforces_strict_encoding(&self) -> bool {
        self.contains(Self::STRICTENC)
    }

    pub fn sighash_forkid_enabled(&self) -> bool {
        self.contains(Self::SIGHASH_FORKID)
    }

    /// SIGHASH_UTXOS is only meaningful once both the fork id and the token upgrade are active.
    pub fn sighash_utxos_enabled(&self) -> bool {
        self.contains(Self::SIGHASH_FORKID | Self::ENABLE_TOKENS)
    }
}

/// Every combination of the named flags.
#[cfg(test)]
pub(crate) fn all_combinations() -> impl Iterator<Item = ScriptFlags> {
    let named: Vec<ScriptFlags> = ScriptFlags::all().iter().collect();
    (0u32..1 << named.len()).map(move |mask| {
        named
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .fold(ScriptFlags::empty(), |acc, (_, &flag)| acc | flag)
    })
}

/// MMIX linear congruential generator, used to sample raw flag words including unnamed bits.
#[cfg(test)]
pub(crate) struct Lcg(u64);

#[cfg(test)]
impl Lcg {
    pub(crate) fn new() -> Self {
        Self(0)
    }

    pub(crate) fn next_flags(&mut self) -> ScriptFlags {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ScriptFlags::from_bits_retain((self.0 >> 32) as u32)
    }
}
