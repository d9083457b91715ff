/// The kind tag of a priority operation.
///
/// The discriminants are part of the wire contract shared with the settlement
/// processor and must never be renumbered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[repr(u8)]
pub enum OpType {
    /// An L1 deposit into the layer-2 system.
    #[display("deposit")]
    Deposit = 1,
    /// A forced exit of a layer-2 account's balance.
    #[display("full exit")]
    FullExit = 5,
    /// A cross-chain swap.
    #[display("quick swap")]
    QuickSwap = 8,
    /// An L1-initiated liquidity provisioning.
    #[display("l1 add liquidity")]
    L1AddLq = 10,
    /// An L1-initiated liquidity withdrawal.
    #[display("l1 remove liquidity")]
    L1RemoveLq = 12,
}

impl OpType {
    /// Returns the wire discriminant for the operation type.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// The provided byte does not map to a known [`OpType`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation type {0}")]
pub struct UnknownOpType(pub u8);

impl TryFrom<u8> for OpType {
    type Error = UnknownOpType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Deposit),
            5 => Ok(Self::FullExit),
            8 => Ok(Self::QuickSwap),
            10 => Ok(Self::L1AddLq),
            12 => Ok(Self::L1RemoveLq),
            unknown => Err(UnknownOpType(unknown)),
        }
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for OpType {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        u.choose(&[Self::Deposit, Self::FullExit, Self::QuickSwap, Self::L1AddLq, Self::L1RemoveLq])
            .copied()
    }
}
