//! The five priority operation kinds and their canonical fixed-layout encodings.
//!
//! All fields are encoded big-endian at fixed widths, in declaration order, with no
//! length prefixes or padding. Fields documented as "zero at creation" are sentinel
//! values the settlement process resolves by position.

pub use add_liquidity::L1AddLqOp;
mod add_liquidity;

pub use deposit::DepositOp;
mod deposit;

pub use full_exit::FullExitOp;
mod full_exit;

pub use quick_swap::QuickSwapOp;
mod quick_swap;

pub use remove_liquidity::L1RemoveLqOp;
mod remove_liquidity;
