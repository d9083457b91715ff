/// The number of L1 blocks a priority request remains valid for after registration.
///
/// Once `expiration_height` is exceeded without the settlement process consuming the
/// request, the system's emergency fallback becomes eligible to trigger.
pub const PRIORITY_EXPIRATION: u64 = 17_280;

/// The maximum layer-2 account id a forced exit may reference.
pub const MAX_ACCOUNT_ID: crate::AccountId = (1 << 24) - 1;

/// The duration of the upgrade notice period, in seconds.
///
/// Published for coordinators and indexers; the notice period itself is enforced by
/// the external upgrade coordinator, not by the gateway.
pub const UPGRADE_NOTICE_PERIOD: u64 = 14 * 24 * 60 * 60;
