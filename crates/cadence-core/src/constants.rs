use uuid::Uuid;

/// Namespace for deriving meeting instance ids (UUID v5 over `"{meeting_id}/{date}"`).
pub const INSTANCE_NAMESPACE: Uuid = Uuid::from_u128(0x6c1f_4a8e_93d2_5b07_a4e1_2f3c_8d9b_0e56);

/// Default cap on candidate dates walked during a single expansion.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Default cap on instances returned from a single expansion.
pub const DEFAULT_MAX_INSTANCES: usize = 10_000;

/// Default tracing filter when nothing is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";
