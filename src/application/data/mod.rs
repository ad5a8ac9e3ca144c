mod collision_policy;
mod log_level;

pub use collision_policy::CollisionPolicy;
pub use log_level::LogLevel;
