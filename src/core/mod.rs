pub mod burst;
pub mod config;
pub mod effects;
pub mod pool;
pub mod schedule;
pub mod style;
pub mod throttle;
pub mod trail;

pub use burst::{plan_burst, BurstManager, BurstPlan, BurstStep};
pub use config::*;
pub use effects::CursorEffects;
pub use pool::{Handle, Pending, Pool, PoolError};
pub use schedule::{Effect, ManualScheduler, Scheduler, TimerId, TimerKind, Wake};
pub use style::{EffectElement, ParticleKind, ParticleSpec, TrailDot};
pub use throttle::MoveThrottle;
pub use trail::{TrailManager, TrailStep};
