pub mod daily_rng;
pub mod generator;
pub mod messages;
pub mod storage;
pub mod store;

pub use daily_rng::DailyRng;
pub use generator::{daily_sequence, seed_for_date};
pub use messages::{random_loss_message, random_win_message};
pub use storage::{JsonFileStorage, MemoryStorage, PersistedState, Storage};
pub use store::GameStore;
