mod daily_stats;
mod game_status;
mod puzzle_record;
mod sequence_data;
mod settings;

pub use daily_stats::DailyStats;
pub use game_status::{GameStatus, Outcome};
pub use puzzle_record::PuzzleRecord;
pub use sequence_data::Pattern;
pub use sequence_data::SequenceData;
pub use sequence_data::{MAX_HINTS, SEQUENCE_LENGTH, VISIBLE_COUNT};
pub use settings::Settings;
