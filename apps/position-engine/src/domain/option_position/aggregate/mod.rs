//! Option Position Aggregate

mod option_position;
mod settings;

pub use option_position::OptionPosition;
pub use settings::{PositionSettings, default_expiration_cutoff};
