pub mod dispatcher;
pub mod rules;
pub mod state;
pub mod summary;

pub use dispatcher::{Act, dispatch};
pub use rules::Rules;
pub use state::{GameState, Phase, SEATS};
pub use summary::GameSummary;
