use crate::error::Result;
use crate::game::state::GameState;
use tracing::{Level, event};

/// One step of the game's state machine. Running a step may hand back the
/// step that must run next.
pub trait Act: Sized {
    fn act(self, state: &mut GameState) -> Result<Option<Self>>;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Runs `action` and every follow-up it produces until none is left.
///
/// Steps run in a loop rather than recursively, so long chains do not grow
/// the stack. The first failing step stops the chain; steps that already ran
/// keep their effects.
pub fn dispatch<A: Act>(action: A, state: &mut GameState) -> Result<&mut GameState> {
    let mut current = Some(action);
    let mut steps = 0usize;
    while let Some(action) = current {
        let name = action.name();
        current = match action.act(state) {
            Ok(next) => next,
            Err(err) => {
                event!(Level::DEBUG, action = name, step = steps, error = %err, "action rejected");
                return Err(err);
            }
        };
        steps += 1;
        event!(
            Level::TRACE,
            action = name,
            step = steps,
            phase = %state.phase(),
            "action applied"
        );
    }
    Ok(state)
}
