// Shared enums and helper structs used by the game loop

/// How the current run has ended, if it has.
///
/// `Collided` and `Won` are terminal: once reached, the world stops updating
/// and only rendering continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Playing,
    Collided,
    Won,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub jump_held: bool,
}
