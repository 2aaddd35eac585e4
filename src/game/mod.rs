//! Game state: one hidden solution, a guess history and the words still possible

mod banks;
mod state;
mod vocabulary;

pub use banks::{LetterBank, LetterStatus, WordBank};
pub use state::{Game, GameConfig, GameStatus};
pub use vocabulary::Vocabulary;
