mod colors;
pub mod hint_mode;
mod settings;

pub use colors::{HintStyle, RgbColor};
pub use hint_mode::{HintKeys, HintSettings};
pub use settings::Settings;
