pub mod directory;
pub mod time;
pub mod urls;
pub mod util;
