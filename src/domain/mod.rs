pub mod change;
pub mod commit;
pub mod language;
pub mod prompt;
