pub mod dialogs;
pub mod preview;
pub mod root;
pub mod swatches;
