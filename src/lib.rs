pub mod args;
pub mod clock;
pub mod game;
pub mod logging;
pub mod replay;
pub mod ui;
pub mod view;
pub mod winner;
