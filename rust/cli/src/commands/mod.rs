//! One module per subcommand.
//!
//! Each handler takes its parsed arguments plus injected output streams
//! (`&mut dyn Write`, and `&mut dyn BufRead` for `play`) and returns
//! `Result<(), CliError>`.

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
