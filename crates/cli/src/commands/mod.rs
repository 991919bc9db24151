pub mod batch;
pub mod eval;
pub mod init;

pub use batch::batch_command;
pub use eval::eval_command;
pub use init::init_command;
