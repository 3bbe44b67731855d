mod generate;
mod server;

pub use generate::{GenerateArgs, generate};
pub use server::serve;
