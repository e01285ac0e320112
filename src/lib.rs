pub mod config;
pub mod errors;
pub mod header;
pub mod output;
pub mod runner;
pub mod seq;

use crate::errors::ReheadError;

pub fn run() -> Result<(), ReheadError> {
    runner::run()
}
