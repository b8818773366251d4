mod processor;
mod run;
mod walk;

pub use run::run;

use processor::*;
use walk::*;
