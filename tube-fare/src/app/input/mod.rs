mod console_input;
mod input_collector;
mod input_error;
mod input_source;

pub use console_input::ConsoleInput;
pub use input_collector::{CollectedInput, InputCollector};
pub use input_error::InputError;
pub use input_source::InputSource;
