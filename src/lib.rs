// Generator for the libnetlist Xilinx primitive tables

mod code_writer;
pub mod emitter;
mod error;
pub mod library;
pub mod primitive;
mod utils;
mod validate;

pub use code_writer::{escape_c_string, CodeWriter};
pub use emitter::{EmitterConfig, OutputMode, TableEmitter};
pub use error::{CodeGenError, Result};
pub use library::{find_primitive, XILINX_PRIMITIVES};
pub use primitive::{expand_pin, expand_pins, pin_count, Attribute, Pin, Primitive};
pub use utils::{is_c_identifier, is_c_keyword, program_name};
pub use validate::validate;
