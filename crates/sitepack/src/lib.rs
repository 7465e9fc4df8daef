mod packer;
mod utils;

pub use crate::packer::{EmitOutput, Packer};
pub use crate::utils::{render_html::render_html, resolve_plan::resolve_plan};
pub use sitepack_common::*;
