pub use feature::*;
pub use site::*;

mod feature;
mod site;
