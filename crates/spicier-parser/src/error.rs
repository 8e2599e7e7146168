pub use spicier_core::{Error, Result};
