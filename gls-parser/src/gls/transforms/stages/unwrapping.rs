//! Addition unwrapping stage

use crate::gls::error::Error;
use crate::gls::transforms::Runnable;
use crate::gls::unwrapping::unwrap_additions;

/// Unwrapping stage: expanded `String` → final `String`.
pub struct UnwrapAdditions;

impl UnwrapAdditions {
    pub fn new() -> Self {
        UnwrapAdditions
    }
}

impl Default for UnwrapAdditions {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for UnwrapAdditions {
    fn run(&self, input: String) -> Result<String, Error> {
        Ok(unwrap_additions(&input)?)
    }
}
