//! Configuration loaders for bootstrap failure scenarios.

use std::ffi::OsString;
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};

use courier_config::Config;

use crate::bootstrap::ConfigLoader;

/// Loader that intentionally fails by passing an unknown CLI flag.
pub struct FailingConfigLoader;

impl ConfigLoader for FailingConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        let args = vec![
            OsString::from("courier"),
            OsString::from("--no-such-setting"),
            OsString::from("1"),
        ];
        Config::load_from_iter(args)
    }
}
