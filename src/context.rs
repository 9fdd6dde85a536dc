//! Block Context
//!
//! Configuration shared with block components via Leptos Context API.

use leptos::prelude::*;

use crate::config::{BlockConfig, Labels};

/// Block-wide configuration provided via context
#[derive(Clone, Copy)]
pub struct BlockContext {
    config: StoredValue<BlockConfig>,
}

impl BlockContext {
    pub fn new(config: BlockConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> BlockConfig {
        self.config.get_value()
    }

    pub fn labels(&self) -> Labels {
        self.config.with_value(|c| c.labels.clone())
    }
}

/// Provide `config` to every block below the current owner
pub fn provide_block_config(config: BlockConfig) {
    provide_context(BlockContext::new(config));
}

/// Block context, or defaults when no host provided one
pub fn use_block_context() -> BlockContext {
    use_context::<BlockContext>().unwrap_or_else(|| BlockContext::new(BlockConfig::default()))
}
