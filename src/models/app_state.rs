use std::sync::Arc;

use crate::config::Config;
use crate::form::FieldDecoder;
use crate::relay::{Dispatcher, RelayError};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub decoder: FieldDecoder,
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, RelayError> {
        let dispatcher = Dispatcher::new(config.relay.clone())?;
        Ok(Self {
            decoder: FieldDecoder::new(config.max_group_index).with_max_slots(config.max_group_slots),
            dispatcher: Arc::new(dispatcher),
            config: Arc::new(config),
        })
    }
}
