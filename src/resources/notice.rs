//! Terminal user-visible notice.
//!
//! Set once when audio setup fails. While a notice is present the start
//! trigger is disabled; only a restart clears it.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    message: Option<String>,
}

impl Notice {
    pub fn fail(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_terminal(&self) -> bool {
        self.message.is_some()
    }
}
