//! Options methods for FolioEngine

use super::FolioEngine;
use crate::error::FolioError;
use crate::options::Options;

impl FolioEngine {
    /// Replace options and apply all changes to the controllers.
    ///
    /// Changes take effect on the next event, frame or palette pick.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Change a single option by `section.field`, e.g. `magnet.radius`.
    ///
    /// On error the current options are kept.
    pub fn set_option(
        &mut self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<(), FolioError> {
        let updated = self.options.with_field(section, field, value)?;
        log::debug!("option {section}.{field} updated");
        self.set_options(updated);
        Ok(())
    }

    /// Push current option values to every controller that holds a copy.
    pub fn apply_options(&mut self) {
        self.motion
            .set_options(self.options.magnet.clone(), self.options.drift.clone());
        self.swipe.set_options(self.options.swipe.clone());
        self.theme.set_options(self.options.theme.clone());
        self.input
            .set_key_bindings(self.options.keybindings.clone());
    }
}
