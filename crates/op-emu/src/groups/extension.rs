//! Attachable sub-controller profiles

use op_ciface::DeviceQualifier;
use op_core::{emu_debug, ProfileSection};

use super::ControlGroup;
use crate::controller::EmulatedController;

/// Extension group: a set of alternative sub-controller profiles with a
/// staged (`switch_extension`) and a live (`active_extension`) selection.
///
/// The two indices are deliberately decoupled so a configuration surface
/// can stage a change that the owner applies at a frame boundary via
/// [`set_active_to_switch`](Self::set_active_to_switch).
pub struct Extension {
    pub base: ControlGroup,
    pub attachments: Vec<EmulatedController>,
    pub switch_extension: usize,
    pub active_extension: usize,
}

impl Extension {
    pub fn new(name: &str) -> Self {
        Self {
            base: ControlGroup::new(name),
            attachments: Vec::new(),
            switch_extension: 0,
            active_extension: 0,
        }
    }

    pub fn add_attachment(&mut self, attachment: EmulatedController) {
        self.attachments.push(attachment);
    }

    /// The currently live attachment, if any
    pub fn active(&self) -> Option<&EmulatedController> {
        self.attachments.get(self.active_extension)
    }

    pub fn active_mut(&mut self) -> Option<&mut EmulatedController> {
        self.attachments.get_mut(self.active_extension)
    }

    /// Apply the staged selection as the live attachment
    pub fn set_active_to_switch(&mut self) {
        self.active_extension = self.switch_extension;
    }

    /// Load the group and all attachments. The staged selection is matched
    /// by persisted name; an unmatched or absent name falls back to
    /// attachment 0. Every attachment adopts `default_device`.
    pub fn load(&mut self, sec: &ProfileSection, default_device: &DeviceQualifier, base: &str) {
        self.base.load(sec, base);

        self.switch_extension = 0;
        let selected = sec.get_string(&format!("{base}{}", self.base.name), "");

        for (index, attachment) in self.attachments.iter_mut().enumerate() {
            attachment.default_device = default_device.clone();
            let attachment_base = format!("{base}{}/", attachment.name());
            attachment.load_with_base(sec, &attachment_base);

            if attachment.name() == selected {
                self.switch_extension = index;
            }
        }

        emu_debug!(
            "extension {:?} staged attachment {}",
            self.base.name,
            self.switch_extension
        );
    }

    /// Save the group, the staged selection's name, and all attachments
    pub fn save(&self, sec: &mut ProfileSection, base: &str) {
        self.base.save(sec, base);

        let selected = self
            .attachments
            .get(self.switch_extension)
            .map_or("None", EmulatedController::name);
        sec.set_string(&format!("{base}{}", self.base.name), selected, "None");

        for attachment in &self.attachments {
            let attachment_base = format!("{base}{}/", attachment.name());
            attachment.save_with_base(sec, &attachment_base);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::{Buttons, Group};

    fn attachment(name: &str) -> EmulatedController {
        let mut controller = EmulatedController::new(name);
        let mut buttons = Buttons::new("Buttons");
        buttons.add_input("C");
        controller.groups.push(Group::Buttons(buttons));
        controller
    }

    #[test]
    fn load_matches_attachment_by_name() {
        let mut ext = Extension::new("Attachment");
        ext.add_attachment(attachment("None"));
        ext.add_attachment(attachment("Nunchuk"));
        ext.add_attachment(attachment("Classic"));

        let mut sec = ProfileSection::new();
        sec.set_string("Attachment", "Classic", "");
        ext.load(&sec, &DeviceQualifier::default(), "");
        assert_eq!(ext.switch_extension, 2);
    }

    #[test]
    fn unmatched_name_falls_back_to_zero() {
        let mut ext = Extension::new("Attachment");
        ext.add_attachment(attachment("None"));
        ext.add_attachment(attachment("Nunchuk"));
        ext.switch_extension = 1;

        let mut sec = ProfileSection::new();
        sec.set_string("Attachment", "Drums", "");
        ext.load(&sec, &DeviceQualifier::default(), "");
        assert_eq!(ext.switch_extension, 0);
    }

    #[test]
    fn switch_and_active_are_decoupled() {
        let mut ext = Extension::new("Attachment");
        ext.add_attachment(attachment("None"));
        ext.add_attachment(attachment("Nunchuk"));

        let mut sec = ProfileSection::new();
        sec.set_string("Attachment", "Nunchuk", "");
        ext.load(&sec, &DeviceQualifier::default(), "");

        assert_eq!(ext.switch_extension, 1);
        assert_eq!(ext.active_extension, 0);
        assert_eq!(ext.active().unwrap().name(), "None");

        ext.set_active_to_switch();
        assert_eq!(ext.active().unwrap().name(), "Nunchuk");
    }

    #[test]
    fn save_records_staged_name_and_attachment_trees() {
        let mut ext = Extension::new("Attachment");
        ext.add_attachment(attachment("None"));
        let mut nunchuk = attachment("Nunchuk");
        nunchuk.groups[0].base_mut().controls[0]
            .reference
            .expression = "Button 3".to_string();
        ext.add_attachment(nunchuk);
        ext.switch_extension = 1;

        let mut sec = ProfileSection::new();
        ext.save(&mut sec, "");
        assert_eq!(sec.get("Attachment"), Some("Nunchuk"));
        assert_eq!(sec.get("Nunchuk/Buttons/C"), Some("Button 3"));
    }

    #[test]
    fn attachments_adopt_default_device() {
        let mut ext = Extension::new("Attachment");
        ext.add_attachment(attachment("None"));

        let device: DeviceQualifier = "Synth/0/Pad".parse().unwrap();
        ext.load(&ProfileSection::new(), &device, "");
        assert_eq!(ext.attachments[0].default_device, device);
    }
}
