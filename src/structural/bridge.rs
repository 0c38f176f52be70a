//! Bridge pattern: remotes (abstraction) and devices (implementation) vary
//! independently.

use tracing::debug;

pub const MAX_VOLUME: u8 = 100;
const VOLUME_STEP: u8 = 10;

/// Implementation side.
pub trait Device {
    fn name(&self) -> &str;
    fn is_enabled(&self) -> bool;
    fn enable(&mut self);
    fn disable(&mut self);
    fn volume(&self) -> u8;
    /// Values above [`MAX_VOLUME`] are clamped.
    fn set_volume(&mut self, volume: u8);
    fn channel(&self) -> u16;
    fn set_channel(&mut self, channel: u16);

    fn status(&self) -> String {
        format!(
            "{} is {}, volume {}%, channel {}",
            self.name(),
            if self.is_enabled() { "on" } else { "off" },
            self.volume(),
            self.channel()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    on: bool,
    volume: u8,
    channel: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            on: false,
            volume: 30,
            channel: 1,
        }
    }
}

macro_rules! impl_device {
    ($ty:ident, $name:literal) => {
        impl Device for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn is_enabled(&self) -> bool {
                self.settings.on
            }

            fn enable(&mut self) {
                self.settings.on = true;
            }

            fn disable(&mut self) {
                self.settings.on = false;
            }

            fn volume(&self) -> u8 {
                self.settings.volume
            }

            fn set_volume(&mut self, volume: u8) {
                self.settings.volume = volume.min(MAX_VOLUME);
            }

            fn channel(&self) -> u16 {
                self.settings.channel
            }

            fn set_channel(&mut self, channel: u16) {
                self.settings.channel = channel;
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tv {
    settings: Settings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Radio {
    settings: Settings,
}

impl_device!(Tv, "TV");
impl_device!(Radio, "Radio");

/// Abstraction side: works with any [`Device`].
#[derive(Debug)]
pub struct RemoteControl<D: Device> {
    device: D,
}

impl<D: Device> RemoteControl<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn toggle_power(&mut self) {
        if self.device.is_enabled() {
            self.device.disable();
        } else {
            self.device.enable();
        }
        debug!(device = self.device.name(), on = self.device.is_enabled(), "power toggled");
    }

    pub fn volume_up(&mut self) {
        let volume = self.device.volume().saturating_add(VOLUME_STEP);
        self.device.set_volume(volume);
    }

    pub fn volume_down(&mut self) {
        let volume = self.device.volume().saturating_sub(VOLUME_STEP);
        self.device.set_volume(volume);
    }

    pub fn channel_up(&mut self) {
        let channel = self.device.channel().saturating_add(1);
        self.device.set_channel(channel);
    }

    /// Channels start at 1.
    pub fn channel_down(&mut self) {
        let channel = self.device.channel().saturating_sub(1).max(1);
        self.device.set_channel(channel);
    }
}

/// Extended abstraction adding mute.
#[derive(Debug)]
pub struct AdvancedRemote<D: Device> {
    remote: RemoteControl<D>,
}

impl<D: Device> AdvancedRemote<D> {
    pub fn new(device: D) -> Self {
        Self {
            remote: RemoteControl::new(device),
        }
    }

    pub fn mute(&mut self) {
        self.remote.device.set_volume(0);
    }

    pub fn remote(&mut self) -> &mut RemoteControl<D> {
        &mut self.remote
    }

    pub fn device(&self) -> &D {
        self.remote.device()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_toggles_power() {
        let mut remote = RemoteControl::new(Tv::default());
        remote.toggle_power();
        assert!(remote.device().is_enabled());
        remote.toggle_power();
        assert!(!remote.device().is_enabled());
    }

    #[test]
    fn volume_is_clamped() {
        let mut remote = RemoteControl::new(Radio::default());
        for _ in 0..20 {
            remote.volume_up();
        }
        assert_eq!(remote.device().volume(), MAX_VOLUME);
        for _ in 0..20 {
            remote.volume_down();
        }
        assert_eq!(remote.device().volume(), 0);
    }

    #[test]
    fn channel_never_goes_below_one() {
        let mut remote = RemoteControl::new(Tv::default());
        remote.channel_down();
        assert_eq!(remote.device().channel(), 1);
        remote.channel_up();
        assert_eq!(remote.device().channel(), 2);
    }

    #[test]
    fn advanced_remote_mutes_any_device() {
        let mut remote = AdvancedRemote::new(Radio::default());
        remote.remote().volume_up();
        remote.mute();
        assert_eq!(remote.device().volume(), 0);
    }

    #[test]
    fn status_describes_device() {
        let mut remote = RemoteControl::new(Tv::default());
        remote.toggle_power();
        assert_eq!(remote.device().status(), "TV is on, volume 30%, channel 1");
    }
}
