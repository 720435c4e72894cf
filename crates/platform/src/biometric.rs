//! Biometric Hardware Abstraction
//!
//! A biometric success only proves that a human passed the *device's*
//! enrolled biometric check. Nothing here knows about usernames or
//! PINs; binding a success to an application account is entirely the
//! caller's job.

/// Raw device biometric API
///
/// Mirrors what the OS exposes: capability, enrollment, and the
/// prompt itself.
#[trait_variant::make(BiometricDevice: Send)]
pub trait LocalBiometricDevice {
    /// Whether the device has biometric hardware at all.
    async fn has_hardware(&self) -> bool;

    /// Whether at least one biometric credential is enrolled.
    async fn is_enrolled(&self) -> bool;

    /// Show the OS biometric prompt. `true` only on a successful
    /// match; cancellation, mismatch, and hardware errors are all
    /// `false`.
    async fn authenticate(&self, prompt: &str) -> bool;
}

/// Capability gate over a [`BiometricDevice`]
///
/// A pure "did a human pass a device-level biometric check" oracle.
pub struct BiometricGate<D> {
    device: D,
}

impl<D> BiometricGate<D>
where
    D: BiometricDevice + Sync,
{
    pub fn new(device: D) -> Self {
        Self { device }
    }

    /// True only if hardware is present AND something is enrolled.
    pub async fn is_available(&self) -> bool {
        self.device.has_hardware().await && self.device.is_enrolled().await
    }

    /// Issue the biometric challenge.
    pub async fn challenge(&self, prompt: &str) -> bool {
        let passed = self.device.authenticate(prompt).await;
        if !passed {
            tracing::debug!("Biometric challenge did not pass");
        }
        passed
    }
}

/// Device that reports no biometric capability
///
/// Default for host builds without a biometric sensor.
pub struct DeniedDevice;

impl BiometricDevice for DeniedDevice {
    async fn has_hardware(&self) -> bool {
        false
    }

    async fn is_enrolled(&self) -> bool {
        false
    }

    async fn authenticate(&self, _prompt: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubDevice {
        hardware: bool,
        enrolled: bool,
        outcome: bool,
    }

    impl BiometricDevice for StubDevice {
        async fn has_hardware(&self) -> bool {
            self.hardware
        }

        async fn is_enrolled(&self) -> bool {
            self.enrolled
        }

        async fn authenticate(&self, _prompt: &str) -> bool {
            self.outcome
        }
    }

    #[tokio::test]
    async fn test_available_requires_hardware_and_enrollment() {
        let both = BiometricGate::new(StubDevice {
            hardware: true,
            enrolled: true,
            outcome: true,
        });
        assert!(both.is_available().await);

        let no_enrollment = BiometricGate::new(StubDevice {
            hardware: true,
            enrolled: false,
            outcome: true,
        });
        assert!(!no_enrollment.is_available().await);

        let no_hardware = BiometricGate::new(StubDevice {
            hardware: false,
            enrolled: true,
            outcome: true,
        });
        assert!(!no_hardware.is_available().await);
    }

    #[tokio::test]
    async fn test_challenge_reflects_device_outcome() {
        let pass = BiometricGate::new(StubDevice {
            hardware: true,
            enrolled: true,
            outcome: true,
        });
        assert!(pass.challenge("Log in as dave").await);

        let fail = BiometricGate::new(StubDevice {
            hardware: true,
            enrolled: true,
            outcome: false,
        });
        assert!(!fail.challenge("Log in as dave").await);
    }

    #[tokio::test]
    async fn test_denied_device() {
        let gate = BiometricGate::new(DeniedDevice);
        assert!(!gate.is_available().await);
        assert!(!gate.challenge("anything").await);
    }
}
