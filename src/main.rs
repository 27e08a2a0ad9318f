//! Oxidized-Pad - controller input subsystem
//!
//! Headless demo entry point: attaches a synthetic device, binds a default
//! pad profile against it, and polls a few frames of quantized state.

use std::sync::Arc;

use op_ciface::{Device, DeviceRegistry, SynthDevice};
use op_core::{Config, ProfileSection};
use op_pad::PadService;

fn main() -> anyhow::Result<()> {
    // Load config to get initial log level
    let config = Config::load().unwrap_or_default();
    op_core::logging::init(&config);

    tracing::info!("Starting Oxidized-Pad");

    let registry = DeviceRegistry::new();
    let device = Arc::new(
        SynthDevice::new("Synth", 0, "Demo Pad")
            .with_inputs(&["Button 0", "Axis 0-", "Axis 0+", "Axis 1-", "Axis 1+"])
            .with_outputs(&["Motor"]),
    );
    registry.add(device.clone());

    let mut sec = ProfileSection::new();
    sec.set_string("Device", &device.qualifier().to_string(), "");
    sec.set_string("Buttons/A", "Button 0", "");
    sec.set_string("Main Stick/Up", "Axis 1+", "");
    sec.set_string("Main Stick/Down", "Axis 1-", "");
    sec.set_string("Main Stick/Left", "Axis 0-", "");
    sec.set_string("Main Stick/Right", "Axis 0+", "");

    let service = PadService::new(1);
    service.load_profile(0, &sec, &registry);

    // sweep the stick and tap the button across a few frames
    for frame in 0u32..8 {
        let sweep = f64::from(frame) / 7.0;
        device.set("Axis 0+", sweep);
        device.set("Button 0", if frame % 2 == 0 { 1.0 } else { 0.0 });

        registry.update_all();
        let status = service.poll(0);
        tracing::info!(
            frame,
            button = format_args!("{:#06x}", status.button),
            stick_x = status.stick_x,
            stick_y = status.stick_y,
            "polled pad state"
        );
    }

    service.set_rumble(0, 1.0);
    tracing::info!(motor = ?device.last_output("Motor"), "rumble command sent");

    Ok(())
}
