use nalgebra::Vector3;
use sailsense::{CompassPoint, EnvironmentalSample, SailSense, Settings, TickInput};

fn main() {
    let mut sailsense = SailSense::new(Settings::default()).unwrap();

    for _ in 0..10 {
        // this loop should repeat once per sampling tick
        let tick = TickInput {
            accelerometer: Vector3::new(0.0, 0.0, 1.0), // replace this with actual accelerometer data in g
            magnetometer: Vector3::new(8.0, 18.0, -42.0), // replace this with actual magnetometer data in uT
            environment: EnvironmentalSample::new(18.5, 64.0, 1011.8), // replace this with actual BME280 data
            hour: Some(12),
            battery_voltage: Some(3.9),
        };

        let readout = sailsense.tick(&tick);

        println!(
            "Roll: {:.2}, Pitch: {:.2}, Heading: {:.1} ({}), Smoothed: {:.1}, Pressure: {:.1} hPa",
            readout.orientation.roll,
            readout.orientation.pitch,
            readout.orientation.heading,
            CompassPoint::from_heading(readout.orientation.heading),
            readout.smoothed_heading,
            readout.environment_mean.pressure
        );
    }
}
