//! Raw versus smoothed compass heading
//!
//! Runs the recorded stream in `testdata/` through the SailSense core and
//! plots the instantaneous heading against the 20 sample arithmetic and
//! circular means, with roll and pitch below.
//!
//! Run with: `cargo run --example heading_plot`

use nalgebra::Vector3;
use plotters::prelude::*;
use sailsense::{CompassPoint, EnvironmentalSample, SailSense, Settings, TickInput};
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct Record {
    #[serde(rename = "Time (s)")]
    time: f32,
    #[serde(rename = "Accelerometer X (g)")]
    accel_x: f32,
    #[serde(rename = "Accelerometer Y (g)")]
    accel_y: f32,
    #[serde(rename = "Accelerometer Z (g)")]
    accel_z: f32,
    #[serde(rename = "Magnetometer X (uT)")]
    mag_x: f32,
    #[serde(rename = "Magnetometer Y (uT)")]
    mag_y: f32,
    #[serde(rename = "Magnetometer Z (uT)")]
    mag_z: f32,
    #[serde(rename = "Temperature (C)")]
    temperature: f32,
    #[serde(rename = "Humidity (%)")]
    humidity: f32,
    #[serde(rename = "Pressure (hPa)")]
    pressure: f32,
    #[serde(rename = "Hour")]
    hour: u8,
    #[serde(rename = "Battery (V)")]
    battery: f32,
}

struct Point {
    time: f32,
    roll: f32,
    pitch: f32,
    heading: f32,
    smoothed: f32,
    circular: f32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut reader = csv::Reader::from_path("testdata/sailsense_stream.csv")?;
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: Record = result?;
        records.push(record);
    }
    println!("Processing {} recorded ticks...", records.len());

    let mut sailsense = SailSense::new(Settings::default())?;
    let mut points = Vec::with_capacity(records.len());

    for (i, record) in records.iter().enumerate() {
        let readout = sailsense.tick(&TickInput {
            accelerometer: Vector3::new(record.accel_x, record.accel_y, record.accel_z),
            magnetometer: Vector3::new(record.mag_x, record.mag_y, record.mag_z),
            environment: EnvironmentalSample::new(record.temperature, record.humidity, record.pressure),
            hour: Some(record.hour),
            battery_voltage: Some(record.battery),
        });
        let circular = sailsense.circular_heading().unwrap_or(readout.smoothed_heading);

        if i % 40 == 0 {
            println!(
                "t={:.1}s heading={:.1}° ({}) smoothed={:.1}° circular={:.1}° pressure={:.1} hPa",
                record.time,
                readout.orientation.heading,
                CompassPoint::from_heading(readout.orientation.heading),
                readout.smoothed_heading,
                circular,
                readout.environment_mean.pressure
            );
        }

        points.push(Point {
            time: record.time,
            roll: readout.orientation.roll,
            pitch: readout.orientation.pitch,
            heading: readout.orientation.heading,
            smoothed: readout.smoothed_heading,
            circular,
        });
    }

    create_plots(&points)?;
    println!("✓ Plot saved to heading_plot.png");
    Ok(())
}

fn create_plots(points: &[Point]) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new("heading_plot.png", (1000, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically(500);

    let first = points.first().ok_or("no points")?.time;
    let last = points.last().ok_or("no points")?.time;

    let mut heading_chart = ChartBuilder::on(&upper)
        .caption("Heading: raw, arithmetic mean, circular mean", ("sans-serif", 20))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(first..last, 0f32..360f32)?;

    heading_chart.configure_mesh().y_desc("Degrees").draw()?;

    heading_chart
        .draw_series(LineSeries::new(points.iter().map(|p| (p.time, p.heading)), &BLUE))?
        .label("Raw")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLUE));

    heading_chart
        .draw_series(LineSeries::new(points.iter().map(|p| (p.time, p.smoothed)), &RED))?
        .label("Arithmetic mean")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], RED));

    heading_chart
        .draw_series(LineSeries::new(points.iter().map(|p| (p.time, p.circular)), &GREEN))?
        .label("Circular mean")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], GREEN));

    heading_chart.configure_series_labels().border_style(BLACK).draw()?;

    let mut tilt_chart = ChartBuilder::on(&lower)
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(first..last, -30f32..30f32)?;

    tilt_chart.configure_mesh().x_desc("Time (s)").y_desc("Degrees").draw()?;

    tilt_chart
        .draw_series(LineSeries::new(points.iter().map(|p| (p.time, p.roll)), &RED))?
        .label("Roll")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], RED));

    tilt_chart
        .draw_series(LineSeries::new(points.iter().map(|p| (p.time, p.pitch)), &GREEN))?
        .label("Pitch")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], GREEN));

    tilt_chart.configure_series_labels().border_style(BLACK).draw()?;

    root.present()?;
    Ok(())
}
