//! Evaluates the differential at the dashboard's initial control positions
//! and logs the readouts and a coarse view of each chart series.
//!
//! Run with `RUST_LOG=drivetrain_models=debug` to see the model's own events.

use drivetrain_models::models::drivetrain::differential::{
    Differential, GearDiagram, InputField, SimulationInputs,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use twine_core::Model;
use uom::si::{angular_velocity::radian_per_second, time::second, torque::newton_meter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("drivetrain_models=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();

    for field in InputField::ALL {
        let (lower, upper) = field.bounds();
        tracing::info!(
            control = field.label(),
            lower,
            upper,
            step = field.step(),
            value = field.default_value(),
            "control"
        );
    }

    let model = Differential::default();
    let outputs = model.call(&SimulationInputs::default())?;

    for readout in outputs.readouts() {
        tracing::info!("{readout}");
    }

    for (side, torque) in outputs.torque_split() {
        tracing::info!(side = %side, torque_nm = torque.get::<newton_meter>(), "torque split");
    }

    let traces = outputs.wheel_speed_traces();
    for i in (0..outputs.time.len()).step_by(50) {
        tracing::info!(
            t_s = outputs.time[i].get::<second>(),
            inner_rad_s = traces.inner[i].get::<radian_per_second>(),
            outer_rad_s = traces.outer[i].get::<radian_per_second>(),
            pressure = outputs.pressure[i],
            stability = outputs.stability[i],
            "sample"
        );
    }

    let diagram = GearDiagram::default();
    tracing::info!(
        input_points = diagram.input_gear.len(),
        output_points = diagram.output_gear.len(),
        "gear diagram"
    );

    if let Err(err) = model.call(&SimulationInputs::from_dashboard(1500.0, 0.0, 4.0)) {
        tracing::warn!("{err}");
    }

    Ok(())
}
