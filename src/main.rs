
use smoothingspline::configuration::Configuration;
use smoothingspline::manager::manager::IManager;
use smoothingspline::manager::managererror::ManagerError;
use smoothingspline::math::smoothingspline::derivativeorder::DerivativeOrder;

const DEFAULT_CONFIG_PATH: &str = "json/config.json";
const DEFAULT_SEGMENT_NAME: &str = "lateral_offset";
const SEGMENT_LENGTH: f64 = 10.0;
const SAMPLE_COUNT: usize = 10;

fn main() -> Result<(), ManagerError> {
    tracing_subscriber::fmt()
        .with_env_filter("smoothingspline=info")
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let segment_name = args.next().unwrap_or_else(|| DEFAULT_SEGMENT_NAME.to_owned());

    let config = Configuration::new();
    config.from_reader(&config_path)?;
    let segment = config
        .spline_segment_manager()
        .get(&segment_name)?;

    println!("{}: {}", segment_name, segment);
    println!("x, f, df, ddf, dddf");
    for i in 0..=SAMPLE_COUNT {
        let x = SEGMENT_LENGTH * i as f64 / SAMPLE_COUNT as f64;
        let values: Vec<String> = DerivativeOrder::ALL
            .iter()
            .map(|&order| format!("{:.6}", segment.evaluate(order, x)))
            .collect();
        println!("{:.2}, {}", x, values.join(", "));
    }
    Ok(())
}
