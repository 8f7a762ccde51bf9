use std::process::ExitCode;

use neunet::{Network, NetworkConfig, Result};

const USAGE: &str = "\
usage:
  neunet train [MODEL_OUT]                  train the demo dataset with a 3-8-2 network
  neunet train-config CONFIG MODEL_OUT      same, with the network described by a JSON config
  neunet predict MODEL v1,v2,...            load a model and classify one input

Set RUST_LOG=debug for more detail.";

fn demo_dataset() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let inputs = vec![
        vec![0.0, 0.0, 1.0],
        vec![1.0, 1.0, 1.0],
        vec![1.0, 0.0, 0.0],
        vec![0.0, 1.0, 1.0],
        vec![1.0, 1.0, 0.0],
    ];
    let targets = vec![
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 0.0],
        vec![1.0, 0.0],
    ];
    (inputs, targets)
}

fn train(config: &NetworkConfig, out: &str) -> Result<()> {
    let (inputs, targets) = demo_dataset();
    let mut network = Network::new(config)?;
    let report = network.fit(&inputs, &targets, 10_000, 0)?;
    println!("{}", report.confusion);
    network.save_json(out)?;
    println!("saved {network} to {out}");
    Ok(())
}

fn predict(model: &str, raw: &str) -> Result<()> {
    let input = raw
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| neunet::NetError::InvalidConfig(format!("bad input {raw:?}: {e}")))?;
    let mut network = Network::load_json(model)?;
    let guess = network.predict(&input)?;
    println!("{} {}", guess.index, guess.value);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let result = match args.as_slice() {
        ["train"] => train(&NetworkConfig::new(vec![3, 8, 2], "sigmoid", "mse", 0.015), "config.json"),
        ["train", out] => train(&NetworkConfig::new(vec![3, 8, 2], "sigmoid", "mse", 0.015), out),
        ["train-config", config, out] => NetworkConfig::load_json(config).and_then(|c| train(&c, out)),
        ["predict", model, input] => predict(model, input),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
