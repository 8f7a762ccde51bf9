use neunet::{Network, NetworkConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 3 inputs, 8 hidden, 2 outputs
    let config = NetworkConfig::new(vec![3, 8, 2], "Sigmoid", "MSE", 0.015);

    let mut network = match Network::new(&config) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

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

    // batch_size 0 samples from the whole dataset
    match network.fit(&inputs, &targets, 10_000, 0) {
        Ok(report) => println!("{}", report.confusion),
        Err(e) => eprintln!("{e}"),
    }

    if let Err(e) = network.save_json("config.json") {
        eprintln!("{e}");
    }
}
