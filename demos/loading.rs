use neunet::Network;

fn main() {
    env_logger::init();

    // Written by `cargo run --example training`
    let mut network = match Network::load_json("config.json") {
        Ok(network) => network,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    println!("{network}");

    match network.predict(&[1.0, 1.0, 0.0]) {
        Ok(guess) => println!("{} {}", guess.index, guess.value),
        Err(e) => eprintln!("{e}"),
    }
}
