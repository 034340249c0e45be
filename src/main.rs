use log::info;

use parallel_reduce::{ReductionEngine, RunConfig, sequence, sequential};

fn main() {
    env_logger::init();

    let config = RunConfig::from_env();
    info!(
        workers = config.workers().get(),
        length = config.length();
        "starting sum of squares benchmark, combine mode {}", config.mode()
    );

    let data = sequence::ascending(config.length());

    let naive = sequential::timed_sum_of_squares(&data);
    println!("naive output is: {}", naive.total());
    println!("naive time cost is {} s", naive.elapsed_secs());

    let engine = ReductionEngine::new(config.workers(), config.mode());
    let parallel = engine.reduce(&data);
    println!("output is: {}", parallel.total());
    println!("time cost is {} s", parallel.elapsed_secs());
}
