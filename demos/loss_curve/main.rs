use anyhow::Error;
use loss_plot::{LossHistory, PlotConfig, TerminalRenderer};
use rand::Rng;
use serde::Deserialize;

#[derive(Deserialize)]
struct Config {
    epochs: usize,
    noise: f64,
    plot: PlotConfig,
}

fn main() -> Result<(), Error> {
    let config_content = std::fs::read_to_string("demos/loss_curve/loss_curve_config.toml")?;
    let config: Config = toml::from_str(&config_content)?;

    let history = fake_training_run(config.epochs, config.noise, &mut rand::thread_rng());
    history.plot_with(&mut TerminalRenderer::stdout(), &config.plot)?;

    if let Some((epoch, loss)) = history.best_test_epoch() {
        println!("Best test loss: {:.4} at epoch {}", loss, epoch);
    }
    Ok(())
}

/// Both losses decay, test loss plateaus higher
fn fake_training_run(epochs: usize, noise: f64, rng: &mut impl Rng) -> LossHistory {
    let noise = noise.abs();
    let mut history = LossHistory::new();
    for epoch in 0..epochs {
        let t = epoch as f64;
        let train_loss = (-t / 8.0).exp() + 0.05 + rng.gen_range(-noise..=noise);
        let test_loss = 0.8 * (-t / 10.0).exp() + 0.2 + rng.gen_range(-noise..=noise);
        history.record(train_loss, test_loss);
    }
    history
}
