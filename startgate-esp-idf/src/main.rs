use esp_idf_sys as _;
use startgate::app::App;
use startgate::config::GateTiming;

use startgate_esp_idf::platform::{BoardType, Config, PlatformImpl};

#[cfg(not(any(feature = "m5stampc3", feature = "rustdevkit")))]
compile_error!("select a board with feature m5stampc3 or rustdevkit");

fn main() -> anyhow::Result<()> {
    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    let timing = GateTiming::from_env_var().unwrap_or_else(|e| {
        log::warn!("{e}, using default timing");
        GateTiming::default()
    });
    timing.validate()?;

    let config = Config {
        timing,
        #[cfg(feature = "m5stampc3")]
        board_type: BoardType::M5StampC3,
        #[cfg(feature = "rustdevkit")]
        board_type: BoardType::RustDevKit,
    };

    log::info!(
        "Timing {:?}, duty cycle {:.1}%",
        config.timing,
        config.timing.duty_cycle_percent()
    );

    log::info!("Create platform");
    let p = PlatformImpl::new(&config)?;

    log::info!("Create app");
    let mut app = App::new(&p, config.timing);
    app.startup();

    log::info!("Start loop");

    let mut state = app.state();

    loop {
        let step = app.update();

        if step.state != state {
            state = step.state;

            match serde_json::to_string(&step) {
                Ok(json) => log::info!("{json}"),
                Err(e) => log::error!("{e}"),
            }
        }
    }
}
