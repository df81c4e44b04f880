#![windows_subsystem = "windows"]

use std::{error::Error, io::Write};

use iced::{Settings, Size};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use signup_gui::{
    app::SignupApp,
    args::{args_to_options, parse_args},
    config::Config,
    logger::{parse_log_level, setup_logger},
    VERSION,
};
use signup_ui::{component::text, font};

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;
    let options = args_to_options(&args)?;

    options.datadir.init()?;

    let mut config = Config::load(&options.datadir)?;
    if let Some(api_url) = options.api_url {
        config.api_url = api_url;
        config.check()?;
    }

    let log_level = parse_log_level()?
        .or(config.log_level()?)
        .unwrap_or(LevelFilter::INFO);
    setup_logger(log_level, &options.datadir)?;

    match Config::existing_file(&options.datadir) {
        Some(path) => info!("Loaded configuration from {}", path.to_string_lossy()),
        None => info!(
            "No configuration file at {}, using defaults",
            options.datadir.config_file_path().to_string_lossy()
        ),
    }

    setup_panic_hook();

    let settings = Settings {
        id: Some("Signup".to_string()),
        antialiasing: false,

        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        fonts: Vec::new(),
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 640.0,
            height: 720.0,
        },
        min_size: Some(Size {
            width: 560.0,
            height: 600.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(SignupApp::title, SignupApp::update, SignupApp::view)
        .theme(SignupApp::theme)
        .subscription(SignupApp::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || SignupApp::new(config))
    {
        error!("{}", e);
        return Err(e.into());
    }

    Ok(())
}

fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}
