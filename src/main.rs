use std::path::Path;

use anyhow::Context;
use clap::{Arg, Command};
use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use armor_keeper::{
    game::{ArmorKeeperConfig, GameWorld},
    scenario::Scenario,
};

fn main() -> anyhow::Result<()> {
    let command = Command::new("armor-keeper")
        .about("Replays a death and respawn scenario with the armor keeper enabled")
        .arg(
            Arg::new("scenario")
                .long("scenario")
                .help("Scenario file to replay.")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Armor keeper configuration file, defaults are used when not set.")
                .takes_value(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Set the log level.")
                .takes_value(true)
                .value_parser(["off", "error", "warn", "info", "debug", "trace"])
                .default_value("info"),
        );
    let matches = command.get_matches();

    let log_level = match matches.value_of("log-level") {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    TermLogger::init(
        log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialise logger")?;

    let config = match matches.value_of("config") {
        Some(path) => ArmorKeeperConfig::try_load(Path::new(path))?,
        None => ArmorKeeperConfig::default(),
    };

    let scenario_path = matches
        .value_of("scenario")
        .context("Missing --scenario argument")?;
    let scenario = Scenario::try_load(Path::new(scenario_path))?;

    let mut game_world = GameWorld::new(config);
    let report = scenario.run(&mut game_world)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
