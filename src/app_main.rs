use crate::app::assets::Asset;
use crate::app::cli_args::CliArgs;
use crate::app::configs::AppConfig;
use crate::app::designer::{Designer, DesignerContext};
use crate::modules::display::board::Board;
use crate::modules::export::clipboard::SystemClipboard;
use crate::modules::session::module::run_session;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_ASSET: &str = "configs/workspace-designer.toml";

pub fn main() {
    let args = CliArgs::parse();

    if let Err(e) = init_logger(
        args.is_file_all_enabled(),
        args.is_file_error_enabled(),
        args.get_log_level(),
    ) {
        eprintln!("Can't initialize the logger: {e}");
    }

    let cfg_file = match args.config_path.clone() {
        Some(path) => path,
        None => match dirs::home_dir() {
            Some(dir) => dir.join(".config/workspace-designer/workspace-designer.toml"),
            None => {
                log::error!("Failed to get home dir");
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = start_app(&cfg_file, &args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn start_app(cfg_file: &Path, args: &CliArgs) -> Result<(), String> {
    let config = load_configs(cfg_file)
        .inspect_err(|e| log::error!("Can't read config file: {}", e))
        .unwrap_or_default();

    let context = DesignerContext {
        workspace: config.workspace(),
        hotkey: config.hotkey(),
        catalog: config.catalog(),
    };
    let board = Board::new(&context.workspace, &context.catalog);
    let mut designer = Designer::new(context, board, Box::new(SystemClipboard::default()), config.export_dir())
        .with_config_path(cfg_file.to_path_buf());

    if args.print {
        println!("{}", designer.output());
        return Ok(());
    }

    log::info!("Hotkey: {}", designer.context().hotkey.display());
    let mut stdout = std::io::stdout();
    let res = match &args.script_path {
        Some(path) => {
            let file = std::fs::File::open(path).map_err(|e| format!("Can't open {}: {}", path.display(), e))?;
            run_session(&mut designer, BufReader::new(file), &mut stdout)
        }
        None => run_session(&mut designer, std::io::stdin().lock(), &mut stdout),
    };

    log::info!("Application stopped!");
    res.map_err(|e| e.to_string())
}

fn load_configs(app_cfg_file: &Path) -> Result<AppConfig, String> {
    if let Some(parent) = app_cfg_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
    }

    if !app_cfg_file.exists() {
        let default_cfg = Asset::get_string(DEFAULT_CONFIG_ASSET).map_err(|e| e.to_string())?;
        std::fs::write(app_cfg_file, default_cfg).map_err(|e| e.to_string())?;
        log::info!("Default configuration written to {}", app_cfg_file.display());
    }

    let file_content = std::fs::read_to_string(app_cfg_file).map_err(|e| e.to_string())?;
    toml::from_str::<AppConfig>(&file_content).map_err(|e| e.to_string())
}

fn init_logger(file_all: bool, file_errors: bool, level: LevelFilter) -> Result<(), String> {
    let pattern = PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {({l}):5.5} {f}:{L}: {m}{n}");
    let console: ConsoleAppender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(pattern.clone()))
        .build();

    const FILE_SIZE: u64 = 10 * 1024 * 1024; // INFO: 10 MB
    const NUM_FILES: u32 = 3;

    let mut root_builder = Root::builder().appender("console");
    let mut config_builder =
        log4rs::config::Config::builder().appender(Appender::builder().build("console", Box::new(console)));

    if file_all {
        let log_file_all = rolling_file(&pattern, "./logs/workspace-designer", FILE_SIZE, NUM_FILES)?;
        config_builder = config_builder.appender(Appender::builder().build("file_all", Box::new(log_file_all)));
        root_builder = root_builder.appender("file_all");
    }

    if file_errors {
        let log_file_errors = rolling_file(&pattern, "./logs/errors", FILE_SIZE, NUM_FILES)?;
        config_builder = config_builder.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Error)))
                .build("file_errors", Box::new(log_file_errors)),
        );
        root_builder = root_builder.appender("file_errors");
    }

    let config = config_builder
        .build(root_builder.build(level))
        .map_err(|e| e.to_string())?;
    log4rs::init_config(config).map_err(|e| e.to_string())?;

    log_panics::init();
    Ok(())
}

fn rolling_file(pattern: &PatternEncoder, base: &str, size: u64, count: u32) -> Result<RollingFileAppender, String> {
    let policy = CompoundPolicy::new(
        Box::new(SizeTrigger::new(size)),
        Box::new(
            FixedWindowRoller::builder()
                .build(&format!("{base}.{{}}.gz"), count)
                .map_err(|e| e.to_string())?,
        ),
    );

    RollingFileAppender::builder()
        .encoder(Box::new(pattern.clone()))
        .build(PathBuf::from(format!("{base}.log")), Box::new(policy))
        .map_err(|e| e.to_string())
}
