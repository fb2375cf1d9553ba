use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const CONFIG_FILE_ENVIRONMENT_VARIABLE: &str = "HUFFMAN_CODER_LOG_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    let config_file = std::env::var(CONFIG_FILE_ENVIRONMENT_VARIABLE)
        .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_owned());
    if log4rs::init_file(&config_file, Default::default()).is_err() {
        init_fallback();
    }
}

// stderr only, so log lines never mix with encoded output
fn init_fallback() {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    if let Ok(config) = config {
        let _ = log4rs::init_config(config);
    }
}
