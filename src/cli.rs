use button_webserver::{
    AppConfig, ButtonMode, DEFAULT_HOSTNAME, DEFAULT_NTP_SERVER, DEFAULT_TIMEZONE,
    NetworkConfig, ServerConfig, WifiCredentials,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "button-webserver",
    version,
    about = "HTTP control endpoint for a small networked device",
    long_about = "Serves files from the device filesystem, reports device status as JSON and keeps two button states"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log as JSON to rolling files instead of the console
    #[arg(long, global = true)]
    pub production: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bring up the device and run the web server
    Run(RunArgs),
    /// Show device and filesystem information
    #[command(name = "info")]
    Info {
        /// Directory used as the device filesystem
        #[arg(short, long, default_value = "/var/lib/button-webserver/data")]
        root: PathBuf,
        /// Block device holding the flash storage
        #[arg(long, default_value = "mmcblk0")]
        flash_device: String,
        /// Also list the files
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Port to bind the web server to
    #[arg(short, long, default_value = "80")]
    pub port: u16,
    /// Host to bind the web server to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    pub host: String,
    /// Directory used as the device filesystem
    #[arg(short, long, default_value = "/var/lib/button-webserver/data")]
    pub root: PathBuf,
    /// How the button endpoints behave
    #[arg(short, long, value_enum, default_value_t = ButtonModeArg::Stored)]
    pub button_mode: ButtonModeArg,
    /// Hostname to announce
    #[arg(long, default_value = DEFAULT_HOSTNAME)]
    pub hostname: String,
    /// Wireless interface to bring up
    #[arg(long, default_value = "wlan0")]
    pub interface: String,
    /// Network to join; empty reuses the credentials stored by the system
    #[arg(long, env = "WIFI_SSID", default_value = "")]
    pub ssid: String,
    #[arg(long, env = "WIFI_PASSWORD", default_value = "", hide_env_values = true)]
    pub passphrase: String,
    /// POSIX TZ string
    #[arg(long, default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,
    #[arg(long, default_value = DEFAULT_NTP_SERVER)]
    pub ntp_server: String,
    /// Skip network association, hostname and clock setup
    #[arg(long)]
    pub skip_network: bool,
    /// Block device holding the flash storage
    #[arg(long, default_value = "mmcblk0")]
    pub flash_device: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonModeArg {
    /// One endpoint, state kept on the device
    Stored,
    /// Two endpoints echoing their argument
    Echo,
}

impl From<ButtonModeArg> for ButtonMode {
    fn from(arg: ButtonModeArg) -> Self {
        match arg {
            ButtonModeArg::Stored => ButtonMode::Stored,
            ButtonModeArg::Echo => ButtonMode::Echo,
        }
    }
}

/// `run` の引数からアプリケーション設定を組み立てる
impl From<RunArgs> for AppConfig {
    fn from(args: RunArgs) -> Self {
        AppConfig {
            server: ServerConfig {
                host: args.host,
                port: args.port,
                root: args.root,
                button_mode: args.button_mode.into(),
            },
            network: NetworkConfig {
                enabled: !args.skip_network,
                interface: args.interface,
                credentials: WifiCredentials::new(args.ssid, args.passphrase),
                hostname: args.hostname,
                timezone: args.timezone,
                ntp_server: args.ntp_server,
                ..NetworkConfig::default()
            },
            ..AppConfig::default()
        }
    }
}
