use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Generate a self-signed key and certificate for development, then exit.
    #[arg(long)]
    pub create_selfsigned: bool,

    #[arg(long, default_value = "localhost")]
    pub selfsigned_domain: String,

    #[arg(long, default_value = "key.pem")]
    pub selfsigned_keyfile: String,

    #[arg(long, default_value = "cert.pem")]
    pub selfsigned_certfile: String,
}
