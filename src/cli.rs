use clap::Parser;

/// Serve the Boat Finder embed endpoints
#[derive(Parser, Debug)]
#[command(name = "boat-finder-embed")]
#[command(about = "Serve the Boat Finder embed endpoints", long_about = None)]
pub struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Path of the YAML file holding the persisted settings record
    #[arg(short, long, default_value = "boat-finder-settings.yml")]
    pub settings: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["boat-finder-embed"]);
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 8080);
        assert_eq!(args.settings, "boat-finder-settings.yml");
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "boat-finder-embed",
            "--host",
            "0.0.0.0",
            "-p",
            "9000",
            "-s",
            "/etc/boat-finder/settings.yml",
        ]);
        assert_eq!(args.host, "0.0.0.0");
        assert_eq!(args.port, 9000);
        assert_eq!(args.settings, "/etc/boat-finder/settings.yml");
    }
}
