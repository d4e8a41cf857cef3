use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Cricket score projection and chase prediction API
#[derive(Parser, Debug, Clone)]
#[command(name = "cricket-predictor", version, about)]
pub struct Config {
    /// Interface to listen on
    #[arg(long, env = "CRICKET_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// JSON file with a venue list replacing the built-in one
    #[arg(long, env = "VENUES_FILE")]
    pub venues_file: Option<PathBuf>,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.port == 0 {
            anyhow::bail!("port must be non-zero");
        }
        if let Some(path) = &self.venues_file {
            if !path.is_file() {
                anyhow::bail!("venues file {} does not exist", path.display());
            }
        }
        self.listen_addr()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("cricket-predictor").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let c = Config {
            host: "0.0.0.0".into(),
            port: 5000,
            venues_file: None,
        };
        assert!(c.validate().is_ok());
        assert_eq!(c.listen_addr().unwrap(), "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn flags_override_defaults() {
        let c = parse(&["--host", "127.0.0.1", "--port", "8081"]);
        assert_eq!(c.listen_addr().unwrap().port(), 8081);
        assert!(c.listen_addr().unwrap().ip().is_loopback());
    }

    #[test]
    fn host_env_var_is_namespaced() {
        let cmd = Config::command();
        let host = cmd.get_arguments().find(|a| a.get_id() == "host").unwrap();
        assert_eq!(host.get_env(), Some(std::ffi::OsStr::new("CRICKET_HOST")));
    }

    #[test]
    fn rejects_zero_port() {
        let c = parse(&["--host", "127.0.0.1", "--port", "0"]);
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_bad_host() {
        let c = parse(&["--host", "not a host", "--port", "5000"]);
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_missing_venues_file() {
        let c = parse(&[
            "--host",
            "127.0.0.1",
            "--port",
            "5000",
            "--venues-file",
            "/definitely/not/here/venues.json",
        ]);
        assert!(c.validate().is_err());
    }
}
