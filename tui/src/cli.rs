use std::path::PathBuf;

use clap::Parser;
use roiwiz_core::config::ConfigOverrides;
use roiwiz_core::config::DepartmentSource;

/// Department source selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DepartmentSourceArg {
    /// Serve departments from the built-in industry table.
    #[value(name = "static")]
    Static,
    /// Fetch suggestions from the backend per selected industry.
    #[value(name = "remote")]
    Remote,
}

impl From<DepartmentSourceArg> for DepartmentSource {
    fn from(arg: DepartmentSourceArg) -> Self {
        match arg {
            DepartmentSourceArg::Static => DepartmentSource::Static,
            DepartmentSourceArg::Remote => DepartmentSource::Remote,
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(name = "roiwiz", version, about = "Interactive AI-vs-human ROI assessment wizard")]
pub struct Cli {
    /// Path to a config file (default: ~/.roiwiz/config.toml).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Backend base URL override.
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Timeout for both backend calls, in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Where intake department suggestions come from.
    #[arg(long = "departments", value_enum)]
    pub department_source: Option<DepartmentSourceArg>,

    /// Directory exported reports are written to.
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            backend_url: self.backend_url.clone(),
            timeout_secs: self.timeout_secs,
            department_source: self.department_source.map(Into::into),
            export_dir: self.export_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_map_value_enum_to_config_type() {
        let cli = Cli {
            department_source: Some(DepartmentSourceArg::Static),
            timeout_secs: Some(7),
            ..Default::default()
        };
        let overrides = cli.overrides();
        assert_eq!(overrides.department_source, Some(DepartmentSource::Static));
        assert_eq!(overrides.timeout_secs, Some(7));
        assert_eq!(overrides.backend_url, None);
    }
}
