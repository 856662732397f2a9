//! Log setup. The subscriber is installed before the config is read so the
//! config loader's own messages are printed; the filter is narrowed to the
//! config's `log_level` afterwards unless `RUST_LOG` is set.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

pub struct Logging {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl Logging {
    /// Install the global subscriber writing to stderr.
    pub fn init() -> anyhow::Result<Self> {
        let (filter, from_env) = match EnvFilter::try_from_default_env() {
            Ok(filter) => (filter, true),
            Err(_) => (EnvFilter::new("info"), false),
        };
        let (subscriber, logging) = layered(filter, from_env, std::io::stderr);
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(logging)
    }

    /// Switch to the configured level. `RUST_LOG` wins; an unparsable level
    /// falls back to `info`.
    pub fn apply_config(&self, level: &str) -> anyhow::Result<()> {
        if self.from_env {
            return Ok(());
        }
        let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
        self.handle.reload(filter)?;
        Ok(())
    }
}

fn layered<W>(
    filter: EnvFilter,
    from_env: bool,
    writer: W,
) -> (impl tracing::Subscriber + Send + Sync + 'static, Logging)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer));
    (subscriber, Logging { handle, from_env })
}
