pub(crate) use anyhow::Context;

pub(crate) type Result<T, E = anyhow::Error> = std::result::Result<T, E>;
