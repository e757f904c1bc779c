//! Dictionary loading errors

use std::io;
use std::path::PathBuf;

/// Failure to build a word store from its source
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dictionary {source_name} contains no words")]
    Empty { source_name: String },
}
