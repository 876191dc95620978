use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};
use error::{GameError, GameResult};
use log::LevelFilter;

/// Initializes the global logger.
///
/// The terminal belongs to the game while it runs, so records only reach
/// stderr when `RUST_LOG` asks for them or `verbose` is set. With a
/// `log_file` they are written there instead, at info level (debug when
/// verbose) unless `RUST_LOG` says otherwise.
pub fn init(verbose: bool, log_file: Option<&Path>) -> GameResult<()> {
    let level = match (verbose, log_file.is_some()) {
        (true, _) => LevelFilter::Debug,
        (false, true) => LevelFilter::Info,
        (false, false) => LevelFilter::Off,
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    if let Some(path) = log_file {
        let file = File::create(path).map_err(|source| GameError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A second init keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn second_init_is_a_no_op() {
        init(false, None).unwrap();
        init(true, None).unwrap();
    }

    #[test]
    fn log_file_is_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.log");
        init(false, Some(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_log_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("game.log");
        match init(false, Some(&path)) {
            Err(GameError::LogFile { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected LogFile, got {other:?}"),
        }
    }
}
