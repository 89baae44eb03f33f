use crate::args::Args;
use crate::ops::{
    Agree, AgreeError, Generate, GenerateError, PersistError, PersistPrivate, PersistPublic,
};

/// One terminal run mode, selected from flag presence.
///
/// Generation wins whenever it is requested. Otherwise both key inputs
/// together select agreement, a single key input selects the matching
/// persist mode, and no input at all is a usage error.
#[derive(Debug, Clone)]
pub enum Mode {
    Generate(Generate),
    Agreement(Agree),
    PersistPrivate(PersistPrivate),
    PersistPublic(PersistPublic),
}

#[derive(Debug, thiserror::Error)]
pub enum ModeError {
    #[error("nothing to do: pass --generate, a key pair, or a single key (see --help)")]
    MissingInputs,
}

/// Aggregate error over the per-mode error types
#[derive(Debug, thiserror::Error)]
pub enum OpError {
    #[error(transparent)]
    Generate(GenerateError),
    #[error(transparent)]
    Agree(AgreeError),
    #[error(transparent)]
    Persist(PersistError),
}

impl Mode {
    pub fn select(args: &Args) -> Result<Mode, ModeError> {
        if args.generate {
            return Ok(Mode::Generate(Generate));
        }
        match (args.private.clone(), args.public.clone()) {
            (Some(private), Some(public)) => Ok(Mode::Agreement(Agree { private, public })),
            (Some(private), None) => Ok(Mode::PersistPrivate(PersistPrivate {
                private,
                output: args.output.clone(),
            })),
            (None, Some(public)) => Ok(Mode::PersistPublic(PersistPublic {
                public,
                output: args.output.clone(),
            })),
            (None, None) => Err(ModeError::MissingInputs),
        }
    }

    pub fn execute(&self) -> Result<String, OpError> {
        match self {
            Mode::Generate(op) => op.execute().map_err(OpError::Generate),
            Mode::Agreement(op) => op.execute().map_err(OpError::Agree),
            Mode::PersistPrivate(op) => op.execute().map_err(OpError::Persist),
            Mode::PersistPublic(op) => op.execute().map_err(OpError::Persist),
        }
    }
}
