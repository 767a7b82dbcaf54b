//! Command-line argument definitions.

use clap::Parser;
use runref_domain::RunReference;

use crate::AppError;

/// Resolves `<jobName>#<buildNumber>` and prints the projected variables.
#[derive(Debug, Parser)]
#[command(
    name = "runref",
    version,
    about = "Resolve a run reference and print its environment variables"
)]
pub struct Cli {
    /// Base name of the projected variables, e.g. `UPSTREAM`.
    pub variable_name: String,

    /// Run reference token, e.g. `folder/my-job#42`.
    #[arg(value_name = "JOB_NAME#BUILD_NUMBER")]
    pub token: String,
}

impl Cli {
    /// Validates the arguments as a run reference.
    ///
    /// # Errors
    /// Returns [`AppError::Reference`] for an empty name or a token without a
    /// job name before its last `#`.
    pub fn into_reference(self) -> Result<RunReference, AppError> {
        Ok(RunReference::new(self.variable_name, self.token)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use runref_domain::DomainError;

    #[test]
    fn test_parses_name_and_token() {
        let reference = Cli::try_parse_from(["runref", "RUN", "myjob#3"])
            .unwrap()
            .into_reference()
            .expect("valid arguments");
        assert_eq!(reference.name(), "RUN");
        assert_eq!(reference.token(), "myjob#3");
    }

    #[test]
    fn test_accepts_double_dash_separator() {
        let cli = Cli::try_parse_from(["runref", "--", "RUN", "myjob#3"]).unwrap();
        assert_eq!(cli.variable_name, "RUN");
        assert_eq!(cli.token, "myjob#3");
    }

    #[test]
    fn test_help_and_version_are_flags() {
        let err = Cli::try_parse_from(["runref", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Cli::try_parse_from(["runref", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_wrong_argument_count() {
        let err = Cli::try_parse_from(["runref", "RUN"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["runref", "RUN", "myjob#3", "extra"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_validates_reference() {
        let cli = Cli::try_parse_from(["runref", "RUN", "#3"]).unwrap();
        assert!(matches!(
            cli.into_reference(),
            Err(AppError::Reference(DomainError::MalformedReference { .. }))
        ));

        let cli = Cli::try_parse_from(["runref", "", "myjob#3"]).unwrap();
        assert!(matches!(
            cli.into_reference(),
            Err(AppError::Reference(DomainError::InvalidVariableName(_)))
        ));
    }
}
