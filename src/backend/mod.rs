//! Letter generation backends.
//!
//! Every backend shares one contract: take a fully populated [`FieldMap`] and
//! return the letter text, or a [`LetterError`]. Field validation happens here,
//! once, before any variant runs.

mod local;
mod remote;
mod script;

pub use local::LocalTemplate;
pub use remote::RemoteInference;
pub use script::{ScriptOutput, ScriptRunner};

use crate::config::{BackendKind, Config};
use crate::error::{LetterError, Result};
use crate::placeholder::FieldMap;
use crate::template::TemplateDescriptor;

/// A configured generation backend.
#[derive(Debug, Clone)]
pub enum GenerationBackend {
    LocalTemplate(LocalTemplate),
    RemoteInference(RemoteInference),
    Subprocess(ScriptRunner),
}

impl GenerationBackend {
    /// Build the backend selected by `kind` from the config.
    ///
    /// The local backend needs a loaded template; the remote backend reads its
    /// bearer token from the environment variable named by `remote.token_env`.
    pub fn from_config(
        kind: BackendKind,
        config: &Config,
        template: Option<TemplateDescriptor>,
    ) -> Result<Self> {
        match kind {
            BackendKind::Local => {
                let template = template.ok_or_else(|| {
                    LetterError::UserError(
                        "please select a template for the local backend.\n\n\
                         Use `coverletter templates` to see available templates."
                            .to_string(),
                    )
                })?;
                Ok(Self::LocalTemplate(LocalTemplate::new(template)))
            }
            BackendKind::Remote => {
                let remote = &config.remote;
                let token = std::env::var(&remote.token_env)
                    .ok()
                    .filter(|t| !t.trim().is_empty())
                    .ok_or_else(|| {
                        LetterError::UserError(format!(
                            "no API token found.\n\n\
                             Fix: export {}=<token> before using the remote backend.",
                            remote.token_env
                        ))
                    })?;
                Ok(Self::RemoteInference(RemoteInference::new(
                    &remote.endpoint,
                    &remote.model,
                    token,
                    remote.timeout_seconds,
                    &remote.prompt_template,
                )))
            }
            BackendKind::Script => {
                let script = &config.script;
                let runner = ScriptRunner::new(
                    &script.interpreter,
                    &script.script,
                    script.timeout_seconds,
                )?
                .with_environment(script.environment.clone());
                Ok(Self::Subprocess(runner))
            }
        }
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            Self::LocalTemplate(_) => BackendKind::Local,
            Self::RemoteInference(_) => BackendKind::Remote,
            Self::Subprocess(_) => BackendKind::Script,
        }
    }

    /// Produce the letter text.
    ///
    /// Any empty field fails with a validation error before the backend is
    /// contacted. A backend that produces only whitespace fails with a backend
    /// error, so callers never see an empty letter.
    pub fn generate(&self, fields: &FieldMap) -> Result<String> {
        fields.validate()?;
        let kind = self.kind().as_str();
        log::debug!("generating with the {} backend", kind);

        let letter = match self {
            Self::LocalTemplate(backend) => backend.generate(fields),
            Self::RemoteInference(backend) => backend.generate(fields),
            Self::Subprocess(backend) => backend.generate(fields),
        }?;

        if letter.trim().is_empty() {
            return Err(LetterError::BackendError(format!(
                "the {} backend returned an empty letter",
                kind
            )));
        }

        Ok(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::Placeholder;
    use crate::test_support::sample_fields;

    fn sample_template() -> TemplateDescriptor {
        TemplateDescriptor {
            identifier: "basic.txt".to_string(),
            raw_text: "Dear {manager_name}, I am {name}.".to_string(),
        }
    }

    #[test]
    fn test_local_requires_template() {
        let err = GenerationBackend::from_config(BackendKind::Local, &Config::default(), None)
            .unwrap_err();
        assert!(matches!(err, LetterError::UserError(_)));
        assert!(err.to_string().contains("please select a template"));
    }

    #[test]
    fn test_local_generates() {
        let backend = GenerationBackend::from_config(
            BackendKind::Local,
            &Config::default(),
            Some(sample_template()),
        )
        .unwrap();

        assert_eq!(backend.kind(), BackendKind::Local);
        assert_eq!(
            backend.generate(&sample_fields()).unwrap(),
            "Dear Grace, I am Ada."
        );
    }

    #[test]
    fn test_remote_requires_token() {
        let mut config = Config::default();
        config.remote.token_env = "COVERLETTER_TEST_TOKEN_THAT_IS_NEVER_SET".to_string();

        let err = GenerationBackend::from_config(BackendKind::Remote, &config, None).unwrap_err();
        assert!(matches!(err, LetterError::UserError(_)));
        assert!(err.to_string().contains("COVERLETTER_TEST_TOKEN_THAT_IS_NEVER_SET"));
    }

    #[test]
    fn test_script_backend_from_config() {
        let mut config = Config::default();
        config.script.interpreter = "python3 -u".to_string();

        let backend = GenerationBackend::from_config(BackendKind::Script, &config, None).unwrap();
        assert_eq!(backend.kind(), BackendKind::Script);
    }

    #[test]
    fn test_blank_letter_is_backend_error() {
        let backend = GenerationBackend::LocalTemplate(LocalTemplate::new(TemplateDescriptor {
            identifier: "blank.txt".to_string(),
            raw_text: "   \n".to_string(),
        }));

        let err = backend.generate(&sample_fields()).unwrap_err();
        assert!(matches!(err, LetterError::BackendError(_)));
        assert!(err.to_string().contains("the local backend returned an empty letter"));
    }

    #[test]
    fn test_empty_field_fails_before_local_fill() {
        let backend = GenerationBackend::LocalTemplate(LocalTemplate::new(sample_template()));
        let fields = sample_fields().with(Placeholder::JobTitle, "");

        let err = backend.generate(&fields).unwrap_err();
        assert!(err.is_validation());
    }

    #[cfg(unix)]
    #[test]
    fn test_empty_field_never_runs_script() {
        use crate::test_support::write_script;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let marker = temp_dir.path().join("ran");
        let script = write_script(
            temp_dir.path(),
            "gen.sh",
            &format!("touch '{}'\necho letter\n", marker.display()),
        );
        let backend =
            GenerationBackend::Subprocess(ScriptRunner::new("sh", &script, 10).unwrap());

        let err = backend
            .generate(&sample_fields().with(Placeholder::Name, ""))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(!marker.exists());

        assert_eq!(backend.generate(&sample_fields()).unwrap(), "letter");
        assert!(marker.exists());
    }
}
